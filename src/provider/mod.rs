//! File search providers consumed by workers.
//!
//! A worker knows nothing about the filesystem beyond this trait; tests swap
//! in counting or failing providers through the same seam.

use std::path::Path;

use crate::error::ProviderError;

mod filesystem;
mod options;

pub use filesystem::FilesystemProvider;
pub use options::{FilesystemOptions, normalize_extension};

/// Finds files below a directory whose names match a query.
pub trait SearchProvider: Send + 'static {
	/// Return every matching path below `directory`.
	///
	/// A directory that does not exist yields an empty list rather than an
	/// error.
	fn search_in_directory(&self, directory: &Path, query: &str)
	-> Result<Vec<String>, ProviderError>;
}
