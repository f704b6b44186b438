use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use ignore::WalkBuilder;

use super::{FilesystemOptions, SearchProvider};
use crate::error::ProviderError;

/// Walks a directory tree and matches file names against the query.
///
/// Matching is a case-insensitive substring test on the file name only;
/// directory names along the path never match on their own.
#[derive(Debug, Clone)]
pub struct FilesystemProvider {
	options: FilesystemOptions,
	global_ignores: Arc<HashSet<OsString>>,
	extension_filter: Option<Arc<HashSet<String>>>,
}

impl Default for FilesystemProvider {
	fn default() -> Self {
		Self::new(FilesystemOptions::default())
	}
}

impl FilesystemProvider {
	pub fn new(options: FilesystemOptions) -> Self {
		let global_ignores = Arc::new(options.global_ignore_set());
		let extension_filter = options.extension_filter().map(Arc::new);
		Self {
			options,
			global_ignores,
			extension_filter,
		}
	}

	fn walker(&self, directory: &Path) -> WalkBuilder {
		let options = &self.options;
		let global_ignores = Arc::clone(&self.global_ignores);

		let mut builder = WalkBuilder::new(directory);
		builder
			.hidden(!options.include_hidden)
			.follow_links(options.follow_symlinks)
			.git_ignore(options.git_ignore)
			.git_global(options.git_global)
			.git_exclude(options.git_exclude)
			.ignore(options.respect_ignore_files)
			.parents(false)
			.max_depth(options.max_depth)
			.sort_by_file_name(|a, b| a.cmp(b))
			.filter_entry(move |entry| {
				entry.depth() == 0 || !global_ignores.contains(entry.file_name())
			});
		builder
	}

	fn extension_allowed(&self, path: &Path) -> bool {
		let Some(filter) = self.extension_filter.as_ref() else {
			return true;
		};
		path.extension()
			.and_then(|ext| ext.to_str())
			.map(|ext| ext.to_ascii_lowercase())
			.is_some_and(|ext| filter.contains(&ext))
	}
}

impl SearchProvider for FilesystemProvider {
	fn search_in_directory(
		&self,
		directory: &Path,
		query: &str,
	) -> Result<Vec<String>, ProviderError> {
		let metadata = match fs::metadata(directory) {
			Ok(metadata) => metadata,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
			Err(source) => {
				return Err(ProviderError::Unreadable {
					directory: directory.to_path_buf(),
					source,
				});
			}
		};
		if !metadata.is_dir() {
			return Err(ProviderError::NotADirectory {
				directory: directory.to_path_buf(),
			});
		}
		fs::read_dir(directory).map_err(|source| ProviderError::Unreadable {
			directory: directory.to_path_buf(),
			source,
		})?;

		let needle = query.to_lowercase();
		let mut matches = Vec::new();

		for entry in self.walker(directory).build() {
			let entry = match entry {
				Ok(entry) => entry,
				Err(err) => {
					tracing::debug!(directory = %directory.display(), "skipping entry: {err}");
					continue;
				}
			};

			if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
				continue;
			}

			let name = entry.file_name().to_string_lossy().to_lowercase();
			if !name.contains(&needle) || !self.extension_allowed(entry.path()) {
				continue;
			}

			matches.push(entry.path().display().to_string());
		}

		Ok(matches)
	}
}
