use std::collections::HashSet;
use std::ffi::OsString;

/// Configuration options for filesystem walking and filtering.
#[derive(Debug, Clone)]
pub struct FilesystemOptions {
	/// Include hidden files and directories.
	pub include_hidden: bool,
	/// Follow symbolic links during traversal.
	pub follow_symlinks: bool,
	/// Respect .ignore files.
	pub respect_ignore_files: bool,
	/// Respect .gitignore files.
	pub git_ignore: bool,
	/// Respect global gitignore settings.
	pub git_global: bool,
	/// Respect git exclude files.
	pub git_exclude: bool,
	/// Directory names to always skip.
	pub global_ignores: Vec<String>,
	/// Maximum directory traversal depth below each searched directory.
	pub max_depth: Option<usize>,
	/// File extensions to restrict matches to.
	pub allowed_extensions: Option<Vec<String>>,
}

impl Default for FilesystemOptions {
	fn default() -> Self {
		Self {
			include_hidden: true,
			follow_symlinks: false,
			respect_ignore_files: false,
			git_ignore: false,
			git_global: false,
			git_exclude: false,
			global_ignores: vec![".git".to_string(), "__pycache__".to_string()],
			max_depth: None,
			allowed_extensions: None,
		}
	}
}

impl FilesystemOptions {
	/// Build a set of allowed extensions if configured.
	pub fn extension_filter(&self) -> Option<HashSet<String>> {
		self.allowed_extensions.as_ref().map(|extensions| {
			extensions
				.iter()
				.map(|ext| normalize_extension(ext))
				.filter(|ext| !ext.is_empty())
				.collect::<HashSet<_>>()
		})
	}

	/// Create a set of directory names to globally ignore.
	pub fn global_ignore_set(&self) -> HashSet<OsString> {
		self.global_ignores
			.iter()
			.map(|entry| OsString::from(entry.as_str()))
			.collect()
	}
}

/// Normalize an extension by trimming and removing leading dots.
pub fn normalize_extension(ext: &str) -> String {
	ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
