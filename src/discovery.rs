use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};

/// Return the immediate subdirectories of `root`, sorted by name.
///
/// Files sitting directly in `root` are not part of any partition.
pub fn subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
	let metadata = fs::metadata(root)
		.with_context(|| format!("failed to inspect search root {}", root.display()))?;
	ensure!(metadata.is_dir(), "search root {} is not a directory", root.display());

	let mut directories = Vec::new();
	for entry in fs::read_dir(root)
		.with_context(|| format!("failed to list search root {}", root.display()))?
	{
		let entry = entry.with_context(|| format!("failed to read entry in {}", root.display()))?;
		let path = entry.path();
		if path.is_dir() {
			directories.push(path);
		}
	}
	directories.sort();
	Ok(directories)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn lists_only_directories_in_name_order() {
		let dir = tempdir().unwrap();
		fs::create_dir(dir.path().join("beta")).unwrap();
		fs::create_dir(dir.path().join("alpha")).unwrap();
		fs::create_dir_all(dir.path().join("alpha/nested")).unwrap();
		fs::write(dir.path().join("loose.txt"), "x").unwrap();

		let found = subdirectories(dir.path()).unwrap();

		assert_eq!(found, vec![dir.path().join("alpha"), dir.path().join("beta")]);
	}

	#[test]
	fn missing_root_is_an_error() {
		let dir = tempdir().unwrap();
		assert!(subdirectories(&dir.path().join("missing")).is_err());
	}

	#[test]
	fn file_root_is_an_error() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("file.txt");
		fs::write(&file, "x").unwrap();
		let err = subdirectories(&file).unwrap_err();
		assert!(err.to_string().contains("not a directory"));
	}
}
