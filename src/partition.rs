//! Round-robin assignment of directories to workers.
//!
//! Directories are spread by position, not by subtree size, so a single
//! huge directory still lands on one worker.

use std::path::PathBuf;

use crate::error::ConfigurationError;

/// Split `directories` into `workers` ordered groups.
///
/// The i-th directory goes to group `i % workers`. Relative order inside a
/// group is preserved and trailing groups are empty when there are fewer
/// directories than workers.
pub fn assign(
	directories: &[PathBuf],
	workers: usize,
) -> Result<Vec<Vec<PathBuf>>, ConfigurationError> {
	if workers == 0 {
		return Err(ConfigurationError::InvalidWorkerCount { count: workers });
	}

	let mut partitions = vec![Vec::new(); workers];
	for (index, directory) in directories.iter().enumerate() {
		partitions[index % workers].push(directory.clone());
	}
	Ok(partitions)
}
