use std::path::PathBuf;
use std::time::Duration;

use partfind::{CoordinatorOptions, FilesystemOptions, RankingPolicy};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub root: PathBuf,
	pub filesystem: FilesystemOptions,
	pub workers: usize,
	pub reply_timeout: Option<Duration>,
	pub ranking: RankingPolicy,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Options handed to the coordinator.
	pub fn coordinator_options(&self) -> CoordinatorOptions {
		CoordinatorOptions {
			ranking: self.ranking.clone(),
			reply_timeout: self.reply_timeout,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
