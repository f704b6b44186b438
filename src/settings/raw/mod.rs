use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod filesystem;
mod pool;
mod ranking;

use filesystem::FilesystemSection;
use pool::PoolSection;
use ranking::RankingSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	filesystem: FilesystemSection,
	pool: PoolSection,
	ranking: RankingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.filesystem.apply_cli_overrides(cli);
		self.pool.apply_cli_overrides(cli);
		self.ranking.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			pool_workers: detect_source(
				cli.workers.is_some(),
				self.pool.workers.is_some(),
				"PARTFIND__POOL__WORKERS",
				"--workers",
				"pool.workers",
			),
			pool_reply_timeout: detect_source(
				cli.reply_timeout_ms.is_some(),
				self.pool.reply_timeout_ms.is_some(),
				"PARTFIND__POOL__REPLY_TIMEOUT_MS",
				"--reply-timeout-ms",
				"pool.reply_timeout_ms",
			),
			filesystem_max_depth: detect_source(
				cli.max_depth.is_some(),
				self.filesystem.max_depth.is_some(),
				"PARTFIND__FILESYSTEM__MAX_DEPTH",
				"--max-depth",
				"filesystem.max_depth",
			),
		};

		let (root, filesystem) = self.filesystem.resolve()?;
		let pool = self.pool.resolve();
		let ranking = self.ranking.resolve()?;

		let config = ResolvedConfig {
			root,
			filesystem,
			workers: pool.workers,
			reply_timeout: pool.reply_timeout,
			ranking,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
