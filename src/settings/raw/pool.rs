use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;

/// Worker count used when nothing else is configured.
pub(super) const DEFAULT_WORKERS: usize = 5;

/// Worker pool options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PoolSection {
	pub(super) workers: Option<usize>,
	pub(super) reply_timeout_ms: Option<u64>,
}

pub(super) struct PoolResolution {
	pub(super) workers: usize,
	pub(super) reply_timeout: Option<Duration>,
}

impl PoolSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.workers {
			self.workers = Some(value);
		}
		if let Some(value) = cli.reply_timeout_ms {
			self.reply_timeout_ms = Some(value);
		}
	}

	pub(super) fn resolve(self) -> PoolResolution {
		PoolResolution {
			workers: self.workers.unwrap_or(DEFAULT_WORKERS),
			reply_timeout: self.reply_timeout_ms.map(Duration::from_millis),
		}
	}
}
