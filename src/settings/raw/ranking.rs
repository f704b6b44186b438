use anyhow::Result;
use partfind::RankingPolicy;
use serde::Deserialize;

use super::super::ranking::ranking_from_name;
use crate::cli::CliArgs;

/// Ranking options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RankingSection {
	pub(super) policy: Option<String>,
	pub(super) preferred_extension: Option<String>,
}

impl RankingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(policy) = cli.ranking {
			self.policy = Some(policy.as_str().to_string());
		}
		if let Some(extension) = cli.preferred_extension.clone() {
			self.preferred_extension = Some(extension);
		}
	}

	pub(super) fn resolve(self) -> Result<RankingPolicy> {
		ranking_from_name(self.policy.as_deref(), self.preferred_extension)
	}
}
