use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Resolve the pool, ranking and filesystem settings for one run.
///
/// Later layers win: `config.toml` in the config directory, then
/// `.partfind.toml` and `partfind.toml` in the working directory, then every
/// `--config` file, then `PARTFIND__<SECTION>__<KEY>` variables, then flags.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
