use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.workers == 0 {
		return Err(ConfigError::invalid(
			"pool.workers",
			config.workers.to_string(),
			sources.source_for_workers(),
			"must be greater than zero",
		));
	}

	if let Some(timeout) = config.reply_timeout
		&& timeout.is_zero()
	{
		return Err(ConfigError::invalid(
			"pool.reply_timeout_ms",
			timeout.as_millis().to_string(),
			sources.source_for_reply_timeout(),
			"must be greater than zero; omit it to wait forever",
		));
	}

	if let Some(max_depth) = config.filesystem.max_depth
		&& max_depth == 0
	{
		return Err(ConfigError::invalid(
			"filesystem.max_depth",
			max_depth.to_string(),
			sources.source_for_max_depth(),
			"must be at least 1",
		));
	}

	Ok(())
}
