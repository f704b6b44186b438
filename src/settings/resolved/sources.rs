use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) pool_workers: Option<SettingSource>,
	pub(crate) pool_reply_timeout: Option<SettingSource>,
	pub(crate) filesystem_max_depth: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_workers(&self) -> SettingSource {
		self.pool_workers
			.clone()
			.unwrap_or(SettingSource::ConfigKey("pool.workers"))
	}

	pub(crate) fn source_for_reply_timeout(&self) -> SettingSource {
		self.pool_reply_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("pool.reply_timeout_ms"))
	}

	pub(crate) fn source_for_max_depth(&self) -> SettingSource {
		self.filesystem_max_depth
			.clone()
			.unwrap_or(SettingSource::ConfigKey("filesystem.max_depth"))
	}
}
