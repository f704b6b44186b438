use anyhow::{Result, bail};
use partfind::RankingPolicy;

/// Extension boosted by scored ranking when none is configured.
pub(super) const DEFAULT_PREFERRED_EXTENSION: &str = "txt";

/// Build a [`RankingPolicy`] from an optional policy name.
pub(super) fn ranking_from_name(
	name: Option<&str>,
	preferred_extension: Option<String>,
) -> Result<RankingPolicy> {
	let Some(raw) = name else {
		return Ok(RankingPolicy::Lexical);
	};

	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Ok(RankingPolicy::Lexical);
	}

	match trimmed.to_ascii_lowercase().as_str() {
		"lexical" | "alphabetical" => Ok(RankingPolicy::Lexical),
		"scored" | "score" => {
			let preferred_extension = preferred_extension
				.map(|ext| partfind::provider::normalize_extension(&ext))
				.unwrap_or_else(|| DEFAULT_PREFERRED_EXTENSION.to_string());
			let preferred_extension = Some(preferred_extension).filter(|ext| !ext.is_empty());
			Ok(RankingPolicy::Scored {
				preferred_extension,
			})
		}
		other => bail!("unknown ranking policy '{other}' (expected 'lexical' or 'scored')"),
	}
}
