//! Ordering applied to aggregated results before they are cached.
//!
//! Every policy is a total order: when scores tie, paths fall back to the
//! case-insensitive lexicographic order, and then to a plain byte comparison.

use std::cmp::Ordering;
use std::path::Path;

const LENGTH_BASE: f64 = 100.0;
const LENGTH_PENALTY_PER_CHAR: f64 = 0.5;
const PREFERRED_EXTENSION_BONUS: f64 = 10.0;
const DEPTH_BASE: f64 = 100.0;
const DEPTH_PENALTY_PER_LEVEL: f64 = 5.0;
const MIN_SCORE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RankingPolicy {
	/// Case-insensitive lexicographic order on the full path.
	#[default]
	Lexical,
	/// Shorter, shallower paths first, with a bonus for one extension.
	Scored { preferred_extension: Option<String> },
}

impl RankingPolicy {
	pub fn rank(&self, paths: &mut [String]) {
		match self {
			Self::Lexical => paths.sort_by(|a, b| lexical_cmp(a, b)),
			Self::Scored {
				preferred_extension,
			} => {
				let preferred = preferred_extension.as_deref();
				paths.sort_by_cached_key(|path| Scored {
					score: path_score(path, preferred),
					folded: path.to_lowercase(),
					raw: path.clone(),
				});
			}
		}
	}
}

/// Case-insensitive comparison with a byte-wise tie-break.
pub fn lexical_cmp(a: &str, b: &str) -> Ordering {
	a.to_lowercase()
		.cmp(&b.to_lowercase())
		.then_with(|| a.cmp(b))
}

pub fn length_score(path: &str, preferred_extension: Option<&str>) -> f64 {
	let chars = path.chars().count() as f64;
	let mut score = (LENGTH_BASE - chars * LENGTH_PENALTY_PER_CHAR).max(MIN_SCORE);
	if let Some(preferred) = preferred_extension {
		let preferred = preferred.trim_start_matches('.');
		let matches = Path::new(path)
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case(preferred));
		if matches {
			score += PREFERRED_EXTENSION_BONUS;
		}
	}
	score
}

pub fn depth_score(path: &str) -> f64 {
	let separators = path.chars().filter(|c| *c == '/' || *c == '\\').count() as f64;
	(DEPTH_BASE - separators * DEPTH_PENALTY_PER_LEVEL).max(MIN_SCORE)
}

pub fn path_score(path: &str, preferred_extension: Option<&str>) -> f64 {
	length_score(path, preferred_extension) + depth_score(path)
}

/// Sort key for scored ranking: higher score first, then lexical.
#[derive(Debug)]
struct Scored {
	score: f64,
	folded: String,
	raw: String,
}

impl PartialEq for Scored {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Scored {}

impl PartialOrd for Scored {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Scored {
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.score
			.total_cmp(&self.score)
			.then_with(|| self.folded.cmp(&other.folded))
			.then_with(|| self.raw.cmp(&other.raw))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ranked(policy: &RankingPolicy, input: &[&str]) -> Vec<String> {
		let mut paths: Vec<String> = input.iter().map(|p| p.to_string()).collect();
		policy.rank(&mut paths);
		paths
	}

	#[test]
	fn lexical_ignores_case() {
		let result = ranked(
			&RankingPolicy::Lexical,
			&["/b/Report_final.txt", "/a/report.txt", "/A/zeta.txt"],
		);
		assert_eq!(result, vec!["/a/report.txt", "/A/zeta.txt", "/b/Report_final.txt"]);
	}

	#[test]
	fn lexical_breaks_case_only_ties_by_bytes() {
		let forward = ranked(&RankingPolicy::Lexical, &["/a/x.TXT", "/a/x.txt"]);
		let backward = ranked(&RankingPolicy::Lexical, &["/a/x.txt", "/a/x.TXT"]);
		assert_eq!(forward, backward);
		assert_eq!(forward, vec!["/a/x.TXT", "/a/x.txt"]);
	}

	#[test]
	fn preferred_extension_earns_bonus() {
		let short = "/short/file.txt";
		let expected = LENGTH_BASE - short.len() as f64 * LENGTH_PENALTY_PER_CHAR + 10.0;
		assert!(length_score(short, Some("txt")) >= expected);
		assert!(length_score(short, Some(".TXT")) >= expected);
		assert!(length_score(short, None) < expected);
	}

	#[test]
	fn long_paths_are_penalized_but_floored() {
		let long = "/very/long/path/to/a/file/that/will/produce/low/score/file.txt";
		assert!(length_score(long, None) < 100.0);
		let depth = depth_score(long);
		assert!(depth < 100.0 && depth > 1.0);

		let extreme = "/x".repeat(300);
		assert!(length_score(&extreme, None) >= 1.0);
		assert!(depth_score(&extreme) >= 1.0);
	}

	#[test]
	fn path_without_separator_has_full_depth_score() {
		assert_eq!(depth_score("file.txt"), 100.0);
	}

	#[test]
	fn scored_prefers_shallow_short_paths_and_falls_back_to_lexical() {
		let policy = RankingPolicy::Scored {
			preferred_extension: Some("txt".into()),
		};
		let result = ranked(
			&policy,
			&["/a/b/c/d/notes.md", "/b/notes.txt", "/a/notes.txt", "/a/notes.md"],
		);
		assert_eq!(
			result,
			vec!["/a/notes.txt", "/b/notes.txt", "/a/notes.md", "/a/b/c/d/notes.md"]
		);
	}
}
