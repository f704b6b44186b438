use std::collections::HashSet;

/// Normalize and deduplicate file extensions provided by the user.
pub(super) fn sanitize_extensions(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = partfind::provider::normalize_extension(&value);
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned
}

/// Trim directory names and drop empty or repeated entries.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty() && seen.insert(value.clone()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extensions_are_cleaned_and_deduplicated() {
		let cleaned =
			sanitize_extensions(vec![" .RS ".into(), "rs".into(), "".into(), ".Txt".into()]);
		assert_eq!(cleaned, vec!["rs", "txt"]);
	}

	#[test]
	fn names_are_trimmed_and_filtered() {
		let names = sanitize_names(vec![" .git ".into(), "".into(), ".git".into(), "build".into()]);
		assert_eq!(names, vec![".git", "build"]);
	}
}
