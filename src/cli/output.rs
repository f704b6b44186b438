use anyhow::Result;
use partfind::coordinator::HistoryEntry;
use serde_json::json;

/// Results of one query as shown to the user.
#[derive(Debug, Clone)]
pub(crate) struct QueryReport {
	pub(crate) query: String,
	pub(crate) cached: bool,
	pub(crate) results: Vec<String>,
}

/// Print a plain-text representation of a query's results.
pub(crate) fn print_plain(report: &QueryReport) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &QueryReport) -> String {
	if report.results.is_empty() {
		return format!("No matches found for '{}'.\n", report.query);
	}

	let mut text = format!(
		"Found {} result(s) for '{}'{}:\n",
		report.results.len(),
		report.query,
		if report.cached { " (cached)" } else { "" }
	);
	for path in &report.results {
		text.push_str("  ");
		text.push_str(path);
		text.push('\n');
	}
	text
}

/// Format a query's results as a single-line JSON object.
pub(crate) fn format_report_json(report: &QueryReport) -> Result<String> {
	let payload = json!({
		"query": report.query,
		"cached": report.cached,
		"count": report.results.len(),
		"results": report.results,
	});

	Ok(serde_json::to_string(&payload)?)
}

/// Print the JSON representation of a query's results.
pub(crate) fn print_json(report: &QueryReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

/// Render recent searches, newest first, for the interactive prompt.
pub(crate) fn format_history<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>) -> String {
	let mut text = String::new();
	for (index, entry) in entries.into_iter().enumerate() {
		text.push_str(&format!(
			"  {}. {} ({} result(s){})\n",
			index + 1,
			entry.query,
			entry.result_count,
			if entry.cached { ", cached" } else { "" }
		));
	}
	if text.is_empty() {
		return "No searches yet.\n".to_string();
	}
	format!("Recent searches:\n{text}")
}
