use serde::Serialize;

/// One completed search as seen by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
	pub query: String,
	pub result_count: usize,
	pub cached: bool,
}

/// Record of searches served by one coordinator.
///
/// A search that repeats the previous query with the same number of results
/// is not recorded a second time.
#[derive(Debug, Default)]
pub struct SearchHistory {
	entries: Vec<HistoryEntry>,
}

impl SearchHistory {
	/// Returns `true` when the search was recorded.
	pub fn record(&mut self, query: &str, result_count: usize, cached: bool) -> bool {
		if let Some(last) = self.entries.last()
			&& last.query == query
			&& last.result_count == result_count
		{
			tracing::debug!(query, "skipping duplicate history entry");
			return false;
		}

		tracing::debug!(query, result_count, cached, "recording search");
		self.entries.push(HistoryEntry {
			query: query.to_string(),
			result_count,
			cached,
		});
		true
	}

	/// Up to `limit` entries, newest first.
	pub fn recent(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
		self.entries.iter().rev().take(limit)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
