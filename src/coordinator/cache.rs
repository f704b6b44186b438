//! Query result cache owned by a coordinator.
//!
//! Entries never expire: a hit returns exactly the ranked list computed the
//! first time the query was seen, even if files changed since.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Default)]
pub struct QueryCache {
	entries: HashMap<String, Vec<String>>,
	hits: u64,
	misses: u64,
}

impl QueryCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Look up a query by its exact raw string, counting the hit or miss.
	pub fn get(&mut self, query: &str) -> Option<&[String]> {
		match self.entries.get(query) {
			Some(results) => {
				self.hits += 1;
				Some(results.as_slice())
			}
			None => {
				self.misses += 1;
				None
			}
		}
	}

	pub fn insert(&mut self, query: String, results: Vec<String>) {
		self.entries.insert(query, results);
	}

	/// Check for a query without touching the statistics.
	pub fn contains(&self, query: &str) -> bool {
		self.entries.contains_key(query)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Drop every entry. Statistics are kept.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn stats(&self) -> CacheStats {
		CacheStats {
			entries: self.entries.len(),
			hits: self.hits,
			misses: self.misses,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
	pub entries: usize,
	pub hits: u64,
	pub misses: u64,
}

impl CacheStats {
	/// Hit rate as a percentage.
	pub fn hit_rate(&self) -> f64 {
		let total = self.hits + self.misses;
		if total == 0 {
			0.0
		} else {
			(self.hits as f64 / total as f64) * 100.0
		}
	}
}
