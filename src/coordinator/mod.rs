//! Supervisor for the worker pool.
//!
//! The coordinator broadcasts each uncached query to every worker, then
//! gathers replies one worker at a time in spawn order. A slow first worker
//! therefore delays the whole gather, which keeps the pre-ranking aggregate
//! order identical from run to run.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigurationError, CoordinatorError, SpawnError};
use crate::protocol::Message;
use crate::provider::SearchProvider;
use crate::worker::{self, WorkerHandle};

mod cache;
mod history;
mod ranking;

pub use cache::{CacheStats, QueryCache};
pub use history::{HistoryEntry, SearchHistory};
pub use ranking::{RankingPolicy, depth_score, length_score, lexical_cmp, path_score};

/// Tuning knobs for a [`Coordinator`].
#[derive(Debug, Clone, Default)]
pub struct CoordinatorOptions {
	/// Ordering applied to aggregated results.
	pub ranking: RankingPolicy,
	/// Longest wait for each worker's reply. `None` waits forever.
	pub reply_timeout: Option<Duration>,
}

/// Owns the worker pool, the query cache and the search history.
#[derive(Debug)]
pub struct Coordinator {
	workers: Vec<WorkerHandle>,
	cache: QueryCache,
	history: SearchHistory,
	options: CoordinatorOptions,
	shut_down: bool,
}

impl Coordinator {
	/// Spawn one worker per partition, in index order, with ids starting at 1.
	///
	/// If any worker fails to start, the ones already running are told to
	/// exit and joined before the error is returned.
	pub fn spawn<P>(
		partitions: Vec<Vec<PathBuf>>,
		provider: P,
		options: CoordinatorOptions,
	) -> Result<Self, CoordinatorError>
	where
		P: SearchProvider + Clone,
	{
		let workers = spawn_pool(partitions, |id, directories| {
			worker::spawn(id, directories, provider.clone())
		})?;
		tracing::info!(workers = workers.len(), "all workers spawned");

		Ok(Self {
			workers,
			cache: QueryCache::new(),
			history: SearchHistory::default(),
			options,
			shut_down: false,
		})
	}

	/// Return every path matching `query`, ranked.
	///
	/// Repeated queries are answered from the cache without contacting any
	/// worker, even if the filesystem changed in between.
	pub fn search(&mut self, query: &str) -> Result<Vec<String>, CoordinatorError> {
		if self.shut_down {
			return Err(CoordinatorError::PoolShutDown);
		}
		if query.trim().is_empty() {
			return Err(CoordinatorError::EmptyQuery);
		}

		if let Some(cached) = self.cache.get(query) {
			let results = cached.to_vec();
			tracing::debug!(query, results = results.len(), "cache hit");
			self.history.record(query, results.len(), true);
			return Ok(results);
		}

		let timeout = self.options.reply_timeout;
		let request = Message::search(query);
		for worker in &mut self.workers {
			worker.request_search(&request, timeout)?;
		}

		let mut aggregate = Vec::new();
		for worker in &mut self.workers {
			match worker.recv(timeout)? {
				Message::Result { worker_id, results } if worker_id == worker.id() => {
					aggregate.extend(results);
				}
				other => {
					return Err(CoordinatorError::Protocol(format!(
						"unexpected reply from worker {}: {other:?}",
						worker.id()
					)));
				}
			}
		}

		self.options.ranking.rank(&mut aggregate);
		aggregate.dedup();

		tracing::info!(query, results = aggregate.len(), "search complete");
		self.cache.insert(query.to_string(), aggregate.clone());
		self.history.record(query, aggregate.len(), false);
		Ok(aggregate)
	}

	/// Tell every worker to exit, then join them all.
	///
	/// Calling this twice fails with [`CoordinatorError::ChannelClosed`]
	/// because the workers already dropped their channels; teardown code is
	/// expected to ignore that. A worker that panicked is reported as
	/// [`CoordinatorError::WorkerPanicked`] even though its channel is
	/// closed as well.
	pub fn shutdown(&mut self) -> Result<(), CoordinatorError> {
		self.shut_down = true;
		let mut send_error = None;
		let mut join_error = None;

		for worker in &self.workers {
			if let Err(err) = worker.send(&Message::Exit) {
				send_error.get_or_insert(err);
			}
		}
		for worker in &mut self.workers {
			if let Err(err) = worker.join() {
				tracing::error!("{err}");
				join_error.get_or_insert(err);
			}
		}

		match join_error.or(send_error) {
			Some(err) => Err(err),
			None => {
				tracing::info!(workers = self.workers.len(), "all workers shut down cleanly");
				Ok(())
			}
		}
	}

	pub fn worker_count(&self) -> usize {
		self.workers.len()
	}

	pub fn cache(&self) -> &QueryCache {
		&self.cache
	}

	/// Forget every cached result so the next searches hit the workers again.
	pub fn clear_cache(&mut self) {
		self.cache.clear();
	}

	pub fn history(&self) -> &SearchHistory {
		&self.history
	}
}

impl Drop for Coordinator {
	fn drop(&mut self) {
		if !self.shut_down {
			let _ = self.shutdown();
		}
	}
}

fn spawn_pool<F>(
	partitions: Vec<Vec<PathBuf>>,
	mut spawn_one: F,
) -> Result<Vec<WorkerHandle>, CoordinatorError>
where
	F: FnMut(usize, Vec<PathBuf>) -> Result<WorkerHandle, SpawnError>,
{
	if partitions.is_empty() {
		return Err(ConfigurationError::EmptyPool.into());
	}

	let mut workers = Vec::with_capacity(partitions.len());
	for (index, directories) in partitions.into_iter().enumerate() {
		match spawn_one(index + 1, directories) {
			Ok(handle) => workers.push(handle),
			Err(err) => {
				tracing::error!("{err}; stopping {} spawned workers", workers.len());
				for worker in &workers {
					let _ = worker.send(&Message::Exit);
				}
				for worker in &mut workers {
					let _ = worker.join();
				}
				return Err(err.into());
			}
		}
	}
	Ok(workers)
}

#[cfg(test)]
mod tests {
	use std::io;
	use std::path::Path;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;
	use crate::error::ProviderError;

	/// Counts provider calls and drops of worker-owned clones.
	#[derive(Clone, Default)]
	struct Probe {
		calls: Arc<AtomicUsize>,
		drops: Arc<AtomicUsize>,
	}

	impl Drop for Probe {
		fn drop(&mut self) {
			self.drops.fetch_add(1, Ordering::SeqCst);
		}
	}

	impl SearchProvider for Probe {
		fn search_in_directory(
			&self,
			directory: &Path,
			query: &str,
		) -> Result<Vec<String>, ProviderError> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			Ok(vec![format!("{}/{query}", directory.display())])
		}
	}

	fn partitions(groups: &[&[&str]]) -> Vec<Vec<PathBuf>> {
		groups
			.iter()
			.map(|group| group.iter().map(PathBuf::from).collect())
			.collect()
	}

	#[test]
	fn empty_pool_is_a_configuration_error() {
		let err = Coordinator::spawn(Vec::new(), Probe::default(), CoordinatorOptions::default())
			.unwrap_err();
		assert!(matches!(
			err,
			CoordinatorError::Configuration(ConfigurationError::EmptyPool)
		));
	}

	#[test]
	fn failed_spawn_stops_already_running_workers() {
		let probe = Probe::default();
		let result = spawn_pool(partitions(&[&["/a"], &["/b"], &["/c"]]), |id, dirs| {
			if id == 3 {
				return Err(SpawnError {
					worker_id: id,
					source: io::Error::other("thread limit reached"),
				});
			}
			worker::spawn(id, dirs, probe.clone())
		});

		let err = result.unwrap_err();
		assert!(matches!(
			err,
			CoordinatorError::Spawn(SpawnError { worker_id: 3, .. })
		));
		assert_eq!(probe.drops.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn cache_hit_sends_nothing_to_workers() {
		let probe = Probe::default();
		let mut coordinator = Coordinator::spawn(
			partitions(&[&["/a"], &["/b"]]),
			probe.clone(),
			CoordinatorOptions::default(),
		)
		.unwrap();

		let first = coordinator.search("q").unwrap();
		assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
		let second = coordinator.search("q").unwrap();
		assert_eq!(first, second);
		assert_eq!(probe.calls.load(Ordering::SeqCst), 2);

		let stats = coordinator.cache().stats();
		assert_eq!((stats.hits, stats.misses), (1, 1));
		coordinator.shutdown().unwrap();
	}

	#[test]
	fn blank_query_is_rejected() {
		let mut coordinator = Coordinator::spawn(
			partitions(&[&["/a"]]),
			Probe::default(),
			CoordinatorOptions::default(),
		)
		.unwrap();
		assert!(matches!(
			coordinator.search("   "),
			Err(CoordinatorError::EmptyQuery)
		));
		coordinator.shutdown().unwrap();
	}

	#[test]
	fn second_shutdown_reports_closed_channel() {
		let mut coordinator = Coordinator::spawn(
			partitions(&[&["/a"], &[]]),
			Probe::default(),
			CoordinatorOptions::default(),
		)
		.unwrap();
		coordinator.shutdown().unwrap();

		let err = coordinator.shutdown().unwrap_err();
		assert!(err.is_channel_closed());
		let err = coordinator.search("q").unwrap_err();
		assert!(err.is_channel_closed());
	}

	#[derive(Clone)]
	struct Exploding;

	impl SearchProvider for Exploding {
		fn search_in_directory(
			&self,
			_directory: &Path,
			_query: &str,
		) -> Result<Vec<String>, ProviderError> {
			panic!("provider exploded");
		}
	}

	#[test]
	fn panicked_worker_is_reported_at_shutdown() {
		let mut coordinator = Coordinator::spawn(
			partitions(&[&["/a"], &["/b"]]),
			Exploding,
			CoordinatorOptions::default(),
		)
		.unwrap();

		let err = coordinator.search("q").unwrap_err();
		assert!(matches!(err, CoordinatorError::ChannelClosed { worker_id: 1 }));

		let err = coordinator.shutdown().unwrap_err();
		assert!(matches!(err, CoordinatorError::WorkerPanicked { worker_id: 1 }));
		assert!(!err.is_channel_closed());
	}

	#[test]
	fn dropping_without_shutdown_joins_workers() {
		let probe = Probe::default();
		let coordinator = Coordinator::spawn(
			partitions(&[&["/a"], &["/b"], &["/c"]]),
			probe.clone(),
			CoordinatorOptions::default(),
		)
		.unwrap();
		assert_eq!(coordinator.worker_count(), 3);
		let before = probe.drops.load(Ordering::SeqCst);

		drop(coordinator);
		assert_eq!(probe.drops.load(Ordering::SeqCst), before + 3);
	}
}
