use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid pool configuration, detected before any worker is spawned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
	/// Partitioning was asked for zero workers.
	#[error("worker count must be at least 1 (got {count})")]
	InvalidWorkerCount { count: usize },

	/// The coordinator was handed no partitions to serve.
	#[error("worker pool requires at least one partition")]
	EmptyPool,
}

/// A worker thread could not be created.
#[derive(Debug, Error)]
#[error("failed to spawn worker {worker_id}")]
pub struct SpawnError {
	pub worker_id: usize,
	#[source]
	pub source: io::Error,
}

/// A directory could not be searched by a [`SearchProvider`](crate::SearchProvider).
///
/// Workers log and skip these; they never reach the coordinator.
#[derive(Debug, Error)]
pub enum ProviderError {
	#[error("cannot read directory {}", directory.display())]
	Unreadable {
		directory: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{} is not a directory", directory.display())]
	NotADirectory { directory: PathBuf },

	/// Raised by providers that are not backed by the local filesystem.
	#[error("search failed in {}: {reason}", directory.display())]
	Failed { directory: PathBuf, reason: String },
}

/// Errors surfaced to callers of [`Coordinator`](crate::Coordinator).
#[derive(Debug, Error)]
pub enum CoordinatorError {
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	#[error(transparent)]
	Spawn(#[from] SpawnError),

	/// The worker on the other end of the channel has exited.
	#[error("channel to worker {worker_id} is closed")]
	ChannelClosed { worker_id: usize },

	/// A reply could not be decoded or did not belong to the expected worker.
	#[error("protocol error: {0}")]
	Protocol(String),

	/// A configured reply deadline elapsed.
	#[error("worker {worker_id} did not reply in time")]
	Timeout { worker_id: usize },

	#[error("worker {worker_id} panicked")]
	WorkerPanicked { worker_id: usize },

	#[error("search query must not be blank")]
	EmptyQuery,

	/// [`Coordinator::shutdown`](crate::Coordinator::shutdown) already ran.
	#[error("worker pool has been shut down")]
	PoolShutDown,
}

impl CoordinatorError {
	/// Whether the error only says the peers already went away.
	///
	/// Teardown code ignores these.
	pub fn is_channel_closed(&self) -> bool {
		matches!(self, Self::ChannelClosed { .. } | Self::PoolShutDown)
	}
}
