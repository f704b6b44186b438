//! Partitioned filename search across a pool of worker threads.
//!
//! A root's subdirectories are split round-robin across workers. A
//! [`Coordinator`] broadcasts each query to every worker, gathers their
//! matches, ranks them and caches the ranked list per query.

pub mod app_dirs;
pub mod coordinator;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod partition;
pub mod protocol;
pub mod provider;
mod worker;

pub use coordinator::{Coordinator, CoordinatorOptions, RankingPolicy};
pub use error::{ConfigurationError, CoordinatorError, ProviderError, SpawnError};
pub use provider::{FilesystemOptions, FilesystemProvider, SearchProvider};
