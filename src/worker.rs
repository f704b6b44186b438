//! Worker threads that search one partition each.
//!
//! A worker sits idle on its request channel, searches its directories when a
//! `search` message arrives, replies exactly once, and stops on `exit` or when
//! the coordinator side of the channel goes away.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::{CoordinatorError, SpawnError};
use crate::protocol::Message;
use crate::provider::SearchProvider;

/// Coordinator-side end of one worker's duplex channel.
#[derive(Debug)]
pub(crate) struct WorkerHandle {
	id: usize,
	thread: Option<JoinHandle<()>>,
	requests: Sender<String>,
	replies: Receiver<String>,
	awaiting_reply: bool,
}

impl WorkerHandle {
	pub(crate) fn id(&self) -> usize {
		self.id
	}

	pub(crate) fn send(&self, message: &Message) -> Result<(), CoordinatorError> {
		let payload = message
			.encode()
			.map_err(|err| CoordinatorError::Protocol(err.to_string()))?;
		self.send_raw(payload)
	}

	pub(crate) fn send_raw(&self, payload: String) -> Result<(), CoordinatorError> {
		self.requests
			.send(payload)
			.map_err(|_| CoordinatorError::ChannelClosed { worker_id: self.id })
	}

	/// Send a search request, first draining a reply left over from a
	/// request that previously timed out.
	pub(crate) fn request_search(
		&mut self,
		request: &Message,
		timeout: Option<Duration>,
	) -> Result<(), CoordinatorError> {
		if self.awaiting_reply {
			let stale = self.recv(timeout)?;
			tracing::debug!(worker_id = self.id, ?stale, "discarded late reply");
		}
		self.send(request)?;
		self.awaiting_reply = true;
		Ok(())
	}

	/// Block until the next reply arrives, or until `timeout` elapses.
	pub(crate) fn recv(&mut self, timeout: Option<Duration>) -> Result<Message, CoordinatorError> {
		let payload = match timeout {
			None => self
				.replies
				.recv()
				.map_err(|_| CoordinatorError::ChannelClosed { worker_id: self.id })?,
			Some(timeout) => self.replies.recv_timeout(timeout).map_err(|err| match err {
				RecvTimeoutError::Timeout => CoordinatorError::Timeout { worker_id: self.id },
				RecvTimeoutError::Disconnected => {
					CoordinatorError::ChannelClosed { worker_id: self.id }
				}
			})?,
		};
		self.awaiting_reply = false;
		Message::decode(&payload).map_err(|err| {
			CoordinatorError::Protocol(format!("invalid reply from worker {}: {err}", self.id))
		})
	}

	/// Wait for the worker thread to finish. Joining twice is a no-op.
	pub(crate) fn join(&mut self) -> Result<(), CoordinatorError> {
		match self.thread.take() {
			Some(thread) => thread
				.join()
				.map_err(|_| CoordinatorError::WorkerPanicked { worker_id: self.id }),
			None => Ok(()),
		}
	}
}

/// Launch a worker thread for `directories` and return its handle.
pub(crate) fn spawn<P: SearchProvider>(
	id: usize,
	directories: Vec<PathBuf>,
	provider: P,
) -> Result<WorkerHandle, SpawnError> {
	let (request_tx, request_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();

	let worker = Worker {
		id,
		directories,
		provider,
		requests: request_rx,
		replies: reply_tx,
	};

	let thread = thread::Builder::new()
		.name(format!("partfind-worker-{id}"))
		.spawn(move || worker.run())
		.map_err(|source| SpawnError {
			worker_id: id,
			source,
		})?;

	Ok(WorkerHandle {
		id,
		thread: Some(thread),
		requests: request_tx,
		replies: reply_rx,
		awaiting_reply: false,
	})
}

struct Worker<P> {
	id: usize,
	directories: Vec<PathBuf>,
	provider: P,
	requests: Receiver<String>,
	replies: Sender<String>,
}

impl<P: SearchProvider> Worker<P> {
	fn run(self) {
		tracing::info!(
			worker_id = self.id,
			directories = self.directories.len(),
			"worker started"
		);

		while let Ok(payload) = self.requests.recv() {
			if !self.handle_payload(&payload) {
				break;
			}
		}

		tracing::info!(worker_id = self.id, "worker exiting");
	}

	/// Returns `false` once the loop should stop.
	fn handle_payload(&self, payload: &str) -> bool {
		match Message::decode(payload) {
			Ok(Message::Search { query }) => self.reply(self.search(&query)),
			Ok(Message::Exit) => false,
			Ok(Message::Result { .. }) => {
				tracing::warn!(worker_id = self.id, "ignoring result message sent to worker");
				true
			}
			Err(err) => {
				let command = Message::command_of(payload).unwrap_or_default();
				tracing::warn!(worker_id = self.id, command = %command, "ignoring unknown command: {err}");
				true
			}
		}
	}

	fn search(&self, query: &str) -> Vec<String> {
		let mut results = Vec::new();
		for directory in &self.directories {
			match self.provider.search_in_directory(directory, query) {
				Ok(found) => results.extend(found),
				Err(err) => tracing::warn!(
					worker_id = self.id,
					directory = %directory.display(),
					"skipping directory: {err}"
				),
			}
		}
		results
	}

	fn reply(&self, results: Vec<String>) -> bool {
		let reply = Message::Result {
			worker_id: self.id,
			results,
		};
		let payload = reply.encode().unwrap_or_else(|err| {
			tracing::error!(worker_id = self.id, "failed to encode results: {err}");
			format!(r#"{{"command":"result","worker_id":{},"results":[]}}"#, self.id)
		});
		self.replies.send(payload).is_ok()
	}
}
