//! Messages exchanged between the coordinator and its workers.
//!
//! Every message crosses the channel as a JSON string tagged by its
//! `command` field. Fields are named, and unknown fields are ignored on
//! decode.

use serde::{Deserialize, Serialize};

/// Messages understood by both ends of a worker channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Message {
	/// Run a filename search over the worker's partition.
	Search {
		/// User supplied query string.
		query: String,
	},
	/// Matches found by one worker for the preceding search.
	Result {
		/// Identity of the replying worker, starting at 1.
		worker_id: usize,
		/// Matching paths in partition order.
		results: Vec<String>,
	},
	/// Stop the worker. No reply is sent.
	Exit,
}

impl Message {
	pub fn search(query: impl Into<String>) -> Self {
		Self::Search {
			query: query.into(),
		}
	}

	pub fn encode(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	pub fn decode(payload: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(payload)
	}

	/// Value of the `command` field, for log lines about messages that
	/// failed to decode.
	pub fn command_of(payload: &str) -> Option<String> {
		let value: serde_json::Value = serde_json::from_str(payload).ok()?;
		value.get("command")?.as_str().map(str::to_owned)
	}
}
