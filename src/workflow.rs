use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use partfind::{Coordinator, CoordinatorError, FilesystemProvider, discovery, partition};

use crate::cli::{OutputFormat, QueryReport, format_history, print_json, print_plain};
use crate::settings::ResolvedConfig;

const PROMPT: &str = "Enter search query ('history' lists recent searches, 'quit' exits): ";
const HISTORY_COMMAND: &str = "history";
const HISTORY_LIMIT: usize = 5;

/// Runs queries against a worker pool built from the resolved configuration.
pub(crate) struct SearchWorkflow {
	root: PathBuf,
	coordinator: Option<Coordinator>,
	format: OutputFormat,
}

impl SearchWorkflow {
	/// Discover the root's subdirectories and spawn the pool over them.
	///
	/// A root without subdirectories yields a workflow with no pool; running
	/// it only reports that there is nothing to search.
	pub(crate) fn from_config(config: ResolvedConfig, format: OutputFormat) -> Result<Self> {
		let directories = discovery::subdirectories(&config.root)?;
		if directories.is_empty() {
			return Ok(Self {
				root: config.root,
				coordinator: None,
				format,
			});
		}

		tracing::info!(
			root = %config.root.display(),
			directories = directories.len(),
			workers = config.workers,
			"starting worker pool"
		);
		let partitions = partition::assign(&directories, config.workers)?;
		let options = config.coordinator_options();
		let provider = FilesystemProvider::new(config.filesystem);
		let coordinator = Coordinator::spawn(partitions, provider, options)
			.context("failed to start worker pool")?;

		Ok(Self {
			root: config.root,
			coordinator: Some(coordinator),
			format,
		})
	}

	/// Run each query once, or read queries from stdin when none are given.
	pub(crate) fn run(mut self, queries: &[String]) -> Result<()> {
		let Some(coordinator) = self.coordinator.as_mut() else {
			println!("No subdirectories found in {}.", self.root.display());
			return Ok(());
		};

		let format = self.format;
		let outcome = if queries.is_empty() {
			let stdin = io::stdin();
			run_lines(coordinator, stdin.lock(), io::stdout(), |report| {
				emit(format, report)
			})
		} else {
			run_queries(coordinator, queries, |report| emit(format, report))
		};

		let stats = coordinator.cache().stats();
		tracing::info!(
			entries = stats.entries,
			hits = stats.hits,
			misses = stats.misses,
			hit_rate = stats.hit_rate(),
			"query cache"
		);

		let shutdown = coordinator.shutdown();
		settle(outcome, shutdown)
	}
}

/// Combine the query loop's outcome with the shutdown result. A closed
/// channel during teardown is expected; a panicked worker is reported even
/// when the loop already failed on its closed channel.
fn settle(outcome: Result<()>, shutdown: Result<(), CoordinatorError>) -> Result<()> {
	match shutdown {
		Err(err @ CoordinatorError::WorkerPanicked { .. }) => Err(err.into()),
		Err(err) if !err.is_channel_closed() => {
			outcome?;
			Err(err.into())
		}
		_ => outcome,
	}
}

fn emit(format: OutputFormat, report: &QueryReport) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			print_plain(report);
			Ok(())
		}
		OutputFormat::Json => print_json(report),
	}
}

fn search_one(coordinator: &mut Coordinator, query: &str) -> Result<QueryReport, CoordinatorError> {
	let cached = coordinator.cache().contains(query);
	let results = coordinator.search(query)?;
	Ok(QueryReport {
		query: query.to_string(),
		cached,
		results,
	})
}

fn run_queries<F>(coordinator: &mut Coordinator, queries: &[String], mut emit: F) -> Result<()>
where
	F: FnMut(&QueryReport) -> Result<()>,
{
	for query in queries {
		let query = query.trim();
		if query.is_empty() {
			continue;
		}
		let report = search_one(coordinator, query)?;
		emit(&report)?;
	}
	Ok(())
}

/// Prompt on `prompt_out`, read one query per line from `input` until EOF,
/// `quit` or `exit`. `history` prints the most recent searches instead of
/// searching.
fn run_lines<R, W, F>(
	coordinator: &mut Coordinator,
	input: R,
	mut prompt_out: W,
	mut emit: F,
) -> Result<()>
where
	R: BufRead,
	W: Write,
	F: FnMut(&QueryReport) -> Result<()>,
{
	let mut lines = input.lines();
	loop {
		write!(prompt_out, "{PROMPT}")?;
		prompt_out.flush()?;

		let Some(line) = lines.next() else {
			writeln!(prompt_out)?;
			return Ok(());
		};
		let line = line.context("failed to read query")?;
		let query = line.trim();
		if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
			return Ok(());
		}
		if query.is_empty() {
			continue;
		}
		if query.eq_ignore_ascii_case(HISTORY_COMMAND) {
			write!(
				prompt_out,
				"{}",
				format_history(coordinator.history().recent(HISTORY_LIMIT))
			)?;
			continue;
		}

		let report = search_one(coordinator, query)?;
		emit(&report)?;
	}
}
