use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use partfind::{
	Coordinator, CoordinatorError, CoordinatorOptions, FilesystemProvider, ProviderError,
	RankingPolicy, SearchProvider, discovery, partition,
};
use tempfile::{TempDir, tempdir};

fn tree(files: &[&str]) -> TempDir {
	let dir = tempdir().unwrap();
	for file in files {
		let path = dir.path().join(file);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, "x").unwrap();
	}
	dir
}

fn filesystem_pool(root: &Path, workers: usize, options: CoordinatorOptions) -> Coordinator {
	let directories = discovery::subdirectories(root).unwrap();
	let partitions = partition::assign(&directories, workers).unwrap();
	Coordinator::spawn(partitions, FilesystemProvider::default(), options).unwrap()
}

fn display(root: &Path, relative: &str) -> String {
	root.join(relative).to_string_lossy().into_owned()
}

#[test]
fn matches_from_every_worker_are_ranked_lexically() {
	let dir = tree(&["a/report.txt", "b/Report_final.txt", "b/notes.md"]);
	let mut coordinator = filesystem_pool(dir.path(), 2, CoordinatorOptions::default());

	let results = coordinator.search("report").unwrap();

	assert_eq!(
		results,
		vec![
			display(dir.path(), "a/report.txt"),
			display(dir.path(), "b/Report_final.txt"),
		]
	);
	coordinator.shutdown().unwrap();
}

#[test]
fn empty_results_are_cached_too() {
	let dir = tree(&["a/one.txt", "b/two.txt"]);
	let mut coordinator = filesystem_pool(dir.path(), 2, CoordinatorOptions::default());

	assert!(coordinator.search("zzz").unwrap().is_empty());
	assert!(coordinator.cache().contains("zzz"));
	assert!(coordinator.search("zzz").unwrap().is_empty());
	assert_eq!(coordinator.cache().stats().hits, 1);
	coordinator.shutdown().unwrap();
}

#[test]
fn cached_answers_survive_filesystem_changes_until_cleared() {
	let dir = tree(&["a/report.txt", "b/other.txt"]);
	let mut coordinator = filesystem_pool(dir.path(), 2, CoordinatorOptions::default());

	let first = coordinator.search("report").unwrap();
	fs::write(dir.path().join("b/report_2.txt"), "x").unwrap();
	let second = coordinator.search("report").unwrap();
	assert_eq!(first, second);

	coordinator.clear_cache();
	let refreshed = coordinator.search("report").unwrap();
	assert_eq!(
		refreshed,
		vec![
			display(dir.path(), "a/report.txt"),
			display(dir.path(), "b/report_2.txt"),
		]
	);

	let counts: Vec<usize> = coordinator
		.history()
		.recent(3)
		.map(|entry| entry.result_count)
		.collect();
	assert_eq!(counts, vec![2, 1]);
	coordinator.shutdown().unwrap();
}

#[test]
fn recomputed_results_keep_their_order() {
	let dir = tree(&[
		"a/Log.txt",
		"b/log.md",
		"c/deep/log.rs",
		"d/LOG_old.txt",
		"e/catalog.txt",
	]);
	for ranking in [
		RankingPolicy::Lexical,
		RankingPolicy::Scored {
			preferred_extension: Some("txt".into()),
		},
	] {
		let options = CoordinatorOptions {
			ranking,
			reply_timeout: None,
		};
		let mut coordinator = filesystem_pool(dir.path(), 3, options);

		let first = coordinator.search("log").unwrap();
		coordinator.clear_cache();
		let second = coordinator.search("log").unwrap();

		assert_eq!(first.len(), 5);
		assert_eq!(first, second);
		assert_eq!(coordinator.cache().stats().hits, 0);
		coordinator.shutdown().unwrap();
	}
}

#[test]
fn ignore_files_do_not_hide_matches() {
	let dir = tree(&["a/report.txt", "a/build/report.log"]);
	fs::write(dir.path().join(".ignore"), "*.txt\n").unwrap();
	fs::write(dir.path().join("a/.ignore"), "build/\n").unwrap();
	fs::write(dir.path().join(".gitignore"), "report*\n").unwrap();
	let mut coordinator = filesystem_pool(dir.path(), 1, CoordinatorOptions::default());

	let results = coordinator.search("report").unwrap();

	assert_eq!(
		results,
		vec![
			display(dir.path(), "a/build/report.log"),
			display(dir.path(), "a/report.txt"),
		]
	);
	coordinator.shutdown().unwrap();
}

#[test]
fn vanished_directories_are_skipped() {
	let dir = tree(&["a/report.txt", "b/report.md"]);
	let mut coordinator = filesystem_pool(dir.path(), 2, CoordinatorOptions::default());
	fs::remove_dir_all(dir.path().join("b")).unwrap();

	let results = coordinator.search("report").unwrap();

	assert_eq!(results, vec![display(dir.path(), "a/report.txt")]);
	coordinator.shutdown().unwrap();
}

#[test]
fn scored_ranking_prefers_short_shallow_paths() {
	let dir = tree(&["a/deep/er/log.md", "b/log.txt", "c/log.md"]);
	let options = CoordinatorOptions {
		ranking: RankingPolicy::Scored {
			preferred_extension: Some("txt".into()),
		},
		reply_timeout: Some(Duration::from_secs(10)),
	};
	let mut coordinator = filesystem_pool(dir.path(), 3, options);

	let results = coordinator.search("log").unwrap();

	assert_eq!(results.len(), 3);
	assert_eq!(results[0], display(dir.path(), "b/log.txt"));
	assert_eq!(results[2], display(dir.path(), "a/deep/er/log.md"));
	coordinator.shutdown().unwrap();
}

#[test]
fn search_after_shutdown_fails() {
	let dir = tree(&["a/report.txt"]);
	let mut coordinator = filesystem_pool(dir.path(), 1, CoordinatorOptions::default());
	coordinator.search("report").unwrap();
	coordinator.shutdown().unwrap();

	let err = coordinator.search("report").unwrap_err();
	assert!(matches!(err, CoordinatorError::PoolShutDown));
	assert!(err.is_channel_closed());
}

#[derive(Clone, Default)]
struct Flaky {
	calls: Arc<AtomicUsize>,
}

impl SearchProvider for Flaky {
	fn search_in_directory(&self, directory: &Path, query: &str) -> Result<Vec<String>, ProviderError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if directory.ends_with("broken") {
			return Err(ProviderError::Failed {
				directory: directory.to_path_buf(),
				reason: "unavailable".into(),
			});
		}
		Ok(vec![format!("{}/{query}", directory.display())])
	}
}

#[test]
fn failing_directories_do_not_fail_the_search() {
	let provider = Flaky::default();
	let partitions = vec![
		vec![PathBuf::from("/x"), PathBuf::from("/broken")],
		vec![PathBuf::from("/y")],
	];
	let mut coordinator =
		Coordinator::spawn(partitions, provider.clone(), CoordinatorOptions::default()).unwrap();

	let results = coordinator.search("q").unwrap();
	assert_eq!(results, vec!["/x/q".to_string(), "/y/q".to_string()]);
	assert_eq!(provider.calls.load(Ordering::SeqCst), 3);

	coordinator.search("q").unwrap();
	assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
	coordinator.shutdown().unwrap();
}

#[test]
fn blank_queries_and_bad_pools_are_rejected() {
	assert!(matches!(
		Coordinator::spawn(Vec::new(), Flaky::default(), CoordinatorOptions::default()),
		Err(CoordinatorError::Configuration(_))
	));

	let mut coordinator = Coordinator::spawn(
		vec![vec![PathBuf::from("/x")]],
		Flaky::default(),
		CoordinatorOptions::default(),
	)
	.unwrap();
	assert!(matches!(coordinator.search("  "), Err(CoordinatorError::EmptyQuery)));
	coordinator.shutdown().unwrap();
}
