use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, RankingArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `partfind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "partfind",
	version,
	long_version = long_version(),
	about = "Search file names under a directory with a pool of workers",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "QUERY",
		help = "Queries to run once each; omit to start an interactive prompt"
	)]
	pub(crate) queries: Vec<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PARTFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long,
		value_name = "PATH",
		help = "Directory whose subdirectories are searched (default: current directory)"
	)]
	pub(crate) root: Option<PathBuf>,
	#[arg(
		short = 'w',
		long,
		value_name = "NUM",
		help = "Number of search workers (default: 5)"
	)]
	pub(crate) workers: Option<usize>,
	#[arg(
		long = "reply-timeout-ms",
		value_name = "MS",
		help = "Fail a search when a worker takes longer than this to reply (default: wait forever)"
	)]
	pub(crate) reply_timeout_ms: Option<u64>,
	#[arg(
		long,
		value_enum,
		help = "Ordering applied to results (default: lexical)"
	)]
	pub(crate) ranking: Option<RankingArg>,
	#[arg(
		long = "preferred-extension",
		value_name = "EXT",
		help = "Extension boosted by scored ranking (default: txt)"
	)]
	pub(crate) preferred_extension: Option<String>,
	#[arg(
		short = 'H',
		long = "hidden",
		value_parser = BoolishValueParser::new(),
		help = "Include hidden files (default: enabled)"
	)]
	pub(crate) hidden: Option<bool>,
	#[arg(
		short = 's',
		long = "follow-symlinks",
		value_parser = BoolishValueParser::new(),
		help = "Follow symbolic links while searching (default: disabled)"
	)]
	pub(crate) follow_symlinks: Option<bool>,
	#[arg(
		long = "respect-ignore-files",
		value_parser = BoolishValueParser::new(),
		help = "Respect .ignore files (default: disabled)"
	)]
	pub(crate) respect_ignore_files: Option<bool>,
	#[arg(
		long = "git-ignore",
		value_parser = BoolishValueParser::new(),
		help = "Respect .gitignore files (default: disabled)"
	)]
	pub(crate) git_ignore: Option<bool>,
	#[arg(
		long = "git-global",
		value_parser = BoolishValueParser::new(),
		help = "Respect global gitignore settings (default: disabled)"
	)]
	pub(crate) git_global: Option<bool>,
	#[arg(
		long = "git-exclude",
		value_parser = BoolishValueParser::new(),
		help = "Respect git exclude files (default: disabled)"
	)]
	pub(crate) git_exclude: Option<bool>,
	#[arg(
		short = 'd',
		long = "max-depth",
		value_name = "NUM",
		help = "Limit traversal depth below each subdirectory (default: unlimited)"
	)]
	pub(crate) max_depth: Option<usize>,
	#[arg(
		long = "extensions",
		value_delimiter = ',',
		value_name = "EXT",
		help = "Restrict matches to specific file extensions (default: all)"
	)]
	pub(crate) extensions: Option<Vec<String>>,
	#[arg(
		long = "global-ignores",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated directory names to always skip (default: .git,__pycache__)"
	)]
	pub(crate) global_ignores: Option<Vec<String>>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print results"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity on stderr (-v info, -vv debug)"
	)]
	pub(crate) verbose: u8,
}
