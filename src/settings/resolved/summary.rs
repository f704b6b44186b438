use partfind::RankingPolicy;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Root: {}", config.root.display()),
		format!("  Workers: {}", config.workers),
	];
	match config.reply_timeout {
		Some(timeout) => lines.push(format!("  Reply timeout: {} ms", timeout.as_millis())),
		None => lines.push("  Reply timeout: none".to_string()),
	}
	match &config.ranking {
		RankingPolicy::Lexical => lines.push("  Ranking: lexical".to_string()),
		RankingPolicy::Scored {
			preferred_extension,
		} => lines.push(format!(
			"  Ranking: scored (preferred extension: {})",
			preferred_extension.as_deref().unwrap_or("none")
		)),
	}

	let filesystem = &config.filesystem;
	lines.push(format!(
		"  Include hidden: {}",
		bool_to_word(filesystem.include_hidden)
	));
	lines.push(format!(
		"  Follow symlinks: {}",
		bool_to_word(filesystem.follow_symlinks)
	));
	lines.push(format!(
		"  Respect ignore files: {}",
		bool_to_word(filesystem.respect_ignore_files)
	));
	lines.push(format!("  Git ignore: {}", bool_to_word(filesystem.git_ignore)));
	lines.push(format!("  Git global: {}", bool_to_word(filesystem.git_global)));
	lines.push(format!("  Git exclude: {}", bool_to_word(filesystem.git_exclude)));
	match filesystem.max_depth {
		Some(depth) => lines.push(format!("  Max depth: {depth}")),
		None => lines.push("  Max depth: unlimited".to_string()),
	}
	match &filesystem.allowed_extensions {
		Some(exts) if !exts.is_empty() => {
			lines.push(format!("  Allowed extensions: {}", exts.join(", ")));
		}
		_ => lines.push("  Allowed extensions: (all)".to_string()),
	}
	if !filesystem.global_ignores.is_empty() {
		lines.push(format!(
			"  Global ignores: {}",
			filesystem.global_ignores.join(", ")
		));
	}

	let mut text = lines.join("\n");
	text.push('\n');
	text
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
