use super::ResolvedConfig;
use crate::settings::util::display_path;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match config.index_source() {
		Ok(source) => println!("  Index: {}", source.describe()),
		Err(err) => println!("  Index: unavailable ({err})"),
	}
	match config.timeout_secs {
		Some(secs) => println!("  Timeout: {secs}s"),
		None => println!("  Timeout: none"),
	}
	println!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	println!("  Prompt title: {}", config.labels.title);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	match &config.log_file {
		Some(file) => println!("  Log file: {} ({})", display_path(file), config.log_level),
		None => println!("  Log file: disabled"),
	}
}
