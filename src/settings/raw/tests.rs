use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

fn configured_origin() -> RawConfig {
	let mut config = RawConfig::default();
	config.index.origin = Some("https://docs.example.com".into());
	config
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"sitepick",
		"-t",
		"Docs",
		"-q",
		"kafka",
		"--theme",
		"light",
		"--timeout",
		"9",
	]);

	let mut config = configured_origin();
	config.ui.title = Some("Config title".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.index.timeout_secs, Some(9));
	assert_eq!(config.index.origin.as_deref(), Some("https://docs.example.com"));
}

#[test]
fn cli_origin_replaces_configured_path() {
	let cli = CliArgs::parse_from(["sitepick", "--origin", "http://localhost:4000"]);
	let mut config = RawConfig::default();
	config.index.path = Some(PathBuf::from("public"));
	config.apply_cli_overrides(&cli);

	assert_eq!(config.index.origin.as_deref(), Some("http://localhost:4000"));
	assert!(config.index.path.is_none());
}

#[test]
fn configured_path_wins_over_configured_origin() {
	let cli = CliArgs::parse_from(["sitepick"]);
	let mut config = configured_origin();
	config.index.path = Some(PathBuf::from("public"));

	let resolved = config.resolve(&cli).expect("resolves");
	assert!(matches!(
		resolved.index_source().unwrap(),
		sitepick::IndexSource::Local(path) if path == PathBuf::from("public")
	));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["sitepick"]);
	let resolved = configured_origin().resolve(&cli).expect("resolves");

	assert_eq!(resolved.labels.title, "Search");
	assert_eq!(resolved.initial_query, "");
	assert_eq!(resolved.log_level, "info");
	assert!(resolved.timeout().is_none());
	assert_eq!(
		resolved.index_source().unwrap().describe(),
		"https://docs.example.com/search.json"
	);
}

#[test]
fn resolve_requires_an_index_source() {
	let cli = CliArgs::parse_from(["sitepick"]);
	let err = RawConfig::default().resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("index.origin"));
}

#[test]
fn zero_timeout_is_rejected_with_its_source() {
	let cli = CliArgs::parse_from(["sitepick", "--timeout", "0"]);
	let mut config = configured_origin();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("index.timeout_secs"));
	assert!(message.contains("CLI flag `--timeout`"));
}

#[test]
fn unknown_theme_is_rejected() {
	let cli = CliArgs::parse_from(["sitepick"]);
	let mut config = configured_origin();
	config.ui.theme = Some("neon".into());

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("slate"));
}
