use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_leave_everything_to_config() {
	let parsed = CliArgs::try_parse_from(["sitepick"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.origin.is_none());
	assert!(parsed.path.is_none());
	assert!(parsed.timeout.is_none());
	assert!(!parsed.open);
	assert!(!parsed.matches);
}

#[test]
fn index_and_ui_overrides_are_parsed() {
	let parsed = CliArgs::try_parse_from([
		"sitepick",
		"--origin",
		"https://docs.example.com",
		"-q",
		"kafka",
		"--timeout",
		"5",
		"-o",
		"json",
		"-c",
		"one.toml",
		"-c",
		"two.toml",
	])
	.expect("parses");
	assert_eq!(parsed.origin.as_deref(), Some("https://docs.example.com"));
	assert_eq!(parsed.initial_query.as_deref(), Some("kafka"));
	assert_eq!(parsed.timeout, Some(5));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(
		parsed.config,
		[PathBuf::from("one.toml"), PathBuf::from("two.toml")]
	);
}

#[test]
fn origin_and_path_are_mutually_exclusive() {
	let result = CliArgs::try_parse_from(["sitepick", "--origin", "https://a.b", "--path", "public"]);
	assert!(result.is_err());
}
