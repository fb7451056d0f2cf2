mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{
	OutputFormat, format_matches_json, parse_cli, print_json, print_matches_plain, print_plain,
};
use sitepick::{logging, ui::style};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for definition in style::definitions() {
			if definition.aliases.is_empty() {
				println!("{}", definition.name);
			} else {
				println!("{} ({})", definition.name, definition.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if let Some(file) = &resolved.log_file {
		logging::initialize(file, &resolved.log_level);
	}

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved)?;
	if cli.matches {
		return print_matches(cli.output, &workflow);
	}
	run_search(cli.output, cli.open, workflow)
}

/// Execute the picker and print output in the chosen format.
fn run_search(format: OutputFormat, open: bool, workflow: SearchWorkflow) -> Result<()> {
	let browser = workflow.browser();
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	if open
		&& outcome.accepted
		&& let Some(url) = outcome.target_url()
	{
		browser
			.open(url)
			.with_context(|| format!("failed to open {url} in a browser"))?;
	}

	Ok(())
}

fn print_matches(format: OutputFormat, workflow: &SearchWorkflow) -> Result<()> {
	let records = workflow.matches()?;
	let records: Vec<_> = records.iter().collect();
	match format {
		OutputFormat::Plain => print_matches_plain(&records),
		OutputFormat::Json => println!("{}", format_matches_json(workflow.query(), &records)?),
	}
	Ok(())
}
