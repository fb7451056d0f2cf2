use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use sitepick::{IndexSource, UiLabels};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub origin: Option<String>,
	pub path: Option<PathBuf>,
	pub timeout_secs: Option<u64>,
	pub labels: UiLabels,
	pub initial_query: String,
	pub theme: Option<String>,
	pub log_file: Option<PathBuf>,
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// The index location; a configured path takes precedence over an origin.
	pub fn index_source(&self) -> Result<IndexSource> {
		if let Some(path) = &self.path {
			return Ok(IndexSource::Local(path.clone()));
		}
		match &self.origin {
			Some(origin) => Ok(IndexSource::remote(origin)?),
			None => bail!("no search index configured; pass --origin or --path"),
		}
	}

	#[must_use]
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
