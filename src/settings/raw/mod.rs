use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod index;
mod log;
mod ui;

use index::IndexSection;
use log::LogSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfig {
	pub(crate) index: IndexSection,
	pub(crate) ui: UiSection,
	pub(crate) log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.index.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			index_origin: detect_source(
				cli.origin.is_some(),
				self.index.origin.is_some(),
				"SITEPICK__INDEX__ORIGIN",
				"--origin",
				"index.origin",
			),
			index_timeout: detect_source(
				cli.timeout.is_some(),
				self.index.timeout_secs.is_some(),
				"SITEPICK__INDEX__TIMEOUT_SECS",
				"--timeout",
				"index.timeout_secs",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"SITEPICK__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let index = self.index.finalize();
		let ui = self.ui.finalize();
		let (log_file, log_level) = self.log.finalize();

		let config = ResolvedConfig {
			origin: index.origin,
			path: index.path,
			timeout_secs: index.timeout_secs,
			labels: ui.labels,
			initial_query: ui.initial_query,
			theme: ui.theme,
			log_file,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
