use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::util::non_blank;

/// Where to load `search.json` from, prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IndexSection {
	pub(crate) origin: Option<String>,
	pub(crate) path: Option<PathBuf>,
	pub(crate) timeout_secs: Option<u64>,
}

impl IndexSection {
	/// A source named on the command line replaces both configured sources.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(origin) = cli.origin.clone() {
			self.origin = Some(origin);
			self.path = None;
		}
		if let Some(path) = cli.path.clone() {
			self.path = Some(path);
			self.origin = None;
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> IndexSection {
		IndexSection {
			origin: non_blank(self.origin),
			path: self.path.filter(|path| !path.as_os_str().is_empty()),
			timeout_secs: self.timeout_secs,
		}
	}
}
