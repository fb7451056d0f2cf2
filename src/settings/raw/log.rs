use std::path::PathBuf;

use serde::Deserialize;
use sitepick::{app_dirs, logging};

use crate::settings::util::non_blank;

const DEFAULT_LEVEL: &str = "info";

/// Log destination and verbosity prior to defaults being filled in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LogSection {
	pub(crate) file: Option<PathBuf>,
	pub(crate) level: Option<String>,
}

impl LogSection {
	/// Return the log file and level, defaulting the file into the cache
	/// directory. `None` means no usable location exists.
	pub(super) fn finalize(self) -> (Option<PathBuf>, String) {
		let file = self.file.or_else(|| {
			app_dirs::get_cache_dir()
				.ok()
				.map(|dir| dir.join(logging::LOG_FILE_NAME))
		});
		let level = non_blank(self.level).unwrap_or_else(|| DEFAULT_LEVEL.to_string());
		(file, level)
	}
}
