//! File-backed `tracing` output.
//!
//! The picker owns the terminal, so log lines go to a file instead of
//! stderr. A file that cannot be opened disables logging rather than
//! failing the run.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides the
/// configured level, e.g. `SITEPICK_LOG=sitepick=debug`.
pub const LOG_ENV: &str = "SITEPICK_LOG";

/// Default file name inside the cache directory.
pub const LOG_FILE_NAME: &str = "sitepick.log";

/// Install the global subscriber. Returns `false` when logging stays off.
pub fn initialize(file: &Path, level: &str) -> bool {
	let writer = match open_log_file(file) {
		Ok(writer) => writer,
		Err(_) => return false,
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter(level))
		.with_writer(Mutex::new(writer))
		.with_ansi(false)
		.try_init()
		.is_ok()
}

fn filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}
	OpenOptions::new().create(true).append(true).open(path)
}
