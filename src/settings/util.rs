use std::env;
use std::path::{Path, PathBuf};

/// Treat blank strings from config files or the environment as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Display `path` relative to the home directory when it lives inside it.
pub(super) fn display_path(path: &Path) -> String {
	if let Some(home_os) = env::var_os("HOME") {
		let home = PathBuf::from(home_os);
		if let Ok(rel) = path.strip_prefix(&home) {
			if rel.components().next().is_none() {
				return "~".to_string();
			}
			let sep = std::path::MAIN_SEPARATOR;
			return format!("~{}{}", sep, rel.display());
		}
	}
	path.display().to_string()
}
