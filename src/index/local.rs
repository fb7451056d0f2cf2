use std::fs;
use std::path::{Path, PathBuf};

use super::{FetchError, FetchResult, INDEX_FILE, IndexFetcher};
use crate::records::SearchRecord;

/// Reads the index from a built site on disk.
pub struct LocalFetcher {
	path: PathBuf,
}

impl LocalFetcher {
	/// Accepts either the `search.json` file itself or the site directory.
	#[must_use]
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}

	fn index_path(&self) -> PathBuf {
		resolve_index_file(&self.path)
	}
}

fn resolve_index_file(path: &Path) -> PathBuf {
	if path.is_dir() {
		path.join(INDEX_FILE)
	} else {
		path.to_path_buf()
	}
}

impl IndexFetcher for LocalFetcher {
	fn fetch(&self) -> FetchResult {
		let path = self.index_path();
		let raw = fs::read_to_string(&path).map_err(|source| FetchError::Io {
			path: path.clone(),
			source,
		})?;
		serde_json::from_str::<Vec<SearchRecord>>(&raw).map_err(|source| FetchError::Decode {
			location: path.display().to_string(),
			source,
		})
	}

	fn location(&self) -> String {
		self.index_path().display().to_string()
	}
}
