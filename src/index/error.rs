use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures encountered while retrieving the `search.json` index.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("invalid site origin '{origin}': {reason}")]
	InvalidOrigin { origin: String, reason: String },
	#[error("request to {url} failed: {source}")]
	Http {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to decode index from {location}: {source}")]
	Decode {
		location: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("index worker exited before delivering records")]
	WorkerGone,
}
