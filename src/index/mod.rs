//! Retrieval of the static `search.json` index.
//!
//! The index is fetched on a worker thread and delivered over a channel so
//! the UI thread never blocks on the network. Sources are either a served
//! site (`{origin}/search.json`) or a locally built site directory.

mod error;
mod http;
mod local;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use reqwest::Url;

pub use error::FetchError;
pub use http::HttpFetcher;
pub use local::LocalFetcher;

use crate::records::SearchRecord;

/// Well-known site-relative location of the index.
pub const INDEX_PATH: &str = "/search.json";
/// File name of the index inside a built site directory.
pub const INDEX_FILE: &str = "search.json";

pub type FetchResult = Result<Vec<SearchRecord>, FetchError>;

/// Something that can produce the full record list in one request.
pub trait IndexFetcher: Send {
	fn fetch(&self) -> FetchResult;

	/// Human readable location used in logs and the prompt.
	fn location(&self) -> String {
		"search index".to_string()
	}
}

impl<F> IndexFetcher for F
where
	F: Fn() -> FetchResult + Send,
{
	fn fetch(&self) -> FetchResult {
		self()
	}
}

/// Where the index lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
	/// A served site; the index is requested from `{origin}/search.json`.
	Remote(Url),
	/// A `search.json` file, or a built site directory containing one.
	Local(PathBuf),
}

impl IndexSource {
	/// Parse a site origin into a remote source.
	pub fn remote(origin: &str) -> Result<Self, FetchError> {
		Ok(Self::Remote(index_url(origin)?))
	}

	/// Return the base URL relative record links resolve against, if any.
	#[must_use]
	pub fn base_url(&self) -> Option<&Url> {
		match self {
			Self::Remote(url) => Some(url),
			Self::Local(_) => None,
		}
	}

	/// Build the fetcher for this source.
	#[must_use]
	pub fn fetcher(&self, timeout: Option<Duration>) -> Box<dyn IndexFetcher> {
		match self {
			Self::Remote(url) => Box::new(HttpFetcher::new(url.clone(), timeout)),
			Self::Local(path) => Box::new(LocalFetcher::new(path.clone())),
		}
	}

	#[must_use]
	pub fn describe(&self) -> String {
		match self {
			Self::Remote(url) => url.to_string(),
			Self::Local(path) => path.display().to_string(),
		}
	}
}

/// Resolve the index URL for a site origin.
///
/// Any path on the origin is discarded; the index always lives at the root.
pub fn index_url(origin: &str) -> Result<Url, FetchError> {
	let invalid = |reason: String| FetchError::InvalidOrigin {
		origin: origin.to_string(),
		reason,
	};
	let base = Url::parse(origin.trim()).map_err(|err| invalid(err.to_string()))?;
	if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
		return Err(invalid("expected an http(s) origin".to_string()));
	}
	base.join(INDEX_PATH).map_err(|err| invalid(err.to_string()))
}

/// Run `fetcher` once on a worker thread.
///
/// The receiver yields exactly one result. Dropping it discards the result;
/// the in-flight request itself cannot be cancelled.
pub fn spawn_fetch(fetcher: Box<dyn IndexFetcher>) -> Receiver<FetchResult> {
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let location = fetcher.location();
		tracing::debug!(%location, "fetching search index");
		let result = fetcher.fetch();
		if tx.send(result).is_err() {
			tracing::debug!(%location, "index result dropped; selector is gone");
		}
	});
	rx
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn index_url_discards_origin_path() {
		let url = index_url("https://example.com/blog/post.html").unwrap();
		assert_eq!(url.as_str(), "https://example.com/search.json");
	}

	#[test]
	fn index_url_keeps_port() {
		let url = index_url("http://localhost:4000").unwrap();
		assert_eq!(url.as_str(), "http://localhost:4000/search.json");
	}

	#[test]
	fn index_url_rejects_non_http_origins() {
		assert!(matches!(
			index_url("mailto:someone@example.com"),
			Err(FetchError::InvalidOrigin { .. })
		));
		assert!(matches!(
			index_url("not a url"),
			Err(FetchError::InvalidOrigin { .. })
		));
	}

	#[test]
	fn spawned_fetch_delivers_one_result() {
		let fetcher = || -> FetchResult { Ok(vec![SearchRecord::new("Home", "", "/")]) };
		let rx = spawn_fetch(Box::new(fetcher));
		let records = rx.recv().unwrap().unwrap();
		assert_eq!(records.len(), 1);
		assert!(rx.recv().is_err());
	}
}
