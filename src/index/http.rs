use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use super::{FetchError, FetchResult, IndexFetcher};
use crate::records::SearchRecord;

/// Requests the index from a served site.
pub struct HttpFetcher {
	url: Url,
	timeout: Option<Duration>,
}

impl HttpFetcher {
	/// `timeout` of `None` waits indefinitely for the response.
	#[must_use]
	pub fn new(url: Url, timeout: Option<Duration>) -> Self {
		Self { url, timeout }
	}

	fn request(&self) -> Result<Vec<SearchRecord>, reqwest::Error> {
		let client = Client::builder().timeout(self.timeout).build()?;
		client
			.get(self.url.clone())
			.send()?
			.error_for_status()?
			.json::<Vec<SearchRecord>>()
	}
}

impl IndexFetcher for HttpFetcher {
	fn fetch(&self) -> FetchResult {
		self.request().map_err(|source| FetchError::Http {
			url: self.url.to_string(),
			source,
		})
	}

	fn location(&self) -> String {
		self.url.to_string()
	}
}
