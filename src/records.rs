use serde::{Deserialize, Serialize};

/// One searchable page entry from the site's `search.json` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
	pub title: String,
	#[serde(default)]
	pub excerpt: String,
	pub url: String,
}

impl SearchRecord {
	#[must_use]
	pub fn new(
		title: impl Into<String>,
		excerpt: impl Into<String>,
		url: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			excerpt: excerpt.into(),
			url: url.into(),
		}
	}

	/// Case-insensitive substring match against the title or excerpt.
	///
	/// `needle` must already be lowercased; callers filtering many records
	/// normalize the query once.
	#[must_use]
	pub fn matches_lowercase(&self, needle: &str) -> bool {
		if needle.is_empty() {
			return true;
		}
		self.title.to_lowercase().contains(needle) || self.excerpt.to_lowercase().contains(needle)
	}
}

/// Captures the outcome of a picker session.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub selection: Option<SearchRecord>,
	pub query: String,
}

impl SearchOutcome {
	/// Return the URL the session navigated to, if any.
	#[must_use]
	pub fn target_url(&self) -> Option<&str> {
		self.selection.as_ref().map(|record| record.url.as_str())
	}
}
