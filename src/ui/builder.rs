use anyhow::Result;

use super::App;
use super::config::UiLabels;
use super::style::{self, Theme};
use crate::index::IndexFetcher;
use crate::navigate::NavigationLog;
use crate::records::{SearchOutcome, SearchRecord};
use crate::selector::SearchSelector;

enum RecordSource {
	Fetch(Box<dyn IndexFetcher>),
	Ready(Vec<SearchRecord>),
}

/// Builder for the interactive picker.
///
/// Configures the prompt title, starting query, theme and labels before
/// the index request is issued and the terminal is taken over.
pub struct Picker {
	source: RecordSource,
	input_title: Option<String>,
	initial_query: String,
	theme: Option<Theme>,
	labels: Option<UiLabels>,
}

impl Picker {
	/// Create a picker that loads its records through `fetcher`.
	pub fn new(fetcher: Box<dyn IndexFetcher>) -> Self {
		Self::with_source(RecordSource::Fetch(fetcher))
	}

	/// Create a picker over records that are already in memory.
	pub fn from_records(records: Vec<SearchRecord>) -> Self {
		Self::with_source(RecordSource::Ready(records))
	}

	fn with_source(source: RecordSource) -> Self {
		Self {
			source,
			input_title: None,
			initial_query: String::new(),
			theme: None,
			labels: None,
		}
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Use the named built-in theme. Unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => tracing::warn!(theme = name, "unknown theme, keeping default"),
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Assemble the [`App`], issuing the index request immediately.
	pub fn build(self) -> App<'static> {
		let selector = match self.source {
			RecordSource::Fetch(fetcher) => {
				let mut selector = SearchSelector::default();
				selector.fetch_records(fetcher);
				selector
			}
			RecordSource::Ready(records) => SearchSelector::with_records(NavigationLog::new(), records),
		};

		let mut app = App::new(selector);
		let mut labels = self.labels.unwrap_or_default();
		if let Some(title) = self.input_title {
			labels.title = title;
		}
		app.set_labels(labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_initial_query(&self.initial_query);
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}
