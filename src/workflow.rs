use std::time::Duration;

use anyhow::{Result, bail};
use sitepick::{
	BrowserOpener, IndexSource, Picker, SearchOutcome, SearchRecord, SearchSelector, UiLabels,
};

use crate::settings::ResolvedConfig;

/// Coordinates loading the index and running the picker for one invocation.
pub(crate) struct SearchWorkflow {
	source: IndexSource,
	timeout: Option<Duration>,
	labels: UiLabels,
	initial_query: String,
	theme: Option<String>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let source = config.index_source()?;
		let timeout = config.timeout();
		let ResolvedConfig {
			labels,
			initial_query,
			theme,
			..
		} = config;

		Ok(Self {
			source,
			timeout,
			labels,
			initial_query,
			theme,
		})
	}

	/// Navigator that opens selections relative to the index origin.
	pub(crate) fn browser(&self) -> BrowserOpener {
		BrowserOpener::new(self.source.base_url().cloned())
	}

	/// Run the interactive picker until the user selects or cancels.
	pub(crate) fn run(self) -> Result<SearchOutcome> {
		tracing::info!(source = %self.source.describe(), "starting picker");
		let mut picker = Picker::new(self.source.fetcher(self.timeout))
			.with_labels(self.labels)
			.with_initial_query(self.initial_query);
		if let Some(theme) = self.theme {
			picker = picker.with_theme_name(&theme);
		}
		picker.run()
	}

	/// Load the index and return the records matching the initial query,
	/// without taking over the terminal.
	pub(crate) fn matches(&self) -> Result<Vec<SearchRecord>> {
		let mut selector = SearchSelector::default();
		selector.fetch_records(self.source.fetcher(self.timeout));
		if !selector.wait_for_records(None) {
			match selector.fetch_state().error() {
				Some(err) => bail!("failed to load {}: {err}", self.source.describe()),
				None => bail!(
					"failed to load {}: index request did not complete",
					self.source.describe()
				),
			}
		}

		selector.open();
		selector.set_filter_text(self.initial_query.as_str());
		Ok(selector.filtered_options().into_iter().cloned().collect())
	}

	pub(crate) fn query(&self) -> &str {
		&self.initial_query
	}
}
