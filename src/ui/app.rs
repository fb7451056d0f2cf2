//! Core state container for the picker's terminal front end.

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiLabels;
use super::input::QueryInput;
use super::style::Theme;
use crate::records::SearchOutcome;
use crate::selector::SearchSelector;

/// Terminal state wrapped around a [`SearchSelector`].
///
/// The selector owns every widget transition; `App` mirrors its filter text
/// into the input field and remembers where the option list was drawn so
/// mouse clicks can be mapped back to option indices.
pub struct App<'a> {
	pub selector: SearchSelector,
	pub(crate) input: QueryInput<'a>,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) table_state: TableState,
	pub(crate) options_area: Option<Rect>,
}

impl<'a> App<'a> {
	#[must_use]
	pub fn new(selector: SearchSelector) -> Self {
		let input = QueryInput::new(selector.filter_text());
		Self {
			selector,
			input,
			labels: UiLabels::default(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			table_state: TableState::default(),
			options_area: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	/// Open the list with `query` already typed.
	pub fn set_initial_query(&mut self, query: &str) {
		if query.is_empty() {
			return;
		}
		self.selector.open();
		self.selector.set_filter_text(query);
		self.sync_input();
	}

	/// Copy the selector's filter text into the input field after a
	/// transition that rewrote it.
	pub(crate) fn sync_input(&mut self) {
		self.input.set_text(self.selector.filter_text());
	}

	/// Apply a fetch result if one arrived. Returns `true` on change.
	pub(crate) fn pump_records(&mut self) -> bool {
		self.selector.pump_records()
	}

	pub(crate) fn cancelled(&self) -> SearchOutcome {
		SearchOutcome {
			accepted: false,
			selection: None,
			query: self.input.text().to_string(),
		}
	}

	/// Turn a navigation recorded by the selector into the session outcome.
	pub(crate) fn take_navigation(&mut self, query: String) -> Option<SearchOutcome> {
		self.selector.navigator_mut().take_last()?;
		Some(SearchOutcome {
			accepted: true,
			selection: self.selector.selected().cloned(),
			query,
		})
	}
}
