//! Filterable, keyboard-navigable selector over the site's search records.
//!
//! [`SearchSelector`] owns all widget state and exposes the pure views
//! ([`SearchSelector::filtered_options`], [`SearchSelector::class_option`])
//! that a renderer needs. It never touches the terminal itself, so every
//! transition can be driven directly from tests.
//!
//! The focused index always refers to the *filtered* list. While the list is
//! open, any change that can shrink it clamps the focus so it stays
//! addressable.

mod fetch;
mod option;

use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

pub use fetch::FetchState;
pub use option::OptionClass;

use crate::index::{FetchError, FetchResult, IndexFetcher, spawn_fetch};
use crate::navigate::{NavigationLog, Navigator};
use crate::records::SearchRecord;

pub struct SearchSelector<N = NavigationLog> {
	filter_text: String,
	is_open: bool,
	selected: Option<SearchRecord>,
	focused: Option<usize>,
	records: FetchState,
	navigator: N,
}

impl<N: Navigator> SearchSelector<N> {
	/// Create a closed selector with no records requested yet.
	pub fn new(navigator: N) -> Self {
		Self {
			filter_text: String::new(),
			is_open: false,
			selected: None,
			focused: None,
			records: FetchState::Idle,
			navigator,
		}
	}

	/// Create a selector whose records are already available.
	///
	/// Counts as the selector's one fetch; later `fetch_records` calls are
	/// no-ops.
	pub fn with_records(navigator: N, records: Vec<SearchRecord>) -> Self {
		let mut selector = Self::new(navigator);
		selector.records = FetchState::Loaded(records);
		selector
	}

	pub fn filter_text(&self) -> &str {
		&self.filter_text
	}

	pub fn selected(&self) -> Option<&SearchRecord> {
		self.selected.as_ref()
	}

	pub fn focused_index(&self) -> Option<usize> {
		self.focused
	}

	pub fn fetch_state(&self) -> &FetchState {
		&self.records
	}

	/// All records, or `None` until the index has loaded.
	pub fn all_records(&self) -> Option<&[SearchRecord]> {
		self.records.records()
	}

	pub fn navigator(&self) -> &N {
		&self.navigator
	}

	pub fn navigator_mut(&mut self) -> &mut N {
		&mut self.navigator
	}

	pub fn is_open(&self) -> bool {
		self.is_open
	}

	/// Show the option list and enter search mode with an empty query.
	pub fn open(&mut self) {
		self.is_open = true;
		self.filter_text.clear();
		self.clamp_focus();
	}

	/// Hide the option list and restore the selection's label.
	///
	/// Focus survives untouched only when a record is selected, so reopening
	/// lands on the previous position. `open` re-clamps it against the full
	/// list.
	pub fn close(&mut self) {
		self.is_open = false;
		match &self.selected {
			Some(record) => self.filter_text = record.title.clone(),
			None => self.focused = None,
		}
	}

	pub fn toggle(&mut self) {
		if self.is_open {
			self.close();
		} else {
			self.open();
		}
	}

	/// Replace the query as typed by the user.
	pub fn set_filter_text(&mut self, text: impl Into<String>) {
		self.filter_text = text.into();
		self.clamp_focus();
	}

	/// Issue the one index request for this selector.
	///
	/// Returns `false` without doing anything once a request has been made,
	/// whether it is still pending, succeeded, or failed.
	pub fn fetch_records(&mut self, fetcher: Box<dyn IndexFetcher>) -> bool {
		if !self.records.is_idle() {
			tracing::debug!("search index already requested");
			return false;
		}
		self.records = FetchState::InFlight(spawn_fetch(fetcher));
		true
	}

	/// Apply the fetch result if it has arrived. Returns `true` when the
	/// fetch state changed.
	pub fn pump_records(&mut self) -> bool {
		let FetchState::InFlight(rx) = &self.records else {
			return false;
		};
		let received = rx.try_recv();
		match received {
			Ok(result) => self.finish_fetch(result),
			Err(TryRecvError::Empty) => return false,
			Err(TryRecvError::Disconnected) => self.finish_fetch(Err(FetchError::WorkerGone)),
		}
		true
	}

	/// Block until the pending fetch resolves or `timeout` elapses.
	///
	/// Returns whether records are available afterwards.
	pub fn wait_for_records(&mut self, timeout: Option<Duration>) -> bool {
		if let FetchState::InFlight(rx) = &self.records {
			let received = match timeout {
				Some(timeout) => rx.recv_timeout(timeout),
				None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
			};
			match received {
				Ok(result) => self.finish_fetch(result),
				Err(RecvTimeoutError::Disconnected) => {
					self.finish_fetch(Err(FetchError::WorkerGone));
				}
				Err(RecvTimeoutError::Timeout) => {}
			}
		}
		self.records.records().is_some()
	}

	fn finish_fetch(&mut self, result: FetchResult) {
		match result {
			Ok(records) => {
				tracing::info!(count = records.len(), "search index loaded");
				self.records = FetchState::Loaded(records);
				self.clamp_focus();
			}
			Err(err) => {
				tracing::warn!(error = %err, "search index unavailable");
				self.records = FetchState::Failed(err);
			}
		}
	}

	/// Records whose title or excerpt contains the query, ignoring case, in
	/// index order.
	pub fn filtered_options(&self) -> Vec<&SearchRecord> {
		let Some(records) = self.records.records() else {
			return Vec::new();
		};
		let needle = self.filter_text.to_lowercase();
		records
			.iter()
			.filter(|record| record.matches_lowercase(&needle))
			.collect()
	}

	fn filtered_len(&self) -> usize {
		self.filtered_options().len()
	}

	/// Presentation flags for the row showing `title` at `index`.
	pub fn class_option(&self, title: &str, index: usize) -> OptionClass {
		OptionClass {
			selected: self
				.selected
				.as_ref()
				.is_some_and(|record| record.title == title),
			focused: self.focused == Some(index),
		}
	}

	/// Focus the clicked row and select it. Clicks past the end of the
	/// filtered list are ignored.
	pub fn on_option_click(&mut self, index: usize) -> Option<SearchRecord> {
		if index >= self.filtered_len() {
			return None;
		}
		self.focused = Some(index);
		self.select_option()
	}

	/// Select the focused record (the first one when nothing is focused),
	/// navigate to it, and close.
	///
	/// Does nothing while closed or when no options match.
	pub fn select_option(&mut self) -> Option<SearchRecord> {
		if !self.is_open {
			return None;
		}
		let (index, record) = {
			let options = self.filtered_options();
			let last = options.len().checked_sub(1)?;
			let index = self.focused.unwrap_or(0).min(last);
			(index, options[index].clone())
		};

		self.focused = Some(index);
		self.selected = Some(record.clone());
		self.filter_text = record.title.clone();
		self.navigator.navigate(&record.url);
		self.close();
		Some(record)
	}

	/// Move focus up, wrapping from the first row to the last.
	pub fn focus_prev_option(&mut self) {
		if !self.is_open {
			return;
		}
		let Some(last) = self.filtered_len().checked_sub(1) else {
			self.focused = None;
			return;
		};
		self.focused = match self.focused {
			Some(0) => Some(last),
			Some(index) if index <= last => Some(index - 1),
			Some(_) => Some(last),
			None => None,
		};
	}

	/// Move focus down, wrapping from the last row to the first. Opens the
	/// list first when closed, which also resets the query.
	pub fn focus_next_option(&mut self) {
		if !self.is_open {
			self.open();
		}
		let Some(last) = self.filtered_len().checked_sub(1) else {
			self.focused = None;
			return;
		};
		self.focused = match self.focused {
			Some(index) if index < last => Some(index + 1),
			_ => Some(0),
		};
	}

	fn clamp_focus(&mut self) {
		let Some(index) = self.focused else {
			return;
		};
		self.focused = self
			.filtered_len()
			.checked_sub(1)
			.map(|last| index.min(last));
	}
}

impl Default for SearchSelector<NavigationLog> {
	fn default() -> Self {
		Self::new(NavigationLog::new())
	}
}
