use std::sync::mpsc::Receiver;

use crate::index::{FetchError, FetchResult};
use crate::records::SearchRecord;

/// Lifecycle of the one-shot index request.
#[derive(Debug, Default)]
pub enum FetchState {
	/// No request issued yet.
	#[default]
	Idle,
	InFlight(Receiver<FetchResult>),
	Loaded(Vec<SearchRecord>),
	/// The request failed; records stay unset for the selector's lifetime.
	Failed(FetchError),
}

impl FetchState {
	#[must_use]
	pub fn records(&self) -> Option<&[SearchRecord]> {
		match self {
			Self::Loaded(records) => Some(records),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		matches!(self, Self::InFlight(_))
	}

	#[must_use]
	pub fn error(&self) -> Option<&FetchError> {
		match self {
			Self::Failed(message) => Some(message),
			_ => None,
		}
	}
}
