/// Text shown by the picker around the prompt and option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub title: String,
	pub hint: String,
	pub empty: String,
	pub loading: String,
	pub unavailable: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Search".to_string(),
			hint: "Type to search, ↑/↓ to move, Enter to open, Esc to close".to_string(),
			empty: "No results".to_string(),
			loading: "Loading index".to_string(),
			unavailable: "Search index unavailable".to_string(),
		}
	}
}
