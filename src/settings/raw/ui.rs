use serde::Deserialize;
use sitepick::UiLabels;

use crate::cli::CliArgs;
use crate::settings::util::non_blank;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UiSection {
	pub(crate) title: Option<String>,
	pub(crate) initial_query: Option<String>,
	pub(crate) theme: Option<String>,
	pub(crate) prompt_hint: Option<String>,
	pub(crate) empty_label: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = non_blank(self.title) {
			labels.title = title;
		}
		if let Some(hint) = non_blank(self.prompt_hint) {
			labels.hint = hint;
		}
		if let Some(empty) = non_blank(self.empty_label) {
			labels.empty = empty;
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: non_blank(self.theme),
		}
	}
}
