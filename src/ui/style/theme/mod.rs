mod builtins;

use ratatui::style::Style;

pub use builtins::{LIGHT, SLATE, SOLARIZED};

/// Styles applied to the prompt line and the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the prompt title.
	pub prompt: Style,
	/// Style for the status and hint text next to the prompt.
	pub hint: Style,
	/// Style for empty states.
	pub empty: Style,
	/// Style for a failed index fetch.
	pub error: Style,
	/// Base style applied to every option row.
	pub option: Style,
	/// Patched onto the row of the currently selected record.
	pub option_selected: Style,
	/// Patched onto the keyboard-focused row.
	pub option_focused: Style,
	/// Style for the excerpt column.
	pub excerpt: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	#[must_use]
	pub const fn new(name: &'static str, aliases: &'static [&'static str], theme: Theme) -> Self {
		Self {
			name,
			aliases,
			theme,
		}
	}

	fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

const DEFINITIONS: [ThemeDefinition; 3] = [
	ThemeDefinition::new("slate", &["default", "dark"], SLATE),
	ThemeDefinition::new("light", &["day"], LIGHT),
	ThemeDefinition::new("solarized", &["solarized-dark"], SOLARIZED),
];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	&DEFINITIONS
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	DEFINITIONS.iter().map(|definition| definition.name).collect()
}

/// Look up a theme by name or alias, ignoring case and surrounding space.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}
