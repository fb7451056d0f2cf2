use ratatui::style::Style;

use crate::ui::Theme;

/// Presentation flags for a single option row.
///
/// Selected and focused are independent; a row can be both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionClass {
	pub selected: bool,
	pub focused: bool,
}

impl OptionClass {
	/// Compose the row style: base, then selected, then focused on top.
	#[must_use]
	pub fn style(self, theme: &Theme) -> Style {
		let mut style = theme.option;
		if self.selected {
			style = style.patch(theme.option_selected);
		}
		if self.focused {
			style = style.patch(theme.option_focused);
		}
		style
	}
}
