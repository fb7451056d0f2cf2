use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input bound to the selector's filter text.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(text: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Replace the contents, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() != text {
			*self = Self::new(text);
		}
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub(crate) fn textarea(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_at_the_end() {
		let mut input = QueryInput::new("kaf");
		assert!(input.input(key(KeyCode::Char('k'))));
		assert_eq!(input.text(), "kafk");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "kaf");
	}

	#[test]
	fn newlines_are_never_inserted() {
		let mut input = QueryInput::new("a");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "a");
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = QueryInput::new("typed");
		input.set_text("Swim AI");
		assert_eq!(input.text(), "Swim AI");
		input.input(key(KeyCode::Char('!')));
		assert_eq!(input.text(), "Swim AI!");
	}
}
