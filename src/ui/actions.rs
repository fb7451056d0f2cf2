use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::records::SearchOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome once the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.cancelled());
			}
			KeyCode::Esc => {
				if !self.selector.is_open() {
					return Some(self.cancelled());
				}
				self.selector.close();
				self.sync_input();
			}
			KeyCode::Enter => return self.select_focused(),
			KeyCode::Tab => {
				self.selector.toggle();
				self.sync_input();
			}
			KeyCode::Down => {
				self.selector.focus_next_option();
				self.sync_input();
			}
			KeyCode::Up => self.selector.focus_prev_option(),
			_ => self.edit_query(key),
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<SearchOutcome> {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let index = self.option_at(mouse.column, mouse.row)?;
				let query = self.input.text().to_string();
				self.selector.on_option_click(index);
				self.sync_input();
				return self.take_navigation(query);
			}
			MouseEventKind::ScrollDown if self.selector.is_open() => {
				self.selector.focus_next_option();
			}
			MouseEventKind::ScrollUp => self.selector.focus_prev_option(),
			_ => {}
		}
		None
	}

	fn select_focused(&mut self) -> Option<SearchOutcome> {
		let query = self.input.text().to_string();
		self.selector.select_option();
		self.sync_input();
		self.take_navigation(query)
	}

	fn edit_query(&mut self, key: KeyEvent) {
		let edits_text = matches!(
			key.code,
			KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete
		);
		if edits_text && !self.selector.is_open() {
			self.selector.open();
			self.sync_input();
		}
		if self.input.input(key) {
			self.selector.set_filter_text(self.input.text());
		}
	}

	/// Map a terminal cell to an option index using the last drawn list.
	fn option_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.options_area?;
		if !self.selector.is_open()
			|| column < area.left()
			|| column >= area.right()
			|| row < area.top()
			|| row >= area.bottom()
		{
			return None;
		}
		Some(self.table_state.offset() + usize::from(row - area.top()))
	}
}
