use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

const TITLE_SEPARATOR: &str = " › ";

/// Status shown at the right edge of the prompt.
pub enum PromptStatus<'a> {
	Loading(&'a str),
	Ready { matches: usize, total: usize },
	Failed(&'a str),
}

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a, 'i> {
	pub title: &'a str,
	pub input: &'a QueryInput<'i>,
	pub status: PromptStatus<'a>,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Render `title › query` followed by the right-aligned index status.
pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: PromptContext<'_, '_>) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let status = status_line(&prompt.status, prompt.throbber_state, prompt.theme);
	let title = Line::from(vec![
		Span::styled(prompt.title.to_string(), prompt.theme.prompt),
		Span::styled(TITLE_SEPARATOR, prompt.theme.hint),
	]);

	let [title_area, input_area, status_area] = Layout::horizontal([
		Constraint::Length(title.width() as u16),
		Constraint::Min(1),
		Constraint::Length(status.width() as u16 + 1),
	])
	.areas(area);

	frame.render_widget(title, title_area);
	frame.render_widget(prompt.input.textarea(), input_area);
	frame.render_widget(status.right_aligned(), status_area);
}

fn status_line<'a>(status: &PromptStatus<'a>, throbber_state: &ThrobberState, theme: &Theme) -> Line<'a> {
	match status {
		PromptStatus::Loading(label) => {
			let spinner = Throbber::default()
				.style(theme.hint)
				.throbber_style(theme.hint)
				.to_symbol_span(throbber_state);
			Line::from(vec![spinner, Span::styled(*label, theme.hint)])
		}
		PromptStatus::Ready { matches, total } => {
			Line::from(Span::styled(format!("{matches}/{total}"), theme.hint))
		}
		PromptStatus::Failed(label) => Line::from(Span::styled(format!("✗ {label}"), theme.error)),
	}
}
