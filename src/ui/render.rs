use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{Clear, Paragraph},
};

use super::App;
use super::components::{PromptContext, PromptStatus, render_options, render_prompt};
use crate::selector::FetchState;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [prompt_area, status_area, options_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(0),
		])
		.areas(area);

		let prompt = PromptContext {
			title: &self.labels.title,
			input: &self.input,
			status: self.prompt_status(),
			throbber_state: &self.throbber_state,
			theme: &self.theme,
		};
		render_prompt(frame, prompt_area, prompt);
		self.render_status(frame, status_area);

		if !self.selector.is_open() {
			self.options_area = None;
			return;
		}
		self.options_area = Some(options_area);
		render_options(
			frame,
			options_area,
			&mut self.table_state,
			&self.selector,
			&self.theme,
		);

		if let Some(message) = self.placeholder() {
			if options_area.height > 0 {
				let placeholder = Paragraph::new(message)
					.alignment(Alignment::Center)
					.style(self.theme.empty);
				frame.render_widget(Clear, options_area);
				frame.render_widget(placeholder, options_area);
			}
		}
	}

	fn prompt_status(&self) -> PromptStatus<'_> {
		match self.selector.fetch_state() {
			FetchState::Idle | FetchState::InFlight(_) => PromptStatus::Loading(self.labels.loading.as_str()),
			FetchState::Failed(_) => PromptStatus::Failed(self.labels.unavailable.as_str()),
			FetchState::Loaded(records) => PromptStatus::Ready {
				matches: self.selector.filtered_options().len(),
				total: records.len(),
			},
		}
	}

	/// Hint line: the fetch error if any, the selected URL once closed, the
	/// key help otherwise.
	fn render_status(&self, frame: &mut Frame, area: Rect) {
		if let Some(err) = self.selector.fetch_state().error() {
			frame.render_widget(Line::from(Span::styled(err.to_string(), self.theme.error)), area);
			return;
		}
		let line = match (self.selector.is_open(), self.selector.selected()) {
			(false, Some(record)) => Line::from(vec![
				Span::styled("→ ", self.theme.hint),
				Span::styled(record.url.as_str(), self.theme.excerpt),
			]),
			_ => Line::from(Span::styled(self.labels.hint.as_str(), self.theme.hint)),
		};
		frame.render_widget(line, area);
	}

	/// Message drawn over an empty option list.
	fn placeholder(&self) -> Option<&str> {
		match self.selector.fetch_state() {
			FetchState::Failed(_) => Some(self.labels.unavailable.as_str()),
			FetchState::Idle | FetchState::InFlight(_) => Some(self.labels.loading.as_str()),
			FetchState::Loaded(_) if self.selector.filtered_options().is_empty() => {
				Some(self.labels.empty.as_str())
			}
			FetchState::Loaded(_) => None,
		}
	}
}
