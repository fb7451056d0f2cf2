use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Cell, HighlightSpacing, Row, Table, TableState};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::selector::SearchSelector;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const COLUMN_SPACING: u16 = 1;
const ELLIPSIS: &str = "…";

/// Render the filtered options, styling each row from its option class.
pub fn render_options(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	selector: &SearchSelector,
	theme: &Theme,
) {
	let (title_width, excerpt_width) = column_widths(area.width);
	let rows: Vec<Row<'_>> = selector
		.filtered_options()
		.into_iter()
		.enumerate()
		.map(|(index, record)| {
			let style = selector.class_option(&record.title, index).style(theme);
			let excerpt = collapse_whitespace(&record.excerpt);
			Row::new([
				Cell::from(fit(&record.title, title_width)),
				Cell::from(Span::styled(fit(&excerpt, excerpt_width), theme.excerpt)),
			])
			.style(style)
		})
		.collect();

	table_state.select(selector.focused_index());
	let table = Table::new(
		rows,
		[
			Constraint::Length(title_width as u16),
			Constraint::Fill(1),
		],
	)
	.column_spacing(COLUMN_SPACING)
	.highlight_spacing(HighlightSpacing::Always)
	.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);
}

/// Split the usable width 2:3 between title and excerpt.
fn column_widths(total: u16) -> (usize, usize) {
	let reserved = HIGHLIGHT_SYMBOL.width() + usize::from(COLUMN_SPACING);
	let usable = usize::from(total).saturating_sub(reserved);
	let title = usable * 2 / 5;
	(title, usable - title)
}

/// Truncate `text` to `width` display columns, marking the cut.
fn fit(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (head, _) = text.unicode_truncate(width - ELLIPSIS.width());
	format!("{head}{ELLIPSIS}")
}

fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
