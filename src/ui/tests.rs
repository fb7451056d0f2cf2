use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::style::{self, Theme};
use super::{App, Picker};
use crate::index::{FetchError, FetchResult};
use crate::records::SearchRecord;
use crate::selector::SearchSelector;

fn records() -> Vec<SearchRecord> {
	vec![
		SearchRecord::new("Apache Kafka", "streaming", "/a"),
		SearchRecord::new("Swim AI", "actors", "/b"),
		SearchRecord::new("Pulsar", "messaging", "/c"),
	]
}

fn app() -> App<'static> {
	Picker::from_records(records()).build()
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		assert!(app.handle_key(key(KeyCode::Char(ch))).is_none());
	}
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(60, 10)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn closed_picker_shows_prompt_and_hint_only() {
	let mut app = app();
	let view = render(&mut app);
	assert!(view.contains("Search"));
	assert!(view.contains("Type to search"));
	assert!(!view.contains("Apache Kafka"));
	assert!(app.options_area.is_none());
}

#[test]
fn typing_opens_and_filters_the_list() {
	let mut app = app();
	type_text(&mut app, "ai");
	assert!(app.selector.is_open());
	assert_eq!(app.selector.filter_text(), "ai");

	let view = render(&mut app);
	assert!(view.contains("Swim AI"));
	assert!(!view.contains("Apache Kafka"));
	assert!(view.contains("1/3"));
}

#[test]
fn no_matches_shows_the_empty_label() {
	let mut app = app();
	type_text(&mut app, "zzz");
	let view = render(&mut app);
	assert!(view.contains("No results"));
}

#[test]
fn arrow_keys_move_the_highlight() {
	let mut app = app();
	app.handle_key(key(KeyCode::Down));
	let view = render(&mut app);
	assert!(view.contains("▶ Apache Kafka"));

	app.handle_key(key(KeyCode::Up));
	let view = render(&mut app);
	assert!(view.contains("▶ Pulsar"));
}

#[test]
fn enter_selects_the_focused_option() {
	let mut app = app();
	app.handle_key(key(KeyCode::Down));
	app.handle_key(key(KeyCode::Down));

	let outcome = app.handle_key(key(KeyCode::Enter)).expect("selection ends the session");
	assert!(outcome.accepted);
	assert_eq!(outcome.target_url(), Some("/b"));
	assert_eq!(outcome.query, "");
	assert_eq!(app.input.text(), "Swim AI");
}

#[test]
fn enter_with_no_matches_keeps_running() {
	let mut app = app();
	type_text(&mut app, "zzz");
	assert!(app.handle_key(key(KeyCode::Enter)).is_none());
	assert!(app.selector.is_open());
}

#[test]
fn escape_closes_before_cancelling() {
	let mut app = app();
	type_text(&mut app, "kaf");
	assert!(app.handle_key(key(KeyCode::Esc)).is_none());
	assert!(!app.selector.is_open());

	let outcome = app.handle_key(key(KeyCode::Esc)).expect("second escape cancels");
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
	assert_eq!(outcome.query, "kaf");
}

#[test]
fn ctrl_c_cancels_while_open() {
	let mut app = app();
	type_text(&mut app, "p");
	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
		.expect("ctrl-c cancels");
	assert!(!outcome.accepted);
}

#[test]
fn tab_toggles_the_list() {
	let mut app = app();
	app.handle_key(key(KeyCode::Tab));
	assert!(app.selector.is_open());
	assert!(render(&mut app).contains("Pulsar"));
	app.handle_key(key(KeyCode::Tab));
	assert!(!app.selector.is_open());
}

#[test]
fn clicking_a_row_selects_it() {
	let mut app = app();
	app.handle_key(key(KeyCode::Tab));
	render(&mut app);

	let area = app.options_area.expect("list drawn while open");
	let outcome = app
		.handle_mouse(click(area.left() + 3, area.top() + 2))
		.expect("click selects");
	assert_eq!(outcome.target_url(), Some("/c"));
	assert!(!app.selector.is_open());

	let view = render(&mut app);
	assert!(view.contains("→ /c"));
}

#[test]
fn clicks_outside_the_list_are_ignored() {
	let mut app = app();
	app.handle_key(key(KeyCode::Tab));
	render(&mut app);

	assert!(app.handle_mouse(click(2, 0)).is_none());
	let area = app.options_area.expect("list drawn while open");
	assert!(app.handle_mouse(click(area.left(), area.top() + 5)).is_none());
	assert!(app.selector.is_open());
	assert!(app.selector.navigator().visits().is_empty());
}

#[test]
fn scrolling_moves_focus() {
	let mut app = app();
	app.handle_key(key(KeyCode::Tab));
	let scroll = |kind| MouseEvent {
		kind,
		column: 5,
		row: 4,
		modifiers: KeyModifiers::NONE,
	};
	app.handle_mouse(scroll(MouseEventKind::ScrollDown));
	app.handle_mouse(scroll(MouseEventKind::ScrollDown));
	assert_eq!(app.selector.focused_index(), Some(1));
	app.handle_mouse(scroll(MouseEventKind::ScrollUp));
	assert_eq!(app.selector.focused_index(), Some(0));
}

#[test]
fn initial_query_opens_the_list_prefiltered() {
	let mut app = Picker::from_records(records())
		.with_initial_query("kafka")
		.with_input_title("Docs")
		.build();
	assert!(app.selector.is_open());
	assert_eq!(app.input.text(), "kafka");

	let view = render(&mut app);
	assert!(view.contains("Docs"));
	assert!(view.contains("Apache Kafka"));
	assert!(!view.contains("Pulsar"));
}

#[test]
fn explicit_theme_is_applied() {
	let light = style::by_name("light").expect("built-in theme");
	let app = Picker::from_records(records()).with_theme(light).build();
	assert_eq!(app.theme, light);
	assert_ne!(app.theme, Theme::default());
}

#[test]
fn pending_index_shows_loading() {
	let mut app = App::new(SearchSelector::default());
	app.handle_key(key(KeyCode::Tab));
	let view = render(&mut app);
	assert!(view.contains("Loading index"));
}

#[test]
fn failed_index_shows_unavailable() {
	let failing = || -> FetchResult { Err(FetchError::WorkerGone) };
	let mut app = Picker::new(Box::new(failing)).build();
	assert!(!app.selector.wait_for_records(Some(Duration::from_secs(5))));

	app.handle_key(key(KeyCode::Tab));
	let view = render(&mut app);
	assert!(view.contains("Search index unavailable"));
	assert!(view.contains("index worker exited before delivering records"));
	assert!(app.handle_key(key(KeyCode::Enter)).is_none());
}

#[test]
fn fetched_records_appear_after_pumping() {
	let fetcher = || -> FetchResult { Ok(records()) };
	let mut app = Picker::new(Box::new(fetcher)).build();
	assert!(app.selector.wait_for_records(Some(Duration::from_secs(5))));
	assert!(!app.pump_records());

	app.handle_key(key(KeyCode::Tab));
	let view = render(&mut app);
	assert!(view.contains("3/3"));
	assert!(view.contains("Swim AI"));
}
