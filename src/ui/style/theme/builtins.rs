use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const SLATE: Theme = Theme {
	prompt: Style::new().fg(Color::LightCyan),
	hint: Style::new().fg(Color::Rgb(148, 163, 184)),
	empty: Style::new().fg(Color::DarkGray),
	error: Style::new().fg(Color::LightRed),
	option: Style::new().fg(Color::Rgb(226, 232, 240)),
	option_selected: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	option_focused: Style::new().bg(Color::Rgb(30, 41, 59)),
	excerpt: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub const LIGHT: Theme = Theme {
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	hint: Style::new().fg(Color::Rgb(100, 100, 100)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	error: Style::new().fg(Color::Rgb(180, 30, 30)),
	option: Style::new().fg(Color::Rgb(15, 23, 42)),
	option_selected: Style::new()
		.bg(Color::Rgb(219, 234, 254))
		.add_modifier(Modifier::BOLD),
	option_focused: Style::new().bg(Color::Rgb(239, 246, 255)),
	excerpt: Style::new().fg(Color::Rgb(120, 120, 120)),
};

pub const SOLARIZED: Theme = Theme {
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	hint: Style::new().fg(Color::Rgb(147, 161, 161)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
	option: Style::new().fg(Color::Rgb(238, 232, 213)),
	option_selected: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	option_focused: Style::new().bg(Color::Rgb(7, 54, 66)),
	excerpt: Style::new().fg(Color::Rgb(88, 110, 117)),
};
