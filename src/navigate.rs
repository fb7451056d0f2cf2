//! Navigation side effects triggered by selecting a record.

use std::io;
use std::process::Command;

use reqwest::Url;

/// Receives the page transition requested by a selection.
pub trait Navigator {
	fn navigate(&mut self, url: &str);
}

/// Records every navigation without leaving the terminal.
///
/// The picker uses this to end its session once a record is chosen.
#[derive(Debug, Default, Clone)]
pub struct NavigationLog {
	visits: Vec<String>,
}

impl NavigationLog {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn visits(&self) -> &[String] {
		&self.visits
	}

	#[must_use]
	pub fn last(&self) -> Option<&str> {
		self.visits.last().map(String::as_str)
	}

	/// Remove and return the most recent visit.
	pub fn take_last(&mut self) -> Option<String> {
		self.visits.pop()
	}
}

impl Navigator for NavigationLog {
	fn navigate(&mut self, url: &str) {
		tracing::info!(url, "navigating");
		self.visits.push(url.to_string());
	}
}

/// Hands URLs to the platform's default browser.
#[derive(Debug, Clone, Default)]
pub struct BrowserOpener {
	base: Option<Url>,
}

impl BrowserOpener {
	/// Relative record URLs are resolved against `base` when provided.
	#[must_use]
	pub fn new(base: Option<Url>) -> Self {
		Self { base }
	}

	/// Resolve `url` into the address handed to the browser.
	#[must_use]
	pub fn resolve(&self, url: &str) -> String {
		if let Ok(absolute) = Url::parse(url) {
			return absolute.to_string();
		}
		match self.base.as_ref().and_then(|base| base.join(url).ok()) {
			Some(joined) => joined.to_string(),
			None => url.to_string(),
		}
	}

	/// Launch the browser, reporting spawn failures to the caller.
	pub fn open(&self, url: &str) -> io::Result<()> {
		let target = self.resolve(url);
		opener_command(&target).spawn()?;
		tracing::info!(url = %target, "opened in browser");
		Ok(())
	}
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> Command {
	let mut command = Command::new("open");
	command.arg(target);
	command
}

#[cfg(target_os = "windows")]
fn opener_command(target: &str) -> Command {
	let mut command = Command::new("cmd");
	command.args(["/C", "start", "", target]);
	command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(target: &str) -> Command {
	let mut command = Command::new("xdg-open");
	command.arg(target);
	command
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_records_visits_in_order() {
		let mut log = NavigationLog::new();
		log.navigate("/a");
		log.navigate("/b");
		assert_eq!(log.visits(), ["/a", "/b"]);
		assert_eq!(log.take_last().as_deref(), Some("/b"));
		assert_eq!(log.last(), Some("/a"));
	}

	#[test]
	fn relative_urls_resolve_against_base() {
		let base = Url::parse("https://example.com/search.json").unwrap();
		let navigator = BrowserOpener::new(Some(base));
		assert_eq!(
			navigator.resolve("/blog/kafka.html"),
			"https://example.com/blog/kafka.html"
		);
		assert_eq!(
			navigator.resolve("https://other.org/x"),
			"https://other.org/x"
		);
	}

	#[test]
	fn relative_urls_pass_through_without_base() {
		let navigator = BrowserOpener::default();
		assert_eq!(navigator.resolve("/docs/"), "/docs/");
	}
}
