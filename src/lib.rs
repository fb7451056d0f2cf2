//! Filterable, keyboard-navigable picker over a static site's `search.json`.
//!
//! [`SearchSelector`] holds the widget state and transitions and can be
//! driven without a terminal. The [`ui`] module wraps it in a `ratatui`
//! front end, and [`index`] provides the fetchers that load the records.

pub mod app_dirs;
pub mod index;
pub mod logging;
pub mod navigate;
pub mod records;
pub mod selector;
pub mod ui;

pub use index::{FetchError, IndexFetcher, IndexSource};
pub use navigate::{BrowserOpener, NavigationLog, Navigator};
pub use records::{SearchOutcome, SearchRecord};
pub use selector::{FetchState, OptionClass, SearchSelector};
pub use ui::{App, Picker, Theme, UiLabels, run};
