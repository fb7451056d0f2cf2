//! Interactive terminal front end for the search selector.
//!
//! [`Picker`] configures and launches the picker. The remaining submodules
//! implement the event loop, key and mouse mapping, rendering, and the
//! widgets and themes that draw the selector's state.

mod actions;
mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::Picker;
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use style::Theme;

#[cfg(test)]
mod tests;
