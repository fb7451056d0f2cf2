//! Visual styling for the picker.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, definitions, names};
