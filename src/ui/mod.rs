//! Terminal User Interface components for plantwatch.

pub mod detail;
mod help;
pub mod settings;
pub mod theme;
pub mod widgets;

pub use help::HelpOverlay;
pub use theme::Theme;
