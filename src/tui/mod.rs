//! TUI module
//!
//! Terminal UI built on ratatui/crossterm: the surprise form, the animated
//! card view, the sprite catalog, and shared theme/layout helpers.

pub mod app;
pub mod card_app;
pub mod form_app;
pub mod frames;
pub mod theme;
pub mod ui;

pub use app::App;
pub use card_app::{CardApp, CardOutcome};
pub use form_app::{FormApp, FormOutcome};
pub use theme::Theme;
