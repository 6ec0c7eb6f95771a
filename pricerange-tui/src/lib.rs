//! PriceRange TUI — terminal host for the dual-handle price slider.
//!
//! Mouse drags go through the slider's pointer state machine; arrow keys use
//! the direct-input path. The app owns the selected range and turns settled
//! changes into a search query shown in the status bar.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
