//! Rendering layer: terminal management, layout, and widgets.
pub mod terminal;
pub mod ui;
pub mod widgets;
