//! Core, DOM-free primitives for the article style panel.
pub mod dismiss;
pub mod options;
pub mod panel;
pub mod settings;
pub mod style;
