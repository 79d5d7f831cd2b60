//! UI widgets for the newsdeck strip.
//!
//! - [`TabStrip`] - section buttons driven by continuous emphasis levels
//! - [`StatusBar`] - three-section status line for the demo binary

pub mod status_bar;
pub mod tab_strip;

pub use status_bar::StatusBar;
pub use tab_strip::TabStrip;
