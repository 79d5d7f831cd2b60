//! # newsdeck-ui
//!
//! The paged tab controller and the widgets that visualize it.
//!
//! ## Overview
//!
//! This crate holds the coordinating component of newsdeck:
//!
//! - [`SectionPager`] - reacts to taps and drag updates, keeps the
//!   attached-pane set equal to the active section's 3-window, and
//!   drives tab emphasis through a [`newsdeck_core::Presenter`]
//! - [`PaneRack`] - owns the per-section panes and their attachment
//!   marks, with idempotent attach/detach
//! - [`widgets`] - [`TabStrip`] and [`StatusBar`] for rendering
//!
//! ## Example
//!
//! ```ignore
//! use newsdeck_core::{Section, StripEvent};
//! use newsdeck_ui::SectionPager;
//!
//! let mut pager = SectionPager::new(my_presenter)?;
//! pager.dispatch(StripEvent::Tapped(Section::World));
//! assert_eq!(pager.active(), Section::World);
//! ```

pub mod pager;
pub mod pane_rack;
pub mod widgets;

pub use pager::SectionPager;
pub use pane_rack::PaneRack;
pub use widgets::{StatusBar, TabStrip};
