//! # newsdeck-core
//!
//! Core types and seams for the newsdeck paged tab strip.
//!
//! ## Overview
//!
//! newsdeck is built around a single coordinating component: a pager
//! over five fixed content sections whose panes are attached and
//! detached as the user taps or drags. This crate holds everything the
//! pager shares with the outside world:
//!
//! - [`Section`] - the ordered five-section index model
//! - [`Presenter`] - capability interface to the presentation layer
//! - [`StripEvent`] - input events delivered by the host
//! - [`Theme`] - colors, borders, and emphasis interpolation
//! - [`CoreError`] - startup configuration failures
//!
//! The pager itself lives in `newsdeck-ui`, which consumes these types.
//!
//! ## Example
//!
//! ```
//! use newsdeck_core::Section;
//!
//! let here = Section::Business;
//! assert_eq!(here.distance(Section::Sports), 3);
//! assert_eq!(here.left_neighbor(), Some(Section::Top));
//! assert_eq!(Section::Top.left_neighbor(), None);
//! ```

pub mod error;
pub mod event;
pub mod presenter;
pub mod section;
pub mod theme;

pub use error::{CoreError, CoreResult};
pub use event::StripEvent;
pub use presenter::{PaneHandle, Presenter};
pub use section::Section;
pub use theme::{BorderStyle, Theme, ThemeColors};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _: PaneHandle = 0;
        let _ = Section::DEFAULT;
        let _ = StripEvent::DragStarted;
        let _ = Theme::dark();
        let _ = CoreError::PaneSetup {
            expected: 5,
            actual: 4,
        };
    }

    #[test]
    fn test_core_result_usage() {
        fn ok() -> CoreResult<u32> {
            Ok(42)
        }
        assert_eq!(ok().ok(), Some(42));
    }
}
