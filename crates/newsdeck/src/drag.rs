//! Converts mouse motion into the content offsets the pager expects.
//!
//! The pager works in scroll-offset space: a section at rest sits at
//! `index * page_width`, and drag updates report where the content
//! currently is. Dragging the mouse left pulls the next section in, so
//! the offset grows as the pointer column shrinks.

use newsdeck_core::Section;

/// Tracks one press-drag-release gesture.
pub struct MouseDrag {
    start_column: u16,
    rest_offset: f32,
}

impl MouseDrag {
    /// Starts a gesture at the given pointer column while `origin` is
    /// the active section.
    pub fn begin(origin: Section, page_width: f32, column: u16) -> Self {
        MouseDrag {
            start_column: column,
            rest_offset: origin.index() as f32 * page_width,
        }
    }

    /// Content offset implied by the pointer having moved to `column`.
    #[must_use]
    pub fn offset_at(&self, column: u16) -> f32 {
        self.rest_offset + (f32::from(self.start_column) - f32::from(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_motion_reports_rest_offset() {
        let drag = MouseDrag::begin(Section::World, 80.0, 40);
        assert!((drag.offset_at(40) - 160.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_leftward_motion_increases_offset() {
        let drag = MouseDrag::begin(Section::Business, 80.0, 40);
        // 20 columns left of the press point: 20 units into the pull.
        assert!((drag.offset_at(20) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rightward_motion_decreases_offset() {
        let drag = MouseDrag::begin(Section::Business, 80.0, 40);
        assert!((drag.offset_at(60) - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_first_section_can_only_overscroll() {
        let drag = MouseDrag::begin(Section::Top, 80.0, 40);
        // Pulling right from Top goes negative; the pager treats the
        // missing left neighbor as a no-op.
        assert!(drag.offset_at(60) < 0.0);
    }
}
