//! Section identifiers and the tab index model.
//!
//! The strip has a fixed, ordered set of five sections. All of the
//! arithmetic the pager needs (direction, distance, neighbors) lives
//! here as pure value operations with no side effects.

/// One of the five fixed content sections, ordered left to right.
///
/// Sections form a contiguous, zero-indexed domain. Every operation on
/// them is total; neighbor lookups at the ends return `None` rather
/// than wrapping or failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Top,
    Business,
    World,
    Tech,
    Sports,
}

impl Section {
    /// Number of sections in the strip.
    pub const COUNT: usize = 5;

    /// All sections in display order.
    pub const ALL: [Section; Section::COUNT] = [
        Section::Top,
        Section::Business,
        Section::World,
        Section::Tech,
        Section::Sports,
    ];

    /// The section shown at startup.
    pub const DEFAULT: Section = Section::Top;

    /// Leftmost section.
    pub const FIRST: Section = Section::Top;

    /// Rightmost section.
    pub const LAST: Section = Section::Sports;

    /// Zero-based position of this section in the strip.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a section by its strip position.
    ///
    /// Returns `None` for indices outside the fixed domain.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// Display title for the tab button.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Top => "Top",
            Section::Business => "Business",
            Section::World => "World",
            Section::Tech => "Tech",
            Section::Sports => "Sports",
        }
    }

    /// Returns true if this section sits strictly left of `other`.
    #[must_use]
    pub fn is_left_of(self, other: Section) -> bool {
        self.index() < other.index()
    }

    /// Absolute index difference between two sections.
    #[must_use]
    pub fn distance(self, other: Section) -> usize {
        self.index().abs_diff(other.index())
    }

    /// Returns true for the leftmost section.
    #[must_use]
    pub fn is_first(self) -> bool {
        self == Section::FIRST
    }

    /// Returns true for the rightmost section.
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Section::LAST
    }

    /// The section immediately to the left, if any.
    #[must_use]
    pub fn left_neighbor(self) -> Option<Section> {
        if self.is_first() {
            None
        } else {
            Section::from_index(self.index() - 1)
        }
    }

    /// The section immediately to the right, if any.
    #[must_use]
    pub fn right_neighbor(self) -> Option<Section> {
        if self.is_last() {
            None
        } else {
            Section::from_index(self.index() + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_indices_are_contiguous() {
        for (expected, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), expected);
            assert_eq!(Section::from_index(expected), Some(*section));
        }
        assert_eq!(Section::from_index(Section::COUNT), None);
    }

    #[test]
    fn test_default_first_last() {
        assert_eq!(Section::DEFAULT, Section::Top);
        assert!(Section::FIRST.is_first());
        assert!(Section::LAST.is_last());
        assert!(!Section::World.is_first());
        assert!(!Section::World.is_last());
    }

    #[test]
    fn test_is_left_of() {
        assert!(Section::Top.is_left_of(Section::Business));
        assert!(Section::Business.is_left_of(Section::Sports));
        assert!(!Section::Sports.is_left_of(Section::Top));
        assert!(!Section::World.is_left_of(Section::World));
    }

    #[test]
    fn test_neighbors_at_boundaries() {
        assert_eq!(Section::Top.left_neighbor(), None);
        assert_eq!(Section::Top.right_neighbor(), Some(Section::Business));
        assert_eq!(Section::Sports.left_neighbor(), Some(Section::Tech));
        assert_eq!(Section::Sports.right_neighbor(), None);
    }

    #[test]
    fn test_neighbors_in_the_middle() {
        assert_eq!(Section::World.left_neighbor(), Some(Section::Business));
        assert_eq!(Section::World.right_neighbor(), Some(Section::Tech));
    }

    #[test]
    fn test_titles_are_distinct() {
        for a in Section::ALL {
            for b in Section::ALL {
                if a != b {
                    assert_ne!(a.title(), b.title());
                }
            }
        }
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in 0..Section::COUNT, b in 0..Section::COUNT) {
            let a = Section::from_index(a).expect("in domain");
            let b = Section::from_index(b).expect("in domain");
            prop_assert_eq!(a.distance(b), b.distance(a));
        }

        #[test]
        fn distance_to_self_is_zero(a in 0..Section::COUNT) {
            let a = Section::from_index(a).expect("in domain");
            prop_assert_eq!(a.distance(a), 0);
        }

        #[test]
        fn neighbors_are_one_step_away(a in 0..Section::COUNT) {
            let a = Section::from_index(a).expect("in domain");
            if let Some(left) = a.left_neighbor() {
                prop_assert_eq!(a.distance(left), 1);
                prop_assert!(left.is_left_of(a));
            }
            if let Some(right) = a.right_neighbor() {
                prop_assert_eq!(a.distance(right), 1);
                prop_assert!(a.is_left_of(right));
            }
        }
    }
}
