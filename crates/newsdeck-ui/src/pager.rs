//! The paged tab controller.
//!
//! [`SectionPager`] coordinates the five-section strip: it reacts to
//! discrete tab taps and to the continuous drag stream, keeps the
//! attached-pane set equal to the active section's 3-window, and drives
//! tab-button emphasis through the presenter.
//!
//! All transitions run on one logical event thread; each handler runs
//! to completion before the next event is considered. A drag abandoned
//! by the host without a matching end event self-corrects because every
//! commit decision is re-derived from the current offset, never from a
//! stored delta.

use newsdeck_core::{CoreResult, Presenter, Section, StripEvent};

use crate::pane_rack::PaneRack;

/// Where the continuous drag machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    /// No drag in progress; the active section's emphasis is 1.0.
    #[default]
    Idle,
    /// A drag is in progress, measured from `origin`'s resting offset.
    Dragging { origin: Section },
}

/// Coordinates pane attachment and tab emphasis for the strip.
///
/// The pager owns its presenter for its whole lifetime. Content panes
/// are created eagerly at construction and reused; only their
/// attachment to the visible surface changes afterwards.
///
/// # Invariant
///
/// At every instant the attached set equals the 3-window of whichever
/// section is currently committed active, including transiently during
/// the mid-drag commit/un-commit flip-flop.
#[derive(Debug)]
pub struct SectionPager<P: Presenter> {
    presenter: P,
    rack: PaneRack,
    active: Section,
    drag: DragState,
}

impl<P: Presenter> SectionPager<P> {
    /// Creates a pager starting at [`Section::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Fails if the presenter does not yield a distinct pane per
    /// section.
    pub fn new(presenter: P) -> CoreResult<Self> {
        Self::with_active(presenter, Section::DEFAULT)
    }

    /// Creates a pager with a chosen starting section.
    ///
    /// Panes are created eagerly, the starting 3-window is attached,
    /// and emphasis levels are established (1.0 active, 0.0 the rest).
    ///
    /// # Errors
    ///
    /// Fails if the presenter does not yield a distinct pane per
    /// section.
    pub fn with_active(mut presenter: P, active: Section) -> CoreResult<Self> {
        let mut rack = PaneRack::new(&mut presenter)?;
        rack.initialize(&mut presenter, active);
        let mut pager = SectionPager {
            presenter,
            rack,
            active,
            drag: DragState::Idle,
        };
        pager.snap_emphasis();
        Ok(pager)
    }

    /// Routes one host event to the matching transition.
    pub fn dispatch(&mut self, event: StripEvent) {
        match event {
            StripEvent::Tapped(section) => self.select(section),
            StripEvent::DragStarted => self.drag_started(),
            StripEvent::DragMoved(offset) => self.drag_moved(offset),
            StripEvent::DragEnded => self.drag_ended(),
            StripEvent::Settled => self.settled(),
        }
    }

    /// Switches to `target`, walking the index path one step at a time.
    ///
    /// Idempotent when `target` is already active. The walk detaches
    /// the pane falling out of the 3-window on the trailing side and
    /// attaches the one entering on the leading side at each step, so
    /// every intermediate pane the user would fly past in the
    /// equivalent swipe is momentarily attached, and the attach/detach
    /// count stays bounded by the distance.
    pub fn select(&mut self, target: Section) {
        if target == self.active {
            return;
        }
        tracing::debug!(from = ?self.active, to = ?target, "switching section");

        let leftward = target.is_left_of(self.active);
        let mut cursor = self.active;
        for _ in 0..self.active.distance(target) {
            let next = if leftward {
                cursor.left_neighbor()
            } else {
                cursor.right_neighbor()
            };
            // A None here means the walk hit a terminal section; stop
            // extending in that direction.
            let Some(next) = next else { break };
            let (trailing, leading) = if leftward {
                (cursor.right_neighbor(), next.left_neighbor())
            } else {
                (cursor.left_neighbor(), next.right_neighbor())
            };
            self.rack.detach(&mut self.presenter, trailing);
            self.rack.attach(&mut self.presenter, leading);
            cursor = next;
        }

        self.presenter.set_emphasis(self.active, 0.0);
        self.presenter.set_emphasis(target, 1.0);
        self.active = target;
    }

    /// Begins a drag measured from the current active section.
    pub fn drag_started(&mut self) {
        self.drag = DragState::Dragging {
            origin: self.active,
        };
    }

    /// Processes a drag position update.
    ///
    /// `offset` is the absolute scroll position in the presenter's
    /// page-width unit. Ignored while not dragging. At a boundary
    /// (no destination in the drag direction) the update is a no-op.
    pub fn drag_moved(&mut self, offset: f32) {
        let DragState::Dragging { origin } = self.drag else {
            return;
        };
        let page = self.presenter.page_width();
        if page <= 0.0 {
            return;
        }

        let diff = offset - origin.index() as f32 * page;
        let destination = if diff < 0.0 {
            origin.left_neighbor()
        } else {
            origin.right_neighbor()
        };
        let Some(destination) = destination else {
            return;
        };

        let ratio = diff.abs() / page;
        if ratio > 1.0 {
            // A fast flick outran the update cadence and crossed a full
            // page. Commit the crossing if the midpoint update never
            // arrived, then rebase the drag on the destination.
            if self.active != destination {
                self.shift_window(origin, destination);
                self.active = destination;
            }
            self.drag = DragState::Dragging {
                origin: destination,
            };
            return;
        }

        self.presenter.set_emphasis(origin, 1.0 - ratio);
        self.presenter.set_emphasis(destination, ratio);

        if ratio > 0.5 {
            if self.active != destination {
                self.shift_window(origin, destination);
                tracing::debug!(from = ?origin, to = ?destination, ratio, "drag committed");
                self.active = destination;
            }
        } else if self.active == destination {
            // The user reversed back past the midpoint; restore the
            // origin's window.
            self.shift_window(destination, origin);
            tracing::debug!(from = ?destination, to = ?origin, ratio, "drag reverted");
            self.active = origin;
        }
    }

    /// Ends the drag. The committed active section is authoritative.
    pub fn drag_ended(&mut self) {
        if self.drag == DragState::Idle {
            return;
        }
        self.drag = DragState::Idle;
        self.snap_emphasis();
    }

    /// Residual motion came to rest; make emphasis consistent again.
    ///
    /// Also serves as the recovery point for drags the host abandoned
    /// without a matching end event.
    pub fn settled(&mut self) {
        self.drag = DragState::Idle;
        self.snap_emphasis();
    }

    /// The currently committed active section.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Currently attached sections, in strip order.
    #[must_use]
    pub fn attached_sections(&self) -> Vec<Section> {
        self.rack.attached_sections()
    }

    /// Returns true if the section's pane is attached.
    #[must_use]
    pub fn is_attached(&self, section: Section) -> bool {
        self.rack.is_attached(section)
    }

    /// Borrows the presenter, typically for rendering.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutably borrows the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Slides the 3-window one step from `from` to `to` (adjacent).
    fn shift_window(&mut self, from: Section, to: Section) {
        let (trailing, leading) = if to.is_left_of(from) {
            (from.right_neighbor(), to.left_neighbor())
        } else {
            (from.left_neighbor(), to.right_neighbor())
        };
        self.rack.detach(&mut self.presenter, trailing);
        self.rack.attach(&mut self.presenter, leading);
    }

    fn snap_emphasis(&mut self) {
        for section in Section::ALL {
            let level = if section == self.active { 1.0 } else { 0.0 };
            self.presenter.set_emphasis(section, level);
        }
    }
}
