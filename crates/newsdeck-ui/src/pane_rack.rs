//! Content attachment management.
//!
//! The [`PaneRack`] owns one pane handle per section for the lifetime
//! of the pager and tracks which panes are currently attached to the
//! visible surface. Its job is to keep attach/detach churn minimal:
//! both operations are idempotent and tolerate `None`, so callers can
//! hand it neighbor lookups without caring about boundaries.

use newsdeck_core::{CoreError, CoreResult, PaneHandle, Presenter, Section};

/// Owns the per-section panes and their attachment marks.
///
/// Panes are created eagerly, once, through the presenter; they are
/// never destroyed until the rack itself is dropped. Attachment state
/// is addressed by the section's ordinal, so there is no lookup
/// ambiguity and no failure mode past construction.
#[derive(Debug)]
pub struct PaneRack {
    panes: [PaneHandle; Section::COUNT],
    attached: [bool; Section::COUNT],
}

impl PaneRack {
    /// Creates all five panes through the presenter.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PaneSetup`] if the presenter does not hand
    /// back a distinct handle per section. A strip with aliased panes
    /// would silently show the wrong content, so this is fatal.
    pub fn new<P: Presenter>(presenter: &mut P) -> CoreResult<Self> {
        let mut panes = [0; Section::COUNT];
        for section in Section::ALL {
            panes[section.index()] = presenter.create_pane(section);
        }

        let mut sorted = panes;
        sorted.sort_unstable();
        let distinct = 1 + sorted.windows(2).filter(|pair| pair[0] != pair[1]).count();
        if distinct != Section::COUNT {
            return Err(CoreError::PaneSetup {
                expected: Section::COUNT,
                actual: distinct,
            });
        }

        Ok(PaneRack {
            panes,
            attached: [false; Section::COUNT],
        })
    }

    /// Attaches the panes for the initial 3-window around `active`.
    ///
    /// Called exactly once at startup, before any events arrive.
    pub fn initialize<P: Presenter>(&mut self, presenter: &mut P, active: Section) {
        self.attach(presenter, active.left_neighbor());
        self.attach(presenter, Some(active));
        self.attach(presenter, active.right_neighbor());
    }

    /// Attaches a pane to its strip slot.
    ///
    /// No-op if `section` is `None` or the pane is already attached.
    pub fn attach<P: Presenter>(&mut self, presenter: &mut P, section: Option<Section>) {
        let Some(section) = section else { return };
        if self.attached[section.index()] {
            return;
        }
        presenter.show_pane(self.panes[section.index()], section.index());
        self.attached[section.index()] = true;
        tracing::debug!(section = ?section, "pane attached");
    }

    /// Detaches a pane from the visible surface.
    ///
    /// No-op if `section` is `None` or the pane is not attached.
    pub fn detach<P: Presenter>(&mut self, presenter: &mut P, section: Option<Section>) {
        let Some(section) = section else { return };
        if !self.attached[section.index()] {
            return;
        }
        presenter.hide_pane(self.panes[section.index()]);
        self.attached[section.index()] = false;
        tracing::debug!(section = ?section, "pane detached");
    }

    /// Returns true if the section's pane is currently attached.
    #[must_use]
    pub fn is_attached(&self, section: Section) -> bool {
        self.attached[section.index()]
    }

    /// Currently attached sections, in strip order.
    #[must_use]
    pub fn attached_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.attached[s.index()])
            .collect()
    }

    /// The pane handle for a section.
    #[must_use]
    pub fn handle(&self, section: Section) -> PaneHandle {
        self.panes[section.index()]
    }
}
