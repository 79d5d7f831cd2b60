//! Terminal-backed presenter.
//!
//! Bridges the pager's capability calls onto the TUI: panes live in a
//! flat store keyed by handle, visibility is a slot table, and emphasis
//! levels are kept for the tab strip to read back at render time.

use newsdeck_core::{PaneHandle, Presenter, Section};
use tracing::trace;

use crate::panes::NewsPane;

/// Presenter implementation over the ratatui surface.
pub struct TuiPresenter {
    panes: Vec<NewsPane>,
    /// Slot index -> handle of the pane shown there, if any.
    slots: [Option<PaneHandle>; Section::COUNT],
    emphasis: [f32; Section::COUNT],
    page_width: f32,
}

impl TuiPresenter {
    pub fn new(page_width: f32) -> Self {
        TuiPresenter {
            panes: Vec::with_capacity(Section::COUNT),
            slots: [None; Section::COUNT],
            emphasis: [0.0; Section::COUNT],
            page_width,
        }
    }

    /// Emphasis levels for the tab strip, indexed by section.
    pub fn emphasis(&self) -> &[f32; Section::COUNT] {
        &self.emphasis
    }

    /// The pane shown in a section's slot, if one is attached there.
    pub fn pane_at(&self, section: Section) -> Option<&NewsPane> {
        let handle = self.slots[section.index()]?;
        self.panes.get(handle as usize)
    }

    /// Updates the width used to convert drag offsets to ratios.
    pub fn set_page_width(&mut self, width: f32) {
        self.page_width = width;
    }
}

impl Presenter for TuiPresenter {
    fn create_pane(&mut self, section: Section) -> PaneHandle {
        let handle = self.panes.len() as PaneHandle;
        self.panes.push(NewsPane::new(section));
        handle
    }

    fn show_pane(&mut self, handle: PaneHandle, slot: usize) {
        trace!(handle, slot, "show pane");
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = Some(handle);
        }
    }

    fn hide_pane(&mut self, handle: PaneHandle) {
        trace!(handle, "hide pane");
        for entry in &mut self.slots {
            if *entry == Some(handle) {
                *entry = None;
            }
        }
    }

    fn set_emphasis(&mut self, section: Section, level: f32) {
        self.emphasis[section.index()] = level;
    }

    fn page_width(&self) -> f32 {
        self.page_width
    }
}
