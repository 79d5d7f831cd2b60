//! Capability interface the pager uses to drive the presentation layer.
//!
//! The pager never touches a render surface directly. Everything it
//! wants shown, hidden, or restyled goes through [`Presenter`], so the
//! paging logic stays independent of the toolkit behind it.

use crate::section::Section;

/// Opaque identifier for a content pane.
///
/// Handed out by the presenter when a pane is created and used for all
/// later show/hide instructions. The pager never inspects it.
pub type PaneHandle = u32;

/// Effects the pager can request from the presentation layer.
///
/// Implementations are expected to be cheap and synchronous: every call
/// happens on the single event thread that drives the pager, and the
/// pager assumes the effect has been applied when the call returns.
///
/// # Contract
///
/// - `create_pane` is called exactly once per section, at startup, and
///   must return a distinct handle for each section.
/// - `show_pane`/`hide_pane` are only issued for handles previously
///   returned from `create_pane`. `slot` is the section's strip index;
///   a shown pane occupies that slot until hidden.
/// - `set_emphasis` levels range 0.0 (fully inactive) to 1.0 (fully
///   active) and drive whatever visual treatment the presenter uses
///   for tab buttons.
/// - `page_width` reports the current viewport width in whatever unit
///   the host delivers drag offsets in.
pub trait Presenter {
    /// Constructs the content pane for a section and returns its handle.
    fn create_pane(&mut self, section: Section) -> PaneHandle;

    /// Makes a pane visible in the given strip slot.
    fn show_pane(&mut self, handle: PaneHandle, slot: usize);

    /// Removes a pane from the visible surface.
    fn hide_pane(&mut self, handle: PaneHandle);

    /// Sets the visual emphasis level for a tab button.
    fn set_emphasis(&mut self, section: Section, level: f32);

    /// Current viewport width used to convert drag offsets to ratios.
    fn page_width(&self) -> f32;
}
