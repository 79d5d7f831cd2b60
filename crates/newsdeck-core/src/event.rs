//! Host events that drive the pager.
//!
//! The host environment (terminal loop, test harness) translates its
//! own input into this stream. Events are delivered strictly in order
//! on one logical thread, and each is processed to completion before
//! the next is considered.

use crate::section::Section;

/// A single input event for the paged tab strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripEvent {
    /// A tab button was tapped.
    Tapped(Section),
    /// A horizontal drag began on the content surface.
    DragStarted,
    /// The drag moved; `0` carries the absolute scroll offset in the
    /// same unit as [`Presenter::page_width`].
    ///
    /// [`Presenter::page_width`]: crate::presenter::Presenter::page_width
    DragMoved(f32),
    /// The finger lifted. The committed active section is final.
    DragEnded,
    /// Residual scroll motion came to rest.
    Settled,
}
