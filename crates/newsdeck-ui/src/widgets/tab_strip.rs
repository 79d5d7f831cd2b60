//! Tab strip widget for the five-section pager.
//!
//! The [`TabStrip`] renders one equal-width button per section plus an
//! underline row. Instead of a binary active/inactive split it takes
//! the pager's continuous emphasis levels, so mid-drag states show the
//! origin tab fading while the destination solidifies:
//!
//! - label color interpolates muted -> accent with the level
//! - labels past half emphasis are bold
//! - the underline fades in from the background to the accent color

use newsdeck_core::{Section, Theme};
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// Horizontal strip of section buttons driven by emphasis levels.
pub struct TabStrip<'a> {
    /// Emphasis per section, 0.0 inactive to 1.0 active.
    emphasis: &'a [f32; Section::COUNT],
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> TabStrip<'a> {
    /// Creates a tab strip from the presenter's emphasis levels.
    pub fn new(emphasis: &'a [f32; Section::COUNT], theme: &'a Theme) -> Self {
        TabStrip { emphasis, theme }
    }

    /// Height the strip wants: one label row and one underline row.
    pub const HEIGHT: u16 = 2;

    /// The section whose button covers the given column, if any.
    ///
    /// Used by the host to turn tab-strip clicks into tap events.
    #[must_use]
    pub fn section_at(area: Rect, column: u16) -> Option<Section> {
        let slot = slot_width(area)?;
        if column < area.x {
            return None;
        }
        Section::from_index(((column - area.x) / slot) as usize)
    }
}

fn slot_width(area: Rect) -> Option<u16> {
    let slot = area.width / Section::COUNT as u16;
    if slot == 0 {
        None
    } else {
        Some(slot)
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(slot) = slot_width(area) else { return };
        if area.height == 0 {
            return;
        }

        // Fill the strip rows with the theme background.
        for y in area.top()..area.bottom().min(area.top() + Self::HEIGHT) {
            for x in area.left()..area.right() {
                buf[(x, y)].set_bg(self.theme.colors.background);
            }
        }

        for section in Section::ALL {
            let level = self.emphasis[section.index()];
            let x = area.x + slot * section.index() as u16;

            let mut style = Style::default()
                .fg(self.theme.colors.emphasis(level))
                .bg(self.theme.colors.background);
            if level > 0.5 {
                style = style.add_modifier(Modifier::BOLD);
            }

            let title = section.title();
            let pad = slot.saturating_sub(title.len() as u16) / 2;
            buf.set_stringn(x + pad, area.y, title, slot as usize, style);

            if area.height >= 2 {
                let underline = "▔".repeat(slot as usize);
                let underline_style = Style::default()
                    .fg(self.theme.colors.underline(level))
                    .bg(self.theme.colors.background);
                buf.set_string(x, area.y + 1, &underline, underline_style);
            }
        }
    }
}
