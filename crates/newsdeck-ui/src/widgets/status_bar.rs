//! Three-section status line for the bottom of the screen.
//!
//! Left shows the interaction mode (browsing or dragging), center the
//! current context, right the key hints.

use newsdeck_core::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// Status bar with left, center, and right sections.
///
/// Configure the sections with the builder methods:
///
/// ```ignore
/// let status = StatusBar::new(&theme)
///     .left("BROWSE")
///     .center("World")
///     .right("1-5:section  q:quit");
/// ```
pub struct StatusBar<'a> {
    left: &'a str,
    center: &'a str,
    right: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a status bar with empty sections.
    pub fn new(theme: &'a Theme) -> Self {
        StatusBar {
            left: "",
            center: "",
            right: "",
            theme,
        }
    }

    /// Sets the left section (interaction mode).
    pub fn left(mut self, text: &'a str) -> Self {
        self.left = text;
        self
    }

    /// Sets the center section (context).
    pub fn center(mut self, text: &'a str) -> Self {
        self.center = text;
        self
    }

    /// Sets the right section (key hints).
    pub fn right(mut self, text: &'a str) -> Self {
        self.right = text;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let colors = &self.theme.colors;
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_bg(colors.selection);
        }

        let width = area.width as usize;

        if !self.left.is_empty() {
            let text = format!(" {} ", self.left);
            if text.len() <= width {
                let style = Style::default()
                    .fg(colors.accent)
                    .bg(colors.selection)
                    .add_modifier(Modifier::BOLD);
                buf.set_string(area.x, area.y, &text, style);
            }
        }

        if !self.center.is_empty() && self.center.len() < width {
            let x = area.x + (width.saturating_sub(self.center.len()) / 2) as u16;
            let style = Style::default().fg(colors.foreground).bg(colors.selection);
            buf.set_string(x, area.y, self.center, style);
        }

        if !self.right.is_empty() {
            let text = format!(" {} ", self.right);
            if text.len() <= width {
                let x = area.right().saturating_sub(text.len() as u16);
                let style = Style::default().fg(colors.muted).bg(colors.selection);
                buf.set_string(x, area.y, &text, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(buf: &Buffer, area: Rect) -> String {
        (area.left()..area.right())
            .map(|x| buf[(x, 0)].symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_all_sections_render() {
        let theme = Theme::dark();
        let status = StatusBar::new(&theme)
            .left("DRAG")
            .center("World")
            .right("q:quit");

        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        status.render(area, &mut buf);

        let content = rendered_text(&buf, area);
        assert!(content.starts_with(" DRAG "));
        assert!(content.contains("World"));
        assert!(content.trim_end().ends_with("q:quit"));
    }

    #[test]
    fn test_empty_sections_render_background_only() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&theme).render(area, &mut buf);

        assert!(rendered_text(&buf, area).trim().is_empty());
        assert_eq!(buf[(0, 0)].bg, theme.colors.selection);
    }

    #[test]
    fn test_overflowing_section_is_dropped() {
        let theme = Theme::dark();
        let status = StatusBar::new(&theme).center("much too long for this bar");

        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        status.render(area, &mut buf);

        assert!(rendered_text(&buf, area).trim().is_empty());
    }

    #[test]
    fn test_zero_area_is_graceful() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&theme).left("x").render(area, &mut buf);
    }
}
