//! Content panes for the five news sections.

use newsdeck_core::{Section, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

/// A section's content pane: a titled list of headlines.
///
/// Panes are created once at startup and kept alive for the lifetime of
/// the app; showing and hiding only changes which pane gets rendered.
pub struct NewsPane {
    section: Section,
    headlines: Vec<&'static str>,
}

impl NewsPane {
    pub fn new(section: Section) -> Self {
        NewsPane {
            section,
            headlines: headlines_for(section),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Renders the pane into the content area.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(format!(" {} ", self.section.title()))
            .borders(Borders::ALL)
            .border_type(theme.borders.border_type())
            .border_style(Style::default().fg(theme.colors.accent))
            .style(
                Style::default()
                    .fg(theme.colors.foreground)
                    .bg(theme.colors.background),
            );

        let items: Vec<ListItem> = self
            .headlines
            .iter()
            .map(|headline| ListItem::new(format!("  • {headline}")))
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

fn headlines_for(section: Section) -> Vec<&'static str> {
    match section {
        Section::Top => vec![
            "Coastal cities brace for record storm surge",
            "Parliament passes long-debated housing bill",
            "Rail strike enters its second week",
            "Vaccine rollout reaches rural districts",
        ],
        Section::Business => vec![
            "Markets rally after surprise rate cut",
            "Chipmaker announces fourth fabrication plant",
            "Retail giant posts first loss in a decade",
            "Shipping costs fall as ports clear backlog",
        ],
        Section::World => vec![
            "Summit ends with draft climate accord",
            "Election observers arrive ahead of runoff",
            "Border crossing reopens after two years",
            "Aid convoy reaches flooded delta region",
        ],
        Section::Tech => vec![
            "Open-source database project hits 1.0",
            "Regulators probe app store billing rules",
            "Satellite constellation begins beta service",
            "Researchers demo room-temperature memory cell",
        ],
        Section::Sports => vec![
            "Underdogs clinch the cup in extra time",
            "Marathon record falls by eleven seconds",
            "League expands to two new cities",
            "Veteran keeper announces final season",
        ],
    }
}
