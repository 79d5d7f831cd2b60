//! newsdeck - terminal news reader with a draggable section strip.
//!
//! Five fixed sections sit in a tab strip; the active one shows its
//! headline pane below. Sections switch by number key, arrow key, tab
//! click, or by dragging the content area sideways like a paged
//! scroll view.

mod drag;
mod panes;
mod presenter;

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drag::MouseDrag;
use newsdeck_core::{Presenter, Section, StripEvent, Theme};
use newsdeck_ui::{SectionPager, StatusBar, TabStrip};
use presenter::TuiPresenter;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Terminal news reader with a draggable section strip
#[derive(Parser)]
#[command(name = "newsdeck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Built-in theme: dark, light, or nord
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Load the theme from a TOML file instead
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Section to open on (top, business, world, tech, sports)
    #[arg(long, default_value = "top")]
    start: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NEWSDECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let theme = resolve_theme(&cli)?;
    let start = parse_section(&cli.start)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let width = f32::from(terminal.size()?.width);
    let pager = SectionPager::with_active(TuiPresenter::new(width), start);

    let result = match pager {
        Ok(mut pager) => run_app(&mut terminal, &mut pager, &theme),
        Err(e) => Err(eyre!("failed to set up section panes: {e}")),
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Picks the theme: explicit file, then config-dir file, then built-in.
fn resolve_theme(cli: &Cli) -> Result<Theme> {
    if let Some(path) = &cli.theme_file {
        return Ok(Theme::load(path)?);
    }
    if let Some(config) = dirs::config_dir() {
        let path = config.join("newsdeck").join("theme.toml");
        if path.is_file() {
            return Ok(Theme::load(&path)?);
        }
    }
    Theme::by_name(&cli.theme).ok_or_else(|| eyre!("unknown theme '{}'", cli.theme))
}

fn parse_section(name: &str) -> Result<Section> {
    Section::ALL
        .into_iter()
        .find(|section| section.title().eq_ignore_ascii_case(name))
        .ok_or_else(|| eyre!("unknown section '{name}'"))
}

fn run_app<B>(
    terminal: &mut Terminal<B>,
    pager: &mut SectionPager<TuiPresenter>,
    theme: &Theme,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let mut strip_area = Rect::default();
    let mut content_area = Rect::default();
    let mut gesture: Option<MouseDrag> = None;

    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(TabStrip::HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(frame.area());
            strip_area = chunks[0];
            content_area = chunks[1];

            frame.render_widget(TabStrip::new(pager.presenter().emphasis(), theme), chunks[0]);

            if let Some(pane) = pager.presenter().pane_at(pager.active()) {
                pane.render(frame, chunks[1], theme);
            }

            let mode = if pager.is_dragging() { "DRAG" } else { "BROWSE" };
            let status = StatusBar::new(theme)
                .left(mode)
                .center(pager.active().title())
                .right("1-5:section  ←/→:switch  q:quit");
            frame.render_widget(status, chunks[2]);
        })?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                (_, KeyCode::Char('q')) => return Ok(()),
                (_, KeyCode::Char(c @ '1'..='5')) => {
                    let idx = c as usize - '1' as usize;
                    if let Some(section) = Section::from_index(idx) {
                        pager.dispatch(StripEvent::Tapped(section));
                    }
                }
                (_, KeyCode::Right | KeyCode::Tab) => {
                    if let Some(next) = pager.active().right_neighbor() {
                        pager.dispatch(StripEvent::Tapped(next));
                    }
                }
                (_, KeyCode::Left | KeyCode::BackTab) => {
                    if let Some(prev) = pager.active().left_neighbor() {
                        pager.dispatch(StripEvent::Tapped(prev));
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if strip_area.contains(Position::new(mouse.column, mouse.row)) {
                        if let Some(section) = TabStrip::section_at(strip_area, mouse.column) {
                            pager.dispatch(StripEvent::Tapped(section));
                        }
                    } else if content_area.contains(Position::new(mouse.column, mouse.row)) {
                        let width = pager.presenter().page_width();
                        gesture = Some(MouseDrag::begin(pager.active(), width, mouse.column));
                        pager.dispatch(StripEvent::DragStarted);
                    }
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    if let Some(drag) = &gesture {
                        pager.dispatch(StripEvent::DragMoved(drag.offset_at(mouse.column)));
                    }
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    if gesture.take().is_some() {
                        pager.dispatch(StripEvent::DragEnded);
                        pager.dispatch(StripEvent::Settled);
                    }
                }
                _ => {}
            },
            Event::Resize(width, _) => {
                pager.presenter_mut().set_page_width(f32::from(width));
            }
            _ => {}
        }
    }
}
