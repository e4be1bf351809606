//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout. `render` is the
//! single entry point: it draws the header, the listing, the status bar, and
//! the detail overlay on top when a movie is selected.

pub mod detail;
pub mod grid;
pub mod header;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

/// Main render function - draws the whole frame from current state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Listing
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    header::render(frame, chunks[0], app);
    grid::render(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Overlay last so it sits on top of the listing
    detail::render(frame, area, app);
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let page_indicator = match app.total_pages {
        Some(total) if !app.category.is_search() => {
            format!(" {} p.{}/{} ", app.category, app.current_page, total)
        }
        _ => format!(" {} ", app.category),
    };

    let busy = if app.loading || app.detail_loading {
        Span::styled(" ⟳ ", Theme::loading())
    } else {
        Span::raw("   ")
    };

    let trailing = if let Some(status) = &app.status {
        Span::styled(format!(" {} ", status), Theme::accent())
    } else {
        Span::styled(
            " q:quit  /:search  ↵:details  f:favorite ",
            Theme::dimmed(),
        )
    };

    let status_line = Line::from(vec![
        mode_indicator,
        Span::styled(page_indicator, Style::default().fg(Theme::DIM)),
        Span::styled(format!(" ♥ {} ", app.favorites.len()), Theme::favorite()),
        busy,
        Span::raw("│"),
        trailing,
    ]);

    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}
