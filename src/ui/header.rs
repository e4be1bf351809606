//! Header bar: logo, search box, and category tabs
//!
//! Emits nothing itself; the key handler in `app` owns the gestures. This
//! module only draws the current state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::models::Category;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13), // Logo
            Constraint::Min(20),    // Search box
            Constraint::Length(42), // Category tabs
        ])
        .split(area);

    render_logo(frame, chunks[0]);
    render_search_box(frame, chunks[1], app);
    render_tabs(frame, chunks[2], app);
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "REEL",
            Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            Style::default()
                .fg(Theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, area);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;

    let search_style = if editing {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let search_text = if editing {
        let text = &app.input.text;
        let cursor = app.input.cursor.min(text.len());
        let (before, after) = text.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.search_query.is_empty() {
        "⌕ Press / to search for movies...".to_string()
    } else {
        format!("⌕ {}", app.search_query)
    };

    let search_box = Paragraph::new(search_text)
        .style(if editing {
            Theme::input().fg(Theme::PRIMARY)
        } else {
            Theme::input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(search_style)
                .title(Span::styled(" SEARCH ", Theme::title())),
        );
    frame.render_widget(search_box, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, category) in Category::TABS.iter().enumerate() {
        let active = app.category == *category;
        let label = format!(" {} {} ", i + 1, category.label());
        spans.push(Span::styled(
            label,
            if active {
                Theme::highlighted()
            } else {
                Theme::dimmed()
            },
        ));
        spans.push(Span::raw(" "));
    }

    let tabs = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border())
                .title(Span::styled(" BROWSE ", Theme::title())),
        );
    frame.render_widget(tabs, area);
}
