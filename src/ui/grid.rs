//! Movie listing view
//!
//! Renders the loaded movies as a selectable list with exactly one of four
//! displays: loading, error, empty, or the results themselves.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::MovieSummary;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.category.is_search() {
        format!(
            " RESULTS FOR \"{}\" ({}) ",
            app.search_query,
            app.movies.len()
        )
    } else {
        format!(
            " {} ({}) ",
            app.category.label().to_uppercase(),
            app.movies.len()
        )
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()));

    if app.can_load_more() {
        block = block.title_bottom(Span::styled(" m: load more ", Theme::keybind()));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The three placeholder states are exclusive: loading wins, then error,
    // then empty. Results render only when none of them applies.
    if app.loading {
        let loading = Paragraph::new("⟳ Loading movies...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if let Some(error) = &app.error {
        let message = Paragraph::new(vec![
            Line::from(Span::styled(error.as_str(), Theme::error())),
            Line::from(""),
            Line::from(Span::styled(
                "Pick a category or search again to retry.",
                Theme::dimmed(),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    if app.movies.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No movies found", Theme::text())),
            Line::from(""),
            Line::from(Span::styled(
                "Try searching for something else or browse a category.",
                Theme::dimmed(),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Window the list so the selection stays visible
    let visible = inner.height as usize;
    let offset = if app.cursor.selected < visible {
        0
    } else {
        app.cursor.selected + 1 - visible
    };

    let items: Vec<ListItem> = app
        .movies
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, movie)| summary_row(app, i, movie))
        .collect();

    let list = List::new(items).style(Theme::text());
    frame.render_widget(list, inner);
}

/// One listing row: selection marker, favorite heart, title, year, rating.
fn summary_row<'a>(app: &App, index: usize, movie: &'a MovieSummary) -> ListItem<'a> {
    let is_selected = index == app.cursor.selected;
    let marker = if is_selected { "▸ " } else { "  " };
    let heart = if app.is_favorite(movie.id) { "♥ " } else { "  " };
    let year_str = movie.year().map(|y| format!(" ({})", y)).unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            marker,
            if is_selected {
                Theme::accent()
            } else {
                Theme::dimmed()
            },
        ),
        Span::styled(heart, Theme::favorite()),
        Span::styled(
            movie.title.as_str(),
            if is_selected {
                Theme::highlighted()
            } else {
                Theme::text()
            },
        ),
        Span::styled(year_str, Theme::year()),
        Span::raw(" "),
        Span::styled(
            format!("★ {}", movie.rating_label()),
            Theme::rating(movie.vote_average),
        ),
    ]);

    ListItem::new(line)
}
