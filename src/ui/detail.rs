//! Detail overlay for one selected movie
//!
//! A centered popup over the listing with full metadata, financials, and
//! top-billed cast. Draws nothing at all while no movie is selected.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{format_money, MovieDetail};
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(detail) = &app.selected else {
        return;
    };

    let popup = popup_area(area);
    frame.render_widget(Clear, popup);

    let heart = if app.is_favorite(detail.id) { "♥ " } else { "" };
    let title = format!(" {}{} ", heart, detail.title);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Theme::border_focused())
        .title(Span::styled(title, Theme::title()))
        .title_bottom(Span::styled(
            " f:favorite  y:share  ESC:close ",
            Theme::keybind(),
        ))
        .style(ratatui::style::Style::default().bg(Theme::BACKGROUND));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let body = Paragraph::new(detail_lines(detail))
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(body, inner);
}

/// Centered popup taking most of the screen, clamped for small terminals.
fn popup_area(area: Rect) -> Rect {
    let width = (area.width * 4 / 5).clamp(20, 76).min(area.width);
    let height = (area.height * 4 / 5).clamp(8, 40).min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn detail_lines(detail: &MovieDetail) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    // Meta line: year • genres • runtime
    let mut meta = Vec::new();
    if let Some(year) = detail.year() {
        meta.push(Span::styled(year.to_string(), Theme::year()));
        meta.push(Span::raw("  •  "));
    }
    if !detail.genres.is_empty() {
        meta.push(Span::styled(detail.genre_line(), Theme::genre()));
        meta.push(Span::raw("  •  "));
    }
    meta.push(Span::styled(detail.runtime_label(), Theme::dimmed()));
    lines.push(Line::from(meta));

    lines.push(Line::from(vec![
        Span::styled(
            format!("★ {}", detail.rating_label()),
            Theme::rating(detail.vote_average),
        ),
        Span::styled(format!(" ({} votes)", detail.vote_count), Theme::dimmed()),
    ]));
    lines.push(Line::from(""));

    if !detail.overview.is_empty() {
        lines.push(Line::from(Span::styled("Overview", Theme::accent())));
        lines.push(Line::from(Span::styled(
            detail.overview.as_str(),
            Theme::text(),
        )));
        lines.push(Line::from(""));
    }

    if let Some(status) = &detail.status {
        lines.push(labeled("Status: ", status.clone()));
    }
    if let Some(budget) = detail.budget {
        lines.push(labeled("Budget: ", format_money(budget)));
    }
    if let Some(revenue) = detail.revenue {
        lines.push(labeled("Revenue: ", format_money(revenue)));
    }
    if detail.status.is_some() || detail.budget.is_some() || detail.revenue.is_some() {
        lines.push(Line::from(""));
    }

    if !detail.cast.is_empty() {
        lines.push(Line::from(Span::styled("Cast", Theme::accent())));
        for member in detail.cast.iter().take(6) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", member.name), Theme::text()),
                Span::styled(format!("  as {}", member.character), Theme::dimmed()),
            ]));
        }
    }

    lines
}

fn labeled(label: &str, value: String) -> Line<'_> {
    Line::from(vec![
        Span::styled(label, Theme::dimmed()),
        Span::styled(value, Theme::text()),
    ])
}
