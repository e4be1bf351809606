//! Neon theme for ReelTUI
//!
//! Color palette and style helpers for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Neon color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0a0a0f (deep black-blue)
    pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0a, 0x0f);

    /// Primary: #00fff2 (cyan neon)
    pub const PRIMARY: Color = Color::Rgb(0x00, 0xff, 0xf2);

    /// Secondary: #ff00ff (magenta)
    pub const SECONDARY: Color = Color::Rgb(0xff, 0x00, 0xff);

    /// Accent: #ffff00 (yellow)
    pub const ACCENT: Color = Color::Rgb(0xff, 0xff, 0x00);

    /// Highlight: #ff0080 (hot pink)
    pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0x00, 0x80);

    /// Text: #e0e0e0 (soft white)
    pub const TEXT: Color = Color::Rgb(0xe0, 0xe0, 0xe0);

    /// Dim: #404050 (muted)
    pub const DIM: Color = Color::Rgb(0x40, 0x40, 0x50);

    /// Success: #00ff00 (green)
    pub const SUCCESS: Color = Color::Rgb(0x00, 0xff, 0x00);

    /// Warning: #ffaa00 (orange)
    pub const WARNING: Color = Color::Rgb(0xff, 0xaa, 0x00);

    /// Error: #ff0040 (red)
    pub const ERROR: Color = Color::Rgb(0xff, 0x00, 0x40);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Slightly lighter background for panels/cards
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x14, 0x14, 0x1e);

    /// Border color (dim cyan)
    pub const BORDER: Color = Color::Rgb(0x00, 0x80, 0x78);

    /// Border color when focused (full cyan)
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Highlighted text (inverted with primary color)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary text style (magenta)
    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Accent text style (yellow)
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border (glowing effect)
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for input fields
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Loading/spinner indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Favorite marker (hot pink heart)
    pub fn favorite() -> Style {
        Style::default().fg(Self::HIGHLIGHT)
    }

    /// Year/date metadata
    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Genre tags
    pub fn genre() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Rating color band: high is green, middling orange, low dim
    pub fn rating(vote_average: Option<f32>) -> Style {
        match vote_average {
            Some(avg) if avg >= 7.0 => Style::default().fg(Self::SUCCESS),
            Some(avg) if avg >= 5.0 => Style::default().fg(Self::WARNING),
            _ => Style::default().fg(Self::DIM),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
/// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_all_theme_colors_are_rgb() {
        assert!(color_to_rgb(Theme::BACKGROUND).is_some());
        assert!(color_to_rgb(Theme::PRIMARY).is_some());
        assert!(color_to_rgb(Theme::SECONDARY).is_some());
        assert!(color_to_rgb(Theme::ACCENT).is_some());
        assert!(color_to_rgb(Theme::HIGHLIGHT).is_some());
        assert!(color_to_rgb(Theme::TEXT).is_some());
        assert!(color_to_rgb(Theme::DIM).is_some());
        assert!(color_to_rgb(Theme::SUCCESS).is_some());
        assert!(color_to_rgb(Theme::WARNING).is_some());
        assert!(color_to_rgb(Theme::ERROR).is_some());
    }

    #[test]
    fn test_text_contrast_against_background() {
        let bg = rgb(Theme::BACKGROUND);
        let text = rgb(Theme::TEXT);

        let ratio = contrast_ratio(text, bg);
        assert!(
            meets_wcag_aa(text, bg),
            "Text on background should meet WCAG AA (got {:.2}:1)",
            ratio
        );
    }

    #[test]
    fn test_primary_contrast_against_background() {
        let bg = rgb(Theme::BACKGROUND);
        let primary = rgb(Theme::PRIMARY);

        let ratio = contrast_ratio(primary, bg);
        assert!(
            meets_wcag_aa_large(primary, bg),
            "Primary on background should meet WCAG AA for large text (got {:.2}:1)",
            ratio
        );
    }

    #[test]
    fn test_inverted_highlighted_contrast() {
        let fg = rgb(Theme::BACKGROUND);
        let bg = rgb(Theme::PRIMARY);

        let ratio = contrast_ratio(fg, bg);
        assert!(
            meets_wcag_aa_large(fg, bg),
            "Inverted highlight should be readable (got {:.2}:1)",
            ratio
        );
    }

    #[test]
    fn test_rating_color_bands() {
        assert_eq!(Theme::rating(Some(8.4)).fg, Some(Theme::SUCCESS));
        assert_eq!(Theme::rating(Some(6.0)).fg, Some(Theme::WARNING));
        assert_eq!(Theme::rating(Some(3.2)).fg, Some(Theme::DIM));
        assert_eq!(Theme::rating(None).fg, Some(Theme::DIM));
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert!((relative_luminance(0, 0, 0) - 0.0).abs() < 0.001);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
    }
}
