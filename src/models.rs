//! Data structures and types for ReelTUI
//!
//! Contains all shared models used across the application:
//! - **Catalog**: movie summaries, full details, paginated listing envelopes
//! - **Category**: the fixed listing categories plus the derived search view

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Categories
// =============================================================================

/// Listing category shown in the navigation tabs.
///
/// `Search` is a derived pseudo-category: it has no listing endpoint of its
/// own and is entered by submitting a non-blank query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Popular,
    TopRated,
    Upcoming,
    Search,
}

impl Category {
    /// Listing endpoint path for the category, `None` for search.
    pub fn listing_path(&self) -> Option<&'static str> {
        match self {
            Category::Popular => Some("/movie/popular"),
            Category::TopRated => Some("/movie/top_rated"),
            Category::Upcoming => Some("/movie/upcoming"),
            Category::Search => None,
        }
    }

    /// Label for tabs and the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Popular => "Popular",
            Category::TopRated => "Top Rated",
            Category::Upcoming => "Upcoming",
            Category::Search => "Search",
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Category::Search)
    }

    /// The three selectable tabs, in display order.
    pub const TABS: [Category; 3] = [Category::Popular, Category::TopRated, Category::Upcoming];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Catalog Models (TMDB)
// =============================================================================

/// Lightweight movie record used in grid listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f32>,
    pub release_date: Option<String>,
    pub overview: String,
    pub genre_ids: Vec<u64>,
}

impl MovieSummary {
    /// Release year, if a parseable date is present.
    pub fn year(&self) -> Option<u16> {
        self.release_date.as_deref().and_then(extract_year)
    }

    /// Rating formatted to one decimal, or "N/A".
    pub fn rating_label(&self) -> String {
        format_rating(self.vote_average)
    }
}

impl fmt::Display for MovieSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year().map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{}", self.title, year_str)
    }
}

/// Genre with catalog id and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Top-billed cast member from the embedded credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_path: Option<String>,
}

/// Full movie record including cast and financial fields, fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f32>,
    pub vote_count: u64,
    pub release_date: Option<String>,
    pub overview: String,
    pub runtime: Option<u32>,
    pub genres: Vec<Genre>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub status: Option<String>,
    pub cast: Vec<CastMember>,
}

impl MovieDetail {
    pub fn year(&self) -> Option<u16> {
        self.release_date.as_deref().and_then(extract_year)
    }

    pub fn rating_label(&self) -> String {
        format_rating(self.vote_average)
    }

    /// Runtime formatted as "2h 56m", or "N/A" when unknown.
    pub fn runtime_label(&self) -> String {
        match self.runtime {
            Some(mins) => format!("{}h {}m", mins / 60, mins % 60),
            None => "N/A".to_string(),
        }
    }

    /// Genre names joined for the meta line.
    pub fn genre_line(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Canonical catalog page for this movie (used by the share action).
    pub fn catalog_url(&self) -> String {
        format!("https://www.themoviedb.org/movie/{}", self.id)
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year().map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{} - ★ {}", self.title, year_str, self.rating_label())
    }
}

/// Coerce a summary into the detail shape.
///
/// Used when a detail lookup fails: the overlay still opens with whatever the
/// grid already knew. Fields the summary cannot provide stay empty/absent.
impl From<MovieSummary> for MovieDetail {
    fn from(summary: MovieSummary) -> Self {
        MovieDetail {
            id: summary.id,
            title: summary.title,
            poster_path: summary.poster_path,
            backdrop_path: None,
            vote_average: summary.vote_average,
            vote_count: 0,
            release_date: summary.release_date,
            overview: summary.overview,
            runtime: None,
            genres: Vec::new(),
            budget: None,
            revenue: None,
            status: None,
            cast: Vec::new(),
        }
    }
}

/// One page of listing or search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
}

// =============================================================================
// Formatting helpers
// =============================================================================

/// Extract year from a date string like "2022-03-04".
pub fn extract_year(date: &str) -> Option<u16> {
    if date.len() >= 4 {
        date[..4].parse().ok()
    } else {
        None
    }
}

/// Rating to one decimal place, "N/A" when absent.
pub fn format_rating(vote_average: Option<f32>) -> String {
    match vote_average {
        Some(avg) => format!("{:.1}", avg),
        None => "N/A".to_string(),
    }
}

/// Dollar amount in millions, e.g. "$185.0M".
pub fn format_money(amount: u64) -> String {
    format!("${:.1}M", amount as f64 / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {}", id),
            poster_path: Some("/poster.jpg".into()),
            vote_average: Some(7.8),
            release_date: Some("2022-03-01".into()),
            overview: "An overview".into(),
            genre_ids: vec![80, 53],
        }
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("2022-03-04"), Some(2022));
        assert_eq!(extract_year("1999-11-12"), Some(1999));
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("abc"), None);
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(format_rating(Some(7.84)), "7.8");
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn test_runtime_label() {
        let mut detail = MovieDetail::from(summary(1));
        assert_eq!(detail.runtime_label(), "N/A");

        detail.runtime = Some(176);
        assert_eq!(detail.runtime_label(), "2h 56m");

        detail.runtime = Some(59);
        assert_eq!(detail.runtime_label(), "0h 59m");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(185_000_000), "$185.0M");
        assert_eq!(format_money(1_500_000), "$1.5M");
    }

    #[test]
    fn test_detail_from_summary_keeps_identity() {
        let s = summary(414906);
        let detail = MovieDetail::from(s.clone());

        assert_eq!(detail.id, s.id);
        assert_eq!(detail.title, s.title);
        assert_eq!(detail.overview, s.overview);
        assert_eq!(detail.vote_average, s.vote_average);
        assert_eq!(detail.release_date, s.release_date);
        // Fields a summary cannot provide stay empty
        assert!(detail.genres.is_empty());
        assert!(detail.cast.is_empty());
        assert_eq!(detail.runtime, None);
        assert_eq!(detail.vote_count, 0);
    }

    #[test]
    fn test_category_listing_paths() {
        assert_eq!(Category::Popular.listing_path(), Some("/movie/popular"));
        assert_eq!(Category::TopRated.listing_path(), Some("/movie/top_rated"));
        assert_eq!(Category::Upcoming.listing_path(), Some("/movie/upcoming"));
        assert_eq!(Category::Search.listing_path(), None);
    }
}
