//! TMDB (The Movie Database) API client
//!
//! Provides paginated category listings, movie search, and detail lookup
//! with embedded credits. API docs: https://developer.themoviedb.org/docs

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{CastMember, Category, Genre, MovieDetail, MoviePage, MovieSummary};

/// Base URL for the image CDN. Joined with a size token and partial path.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Catalog API error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Catalog returned status {0}")]
    Status(u16),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// TMDB API client
#[derive(Clone)]
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make an authenticated GET request. Single attempt, no retry.
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(CatalogError::RequestFailed)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(CatalogError::RequestFailed)?;
                let parsed: T = serde_json::from_str(&body)
                    .map_err(|e| CatalogError::InvalidResponse(format!("JSON parse error: {}", e)))?;
                Ok(parsed)
            }
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound.into()),
            status => Err(CatalogError::Status(status.as_u16()).into()),
        }
    }

    /// Fetch one page of a listing category (popular, top rated, upcoming).
    ///
    /// `Category::Search` has no listing endpoint; use [`search`](Self::search).
    pub async fn fetch_category(&self, category: Category, page: u32) -> Result<MoviePage> {
        let path = category.listing_path().ok_or_else(|| {
            CatalogError::InvalidRequest("search has no listing endpoint".to_string())
        })?;

        let endpoint = format!("{}?page={}", path, page);
        let response: ListingResponse = self.get(&endpoint).await?;
        Ok(response.into_page())
    }

    /// Search movies by free text. Callers must not pass a blank query.
    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage> {
        let endpoint = format!(
            "/search/movie?query={}&page={}",
            urlencoding::encode(query),
            page
        );

        let response: ListingResponse = self.get(&endpoint).await?;
        Ok(response.into_page())
    }

    /// Get movie details by id, with cast credits embedded in one call.
    pub async fn movie_detail(&self, id: u64) -> Result<MovieDetail> {
        let endpoint = format!("/movie/{}?append_to_response=credits", id);
        let response: MovieDetailResponse = self.get(&endpoint).await?;
        Ok(response.into_detail())
    }
}

// =============================================================================
// Image CDN URLs
// =============================================================================

/// Image size tokens supported by the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W200,
    W342,
    W500,
    W780,
    W1280,
    Original,
}

impl ImageSize {
    pub fn token(&self) -> &'static str {
        match self {
            ImageSize::W200 => "w200",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

/// Build a display URL from a partial image path. Pure, no network call.
///
/// Returns `None` when the catalog gave no path for this image.
pub fn image_url(partial_path: Option<&str>, size: ImageSize) -> Option<String> {
    partial_path.map(|path| format!("{}/{}{}", IMAGE_BASE_URL, size.token(), path))
}

/// Poster at grid size (w500, matching the original web layout).
pub fn poster_url(partial_path: Option<&str>) -> Option<String> {
    image_url(partial_path, ImageSize::W500)
}

/// Backdrop at hero size.
pub fn backdrop_url(partial_path: Option<&str>) -> Option<String> {
    image_url(partial_path, ImageSize::W1280)
}

/// Cast member headshot.
pub fn profile_url(partial_path: Option<&str>) -> Option<String> {
    image_url(partial_path, ImageSize::W200)
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListingResponse {
    page: u32,
    results: Vec<MovieSummaryRaw>,
    #[serde(default)]
    total_pages: u32,
}

impl ListingResponse {
    fn into_page(self) -> MoviePage {
        MoviePage {
            page: self.page,
            results: self
                .results
                .into_iter()
                .map(MovieSummaryRaw::into_summary)
                .collect(),
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovieSummaryRaw {
    id: u64,
    title: String,
    poster_path: Option<String>,
    vote_average: Option<f32>,
    // Sometimes present but empty for unreleased titles
    release_date: Option<String>,
    overview: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u64>,
}

impl MovieSummaryRaw {
    fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title,
            poster_path: self.poster_path,
            vote_average: self.vote_average,
            release_date: self.release_date.filter(|d| !d.is_empty()),
            overview: self.overview.unwrap_or_default(),
            genre_ids: self.genre_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovieDetailResponse {
    id: u64,
    title: String,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f32>,
    #[serde(default)]
    vote_count: u64,
    release_date: Option<String>,
    overview: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    genres: Vec<GenreRaw>,
    // TMDB reports 0 for unknown financials
    #[serde(default)]
    budget: u64,
    #[serde(default)]
    revenue: u64,
    status: Option<String>,
    credits: Option<CreditsRaw>,
}

impl MovieDetailResponse {
    fn into_detail(self) -> MovieDetail {
        MovieDetail {
            id: self.id,
            title: self.title,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            release_date: self.release_date.filter(|d| !d.is_empty()),
            overview: self.overview.unwrap_or_default(),
            runtime: self.runtime.filter(|&r| r > 0),
            genres: self
                .genres
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            budget: (self.budget > 0).then_some(self.budget),
            revenue: (self.revenue > 0).then_some(self.revenue),
            status: self.status.filter(|s| !s.is_empty()),
            cast: self
                .credits
                .map(|c| {
                    c.cast
                        .into_iter()
                        .map(CastMemberRaw::into_member)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenreRaw {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreditsRaw {
    #[serde(default)]
    cast: Vec<CastMemberRaw>,
}

#[derive(Debug, Deserialize)]
struct CastMemberRaw {
    id: u64,
    name: String,
    character: Option<String>,
    profile_path: Option<String>,
}

impl CastMemberRaw {
    fn into_member(self) -> CastMember {
        CastMember {
            id: self.id,
            name: self.name,
            character: self.character.unwrap_or_default(),
            profile_path: self.profile_path,
        }
    }
}
