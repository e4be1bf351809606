//! ReelTUI - terminal movie discovery over the TMDB catalog
//!
//! Paginated category listings, free-text search, a detail overlay with
//! cast and financials, and session-scoped favorites.
//!
//! # Modules
//!
//! - `models` - Movie summaries, details, categories, listing pages
//! - `api` - TMDB catalog client and image CDN URL builders
//! - `app` - Application state machine (actions, effects, completions)
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable command-line surface
//! - `config` - API credential resolution

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{CatalogError, TmdbClient};
pub use app::{Action, App, AppMsg, Effect, InputMode, ListingRequest};
pub use models::{CastMember, Category, Genre, MovieDetail, MoviePage, MovieSummary};
