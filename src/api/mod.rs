//! API clients for external services
//!
//! - TMDB: movie listings, search, and detail metadata

pub mod tmdb;

pub use tmdb::{CatalogError, ImageSize, TmdbClient};
