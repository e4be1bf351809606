//! CLI Command Handlers
//!
//! Implements all CLI commands by calling the catalog client directly.
//! Each handler takes CLI args and Output, returns ExitCode.

use serde::Serialize;

use crate::api::tmdb::{backdrop_url, poster_url};
use crate::api::{CatalogError, TmdbClient};
use crate::cli::{ExitCode, InfoCmd, ListingCmd, Output, SearchCmd};
use crate::config::Config;
use crate::models::{Category, MovieDetail, MoviePage, MovieSummary};

/// Build a client from configuration, or fail with a helpful message.
fn make_client(output: &Output) -> Result<TmdbClient, ExitCode> {
    let config = Config::load();
    match config.tmdb_api_key() {
        Ok(key) => Ok(TmdbClient::new(key)),
        Err(e) => Err(output.error(e.to_string(), ExitCode::InvalidArgs)),
    }
}

/// Map a client failure onto a semantic exit code.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<CatalogError>() {
        Some(CatalogError::NotFound) => ExitCode::NotFound,
        Some(CatalogError::InvalidRequest(_)) => ExitCode::InvalidArgs,
        _ => ExitCode::NetworkError,
    }
}

fn print_listing(output: &Output, mut page: MoviePage, limit: usize) -> ExitCode {
    page.results.truncate(limit);

    if output.json {
        if let Err(e) = output.print(&page) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        if page.results.is_empty() {
            output.line("No movies found.");
        }
        for movie in &page.results {
            output.line(format_row(movie));
        }
        output.info(format!("page {} of {}", page.page, page.total_pages));
    }
    ExitCode::Success
}

fn format_row(movie: &MovieSummary) -> String {
    format!("{:>9}  ★ {:>4}  {}", movie.id, movie.rating_label(), movie)
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, output: &Output) -> ExitCode {
    if cmd.query.trim().is_empty() {
        return output.error("Search query must not be blank", ExitCode::InvalidArgs);
    }

    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    output.info(format!("Searching for: {}", cmd.query));

    match client.search(cmd.query.trim(), cmd.page).await {
        Ok(page) => print_listing(output, page, cmd.limit),
        Err(e) => output.error(format!("Search failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Listing Commands (popular / top-rated / upcoming)
// =============================================================================

pub async fn listing_cmd(category: Category, cmd: ListingCmd, output: &Output) -> ExitCode {
    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    output.info(format!("Fetching {} (page {})...", category, cmd.page));

    match client.fetch_category(category, cmd.page).await {
        Ok(page) => print_listing(output, page, cmd.limit),
        Err(e) => output.error(
            format!("{} fetch failed: {}", category, e),
            exit_code_for(&e),
        ),
    }
}

// =============================================================================
// Info Command
// =============================================================================

/// Detail payload with resolved image URLs for scripted consumers.
#[derive(Debug, Serialize)]
struct InfoOutput {
    #[serde(flatten)]
    detail: MovieDetail,
    poster_url: Option<String>,
    backdrop_url: Option<String>,
}

pub async fn info_cmd(cmd: InfoCmd, output: &Output) -> ExitCode {
    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    output.info(format!("Getting info for: {}", cmd.id));

    match client.movie_detail(cmd.id).await {
        Ok(detail) => {
            if output.json {
                let payload = InfoOutput {
                    poster_url: poster_url(detail.poster_path.as_deref()),
                    backdrop_url: backdrop_url(detail.backdrop_path.as_deref()),
                    detail,
                };
                if let Err(e) = output.print(&payload) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                print_detail(output, &detail);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Info failed: {}", e), exit_code_for(&e)),
    }
}

fn print_detail(output: &Output, detail: &MovieDetail) {
    output.line(format!("{}", detail));
    output.line(format!(
        "{} | {} | {} votes",
        detail.genre_line(),
        detail.runtime_label(),
        detail.vote_count
    ));
    if let Some(status) = &detail.status {
        output.line(format!("Status: {}", status));
    }
    if let Some(budget) = detail.budget {
        output.line(format!("Budget: {}", crate::models::format_money(budget)));
    }
    if let Some(revenue) = detail.revenue {
        output.line(format!("Revenue: {}", crate::models::format_money(revenue)));
    }
    if !detail.overview.is_empty() {
        output.line("");
        output.line(&detail.overview);
    }
    if !detail.cast.is_empty() {
        output.line("");
        output.line("Cast:");
        for member in detail.cast.iter().take(6) {
            output.line(format!("  {} as {}", member.name, member.character));
        }
    }
    if let Some(url) = poster_url(detail.poster_path.as_deref()) {
        output.line("");
        output.line(format!("Poster: {}", url));
    }
}
