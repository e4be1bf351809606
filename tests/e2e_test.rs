//! End-to-end flow tests for ReelTUI
//!
//! Drives the real state machine against a mocked catalog server: the
//! effects returned by `dispatch` are executed with the HTTP client and the
//! completions folded back in with `apply`, exactly as the event loop does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockito::{Matcher, Server, ServerGuard};
use reeltui::api::TmdbClient;
use reeltui::app::{Action, App, AppMsg, Effect, InputMode};
use reeltui::models::Category;

// =============================================================================
// Harness
// =============================================================================

/// Execute an effect against the client and fold the completion into state.
async fn run_effect(app: &mut App, client: &TmdbClient, effect: Effect) {
    match effect {
        Effect::FetchListing(request) => {
            let result = if request.category.is_search() {
                client.search(&request.query, request.page).await
            } else {
                client.fetch_category(request.category, request.page).await
            };
            app.apply(AppMsg::Listing {
                ticket: request.ticket,
                page: request.page,
                result,
            });
        }
        Effect::FetchDetail { summary, ticket } => {
            let result = client.movie_detail(summary.id).await;
            app.apply(AppMsg::Detail {
                ticket,
                summary,
                result,
            });
        }
    }
}

/// Dispatch an action and run its effect to completion.
async fn step(app: &mut App, client: &TmdbClient, action: Action) {
    if let Some(effect) = app.dispatch(action) {
        run_effect(app, client, effect).await;
    }
}

fn key(app: &mut App, code: KeyCode) -> Option<Action> {
    app.handle_key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn listing_body(start_id: u64, count: u64, page: u32, total_pages: u32) -> String {
    let results: Vec<String> = (start_id..start_id + count)
        .map(|id| {
            format!(
                r#"{{
                    "id": {id},
                    "title": "Movie {id}",
                    "release_date": "2022-03-01",
                    "overview": "Overview {id}",
                    "poster_path": "/poster{id}.jpg",
                    "vote_average": 7.1,
                    "genre_ids": [80]
                }}"#
            )
        })
        .collect();

    format!(
        r#"{{"page": {page}, "results": [{}], "total_results": {count}, "total_pages": {total_pages}}}"#,
        results.join(",")
    )
}

async fn mock_listing(
    server: &mut ServerGuard,
    path: &str,
    page: u32,
    body: String,
) -> mockito::Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

// =============================================================================
// Pagination Flow
// =============================================================================

#[tokio::test]
async fn test_popular_then_load_more_accumulates_40() {
    let mut server = Server::new_async().await;
    let page1 = mock_listing(&mut server, "/movie/popular", 1, listing_body(0, 20, 1, 10)).await;
    let page2 = mock_listing(&mut server, "/movie/popular", 2, listing_body(20, 20, 2, 10)).await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    step(&mut app, &client, Action::SelectCategory(Category::Popular)).await;
    assert_eq!(app.movies.len(), 20);
    assert!(!app.loading);

    step(&mut app, &client, Action::LoadMore).await;
    assert_eq!(app.movies.len(), 40);
    assert_eq!(app.current_page, 2);

    // First page untouched, order preserved across the append
    for (i, movie) in app.movies.iter().enumerate() {
        assert_eq!(movie.id, i as u64);
    }

    page1.assert_async().await;
    page2.assert_async().await;
}

// =============================================================================
// Search Flow
// =============================================================================

#[tokio::test]
async fn test_search_flow_via_keyboard() {
    let mut server = Server::new_async().await;
    let search_mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "batman".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(listing_body(100, 5, 1, 1))
        .expect(1)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    // Focus the search box and type the query
    assert_eq!(key(&mut app, KeyCode::Char('/')), None);
    assert_eq!(app.input_mode, InputMode::Editing);
    for c in "batman".chars() {
        key(&mut app, KeyCode::Char(c));
    }

    let action = key(&mut app, KeyCode::Enter).expect("enter should submit");
    step(&mut app, &client, action).await;

    assert_eq!(app.category, Category::Search);
    assert_eq!(app.search_query, "batman");
    assert_eq!(app.current_page, 1);
    assert_eq!(app.movies.len(), 5);

    // Load-more is a no-op for search: no second request may be issued
    step(&mut app, &client, Action::LoadMore).await;
    assert_eq!(app.movies.len(), 5);
    assert_eq!(app.current_page, 1);

    search_mock.assert_async().await;
}

#[tokio::test]
async fn test_blank_search_falls_back_to_popular() {
    let mut server = Server::new_async().await;
    let popular = mock_listing(&mut server, "/movie/popular", 1, listing_body(0, 3, 1, 1)).await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    step(&mut app, &client, Action::SubmitSearch("   ".into())).await;

    assert_eq!(app.category, Category::Popular);
    assert_eq!(app.movies.len(), 3);

    popular.assert_async().await;
}

// =============================================================================
// Detail Flow
// =============================================================================

#[tokio::test]
async fn test_detail_flow_with_cast() {
    let mut server = Server::new_async().await;
    let listing = mock_listing(&mut server, "/movie/popular", 1, listing_body(414906, 1, 1, 1)).await;

    let detail_body = r#"{
        "id": 414906,
        "title": "Movie 414906",
        "release_date": "2022-03-01",
        "runtime": 176,
        "genres": [{"id": 80, "name": "Crime"}],
        "overview": "Long form overview.",
        "vote_average": 7.8,
        "vote_count": 8123,
        "poster_path": "/poster414906.jpg",
        "backdrop_path": "/backdrop.jpg",
        "budget": 185000000,
        "revenue": 770945583,
        "status": "Released",
        "credits": {"cast": [{"id": 1, "name": "Robert Pattinson", "character": "Bruce Wayne", "profile_path": null}]}
    }"#;

    let detail_mock = server
        .mock("GET", "/movie/414906")
        .match_query(Matcher::UrlEncoded(
            "append_to_response".into(),
            "credits".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(detail_body)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    step(&mut app, &client, Action::SelectCategory(Category::Popular)).await;

    // Enter opens the detail overlay for the movie under the cursor
    let action = key(&mut app, KeyCode::Enter).expect("enter should select");
    step(&mut app, &client, action).await;

    let detail = app.selected.as_ref().expect("overlay should be open");
    assert_eq!(detail.id, 414906);
    assert_eq!(detail.cast.len(), 1);
    assert_eq!(detail.cast[0].character, "Bruce Wayne");
    assert_eq!(detail.budget, Some(185_000_000));

    // Favorite from the overlay, then close; the listing is untouched
    let fav = key(&mut app, KeyCode::Char('f')).expect("f should favorite");
    app.dispatch(fav);
    assert!(app.is_favorite(414906));

    let close = key(&mut app, KeyCode::Esc).expect("esc should close");
    app.dispatch(close);
    assert!(app.selected.is_none());
    assert_eq!(app.movies.len(), 1);

    listing.assert_async().await;
    detail_mock.assert_async().await;
}

#[tokio::test]
async fn test_detail_lookup_failure_degrades_to_summary() {
    let mut server = Server::new_async().await;
    let listing = mock_listing(&mut server, "/movie/popular", 1, listing_body(7, 1, 1, 1)).await;

    let not_found = server
        .mock("GET", "/movie/7")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"success": false, "status_code": 34, "status_message": "Not found"}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    step(&mut app, &client, Action::SelectCategory(Category::Popular)).await;
    let summary = app.movies[0].clone();

    step(&mut app, &client, Action::SelectMovie(summary.clone())).await;

    // The overlay opens with the degraded record; no error is surfaced
    let detail = app.selected.as_ref().expect("overlay should still open");
    assert_eq!(detail.id, summary.id);
    assert_eq!(detail.title, summary.title);
    assert_eq!(detail.overview, summary.overview);
    assert!(detail.cast.is_empty());
    assert!(app.error.is_none());

    listing.assert_async().await;
    not_found.assert_async().await;
}

// =============================================================================
// Error Flow
// =============================================================================

#[tokio::test]
async fn test_listing_error_then_recovery() {
    let mut server = Server::new_async().await;

    let broken = server
        .mock("GET", "/movie/popular")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    step(&mut app, &client, Action::SelectCategory(Category::Popular)).await;
    assert_eq!(
        app.error.as_deref(),
        Some("Failed to load movies. Please try again.")
    );
    assert!(!app.loading);
    assert!(app.movies.is_empty());

    // The app stays interactive: switching category issues a fresh load
    broken.remove_async().await;
    let upcoming = mock_listing(&mut server, "/movie/upcoming", 1, listing_body(0, 4, 1, 1)).await;

    step(&mut app, &client, Action::SelectCategory(Category::Upcoming)).await;
    assert!(app.error.is_none());
    assert_eq!(app.movies.len(), 4);

    upcoming.assert_async().await;
}

// =============================================================================
// Stale Response Flow
// =============================================================================

#[tokio::test]
async fn test_category_switch_discards_in_flight_load_more() {
    let mut server = Server::new_async().await;
    let popular1 = mock_listing(&mut server, "/movie/popular", 1, listing_body(0, 20, 1, 9)).await;
    let popular2 = mock_listing(&mut server, "/movie/popular", 2, listing_body(20, 20, 2, 9)).await;
    let upcoming = mock_listing(&mut server, "/movie/upcoming", 1, listing_body(500, 6, 1, 2)).await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    step(&mut app, &client, Action::SelectCategory(Category::Popular)).await;

    // Start a load-more but do not complete it yet
    let stale_effect = app.dispatch(Action::LoadMore).expect("load more starts");

    // User switches category while page 2 is still in flight
    let fresh_effect = app
        .dispatch(Action::SelectCategory(Category::Upcoming))
        .expect("category switch starts a load");

    // Complete the fresh request first, then the stale one arrives late
    run_effect(&mut app, &client, fresh_effect).await;
    run_effect(&mut app, &client, stale_effect).await;

    // The stale page-2 append was dropped: only upcoming results remain
    assert_eq!(app.category, Category::Upcoming);
    assert_eq!(app.movies.len(), 6);
    assert_eq!(app.movies[0].id, 500);
    assert!(!app.loading);

    popular1.assert_async().await;
    popular2.assert_async().await;
    upcoming.assert_async().await;
}
