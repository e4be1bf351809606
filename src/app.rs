//! App state and core application logic
//!
//! Owns the single session-wide view state and every transition over it.
//! The UI layer translates key events into [`Action`]s; [`App::dispatch`]
//! is the only place state changes begin, and it returns the [`Effect`]
//! (if any) the runtime must execute. Network completions come back as
//! [`AppMsg`]s and are folded in by [`App::apply`].
//!
//! A session starts on the popular category, page 1, with an immediate
//! listing load; nothing survives the session (favorites included).

use crate::models::{Category, MovieDetail, MoviePage, MovieSummary};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// List Cursor
// =============================================================================

/// Selection state for the movie list. The render layer derives the scroll
/// window from the selected index and the viewport height.
#[derive(Debug, Clone, Default)]
pub struct ListCursor {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListCursor {
    /// Move selection up
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    /// Move selection down by a page
    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Reset selection to the top
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Update length (e.g., when new results come in)
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Text buffer for the search box
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Current text
    pub text: String,
    /// Cursor position in text
    pub cursor: usize,
}

impl SearchInput {
    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// Actions, Effects, Messages
// =============================================================================

/// User intents emitted by the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch to one of the fixed listing categories
    SelectCategory(Category),
    /// Submit the search box text
    SubmitSearch(String),
    /// Fetch the next page of the current (non-search) category
    LoadMore,
    /// Open the detail overlay for a movie
    SelectMovie(MovieSummary),
    /// Close the detail overlay
    CloseDetail,
    /// Toggle a movie in the favorites set
    ToggleFavorite(MovieSummary),
    /// Surface a share link for the selected movie
    Share,
    /// Quit the application
    Quit,
}

/// Network side effect requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchListing(ListingRequest),
    FetchDetail { summary: MovieSummary, ticket: u64 },
}

/// Snapshot of a listing request at dispatch time.
///
/// The ticket makes out-of-order completions harmless: only the response
/// carrying the latest ticket is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub category: Category,
    pub query: String,
    pub page: u32,
    pub ticket: u64,
}

/// Completion messages sent back from the effect runner
#[derive(Debug)]
pub enum AppMsg {
    Listing {
        ticket: u64,
        page: u32,
        result: anyhow::Result<MoviePage>,
    },
    Detail {
        ticket: u64,
        summary: MovieSummary,
        result: anyhow::Result<MovieDetail>,
    },
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// Active listing category
    pub category: Category,
    /// Submitted search query; empty unless category is Search
    pub search_query: String,
    /// Current listing page, 1-based
    pub current_page: u32,
    /// Loaded movies in load order
    pub movies: Vec<MovieSummary>,
    /// Total pages reported by the catalog for the current listing
    pub total_pages: Option<u32>,
    /// A listing request is in flight
    pub loading: bool,
    /// User-facing listing error, cleared when a new load starts
    pub error: Option<String>,
    /// Movie shown in the detail overlay
    pub selected: Option<MovieDetail>,
    /// A detail request is in flight
    pub detail_loading: bool,
    /// Favorited movies, membership keyed by id
    pub favorites: Vec<MovieSummary>,

    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Search box buffer
    pub input: SearchInput,
    /// List selection cursor
    pub cursor: ListCursor,
    /// Scroll offset for the overlay overview text
    pub detail_scroll: u16,
    /// Transient status toast (share links etc.)
    pub status: Option<String>,

    listing_ticket: u64,
    detail_ticket: u64,
}

impl App {
    /// Create a new App with session defaults
    pub fn new() -> Self {
        Self {
            current_page: 1,
            running: true,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Movie summary under the list cursor
    pub fn selected_summary(&self) -> Option<&MovieSummary> {
        self.movies.get(self.cursor.selected)
    }

    /// Whether a movie id is in the favorites set
    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.iter().any(|m| m.id == id)
    }

    /// Load-more is offered only for non-search categories with results,
    /// while no request is in flight.
    pub fn can_load_more(&self) -> bool {
        !self.loading && !self.category.is_search() && !self.movies.is_empty()
    }

    // -------------------------------------------------------------------------
    // Dispatch (single entry point for state transitions)
    // -------------------------------------------------------------------------

    /// Apply a user action, returning the side effect to execute, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::SelectCategory(category) => Some(self.select_category(category)),

            Action::SubmitSearch(query) => {
                let trimmed = query.trim();
                if trimmed.is_empty() {
                    // Blank search falls back to the popular listing
                    Some(self.select_category(Category::Popular))
                } else {
                    self.category = Category::Search;
                    self.search_query = trimmed.to_string();
                    self.current_page = 1;
                    Some(self.begin_listing())
                }
            }

            Action::LoadMore => {
                // No-op while loading (single request in flight) and for
                // search results, which have no load-more.
                if self.loading || self.category.is_search() {
                    return None;
                }
                self.current_page += 1;
                Some(self.begin_listing())
            }

            Action::SelectMovie(summary) => {
                self.detail_ticket += 1;
                self.detail_loading = true;
                Some(Effect::FetchDetail {
                    summary,
                    ticket: self.detail_ticket,
                })
            }

            Action::CloseDetail => {
                self.selected = None;
                self.detail_scroll = 0;
                self.detail_loading = false;
                // Invalidate any detail response still in flight
                self.detail_ticket += 1;
                None
            }

            Action::ToggleFavorite(summary) => {
                if let Some(pos) = self.favorites.iter().position(|m| m.id == summary.id) {
                    self.favorites.remove(pos);
                } else {
                    self.favorites.push(summary);
                }
                None
            }

            Action::Share => {
                if let Some(detail) = &self.selected {
                    self.status = Some(format!("Share link: {}", detail.catalog_url()));
                }
                None
            }

            Action::Quit => {
                self.running = false;
                None
            }
        }
    }

    /// Switch category: clear the query, go back to page 1, start a load.
    fn select_category(&mut self, category: Category) -> Effect {
        self.category = category;
        self.search_query.clear();
        self.input.clear();
        self.current_page = 1;
        self.begin_listing()
    }

    /// Shared start of every listing load.
    fn begin_listing(&mut self) -> Effect {
        self.loading = true;
        self.error = None;
        self.listing_ticket += 1;
        Effect::FetchListing(ListingRequest {
            category: self.category,
            query: self.search_query.clone(),
            page: self.current_page,
            ticket: self.listing_ticket,
        })
    }

    // -------------------------------------------------------------------------
    // Apply (fold completions back into state)
    // -------------------------------------------------------------------------

    /// Fold a completion message into state. Stale tickets are discarded.
    pub fn apply(&mut self, msg: AppMsg) {
        match msg {
            AppMsg::Listing {
                ticket,
                page,
                result,
            } => {
                if ticket != self.listing_ticket {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        if page == 1 {
                            self.movies = loaded.results;
                            self.cursor.reset();
                        } else {
                            self.movies.extend(loaded.results);
                        }
                        self.total_pages = Some(loaded.total_pages);
                        self.cursor.set_len(self.movies.len());
                    }
                    Err(_) => {
                        self.error = Some(if self.category.is_search() {
                            "Search failed. Please try again.".to_string()
                        } else {
                            "Failed to load movies. Please try again.".to_string()
                        });
                    }
                }
                self.loading = false;
            }

            AppMsg::Detail {
                ticket,
                summary,
                result,
            } => {
                if ticket != self.detail_ticket {
                    return;
                }
                self.detail_loading = false;
                self.detail_scroll = 0;
                // Detail failure is non-fatal: fall back to what the grid knew
                self.selected = Some(result.unwrap_or_else(|_| summary.into()));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Translate a key event into an action. Pure navigation (cursor moves,
    /// text editing, overlay scroll) is handled in place and returns `None`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Any keypress dismisses the status toast
        self.status = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        if self.input_mode == InputMode::Editing {
            return self.handle_editing_key(key);
        }

        if self.selected.is_some() {
            return self.handle_overlay_key(key);
        }

        self.handle_browse_key(key)
    }

    /// Keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                Some(Action::SubmitSearch(self.input.text.clone()))
            }
            KeyCode::Char(c) => {
                self.input.insert(c);
                None
            }
            KeyCode::Backspace => {
                self.input.backspace();
                None
            }
            KeyCode::Delete => {
                self.input.delete();
                None
            }
            KeyCode::Left => {
                self.input.cursor_left();
                None
            }
            KeyCode::Right => {
                self.input.cursor_right();
                None
            }
            KeyCode::Home => {
                self.input.cursor_home();
                None
            }
            KeyCode::End => {
                self.input.cursor_end();
                None
            }
            _ => None,
        }
    }

    /// Keys while the detail overlay is open
    fn handle_overlay_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::CloseDetail),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('f') => self
                .selected
                .as_ref()
                .map(|d| Action::ToggleFavorite(summary_of(d))),
            KeyCode::Char('y') => Some(Action::Share),
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }

    /// Keys in the main browse view
    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.input_mode = InputMode::Editing;
                None
            }
            KeyCode::Char('1') | KeyCode::Char('p') => {
                Some(Action::SelectCategory(Category::Popular))
            }
            KeyCode::Char('2') | KeyCode::Char('t') => {
                Some(Action::SelectCategory(Category::TopRated))
            }
            KeyCode::Char('3') | KeyCode::Char('u') => {
                Some(Action::SelectCategory(Category::Upcoming))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.down();
                None
            }
            KeyCode::PageUp => {
                self.cursor.page_up(10);
                None
            }
            KeyCode::PageDown => {
                self.cursor.page_down(10);
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor.first();
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor.last();
                None
            }
            KeyCode::Enter => self.selected_summary().cloned().map(Action::SelectMovie),
            KeyCode::Char('f') => self.selected_summary().cloned().map(Action::ToggleFavorite),
            KeyCode::Char('m') => Some(Action::LoadMore),
            _ => None,
        }
    }
}

/// Downgrade a detail back to the summary shape (favorites from the overlay).
fn summary_of(detail: &MovieDetail) -> MovieSummary {
    MovieSummary {
        id: detail.id,
        title: detail.title.clone(),
        poster_path: detail.poster_path.clone(),
        vote_average: detail.vote_average,
        release_date: detail.release_date.clone(),
        overview: detail.overview.clone(),
        genre_ids: detail.genres.iter().map(|g| g.id).collect(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
