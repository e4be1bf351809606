//! ReelTUI - terminal movie discovery over the TMDB catalog
//!
//! Browse popular, top rated, and upcoming movies, search the catalog, and
//! open a detail overlay with cast and financials. Favorites live for the
//! session.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! reeltui
//!
//! # CLI mode (for automation)
//! reeltui search "blade runner"
//! reeltui popular --page 2
//! reeltui info 414906 --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use reeltui::api::TmdbClient;
use reeltui::app::{Action, App, AppMsg, Effect};
use reeltui::cli::{Cli, Command, ExitCode, Output};
use reeltui::commands;
use reeltui::config::Config;
use reeltui::models::Category;
use reeltui::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui().await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &output).await,

        Some(Command::Popular(cmd)) => {
            commands::listing_cmd(Category::Popular, cmd, &output).await
        }

        Some(Command::TopRated(cmd)) => {
            commands::listing_cmd(Category::TopRated, cmd, &output).await
        }

        Some(Command::Upcoming(cmd)) => {
            commands::listing_cmd(Category::Upcoming, cmd, &output).await
        }

        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &output).await,

        // Unreachable: is_cli_mode already checked
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui() -> Result<()> {
    // Resolve the API key before touching the terminal so a missing key
    // prints a normal error instead of garbling the screen
    let config = Config::load();
    let api_key = config.tmdb_api_key()?;
    let client = TmdbClient::new(api_key);

    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, dispatches actions, renders UI
async fn run_event_loop(terminal: &mut Tui, client: TmdbClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new();

    // Initial load: popular movies, page 1
    if let Some(effect) = app.dispatch(Action::SelectCategory(Category::Popular)) {
        run_effect(&client, &tx, effect);
    }

    while app.running {
        terminal.draw(|frame| ui::render(frame, &app))?;

        // Poll for input with a timeout so completions keep flowing
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = app.handle_key(key) {
                        if let Some(effect) = app.dispatch(action) {
                            run_effect(&client, &tx, effect);
                        }
                    }
                }
            }
        }

        // Fold in any completed requests
        while let Ok(msg) = rx.try_recv() {
            app.apply(msg);
        }
    }

    Ok(())
}

/// Execute a network effect on a background task.
///
/// The completion carries the request ticket; `App::apply` drops responses
/// that are no longer the latest of their kind.
fn run_effect(client: &TmdbClient, tx: &mpsc::UnboundedSender<AppMsg>, effect: Effect) {
    let client = client.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let msg = match effect {
            Effect::FetchListing(request) => {
                let result = if request.category.is_search() {
                    client.search(&request.query, request.page).await
                } else {
                    client.fetch_category(request.category, request.page).await
                };
                AppMsg::Listing {
                    ticket: request.ticket,
                    page: request.page,
                    result,
                }
            }
            Effect::FetchDetail { summary, ticket } => {
                let result = client.movie_detail(summary.id).await;
                AppMsg::Detail {
                    ticket,
                    summary,
                    result,
                }
            }
        };

        // Receiver gone means the app is shutting down
        let _ = tx.send(msg);
    });
}
