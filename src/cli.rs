//! CLI - Command Line Interface for ReelTUI
//!
//! Every listing the TUI can show is also scriptable. All output is
//! JSON-parseable for automation.
//!
//! # Examples
//!
//! ```bash
//! # Search the catalog
//! reeltui search "the batman" --json
//!
//! # Browse listings
//! reeltui popular --page 2
//! reeltui top-rated --limit 5
//!
//! # Full details with cast
//! reeltui info 414906
//! ```

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::IsTerminal;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Movie not found
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// ReelTUI - terminal movie discovery over the TMDB catalog
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "reeltui",
    version,
    about = "Terminal UI for discovering movies",
    long_about = "Browse popular, top rated, and upcoming movies, search the \
                  catalog, and inspect full details with cast and financials.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  reeltui                        Launch interactive TUI\n\
                  reeltui search \"blade runner\"  Search the catalog\n\
                  reeltui popular --page 2       Second page of popular movies\n\
                  reeltui info 414906 --json     Full details as JSON"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for movies
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// List popular movies
    #[command(visible_alias = "pop")]
    Popular(ListingCmd),

    /// List top rated movies
    #[command(name = "top-rated", visible_alias = "top")]
    TopRated(ListingCmd),

    /// List upcoming movies
    #[command(visible_alias = "up")]
    Upcoming(ListingCmd),

    /// Get full details for a movie, including cast
    #[command(visible_alias = "i")]
    Info(InfoCmd),
}

/// Search for movies by query
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Result page (1-based)
    #[arg(long, short = 'p', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Maximum number of results to print
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Shared arguments for the listing commands
#[derive(Args, Debug)]
pub struct ListingCmd {
    /// Result page (1-based)
    #[arg(long, short = 'p', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Maximum number of results to print
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Full details for one movie
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// TMDB movie id
    pub id: u64,
}

// =============================================================================
// Output Handling
// =============================================================================

/// JSON envelope for scripted consumers
#[derive(Debug, Serialize)]
struct JsonOutput<T: Serialize> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    exit_code: i32,
}

impl<T: Serialize> JsonOutput<T> {
    fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    fn error_msg(msg: &str, code: ExitCode) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.to_string()),
            exit_code: code.into(),
        }
    }
}

/// Output formatting helper shared by all command handlers
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a preformatted human line (suppressed in JSON mode)
    pub fn line(&self, msg: impl std::fmt::Display) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
