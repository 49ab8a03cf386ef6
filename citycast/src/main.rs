//! citycast - terminal weather lookup
//!
//! # Usage
//!
//! ```sh
//! # Start with an empty search box
//! citycast
//!
//! # Look up a city right away
//! citycast --city London
//!
//! # Log to a file (RUST_LOG controls the level)
//! RUST_LOG=debug citycast --log-file citycast.log
//! ```

use std::io;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use citycast::action::Action;
use citycast::config::Args;
use citycast::logging;
use citycast::runtime::Runtime;
use citycast::state::AppState;
use citycast_core::OpenMeteoClient;

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = args.log_file.as_deref() {
        logging::init_file_logging(path)?;
    }

    // Build the client before entering TUI mode so errors reach stderr
    let client = match OpenMeteoClient::new(args.client_config()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: could not create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let state = match args.initial_query() {
        Some(city) => AppState::with_query(city),
        None => AppState::new(),
    };
    let submit_on_start = args.initial_query().is_some();

    let mut runtime = Runtime::new(state, Arc::new(client));
    if submit_on_start {
        runtime.enqueue(Action::WeatherFetch);
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime.run(&mut terminal).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal error");
    }
    result
}
