mod app;
mod backend;
mod bridge;
mod cli;
mod config;
mod error;
mod event;
mod logging;
mod model;
mod providers;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};

fn main() -> io::Result<()> {
    // Enable backtraces by default so panics show call stacks
    if std::env::var("RUST_BACKTRACE").is_err() {
        // SAFETY: called at the very start of main, before any other threads
        unsafe {
            std::env::set_var("RUST_BACKTRACE", "1");
        }
    }

    // Load .env before reading credentials; a missing file is fine
    let _ = dotenvy::dotenv();
    let credentials = config::Credentials::from_env();

    let cli = Cli::parse();
    match cli.command {
        None => run_tui(credentials)?,
        Some(Commands::Fetch { provider, channel }) => {
            logging::init_stderr();
            let bridge = bridge::start(credentials);
            cli::fetch::execute(&bridge, provider, channel);
        }
        Some(Commands::Summarize) => {
            logging::init_stderr();
            let bridge = bridge::start(credentials);
            cli::fetch::execute_summarize(&bridge);
        }
        Some(Commands::Check) => {
            cli::check::execute(&credentials);
        }
    }

    Ok(())
}

/// Start the TUI
fn run_tui(credentials: config::Credentials) -> io::Result<()> {
    if let Err(e) = logging::init_file() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let settings = config::load_settings();
    let slack_channel = config::slack_channel(&settings);

    // The backend thread owns every credential from here on
    let bridge = bridge::start(credentials);
    let mut app = App::new(bridge, slack_channel);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::handle_events(app)? {
            return Ok(());
        }

        // Drain settled bridge calls after each tick
        app.poll_results();
    }
}
