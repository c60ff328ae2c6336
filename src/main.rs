//! # Evil Scientist Corp. CLI Entry Point
//!
//! This is the main entry point for the `evilcorp` TUI.
//!
//! ## Overview
//!
//! A terminal client for the Evil Scientist Corp. backend. After logging in,
//! the dashboard shows a random minion from the item API, the table of users
//! from the backend, and a chat box wired to the backend's assistant.
//!
//! ## Usage
//!
//! ```bash
//! # Start the TUI against the default backend (http://127.0.0.1:8000)
//! evilcorp
//!
//! # Point at another backend
//! evilcorp --backend-url http://lair.local:8000
//!
//! # Print the user table and exit
//! evilcorp --dump-users
//! ```
//!
//! Settings are read from `~/.config/evilcorp/config.json`; flags override
//! them for a single run. Logs go to `~/.local/share/evilcorp/evilcorp.log`,
//! filtered by `EVILCORP_LOG`.

use evilcorp::grid::render_grid;
use evilcorp::logging;
use evilcorp::remote::users::USERS_TITLE;
use evilcorp::remote::{RemoteClient, USER_COLUMNS};
use evilcorp::ui;
use evilcorp::ui::config::{Config, ConfigStore};
use evilcorp::ui::input::Effect;
use evilcorp::ui::requests::{self, Response};
use evilcorp::ui::theme::Theme;
use evilcorp::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Evil Scientist Corp. - users, minions and chat in your terminal
#[derive(Parser, Debug)]
#[command(name = "evilcorp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal dashboard for the Evil Scientist Corp. backend", long_about = None)]
struct Args {
    /// Origin of the backend serving /sql/ and /chat/memory-chat
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Base URL of the minion API (the minion id is appended)
    #[arg(long, value_name = "URL")]
    item_api_url: Option<String>,

    /// Colour theme to start with
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the user table to stdout and exit
    #[arg(long)]
    dump_users: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

/// Apply command-line overrides on top of the stored configuration.
fn effective_config(stored: &Config, args: &Args) -> Config {
    let mut config = stored.clone();
    if let Some(url) = &args.backend_url {
        config.backend_url = url.clone();
    }
    if let Some(url) = &args.item_api_url {
        config.item_api_url = url.clone();
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    config
}

fn resolve_theme(name: &str) -> Theme {
    match Theme::by_name(name) {
        Some(theme) => theme.clone(),
        None => {
            eprintln!(
                "Warning: unknown theme '{}', using {}",
                name,
                Theme::default_theme().name
            );
            Theme::default_theme().clone()
        }
    }
}

async fn run_application(args: Args) -> Result<()> {
    let mut store = ConfigStore::open();
    if let Some(err) = store.load_error() {
        eprintln!("Warning: {}; using defaults, settings will not be saved", err);
    }
    let config = effective_config(store.config(), &args);
    let client = RemoteClient::new(config.endpoints())?;

    info!(
        backend = %config.backend_url,
        item_api = %config.item_api_url,
        "starting"
    );

    if args.dump_users {
        let users = client.fetch_users().await?;
        print!(
            "{}",
            render_grid(USERS_TITLE, &USER_COLUMNS, &users).to_plain_text()
        );
        return Ok(());
    }

    let theme = resolve_theme(&config.theme);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme);
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &client,
        &tx,
        &mut rx,
        &mut event_reader,
        &mut store,
    );

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    info!("exiting");
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Drain finished requests into app state.
fn apply_responses(app: &mut App, rx: &mut UnboundedReceiver<Response>) {
    while let Ok(response) = rx.try_recv() {
        app.apply(response);
    }
}

/// Carry out the side effects of one key press.
fn run_effects(
    effects: Vec<Effect>,
    client: &RemoteClient,
    tx: &UnboundedSender<Response>,
    store: &mut ConfigStore,
) {
    for effect in effects {
        match effect {
            Effect::Spawn(request) => requests::spawn(client.clone(), request, tx.clone()),
            Effect::SaveTheme(name) => match store.save_theme(name) {
                Ok(true) => {}
                Ok(false) => info!(theme = name, "theme not saved, config file was not loaded"),
                Err(e) => warn!("Failed to save theme: {:#}", e),
            },
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &RemoteClient,
    tx: &UnboundedSender<Response>,
    rx: &mut UnboundedReceiver<Response>,
    event_reader: &mut dyn EventReader,
    store: &mut ConfigStore,
) -> Result<()> {
    loop {
        apply_responses(app, rx);

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Poll faster while something is in flight so responses show up promptly
        let poll_timeout = if app.is_busy() {
            Duration::from_millis(33)
        } else {
            Duration::from_millis(100)
        };

        let event = match event_reader.read_event(poll_timeout)? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                let effects = ui::input::handle_key(app, key);
                run_effects(effects, client, tx, store);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
