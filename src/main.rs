use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, time::Duration};
use tracing::{debug, info};

/// TrueQuickplay server browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/quickplaytui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (jk, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Bypass the backend cache on the first fetch
    #[arg(long)]
    refresh: bool,
}

mod app;
mod config;
mod handlers;
mod services;
mod ui;
mod utils;

use config::Config;
use quickplaytui::api::QuickplayClient;
use quickplaytui::{api, logic, model};

pub struct App {
    pub model: model::Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<services::api::ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<services::api::ApiResponse>,
    launch_check_tx: tokio::sync::mpsc::UnboundedSender<String>,
    launch_check_rx: tokio::sync::mpsc::UnboundedReceiver<String>,

    open_command: Option<String>,
    clipboard_command: Option<String>,
    /// Kept alive so X11/Wayland keep serving the copied text
    clipboard: Option<arboard::Clipboard>,
    launch_protocol: String,
    app_id: u32,
    launch_check_delay: Duration,
    base_url: String,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let client = QuickplayClient::new(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        let (api_tx, api_rx) = services::api::spawn_api_service(client);
        let (launch_check_tx, launch_check_rx) = tokio::sync::mpsc::unbounded_channel();

        Ok(App {
            model: model::Model::new(config.vim_mode),
            api_tx,
            api_rx,
            launch_check_tx,
            launch_check_rx,
            open_command: config.open_command,
            clipboard_command: config.clipboard_command,
            clipboard: None,
            launch_protocol: config.launch_protocol,
            app_id: config.app_id,
            launch_check_delay: Duration::from_secs(config.launch_check_secs),
            base_url: config.api_url,
        })
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `None` when no config file exists; built-in defaults apply then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/quickplaytui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("quickplaytui").join("config.yaml");

        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(cli_path: Option<String>) -> Result<Config> {
    match get_config_path(cli_path)? {
        Some(path) => {
            info!(path = %path.display(), "Loading config");
            let config_str = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_yaml::from_str(&config_str)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => {
            info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = services::logger::init(args.debug)?;

    let mut config = load_config(args.config)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    // Initialize app and kick off the first fetch
    let mut app = App::new(config)?;
    info!(base_url = %app.base_url, "Starting");
    app.fetch_servers(args.refresh);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Deferred join checks that have come due
        while let Ok(address) = app.launch_check_rx.try_recv() {
            app.handle_launch_check(&address);
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::keyboard::handle_key(app, key)?;
                }
                Event::FocusGained => {
                    debug!("Terminal focus gained");
                    app.model.ui.terminal_focused = true;
                }
                Event::FocusLost => {
                    debug!("Terminal focus lost");
                    app.model.ui.terminal_focused = false;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
