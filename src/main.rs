use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::panic;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use workspace_onboard::config::OnboardConfig;
use workspace_onboard::error::{OnboardError, Result};
use workspace_onboard::event::{Event, EventHandler};
use workspace_onboard::flow::StepId;
use workspace_onboard::session::SessionStore;
use workspace_onboard::ui;
use workspace_onboard::wizard::WizardApp;

#[derive(Parser, Debug)]
#[command(name = "workspace-onboard")]
#[command(author, version, about = "Terminal onboarding wizard for a company workspace")]
struct Args {
    /// Path to config file (default: platform config dir)
    #[arg(long)]
    config: Option<String>,

    /// Start at a specific step (name or 1-based number), overriding a saved session
    #[arg(long)]
    step: Option<String>,

    /// Ignore any saved session and start from the first step
    #[arg(long)]
    fresh: bool,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging only if log file is specified
    if let Some(ref log_path) = args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .ok();

        if let Some(file) = file {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();

            info!("Starting workspace-onboard");
        }
    }

    let config = match args.config {
        Some(ref path) => OnboardConfig::load_from(path).unwrap_or_default(),
        None => OnboardConfig::load().unwrap_or_default(),
    };

    let store = match config.session.state_file {
        Some(ref path) => Some(SessionStore::at(path)),
        None => SessionStore::new(),
    };

    if args.fresh {
        if let Some(ref store) = store {
            store.clear();
        }
    }

    // Resume target: --step wins over the saved session
    let resume = match args.step {
        Some(ref name) => {
            let step = StepId::from_name(name);
            if step.is_none() {
                warn!("--step '{name}' does not name a step, starting at the beginning");
            }
            step
        }
        None => store.as_ref().and_then(SessionStore::load),
    };

    // Set up panic handler to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = WizardApp::new(config, resume);

    let result = run(&mut terminal, &mut app, store.as_ref()).await;

    restore_terminal()?;

    if let Err(ref e) = result {
        tracing::error!("Application error: {}", e);
    }

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().map_err(|e| OnboardError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| OnboardError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| OnboardError::Terminal(e.to_string()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| OnboardError::Terminal(e.to_string()))?;
    execute!(stdout(), LeaveAlternateScreen).map_err(|e| OnboardError::Terminal(e.to_string()))?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut WizardApp,
    store: Option<&SessionStore>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut events = EventHandler::new(tick_rate);

    // The flow owns the truth about the current step; the session file is a
    // passive mirror updated whenever the step changes.
    let mut mirrored_step: Option<StepId> = None;

    loop {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(|e| OnboardError::Terminal(e.to_string()))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => app.handle_key(key),
                Event::Resize => {}
                Event::Tick => app.tick(),
            }
        }

        if let Some(store) = store {
            sync_session(store, app, &mut mirrored_step);
        }

        if app.should_exit {
            break;
        }
    }

    Ok(())
}

/// Push the current step name outward when it changes; drop the session once
/// the wizard is complete.
fn sync_session(store: &SessionStore, app: &WizardApp, mirrored: &mut Option<StepId>) {
    if app.completed {
        if mirrored.is_some() {
            store.clear();
            *mirrored = None;
        }
        return;
    }

    let current = app.current_step();
    if *mirrored != Some(current) {
        if let Err(e) = store.store(current) {
            warn!("failed to persist session step: {e}");
        }
        *mirrored = Some(current);
    }
}
