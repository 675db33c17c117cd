use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use pinwheel::app::ProgressIndicator;
use pinwheel::app::config::{Config, ConfigOverrides};
use pinwheel::app::demo::{Action, DemoState, reduce};
use pinwheel::app::ports::ConfigStore;
use pinwheel::domain::Rgba;
use pinwheel::infra::adapters::TomlConfigStore;
use pinwheel::ui::adapters::{RedrawHandle, TerminalSurface, TokioTimerService};
use pinwheel::ui::components::MainLayout;
use pinwheel::ui::event::handler::handle_event;
use pinwheel::ui::tui::TuiRunner;
use pinwheel::{error, logging};

/// Spinning busy indicator demo: two buttons and a delay slider driving one indicator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Milliseconds between animation steps
    #[arg(long)]
    delay: Option<u32>,

    /// Capsule color as #rrggbb
    #[arg(long)]
    color: Option<Rgba>,

    /// Keep drawing the frozen indicator while stopped
    #[arg(long)]
    show_stopped: bool,

    /// Indicator side in pixels (two pixels per terminal row)
    #[arg(long)]
    size: Option<u32>,

    /// Config file (default: <config dir>/pinwheel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            delay_ms: self.delay,
            color: self.color,
            displayed_when_stopped: self.show_stopped,
            size: self.size,
        }
    }
}

type DemoScreen = DemoState<TokioTimerService, TerminalSurface>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_guard = logging::init(args.log_file.as_deref())?;
    error::install_hooks(log_guard.as_ref().map(|guard| guard.path.as_path()))?;

    let config = load_config(args.config.clone())?.with_overrides(&args.overrides());
    tracing::debug!(?config, "configuration resolved");

    let mut tui = TuiRunner::new()?;

    let surface = TerminalSurface::new();
    let redraw = surface.redraw_handle();
    let timer = TokioTimerService::new(tui.event_sender());
    let indicator = ProgressIndicator::with_config(timer, surface, &config.indicator);
    let mut state = DemoState::new(indicator)?;

    tui.enter()?;
    let result = run(&mut tui, &mut state, &config, &redraw).await;
    // Cancel timers before the terminal is restored.
    drop(state);
    tui.exit()?;

    result
}

async fn run(
    tui: &mut TuiRunner,
    state: &mut DemoScreen,
    config: &Config,
    redraw: &RedrawHandle,
) -> Result<()> {
    if config.demo.autostart {
        reduce(state, Action::StartSpin)?;
    }

    while let Some(event) = tui.next_event().await {
        let action = handle_event(event);
        if !action.is_none() {
            reduce(state, action)?;
        }

        if state.should_quit {
            break;
        }

        let redraw_requested = redraw.take();
        if redraw_requested || state.is_dirty() {
            tui.terminal()
                .draw(|frame| MainLayout::render(frame, state, &config.demo))?;
            state.clear_dirty();
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let store = match path {
        Some(path) => TomlConfigStore::with_path(path),
        None => TomlConfigStore::new()?,
    };

    let loaded = store
        .load()
        .wrap_err_with(|| format!("Failed to load {}", store.storage_path().display()))?;

    Ok(loaded.unwrap_or_default())
}
