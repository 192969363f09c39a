use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use alloy_primitives::ChainId;
use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use post_project::app::App;
use post_project::config::{self, Config, Overrides};
use post_project::core::NotifyLevel;
use post_project::infrastructure::crosschain::DemoCrossChain;
use post_project::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use post_project::{logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "post-project",
    version,
    about = "Post a freelance project across Avalanche chains (demo mode)"
)]
struct Args {
    /// HTTP JSON-RPC endpoint used to detect the current chain
    #[arg(long)]
    rpc: Option<String>,

    /// Current chain id when no RPC endpoint is given
    #[arg(long)]
    chain_id: Option<ChainId>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(format!("{err:#}"))),
    };
    let overrides = Overrides {
        rpc: args.rpc,
        chain_id: args.chain_id,
        log_dir: args.log_dir,
    };

    let mut warnings = Vec::new();
    if let Some(err) = config_error {
        warnings.push(format!("Config ignored: {err}"));
    }
    let _log_guard = match config.log_dir(&overrides) {
        Some(dir) => match logging::init_logging_to_dir(&dir, &config.log_filter()) {
            Ok(guard) => Some(guard),
            Err(err) => {
                warnings.push(format!("Logging disabled: {err:#}"));
                None
            }
        },
        None => None,
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting post-project");

    let network = config.network_config(&overrides);
    let runtime = RuntimeBridge::new(network.clone(), Arc::new(DemoCrossChain::new()))?;

    let mut app = App::with_chains(config.chains());
    app.ctx.network_source = network.display();
    if warnings.is_empty() {
        app.set_status("Detecting chain…", NotifyLevel::Info);
    } else {
        let text = warnings.join("; ");
        tracing::warn!(%text, "startup warnings");
        app.set_status(text, NotifyLevel::Warn);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, runtime);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %format!("{err:#}"), "exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &mut runtime);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        pump_background(&mut app, &mut runtime);
    }
}

fn pump_background(app: &mut App, runtime: &mut RuntimeBridge) {
    if let Some(request) = app.take_submission_request() {
        if let Err(err) = runtime.send(RuntimeCommand::SubmitProject { request }) {
            tracing::error!(error = %err, "could not hand submission to worker");
            app.apply_worker_lost();
        }
    }

    if app.take_detect_request() {
        if let Err(err) = runtime.send(RuntimeCommand::DetectNetwork) {
            tracing::error!(error = %err, "could not ask worker for the chain");
            app.apply_worker_lost();
        }
    }

    for event in runtime.poll_events() {
        match event {
            RuntimeEvent::NetworkDetected { chain_id, source } => {
                app.apply_network_detected(chain_id, source)
            }
            RuntimeEvent::SubmissionFinished { outcome } => app.apply_submission_finished(outcome),
            RuntimeEvent::Error { message } => app.apply_runtime_error(message),
            RuntimeEvent::WorkerLost => app.apply_worker_lost(),
        }
    }
}
