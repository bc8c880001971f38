//! Usage Timer - counts down, warns, then powers off the machine
//!
//! This is the main entry point for the usage-timer application.

use std::sync::Arc;
use tokio::{
    net::TcpListener,
    sync::{mpsc, watch},
};
use tracing::{info, warn};

use usage_timer::{
    api::create_router,
    config::Config,
    services::{
        check_poweroff_available, CommandShutdown, DesktopNotifier, DryRunShutdown, LogNotifier,
        Notifier, Shutdown,
    },
    state::{AppState, TimerState},
    ui::TerminalUi,
    utils::{shutdown_signal, termination_signals},
    Session,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("usage_timer={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting usage-timer v{}", env!("CARGO_PKG_VERSION"));

    // Notifier identity is fixed for the whole process
    let notifier: Arc<dyn Notifier> = if config.no_notify {
        Arc::new(LogNotifier)
    } else {
        Arc::new(DesktopNotifier::new(config.app_name.clone()))
    };

    let shutdown: Arc<dyn Shutdown> = if config.dry_run {
        info!("Dry run: the machine will not be powered off");
        Arc::new(DryRunShutdown)
    } else {
        let argv = config.poweroff_argv();
        if let Err(e) = check_poweroff_available(&argv).await {
            warn!("{}", e);
        }
        Arc::new(CommandShutdown::new(argv))
    };

    let signals = termination_signals()?;
    let (command_tx, command_rx) = mpsc::channel(8);
    let (status_tx, status_rx) = watch::channel(TimerState::new());

    if config.listen {
        let state = Arc::new(AppState::new(config.app_name.clone(), command_tx, status_rx));
        let app = create_router(state);
        let addr = config.address();
        let listener = TcpListener::bind(&addr).await?;

        info!("Control server running on http://{}", addr);
        info!("  POST /more-time - Request five more minutes");
        info!("  GET  /status    - Check countdown status");
        info!("  GET  /health    - Health check");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Control server error: {}", e);
            }
        });
    }

    let session = Session::new(TerminalUi::spawn(), notifier, shutdown, command_rx, status_tx)
        .assume_yes(config.yes);

    tokio::select! {
        outcome = session.run(config.minutes.clone()) => {
            match outcome {
                Some(outcome) => info!(
                    "Countdown complete after {} ticks ({} extensions)",
                    outcome.ticks, outcome.extensions_applied
                ),
                None => info!("No countdown started"),
            }
        }
        signal = shutdown_signal(signals) => {
            info!("Interrupted by signal {}", signal);
        }
    }

    info!("usage-timer exiting");
    Ok(())
}
