//! Termination signal handling

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::info;

/// Register for SIGTERM and SIGINT; call at startup so failures are fatal
pub fn termination_signals() -> std::io::Result<Signals> {
    Signals::new([SIGTERM, SIGINT])
}

/// Resolve on the first registered signal, returning its number
pub async fn shutdown_signal(mut signals: Signals) -> i32 {
    let handle = signals.handle();
    let signal = signals.next().await.unwrap_or(SIGTERM);
    info!("Received signal: {}", signal);
    handle.close();
    signal
}
