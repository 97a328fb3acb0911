//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Wait for SIGTERM, SIGINT or SIGHUP and return the signal number.
///
/// Returns `None` if the signal handler could not be installed, in which
/// case the future never resolves.
pub async fn shutdown_signal() -> Option<i32> {
    let mut signals = match Signals::new([SIGTERM, SIGINT, SIGHUP]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to install signal handler: {}", e);
            return futures::future::pending().await;
        }
    };

    let signal = signals.next().await;
    if let Some(signal) = signal {
        info!("Received signal: {}", signal);
    }
    signal
}
