//! Graceful shutdown coordination with signal handling.
//!
//! SIGTERM and SIGINT cancel a [`CancellationToken`]. The HTTP server stops
//! accepting connections, running review sessions see the cancellation at
//! their next channel operation, and the process waits a bounded time for
//! them to finish.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Installs signal handlers for SIGTERM and SIGINT.
///
/// Returns a token that is cancelled when either signal is received.
pub fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        wait_for_signal().await;
        trigger.cancel();
    });

    token
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable, listening for Ctrl+C only");
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received SIGINT, initiating shutdown");
            }
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::info!("Received SIGINT, initiating shutdown"),
        _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating shutdown"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Received Ctrl+C, initiating shutdown");
    }
}

/// Waits up to `grace` for tracked review sessions to finish.
///
/// Returns `true` if every session finished in time.
pub async fn drain_sessions(sessions: &TaskTracker, grace: Duration) -> bool {
    sessions.close();

    if sessions.is_empty() {
        tracing::info!("No review sessions to drain");
        return true;
    }

    tracing::info!(count = sessions.len(), "Waiting for review sessions to finish");
    match tokio::time::timeout(grace, sessions.wait()).await {
        Ok(()) => {
            tracing::info!("All review sessions finished");
            true
        }
        Err(_) => {
            tracing::warn!(
                remaining = sessions.len(),
                grace_secs = grace.as_secs(),
                "Review sessions still running after grace period"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_with_no_sessions_returns_immediately() {
        let tracker = TaskTracker::new();
        assert!(drain_sessions(&tracker, Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn drain_waits_for_running_session() {
        let tracker = TaskTracker::new();
        let token = tracker.token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            drop(token);
        });

        assert!(drain_sessions(&tracker, Duration::from_secs(5)).await);
    }

    #[tokio::test]
    async fn drain_gives_up_after_grace() {
        let tracker = TaskTracker::new();
        let _token = tracker.token();

        assert!(!drain_sessions(&tracker, Duration::from_millis(20)).await);
    }
}
