// src/core/poller.rs

use crate::core::client::PrivGuardApi;
use crate::events::AppEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::interval;
use tracing::{debug, info, warn};

/// Background task that fetches a dashboard snapshot on every tick.
///
/// The first tick fires immediately. Each tick spawns its own fetch and does
/// not wait for the previous one, so a slow response never delays the next
/// request and responses may arrive out of order. Failures are reported and
/// polling carries on unchanged.
pub async fn dashboard_poller_task(
    api: Arc<dyn PrivGuardApi>,
    events: mpsc::Sender<AppEvent>,
    mut shutdown: broadcast::Receiver<()>,
    period: Duration,
) {
    info!(period_ms = period.as_millis() as u64, "Dashboard poller started.");
    let mut ticker = interval(period);
    let mut cycle: u64 = 0;

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            _ = ticker.tick() => {
                cycle += 1;
                debug!(cycle, "Dashboard poll tick.");
                let api = Arc::clone(&api);
                let events = events.clone();
                tokio::spawn(async move {
                    let outcome = api.fetch_dashboard().await;
                    if let Err(e) = &outcome {
                        warn!(cycle, error = %e, "Dashboard poll failed.");
                    }
                    let _ = events.send(AppEvent::DashboardRefreshed(outcome)).await;
                });
            }
        }
    }
    info!(cycles = cycle, "Dashboard poller stopped.");
}
