//! Long-lived subscription loop that drives a `ChangeHandler`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use kith_core::config::EventsConfig;

use crate::bus::{ChangeBus, ChangeFeed};
use crate::handler::ChangeHandler;

/// Drives a handler from the change feed, resubscribing with backoff when
/// the feed closes. While detached, the handler's consumers are expected to
/// fall back to on-demand re-fetch; every (re)attachment starts with a
/// `refresh` since an unknown number of changes may have passed.
pub struct ResilientSubscriber {
    bus: ChangeBus,
    config: EventsConfig,
    handler: Arc<dyn ChangeHandler>,
}

/// Handle to a spawned subscriber task.
pub struct SubscriberHandle {
    shutdown_tx: broadcast::Sender<()>,
    join: tokio::task::JoinHandle<()>,
}

impl SubscriberHandle {
    /// Signal the loop to stop and return its join handle.
    pub fn stop(self) -> tokio::task::JoinHandle<()> {
        let _ = self.shutdown_tx.send(());
        self.join
    }
}

impl ResilientSubscriber {
    pub fn new(bus: ChangeBus, config: EventsConfig, handler: Arc<dyn ChangeHandler>) -> Self {
        Self {
            bus,
            config,
            handler,
        }
    }

    /// Spawn the subscription loop on the current tokio runtime.
    pub fn spawn(self) -> SubscriberHandle {
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let join = tokio::spawn(self.run(shutdown_rx));
        SubscriberHandle { shutdown_tx, join }
    }

    async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) {
        let delay = Duration::from_secs(self.config.reconnect_delay_secs.max(1));
        let mut attempts: u32 = 0;

        'outer: loop {
            let mut subscription = self.bus.subscribe();
            // State may have moved while we were detached.
            self.handler.refresh();
            debug!("change subscription attached");

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        info!("change subscriber shutting down");
                        break 'outer;
                    }
                    feed = subscription.next() => match feed {
                        ChangeFeed::Change(change) => {
                            attempts = 0;
                            self.handler.apply(&change);
                        }
                        ChangeFeed::Lagged { missed } => {
                            warn!(missed, "change subscriber lagged, forcing refresh");
                            self.handler.refresh();
                        }
                        ChangeFeed::Closed => break,
                    }
                }
            }

            attempts += 1;
            if self.config.max_reconnect_attempts > 0
                && attempts >= self.config.max_reconnect_attempts
            {
                warn!(attempts, "change feed closed, giving up");
                break;
            }
            warn!(attempts, delay_secs = delay.as_secs(), "change feed closed, retrying");
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = sleep(delay) => {}
            }
        }
    }
}
