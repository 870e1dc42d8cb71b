//! In-process broadcast bus for connection-state changes.

use tokio::sync::broadcast;
use tracing::debug;

use kith_core::config::EventsConfig;
use kith_core::models::ConnectionChange;

/// Fan-out bus for `ConnectionChange` events. Cheap to clone — clones share
/// the channel.
///
/// Publishing never blocks: slow subscribers are overrun rather than allowed
/// to apply backpressure to ledger writes, and they find out through
/// [`ChangeFeed::Lagged`].
#[derive(Clone)]
pub struct ChangeBus {
    tx: broadcast::Sender<ConnectionChange>,
}

impl ChangeBus {
    /// Create a bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Create a bus from config.
    pub fn with_config(config: &EventsConfig) -> Self {
        Self::new(config.channel_capacity)
    }

    /// Publish a change to all current subscribers. Returns how many
    /// subscribers the change was delivered to (0 when nobody listens —
    /// not an error; the ledger publishes unconditionally).
    pub fn publish(&self, change: ConnectionChange) -> usize {
        match self.tx.send(change) {
            Ok(delivered) => delivered,
            Err(_) => {
                debug!("change published with no subscribers");
                0
            }
        }
    }

    /// Open a new subscription starting at the current position.
    pub fn subscribe(&self) -> ChangeSubscription {
        ChangeSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::with_config(&EventsConfig::default())
    }
}

/// One subscriber's view of the change feed.
pub struct ChangeSubscription {
    rx: broadcast::Receiver<ConnectionChange>,
}

/// What a subscriber observes on each poll of the feed.
#[derive(Debug, Clone)]
pub enum ChangeFeed {
    /// The next change, in order.
    Change(ConnectionChange),
    /// The subscriber fell behind and `missed` changes were dropped. The
    /// feed continues after the gap; the subscriber must do a full refresh
    /// before trusting incremental updates again.
    Lagged { missed: u64 },
    /// The bus shut down.
    Closed,
}

impl ChangeSubscription {
    /// Wait for the next feed item.
    pub async fn next(&mut self) -> ChangeFeed {
        match self.rx.recv().await {
            Ok(change) => ChangeFeed::Change(change),
            Err(broadcast::error::RecvError::Lagged(missed)) => ChangeFeed::Lagged { missed },
            Err(broadcast::error::RecvError::Closed) => ChangeFeed::Closed,
        }
    }

    /// Non-blocking poll. `None` means the feed is currently empty.
    pub fn try_next(&mut self) -> Option<ChangeFeed> {
        use broadcast::error::TryRecvError;
        match self.rx.try_recv() {
            Ok(change) => Some(ChangeFeed::Change(change)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Lagged(missed)) => Some(ChangeFeed::Lagged { missed }),
            Err(TryRecvError::Closed) => Some(ChangeFeed::Closed),
        }
    }
}
