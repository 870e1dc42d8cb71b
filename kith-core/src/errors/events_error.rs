/// Change Notification Layer errors.
#[derive(Debug, thiserror::Error)]
pub enum EventsError {
    /// The change bus has shut down; subscribers should fall back to
    /// on-demand re-fetch until a new subscription succeeds.
    #[error("change bus closed")]
    Closed,

    /// The subscriber fell behind and missed `missed` changes. The feed is
    /// still live, but the subscriber must do a full refresh before trusting
    /// incremental updates again.
    #[error("subscriber lagged, {missed} changes dropped")]
    Lagged { missed: u64 },
}
