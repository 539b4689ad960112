//! Periodic collection-change detection via the ETag HEAD probe.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval};

use crate::api_client::NewsApi;
use crate::view_state::SharedViewState;

/// Default probe period.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(10);

/// Polls the collection ETag on a fixed period and reports when it moves,
/// so the host can reload the feed and recompile categories. Probing is
/// paused while `ViewState::hold_refresh` is set (forms and dialogs).
#[derive(Debug)]
pub struct RefreshMonitor<A: NewsApi> {
    api: Arc<A>,
    view_state: SharedViewState,
    ticker: Interval,
}

impl<A: NewsApi> RefreshMonitor<A> {
    pub fn new(api: Arc<A>, view_state: SharedViewState, period: Duration) -> Self {
        let mut ticker = interval(period);
        // A late probe should not be followed by a burst of catch-up probes.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            api,
            view_state,
            ticker,
        }
    }

    /// Waits for the next probe tick and returns whether the collection
    /// changed since the last known ETag. Probe failures are logged and
    /// reported as unchanged.
    pub async fn changed(&mut self) -> bool {
        self.ticker.tick().await;

        if self.view_state.read().await.hold_refresh {
            return false;
        }

        match self.api.head_etag().await {
            Ok(etag) => {
                let mut state = self.view_state.write().await;
                if state.current_etag.as_deref() == Some(etag.as_str()) {
                    false
                } else {
                    state.current_etag = Some(etag);
                    true
                }
            }
            Err(err) => {
                log::warn!("etag probe failed: {err}");
                false
            }
        }
    }
}
