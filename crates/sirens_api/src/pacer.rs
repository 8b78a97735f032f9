//! Cooldown gate used to pace outbound alert API requests.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Enforces a minimum interval between requests. Cloneable so one pacer can
/// be shared by every client talking to the same service instance.
#[derive(Clone, Debug)]
pub struct RequestPacer {
    interval: Duration,
    next_allowed: Arc<Mutex<Option<Instant>>>,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_allowed: Arc::new(Mutex::new(None)),
        }
    }

    /// Blocks until the cooldown window has passed, then reserves the next one.
    pub async fn throttle(&self) {
        let mut slot = self.next_allowed.lock().await;
        let now = Instant::now();
        if let Some(at) = *slot {
            if at > now {
                sleep_until(at).await;
            }
        }
        *slot = Some(Instant::now() + self.interval);
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
