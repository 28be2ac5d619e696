use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::core::interfaces::ports::Clock;
use crate::global_constants::LOG_TAG_SESSIONS;

/// Users who sent the trigger phrase and whose next image should be uploaded.
///
/// Without a timeout an entry lives until the upload succeeds. With a
/// timeout, stale entries are dropped the next time they are looked up.
pub struct PendingImageSessions {
    started_at_by_user: HashMap<String, SystemTime>,
    timeout: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl PendingImageSessions {
    /// A zero timeout is treated as no timeout.
    pub fn new(clock: Arc<dyn Clock>, timeout: Option<Duration>) -> Self {
        let timeout = timeout.filter(|timeout| !timeout.is_zero());
        log::debug!(
            "{} creating pending session store, timeout={:?}",
            LOG_TAG_SESSIONS,
            timeout
        );

        Self {
            started_at_by_user: HashMap::new(),
            timeout,
            clock,
        }
    }

    /// Marks the user as waiting for an image, restarting the timer if they already were.
    pub fn begin_waiting(&mut self, user_id: &str) {
        let now = self.clock.now();
        self.started_at_by_user.insert(user_id.to_string(), now);
        log::debug!("{} user {} is now waiting for an image", LOG_TAG_SESSIONS, user_id);
    }

    pub fn is_waiting(&mut self, user_id: &str) -> bool {
        let Some(started_at) = self.started_at_by_user.get(user_id).copied() else {
            return false;
        };

        if self.has_expired(started_at) {
            log::info!(
                "{} pending image session for user {} expired",
                LOG_TAG_SESSIONS,
                user_id
            );
            self.started_at_by_user.remove(user_id);
            return false;
        }

        true
    }

    pub fn finish_waiting(&mut self, user_id: &str) {
        if self.started_at_by_user.remove(user_id).is_some() {
            log::debug!("{} cleared pending session for user {}", LOG_TAG_SESSIONS, user_id);
        }
    }

    pub fn waiting_count(&self) -> usize {
        self.started_at_by_user.len()
    }

    fn has_expired(&self, started_at: SystemTime) -> bool {
        let Some(timeout) = self.timeout else {
            return false;
        };

        // A clock that went backwards counts as zero elapsed time.
        let elapsed = self
            .clock
            .now()
            .duration_since(started_at)
            .unwrap_or(Duration::ZERO);

        elapsed >= timeout
    }
}
