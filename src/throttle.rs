//! Per-(user, action) cooldown windows.

use crate::clock::Clock;
use crate::domain::UserId;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-process rate limiter keyed by (user, action).
///
/// Entries expire lazily on read and can be dropped in bulk via [`sweep`],
/// so the key space does not grow without bound. Checks for the same key
/// are not atomic across tasks; the last writer to start a window wins.
///
/// [`sweep`]: CooldownThrottle::sweep
pub struct CooldownThrottle {
    clock: Arc<dyn Clock>,
    windows: Mutex<HashMap<(UserId, String), DateTime<Utc>>>,
}

impl CooldownThrottle {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        CooldownThrottle {
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether `user` may perform `action` now.
    ///
    /// Returns 0 and starts a fresh window of `window_secs` when no window
    /// is active; otherwise returns the remaining whole seconds (ceiling)
    /// and leaves the active window untouched.
    pub fn check(&self, user: &UserId, action: &str, window_secs: i64) -> i64 {
        let now = self.clock.now();
        let key = (user.clone(), action.to_string());
        let mut windows = self.windows.lock().expect("throttle lock poisoned");

        if let Some(expiry) = windows.get(&key) {
            if *expiry > now {
                let remaining_ms = (*expiry - now).num_milliseconds();
                return (remaining_ms + 999) / 1000;
            }
        }

        windows.insert(key, now + Duration::seconds(window_secs));
        0
    }

    /// Drop every expired window.
    pub fn sweep(&self) {
        let now = self.clock.now();
        let mut windows = self.windows.lock().expect("throttle lock poisoned");
        windows.retain(|_, expiry| *expiry > now);
    }

    /// Number of tracked windows, expired or not.
    pub fn tracked(&self) -> usize {
        self.windows.lock().expect("throttle lock poisoned").len()
    }
}
