//! Two-step confirmation gate for destructive actions.

use crate::clock::Clock;
use crate::domain::UserId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Explicit response to a pending confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmSignal {
    Confirm,
    Cancel,
}

/// Terminal outcome of one confirmation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The user confirmed before the deadline; the caller may now perform
    /// the destructive effect.
    Confirmed,
    Canceled,
    /// The deadline passed before any response; the late signal is ignored.
    TimedOut,
    /// No session exists for this (user, action).
    NonePending,
}

/// Timed confirm/cancel gate, generic over (user, action) keys.
///
/// A session accepts exactly one outcome: the first of confirm, cancel, or
/// deadline expiry wins and the session is discarded. Starting a new
/// session for a key replaces any prior one; the superseded prompt can no
/// longer be answered. Expired sessions are also dropped by [`sweep`].
///
/// [`sweep`]: ConfirmationFlow::sweep
pub struct ConfirmationFlow {
    clock: Arc<dyn Clock>,
    timeout: Duration,
    sessions: Mutex<HashMap<(UserId, String), DateTime<Utc>>>,
}

impl ConfirmationFlow {
    pub fn new(clock: Arc<dyn Clock>, timeout_secs: i64) -> Self {
        ConfirmationFlow {
            clock,
            timeout: Duration::seconds(timeout_secs),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Open a session for (user, action) and return its deadline.
    pub fn begin(&self, user: &UserId, action: &str) -> DateTime<Utc> {
        let deadline = self.clock.now() + self.timeout;
        let mut sessions = self.sessions.lock().expect("confirm lock poisoned");
        sessions.insert((user.clone(), action.to_string()), deadline);
        deadline
    }

    /// Consume the session for (user, action) with an explicit signal.
    ///
    /// Whatever the outcome, the session is gone afterwards; a second
    /// signal sees `NonePending`.
    pub fn resolve(&self, user: &UserId, action: &str, signal: ConfirmSignal) -> ConfirmOutcome {
        let now = self.clock.now();
        let key = (user.clone(), action.to_string());
        let mut sessions = self.sessions.lock().expect("confirm lock poisoned");

        let Some(deadline) = sessions.remove(&key) else {
            return ConfirmOutcome::NonePending;
        };

        if now > deadline {
            return ConfirmOutcome::TimedOut;
        }

        match signal {
            ConfirmSignal::Confirm => ConfirmOutcome::Confirmed,
            ConfirmSignal::Cancel => ConfirmOutcome::Canceled,
        }
    }

    /// Drop every session whose deadline has passed.
    pub fn sweep(&self) {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock().expect("confirm lock poisoned");
        sessions.retain(|_, deadline| *deadline >= now);
    }

    /// Number of open sessions, expired or not.
    pub fn pending(&self) -> usize {
        self.sessions.lock().expect("confirm lock poisoned").len()
    }
}
