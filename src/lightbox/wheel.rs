// SPDX-License-Identifier: MPL-2.0
//! Rate gate turning bursts of wheel deltas into discrete slide changes.

use crate::config::{DEFAULT_WHEEL_INTERVAL_MS, MAX_WHEEL_INTERVAL_MS, MIN_WHEEL_INTERVAL_MS};
use std::time::{Duration, Instant};

/// Minimum spacing between wheel-driven navigations (50 ms – 2 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelInterval(u64);

impl WheelInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(MIN_WHEEL_INTERVAL_MS, MAX_WHEEL_INTERVAL_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for WheelInterval {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_INTERVAL_MS)
    }
}

/// Compares monotonic timestamps; there is no timer to cancel.
///
/// Only accepted events move the gate, so a steady stream of deltas still
/// produces one navigation per interval instead of starving.
#[derive(Debug, Clone, Default)]
pub struct WheelGate {
    interval: WheelInterval,
    last_accepted: Option<Instant>,
}

impl WheelGate {
    #[must_use]
    pub fn new(interval: WheelInterval) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Returns `true` and closes the gate if `now` is at least one interval
    /// after the last accepted event.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        let open = self
            .last_accepted
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval.as_duration());
        if open {
            self.last_accepted = Some(now);
        }
        open
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }

    #[must_use]
    pub fn interval(&self) -> WheelInterval {
        self.interval
    }
}
