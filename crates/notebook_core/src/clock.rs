//! Time sources for note timestamps.
//!
//! Repositories read "now" through [`Clock`] so tests can drive time
//! deterministically. Timestamps carry whole-second precision, matching the
//! listing display format.

use chrono::{Duration, Local, NaiveDateTime, SubsecRound};
use std::cell::Cell;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local wall-clock time truncated to seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Manually driven clock for deterministic tests and replays.
///
/// Interior mutability lets a test keep `&ManualClock` while a repository
/// holds another shared reference to it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    /// Moves the clock by `step`. Negative steps move it backwards.
    pub fn advance(&self, step: Duration) {
        self.current.set(self.current.get() + step);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}
