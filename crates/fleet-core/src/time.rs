//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter held in `SimClock`:
//!
//!   wall_time_ms = start_unix_ms + elapsed_ms
//!
//! Millisecond resolution is the coarsest unit that represents every timer
//! in the system exactly: the telemetry tick (10 000 ms), the notification
//! tick (30 000 ms), and the one-shot marker animation (500 ms).  Using an
//! integer counter keeps all deadline arithmetic exact — no floating-point
//! drift, no platform clock reads inside the core.
//!
//! `TimeOfDay` is the wall-clock stamp written into bus telemetry; it only
//! carries seconds-of-day because that is all the display layer shows.

use std::fmt;

// ── TimeOfDay ────────────────────────────────────────────────────────────────

/// A wall-clock time of day, seconds resolution, displayed as `HH:MM:SS`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    secs_of_day: u32,
}

impl TimeOfDay {
    /// Build from hour/minute/second components.
    ///
    /// Components are taken modulo their natural range, so `hms(25, 0, 0)`
    /// wraps to `01:00:00`.
    pub fn hms(hour: u32, minute: u32, second: u32) -> Self {
        let secs = (hour % 24) * 3_600 + (minute % 60) * 60 + (second % 60);
        Self { secs_of_day: secs }
    }

    /// The time of day at a given Unix timestamp (UTC), in milliseconds.
    pub fn from_unix_ms(unix_ms: i64) -> Self {
        let secs = (unix_ms.div_euclid(1_000)).rem_euclid(86_400) as u32;
        Self { secs_of_day: secs }
    }

    /// Seconds since midnight.
    #[inline]
    pub fn secs_of_day(self) -> u32 {
        self.secs_of_day
    }

    /// Decompose into `(hour, minute, second)`.
    pub fn parts(self) -> (u32, u32, u32) {
        let h = self.secs_of_day / 3_600;
        let m = (self.secs_of_day % 3_600) / 60;
        let s = self.secs_of_day % 60;
        (h, m, s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.parts();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── SimClock ─────────────────────────────────────────────────────────────────

/// Virtual millisecond clock anchored at a Unix wall-clock instant.
///
/// The clock never reads the OS time: callers advance it explicitly, which
/// makes every timer in the scheduler deterministic and testable without
/// sleeping.  `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (milliseconds since epoch) of `elapsed_ms == 0`.
    pub start_unix_ms: i64,
    /// Virtual milliseconds elapsed since the clock was created.
    pub elapsed_ms: u64,
}

impl SimClock {
    /// Create a clock anchored at `start_unix_ms`.
    pub fn new(start_unix_ms: i64) -> Self {
        Self {
            start_unix_ms,
            elapsed_ms: 0,
        }
    }

    /// Move the clock forward by `ms` virtual milliseconds.
    #[inline]
    pub fn advance(&mut self, ms: u64) {
        self.elapsed_ms += ms;
    }

    /// Virtual milliseconds since the clock was created.
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Current Unix timestamp in milliseconds.
    #[inline]
    pub fn current_unix_ms(&self) -> i64 {
        self.start_unix_ms + self.elapsed_ms as i64
    }

    /// Wall-clock time of day at the current instant.
    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_unix_ms(self.current_unix_ms())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}ms ({})", self.elapsed_ms, self.time_of_day())
    }
}
