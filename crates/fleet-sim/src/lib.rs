//! `fleet-sim` — the periodic fleet-simulation and display-synchronization
//! loop.
//!
//! # Timer state machine
//!
//! ```text
//! Stopped ──start()──▶ Running ──stop()──▶ Stopped
//!
//! while Running:
//!   every 10 s  → FleetModel::tick, re-render telemetry + summary
//!   every 30 s  → notification counter ± {-1,0,+1} floored at 0,
//!                 re-render the counter
//!   one-shots   → marker-pulse animation cue (500 ms after start)
//! ```
//!
//! Time is virtual: callers drive it with [`Scheduler::advance`], which makes
//! the whole loop deterministic and testable without sleeping.  An
//! application shell that wants real time simply sleeps and advances by the
//! elapsed milliseconds (see `demos/dashboard`).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_model::FleetModel;
//! use fleet_sim::{NoopRenderer, Scheduler, SchedulerConfig};
//!
//! let mut renderer = NoopRenderer;
//! let mut sched = Scheduler::new(SchedulerConfig::default(), FleetModel::seeded())?;
//! sched.start(&mut renderer)?;          // immediate render, timers armed
//! sched.advance(30_000, &mut renderer); // three telemetry ticks, one notification tick
//! sched.stop();                         // all timers cancelled
//! ```

pub mod error;
pub mod prefs;
pub mod renderer;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use prefs::{MemoryPrefs, PreferenceStore};
pub use renderer::{NoopRenderer, Renderer};
pub use scheduler::{Scheduler, SchedulerConfig};
