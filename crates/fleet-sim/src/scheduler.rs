//! The `Scheduler` struct and its timer loop.

use fleet_core::{Severity, SimClock, SimRng};
use fleet_model::FleetModel;

use crate::{Renderer, SimError, SimResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Timer periods and run parameters.
///
/// Typically constructed via `Default` and tweaked; an application crate may
/// also load it from a config file (enable the `serde` feature).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    /// Telemetry tick period.  Default: 10 000 ms.
    pub fast_period_ms: u64,
    /// Notification tick period.  Default: 30 000 ms.
    pub slow_period_ms: u64,
    /// Delay before the one-shot marker-pulse cue after `start()`.
    /// Default: 500 ms.
    pub pulse_delay_ms: u64,
    /// Master RNG seed.  The same seed always produces identical telemetry.
    pub seed: u64,
    /// Unix timestamp (milliseconds) the virtual clock is anchored at.
    pub start_unix_ms: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            fast_period_ms: 10_000,
            slow_period_ms: 30_000,
            pulse_delay_ms: 500,
            seed: 42,
            // 16:05:00 UTC — matches the seed fleet's telemetry stamps.
            start_unix_ms: (16 * 3_600 + 5 * 60) * 1_000,
        }
    }
}

// ── Internal timer bookkeeping ────────────────────────────────────────────────

/// Lifecycle state.  `Stopped —start→ Running —stop→ Stopped`; no other
/// states exist.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum SchedulerState {
    Stopped,
    Running,
}

/// A pending one-shot effect, cancelled wholesale by `stop()`.
#[derive(Copy, Clone, Debug)]
struct OneShot {
    due_ms: u64,
    effect: Effect,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Effect {
    MarkerPulse,
}

/// What fires next, in tie-break order: telemetry before notifications
/// before one-shots (the order the timers are armed in).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Due {
    Fast,
    Slow,
    OneShot(usize),
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Drives the fleet simulation over virtual time.
///
/// The scheduler owns the [`FleetModel`], the virtual clock, and the RNG; the
/// renderer is passed into each call so no display state is captured.  All
/// work is synchronous inside [`advance`](Scheduler::advance) — there is no
/// background thread and nothing can fire between calls, which makes the
/// single-writer assumption trivially true.  Embedders on a multi-threaded
/// runtime must serialise access through `&mut Scheduler` (e.g. a single
/// owner task or a mutex).
///
/// # Timer loop
///
/// ```text
/// Stopped ──start()──▶ Running ──stop()──▶ Stopped
///
/// while Running, per advance(ms):
///   every fast_period_ms  → FleetModel::tick, render telemetry + summary
///   every slow_period_ms  → notification counter ± {-1,0,+1} (floor 0),
///                           render counter
///   pending one-shots     → marker-pulse cue
/// ```
///
/// `start()` on a running scheduler returns [`SimError::AlreadyRunning`] and
/// changes nothing — the timers are never duplicated.  `stop()` is
/// idempotent and cancels both repeating timers and every pending one-shot:
/// after it returns, advancing the clock by any amount performs no mutation
/// and no renderer call.
pub struct Scheduler {
    pub config: SchedulerConfig,
    pub clock: SimClock,
    /// The fleet under simulation.  Read freely; telemetry is rewritten only
    /// by the tick path.
    pub fleet: FleetModel,
    rng: SimRng,
    state: SchedulerState,
    next_fast_ms: u64,
    next_slow_ms: u64,
    one_shots: Vec<OneShot>,
    notification_count: u32,
}

impl Scheduler {
    /// Create a stopped scheduler over `fleet`.
    ///
    /// Returns [`SimError::Config`] if either repeating period is zero.
    pub fn new(config: SchedulerConfig, fleet: FleetModel) -> SimResult<Self> {
        if config.fast_period_ms == 0 || config.slow_period_ms == 0 {
            return Err(SimError::Config("timer periods must be non-zero".to_owned()));
        }
        Ok(Self {
            clock: SimClock::new(config.start_unix_ms),
            rng: SimRng::new(config.seed),
            config,
            fleet,
            state: SchedulerState::Stopped,
            next_fast_ms: 0,
            next_slow_ms: 0,
            one_shots: Vec::new(),
            notification_count: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Arm both repeating timers and the marker-pulse one-shot, then perform
    /// one immediate render of telemetry and summary.
    ///
    /// Calling `start()` while already running is an error
    /// ([`SimError::AlreadyRunning`]); the running timers are left exactly as
    /// they were.
    pub fn start<R: Renderer>(&mut self, renderer: &mut R) -> SimResult<()> {
        if self.state == SchedulerState::Running {
            return Err(SimError::AlreadyRunning);
        }
        let now = self.clock.now_ms();
        self.state = SchedulerState::Running;
        self.next_fast_ms = now + self.config.fast_period_ms;
        self.next_slow_ms = now + self.config.slow_period_ms;
        self.one_shots.push(OneShot {
            due_ms: now + self.config.pulse_delay_ms,
            effect: Effect::MarkerPulse,
        });

        tracing::info!(
            fast_ms = self.config.fast_period_ms,
            slow_ms = self.config.slow_period_ms,
            buses = self.fleet.buses().len(),
            "scheduler started"
        );

        self.render_fleet(renderer);
        Ok(())
    }

    /// Cancel both repeating timers and every pending one-shot.
    ///
    /// Safe to call when already stopped (no-op).  After `stop()` returns,
    /// no further mutation or renderer call can happen until `start()`.
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Stopped {
            return;
        }
        self.state = SchedulerState::Stopped;
        self.one_shots.clear();
        tracing::info!(at_ms = self.clock.now_ms(), "scheduler stopped");
    }

    /// `true` between `start()` and `stop()`.
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Current unread-notification counter.
    pub fn notification_count(&self) -> u32 {
        self.notification_count
    }

    // ── Driving time ──────────────────────────────────────────────────────

    /// Move virtual time forward by `ms`, firing every timer that falls due,
    /// in chronological order.
    ///
    /// While stopped the clock still advances but nothing fires — cancelled
    /// timers stay cancelled no matter how far time moves.
    pub fn advance<R: Renderer>(&mut self, ms: u64, renderer: &mut R) {
        let target = self.clock.now_ms() + ms;
        while let Some((due_ms, due)) = self.next_due() {
            if due_ms > target {
                break;
            }
            // Jump the clock to the event so telemetry stamps are exact.
            self.clock.advance(due_ms - self.clock.now_ms());
            match due {
                Due::Fast => self.fast_tick(renderer),
                Due::Slow => self.slow_tick(renderer),
                Due::OneShot(i) => {
                    let shot = self.one_shots.remove(i);
                    self.fire_one_shot(shot, renderer);
                }
            }
        }
        self.clock.advance(target - self.clock.now_ms());
    }

    /// User-triggered refresh: the same mutate+render path as a telemetry
    /// tick, plus an immediate marker pulse and a success toast.
    ///
    /// Works in either state and never moves the repeating deadlines — the
    /// next scheduled tick still fires on its original phase.
    pub fn manual_refresh<R: Renderer>(&mut self, renderer: &mut R) {
        tracing::debug!(at_ms = self.clock.now_ms(), "manual refresh");
        self.mutate_and_render(renderer);
        renderer.pulse_markers();
        renderer.notify("GPS data refreshed", Severity::Success);
    }

    // ── Timer internals ───────────────────────────────────────────────────

    /// The earliest pending deadline, or `None` when stopped.
    ///
    /// Ties resolve fast → slow → one-shot, the order the timers are armed.
    fn next_due(&self) -> Option<(u64, Due)> {
        if self.state == SchedulerState::Stopped {
            return None;
        }
        let mut best = (self.next_fast_ms, Due::Fast);
        if self.next_slow_ms < best.0 {
            best = (self.next_slow_ms, Due::Slow);
        }
        for (i, shot) in self.one_shots.iter().enumerate() {
            if shot.due_ms < best.0 {
                best = (shot.due_ms, Due::OneShot(i));
            }
        }
        Some(best)
    }

    fn fast_tick<R: Renderer>(&mut self, renderer: &mut R) {
        tracing::debug!(at_ms = self.clock.now_ms(), "telemetry tick");
        self.mutate_and_render(renderer);
        self.next_fast_ms += self.config.fast_period_ms;
    }

    fn slow_tick<R: Renderer>(&mut self, renderer: &mut R) {
        let delta: i32 = self.rng.gen_range(-1..=1);
        self.notification_count = if delta < 0 {
            self.notification_count.saturating_sub(1)
        } else {
            self.notification_count + delta as u32
        };
        tracing::debug!(
            at_ms = self.clock.now_ms(),
            count = self.notification_count,
            "notification tick"
        );
        renderer.render_notification_count(self.notification_count);
        self.next_slow_ms += self.config.slow_period_ms;
    }

    fn fire_one_shot<R: Renderer>(&mut self, shot: OneShot, renderer: &mut R) {
        match shot.effect {
            Effect::MarkerPulse => renderer.pulse_markers(),
        }
    }

    fn mutate_and_render<R: Renderer>(&mut self, renderer: &mut R) {
        let now = self.clock.time_of_day();
        self.fleet.tick(&mut self.rng, now);
        self.render_fleet(renderer);
    }

    fn render_fleet<R: Renderer>(&self, renderer: &mut R) {
        renderer.render_bus_telemetry(self.fleet.buses());
        renderer.render_fleet_summary(&self.fleet.summary());
    }
}
