//! Integration tests for the scheduler, driven over virtual time.

use fleet_core::{Severity, TimeOfDay};
use fleet_model::{Bus, FleetModel, FleetSummary};

use crate::{
    MemoryPrefs, NoopRenderer, PreferenceStore, Renderer, Scheduler, SchedulerConfig, SimError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records every renderer call so tests can assert on counts and payloads.
#[derive(Default)]
struct RecordingRenderer {
    telemetry_calls: usize,
    summary_calls: usize,
    last_summary: Option<FleetSummary>,
    counter_updates: Vec<u32>,
    pulses: usize,
    toasts: Vec<(String, Severity)>,
}

impl Renderer for RecordingRenderer {
    fn render_bus_telemetry(&mut self, _buses: &[Bus]) {
        self.telemetry_calls += 1;
    }

    fn render_fleet_summary(&mut self, summary: &FleetSummary) {
        self.summary_calls += 1;
        self.last_summary = Some(*summary);
    }

    fn render_notification_count(&mut self, count: u32) {
        self.counter_updates.push(count);
    }

    fn pulse_markers(&mut self) {
        self.pulses += 1;
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.toasts.push((message.to_owned(), severity));
    }
}

fn started() -> (Scheduler, RecordingRenderer) {
    let mut renderer = RecordingRenderer::default();
    let mut sched = Scheduler::new(SchedulerConfig::default(), FleetModel::seeded()).unwrap();
    sched.start(&mut renderer).unwrap();
    (sched, renderer)
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn zero_period_rejected() {
        let config = SchedulerConfig { fast_period_ms: 0, ..Default::default() };
        assert!(matches!(
            Scheduler::new(config, FleetModel::seeded()),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn new_scheduler_is_stopped() {
        let sched = Scheduler::new(SchedulerConfig::default(), FleetModel::seeded()).unwrap();
        assert!(!sched.is_running());
        assert_eq!(sched.notification_count(), 0);
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn start_performs_one_immediate_render() {
        let (_sched, renderer) = started();
        assert_eq!(renderer.telemetry_calls, 1);
        assert_eq!(renderer.summary_calls, 1);
        assert!(renderer.counter_updates.is_empty());
    }

    #[test]
    fn start_while_running_errors_without_doubling_rate() {
        let (mut sched, mut renderer) = started();
        assert!(matches!(sched.start(&mut renderer), Err(SimError::AlreadyRunning)));
        assert!(sched.is_running());
        // Second start must not re-render either.
        assert_eq!(renderer.telemetry_calls, 1);

        // One minute → exactly 6 fast ticks, not 12.
        sched.advance(60_000, &mut renderer);
        assert_eq!(renderer.telemetry_calls, 1 + 6);
    }

    #[test]
    fn stop_is_idempotent_and_safe_when_never_started() {
        let mut sched = Scheduler::new(SchedulerConfig::default(), FleetModel::seeded()).unwrap();
        sched.stop();
        sched.stop();
        assert!(!sched.is_running());
    }

    #[test]
    fn stop_halts_all_mutation_and_rendering() {
        let (mut sched, mut renderer) = started();
        sched.advance(10_000, &mut renderer);
        sched.stop();

        let buses_before = sched.fleet.buses().to_vec();
        let telemetry_before = renderer.telemetry_calls;
        let counters_before = renderer.counter_updates.len();
        let pulses_before = renderer.pulses;

        // Advance a full hour of virtual time: nothing may fire.
        sched.advance(3_600_000, &mut renderer);

        assert_eq!(sched.fleet.buses(), &buses_before[..]);
        assert_eq!(renderer.telemetry_calls, telemetry_before);
        assert_eq!(renderer.counter_updates.len(), counters_before);
        assert_eq!(renderer.pulses, pulses_before);
    }

    #[test]
    fn stop_cancels_pending_one_shot() {
        let (mut sched, mut renderer) = started();
        // Stop before the 500 ms pulse fires.
        sched.advance(100, &mut renderer);
        sched.stop();
        sched.advance(10_000, &mut renderer);
        assert_eq!(renderer.pulses, 0);
    }

    #[test]
    fn clock_still_advances_while_stopped() {
        let mut sched = Scheduler::new(SchedulerConfig::default(), FleetModel::seeded()).unwrap();
        sched.advance(5_000, &mut NoopRenderer);
        assert_eq!(sched.clock.now_ms(), 5_000);
    }

    #[test]
    fn restart_after_stop_rearms_timers() {
        let (mut sched, mut renderer) = started();
        sched.advance(25_000, &mut renderer); // 2 fast ticks
        sched.stop();
        sched.advance(7_000, &mut renderer); // dead time

        sched.start(&mut renderer).unwrap(); // immediate render #2
        let telemetry_after_restart = renderer.telemetry_calls;
        // Next fast tick is a full period after the restart, not on the old phase.
        sched.advance(9_999, &mut renderer);
        assert_eq!(renderer.telemetry_calls, telemetry_after_restart);
        sched.advance(1, &mut renderer);
        assert_eq!(renderer.telemetry_calls, telemetry_after_restart + 1);
    }
}

// ── Fast tick ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fast_tick {
    use super::*;

    #[test]
    fn fires_on_exact_period_boundaries() {
        let (mut sched, mut renderer) = started();
        sched.advance(9_999, &mut renderer);
        assert_eq!(renderer.telemetry_calls, 1, "nothing before the period elapses");
        sched.advance(1, &mut renderer);
        assert_eq!(renderer.telemetry_calls, 2, "tick at exactly 10 s");
        sched.advance(20_000, &mut renderer);
        assert_eq!(renderer.telemetry_calls, 4, "two more ticks by 30 s");
    }

    #[test]
    fn telemetry_stamped_with_tick_wall_time() {
        let (mut sched, mut renderer) = started();
        sched.advance(10_000, &mut renderer);
        // Clock anchored at 16:05:00; first tick lands at 16:05:10.
        assert!(sched
            .fleet
            .buses()
            .iter()
            .all(|b| b.last_update == TimeOfDay::hms(16, 5, 10)));
    }

    #[test]
    fn summary_rendered_after_each_tick() {
        let (mut sched, mut renderer) = started();
        sched.advance(30_000, &mut renderer);
        assert_eq!(renderer.summary_calls, renderer.telemetry_calls);
        let summary = renderer.last_summary.unwrap();
        assert_eq!(summary.total, 3);
        assert!(summary.active <= summary.total);
    }

    #[test]
    fn invariants_hold_across_a_long_run() {
        let (mut sched, mut renderer) = started();
        sched.advance(3_600_000, &mut renderer); // one hour, 360 ticks
        for bus in sched.fleet.buses() {
            assert!(bus.invariants_ok(), "bus {} broke invariants", bus.id);
        }
    }
}

// ── Slow tick ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod slow_tick {
    use super::*;

    #[test]
    fn fires_every_thirty_seconds() {
        let (mut sched, mut renderer) = started();
        sched.advance(29_999, &mut renderer);
        assert!(renderer.counter_updates.is_empty());
        sched.advance(1, &mut renderer);
        assert_eq!(renderer.counter_updates.len(), 1);
        sched.advance(300_000, &mut renderer);
        assert_eq!(renderer.counter_updates.len(), 11);
    }

    #[test]
    fn counter_moves_by_at_most_one_and_never_underflows() {
        let (mut sched, mut renderer) = started();
        sched.advance(3_000_000, &mut renderer); // 100 notification ticks
        let mut prev = 0u32;
        for &count in &renderer.counter_updates {
            assert!(count.abs_diff(prev) <= 1, "jumped from {prev} to {count}");
            prev = count;
        }
        assert_eq!(sched.notification_count(), prev);
    }
}

// ── One-shot pulse ────────────────────────────────────────────────────────────

#[cfg(test)]
mod one_shot {
    use super::*;

    #[test]
    fn pulse_fires_once_after_start_delay() {
        let (mut sched, mut renderer) = started();
        sched.advance(499, &mut renderer);
        assert_eq!(renderer.pulses, 0);
        sched.advance(1, &mut renderer);
        assert_eq!(renderer.pulses, 1);
        sched.advance(60_000, &mut renderer);
        assert_eq!(renderer.pulses, 1, "one-shot must not repeat");
    }
}

// ── Manual refresh ────────────────────────────────────────────────────────────

#[cfg(test)]
mod manual_refresh {
    use super::*;

    #[test]
    fn refresh_mutates_renders_and_toasts() {
        let (mut sched, mut renderer) = started();
        let stamps_before: Vec<TimeOfDay> =
            sched.fleet.buses().iter().map(|b| b.last_update).collect();

        sched.advance(3_000, &mut renderer);
        sched.manual_refresh(&mut renderer);

        assert_eq!(renderer.telemetry_calls, 2);
        assert!(sched
            .fleet
            .buses()
            .iter()
            .zip(&stamps_before)
            .all(|(b, &old)| b.last_update != old));
        assert_eq!(renderer.pulses, 2); // start's 500 ms pulse + the refresh
        assert_eq!(
            renderer.toasts,
            vec![("GPS data refreshed".to_owned(), Severity::Success)]
        );
    }

    #[test]
    fn refresh_does_not_reset_timer_phase() {
        let (mut sched, mut renderer) = started();
        sched.advance(5_000, &mut renderer);
        sched.manual_refresh(&mut renderer); // telemetry call #2
        // The scheduled tick still lands at t = 10 s, not t = 15 s.
        sched.advance(5_000, &mut renderer);
        assert_eq!(renderer.telemetry_calls, 3);
    }

    #[test]
    fn refresh_works_while_stopped() {
        let mut renderer = RecordingRenderer::default();
        let mut sched = Scheduler::new(SchedulerConfig::default(), FleetModel::seeded()).unwrap();
        sched.manual_refresh(&mut renderer);
        assert_eq!(renderer.telemetry_calls, 1);
        assert_eq!(renderer.pulses, 1);
        assert!(!sched.is_running());
    }
}

// ── Preference store ──────────────────────────────────────────────────────────

#[cfg(test)]
mod prefs {
    use super::*;

    #[test]
    fn set_then_get_roundtrips() {
        let mut prefs = MemoryPrefs::new();
        assert_eq!(prefs.get("emailNotifications"), None);
        prefs.set("emailNotifications", true);
        assert_eq!(prefs.get("emailNotifications"), Some(true));
        prefs.set("emailNotifications", false);
        assert_eq!(prefs.get("emailNotifications"), Some(false));
    }
}
