//! dashboard — console front-end for the transit fleet simulation.
//!
//! Drives the scheduler through a scripted stretch of virtual time and
//! prints what a real dashboard would render: per-bus telemetry, fleet
//! summary pills, the notification badge, and toast messages.  Swap
//! `ConsoleRenderer` for a GUI- or web-backed `Renderer` to reuse the loop
//! unchanged.

use anyhow::Result;

use fleet_core::Severity;
use fleet_model::{Bus, FleetModel, FleetSummary, RouteOptimizer};
use fleet_sim::{MemoryPrefs, PreferenceStore, Renderer, Scheduler, SchedulerConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
/// Virtual run length: covers six telemetry ticks and two notification ticks.
const RUN_MS: u64 = 65_000;
/// Step size for the drive loop; deliberately not a divisor of the periods
/// to show ticks firing mid-step.
const STEP_MS: u64 = 1_300;

// ── Console renderer ──────────────────────────────────────────────────────────

struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render_bus_telemetry(&mut self, buses: &[Bus]) {
        for bus in buses {
            println!(
                "  {:<8} {:<9} {:>9}  {:>2}/{:<2} pax  {:>2} km/h  {}",
                bus.id,
                bus.license_plate,
                bus.status.as_str(),
                bus.passengers,
                bus.capacity,
                bus.speed_kmh,
                bus.last_update,
            );
        }
    }

    fn render_fleet_summary(&mut self, summary: &FleetSummary) {
        println!(
            "  fleet: {} total | {} active | {} on time | {} delayed",
            summary.total, summary.active, summary.on_time, summary.delayed
        );
    }

    fn render_notification_count(&mut self, count: u32) {
        println!("  [badge] {count} unread notifications");
    }

    fn pulse_markers(&mut self) {
        println!("  [map] markers pulsing");
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        println!("  [toast/{severity}] {message}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut renderer = ConsoleRenderer;
    let config = SchedulerConfig { seed: SEED, ..Default::default() };
    let mut sched = Scheduler::new(config, FleetModel::seeded())?;

    println!("── initial render ──");
    sched.start(&mut renderer)?;

    println!("── alert feed ──");
    for alert in sched.fleet.alerts() {
        println!(
            "  {} [{}/{}] {}: {} ({})",
            alert.timestamp, alert.severity, alert.priority, alert.title, alert.message, alert.route,
        );
    }

    println!("── {RUN_MS} ms of virtual time ──");
    let mut elapsed = 0;
    while elapsed < RUN_MS {
        sched.advance(STEP_MS, &mut renderer);
        elapsed += STEP_MS;
    }

    println!("── manual refresh ──");
    sched.manual_refresh(&mut renderer);

    sched.stop();

    // Route recommendations, ranked by efficiency.
    let mut optimizer = RouteOptimizer::new();
    for route in sched.fleet.routes() {
        optimizer.add(route.clone());
    }
    println!("── recommended routes ──");
    for rated in optimizer.recommendations() {
        println!(
            "  {:<22} efficiency {:.3}{}",
            rated.route.name,
            rated.efficiency,
            if rated.optimized { " (optimized)" } else { "" },
        );
    }

    // Preference toggles the settings panel would persist.
    let mut prefs = MemoryPrefs::new();
    prefs.set("emailNotifications", true);
    prefs.set("darkMode", false);
    tracing::info!(
        email = prefs.get("emailNotifications"),
        dark_mode = prefs.get("darkMode"),
        "preferences saved"
    );

    Ok(())
}
