//! The display seam: everything the scheduler pushes to a UI goes through
//! this trait.

use fleet_core::Severity;
use fleet_model::{Bus, FleetSummary};

/// Callbacks the [`Scheduler`][crate::Scheduler] invokes to synchronise a
/// display with the fleet state.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The scheduler never assumes a
/// particular UI toolkit — a renderer may write to a terminal, a web socket,
/// or nothing at all.
///
/// # Example — telemetry printer
///
/// ```rust,ignore
/// struct TelemetryPrinter;
///
/// impl Renderer for TelemetryPrinter {
///     fn render_bus_telemetry(&mut self, buses: &[Bus]) {
///         for bus in buses {
///             println!("{}: {}/{} @ {} km/h", bus.id, bus.passengers, bus.capacity, bus.speed_kmh);
///         }
///     }
/// }
/// ```
pub trait Renderer {
    /// Redraw the per-bus telemetry after a telemetry tick or manual refresh.
    fn render_bus_telemetry(&mut self, _buses: &[Bus]) {}

    /// Redraw the aggregate fleet counters.
    fn render_fleet_summary(&mut self, _summary: &FleetSummary) {}

    /// Update the unread-notification counter display.
    fn render_notification_count(&mut self, _count: u32) {}

    /// Animation cue: pulse the vehicle markers.  Fired once shortly after
    /// start and on every manual refresh.
    fn pulse_markers(&mut self) {}

    /// Show a transient toast message.
    fn notify(&mut self, _message: &str, _severity: Severity) {}
}

/// A [`Renderer`] that does nothing.  Use when driving the scheduler without
/// a display.
pub struct NoopRenderer;

impl Renderer for NoopRenderer {}
