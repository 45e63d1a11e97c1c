//! The `FleetModel` and its telemetry tick.

use fleet_core::{BusId, FleetError, FleetResult, GeoPoint, SimRng, TimeOfDay};

use crate::seed::{seed_alerts, seed_buses, seed_routes};
use crate::{Alert, Bus, BusStatus, Route};

// ── FleetSummary ─────────────────────────────────────────────────────────────

/// Aggregate counts derived from the current bus list.
///
/// Never stored — always recomputed by [`FleetModel::summary`], so it cannot
/// drift from the underlying bus states.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSummary {
    /// Total buses in the fleet.
    pub total: usize,
    /// Buses with status `Active`.
    pub active: usize,
    /// Buses currently moving (speed > 0).
    pub on_time: usize,
    /// Buses with status `Delayed`.
    pub delayed: usize,
}

// ── FleetModel ───────────────────────────────────────────────────────────────

/// Owns the bus, route, and alert lists.
///
/// The lists are fixed at construction; only per-bus telemetry mutates, via
/// [`tick`](FleetModel::tick) (the simulation) or
/// [`record_position`](FleetModel::record_position) (external reports).
/// The model is a leaf component with no callbacks and no failure modes of
/// its own beyond construction-time validation.
#[derive(Clone, Debug)]
pub struct FleetModel {
    buses: Vec<Bus>,
    routes: Vec<Route>,
    alerts: Vec<Alert>,
}

impl FleetModel {
    /// Build a model from caller-supplied data, validating the per-bus
    /// invariants (occupancy within capacity, zero speed at a stop, positive
    /// capacity) and bus-ID uniqueness.
    pub fn new(buses: Vec<Bus>, routes: Vec<Route>) -> FleetResult<Self> {
        for bus in &buses {
            if bus.capacity == 0 {
                return Err(FleetError::Config(format!("bus {} has zero capacity", bus.id)));
            }
            if !bus.invariants_ok() {
                return Err(FleetError::Config(format!(
                    "bus {} violates telemetry invariants ({}/{} passengers, {} km/h while {})",
                    bus.id, bus.passengers, bus.capacity, bus.speed_kmh, bus.status,
                )));
            }
        }
        for (i, bus) in buses.iter().enumerate() {
            if buses[..i].iter().any(|b| b.id == bus.id) {
                return Err(FleetError::Config(format!("duplicate bus id {}", bus.id)));
            }
        }
        Ok(Self { buses, routes, alerts: Vec::new() })
    }

    /// The fixed demo fleet (three buses, three routes, three alerts).
    pub fn seeded() -> Self {
        Self {
            buses: seed_buses(),
            routes: seed_routes(),
            alerts: seed_alerts(),
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn bus(&self, id: &BusId) -> Option<&Bus> {
        self.buses.iter().find(|b| &b.id == id)
    }

    /// Recompute the aggregate counts from the current bus list.  Pure read.
    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            total: self.buses.len(),
            active: self.count(|b| b.status == BusStatus::Active),
            on_time: self.count(Bus::is_moving),
            delayed: self.count(|b| b.status == BusStatus::Delayed),
        }
    }

    fn count(&self, pred: impl Fn(&Bus) -> bool) -> usize {
        self.buses.iter().filter(|b| pred(b)).count()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// One simulation step: apply a bounded random walk to every bus's
    /// telemetry and stamp it with `now`.
    ///
    /// Per bus:
    /// - passengers move by a uniform delta in `{-3, …, +2}`, clamped to
    ///   `[0, capacity]`;
    /// - speed is redrawn by status: `Active` → 15–34 km/h, `EnRoute` →
    ///   25–49 km/h, anything else → 0;
    /// - `last_update` is set to `now`.
    ///
    /// Statuses themselves are not changed here, so both telemetry
    /// invariants hold after every tick.
    pub fn tick(&mut self, rng: &mut SimRng, now: TimeOfDay) {
        for bus in &mut self.buses {
            let delta: i64 = rng.gen_range(-3..=2);
            bus.passengers =
                (bus.passengers as i64 + delta).clamp(0, bus.capacity as i64) as u32;

            bus.speed_kmh = match bus.status {
                BusStatus::Active  => rng.gen_range(15..=34),
                BusStatus::EnRoute => rng.gen_range(25..=49),
                _ => 0,
            };

            bus.last_update = now;
        }
    }

    /// Overwrite one bus's telemetry from an externally reported position.
    ///
    /// The reported passenger count is clamped to the bus's capacity and the
    /// status is re-derived from the reported speed via
    /// [`BusStatus::from_speed`], which keeps both invariants intact.
    pub fn record_position(
        &mut self,
        id: &BusId,
        location: GeoPoint,
        speed_kmh: u32,
        passengers: u32,
        now: TimeOfDay,
    ) -> FleetResult<()> {
        let bus = self
            .buses
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| FleetError::BusNotFound(id.clone()))?;

        bus.location = location;
        bus.speed_kmh = speed_kmh;
        bus.passengers = passengers.min(bus.capacity);
        bus.status = BusStatus::from_speed(speed_kmh);
        bus.last_update = now;
        Ok(())
    }
}
