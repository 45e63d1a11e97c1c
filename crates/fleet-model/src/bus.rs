//! Per-bus state: identity, assignment, and mutable telemetry.

use fleet_core::{BusId, GeoPoint, TimeOfDay};

// ── BusStatus ────────────────────────────────────────────────────────────────

/// Operational status of a bus.
///
/// `AtStop` implies a speed of 0 km/h — [`Bus::invariants_ok`] checks this,
/// and the tick handler maintains it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusStatus {
    /// In normal service on its route.
    Active,
    /// Travelling between stops at cruising speed.
    EnRoute,
    /// Halted at a stop; speed is 0.
    AtStop,
    /// Behind schedule.
    Delayed,
}

impl BusStatus {
    /// Derive a status from a reported speed, for externally ingested
    /// position reports: stationary buses are at a stop, fast ones en route,
    /// the rest in regular service.
    pub fn from_speed(speed_kmh: u32) -> Self {
        match speed_kmh {
            0 => BusStatus::AtStop,
            s if s > 30 => BusStatus::EnRoute,
            _ => BusStatus::Active,
        }
    }

    /// Human-readable label for display and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            BusStatus::Active  => "Active",
            BusStatus::EnRoute => "En Route",
            BusStatus::AtStop  => "At Stop",
            BusStatus::Delayed => "Delayed",
        }
    }
}

impl std::fmt::Display for BusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Bus ──────────────────────────────────────────────────────────────────────

/// One vehicle in the fleet.
///
/// Identity and assignment fields (`id`, `license_plate`, `route`, `driver`,
/// `capacity`) are fixed at construction; the rest is telemetry that the
/// simulation tick rewrites.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub id: BusId,
    pub license_plate: String,
    /// Display name of the route this bus serves (e.g. `"Route 42 -
    /// Connaught Place Loop"`).
    pub route: String,
    pub driver: String,
    pub status: BusStatus,
    pub location: GeoPoint,
    /// Passengers currently on board.  Always in `[0, capacity]`.
    pub passengers: u32,
    /// Seating capacity.  Positive.
    pub capacity: u32,
    /// Current speed in km/h.  0 whenever `status == AtStop`.
    pub speed_kmh: u32,
    /// Wall-clock time the telemetry was last refreshed.
    pub last_update: TimeOfDay,
}

impl Bus {
    /// `true` when the bus is moving — the "on time" criterion in the fleet
    /// summary.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.speed_kmh > 0
    }

    /// Check both per-bus invariants: occupancy within capacity, and zero
    /// speed while at a stop.
    pub fn invariants_ok(&self) -> bool {
        self.passengers <= self.capacity
            && (self.status != BusStatus::AtStop || self.speed_kmh == 0)
    }
}
