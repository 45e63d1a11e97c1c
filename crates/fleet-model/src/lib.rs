//! `fleet-model` — the in-memory fleet: buses, routes, alerts, and the
//! telemetry tick.
//!
//! # Ownership model
//!
//! [`FleetModel`] is a leaf component: it owns the bus and route lists and
//! mutates nothing outside itself.  Both lists are fixed at construction —
//! buses and routes are never added or removed at runtime; only per-bus
//! telemetry (passengers, speed, location, last-update stamp, derived
//! status) changes, through [`FleetModel::tick`] or
//! [`FleetModel::record_position`].
//!
//! [`FleetSummary`] is never stored: it is recomputed from the bus list on
//! every call to [`FleetModel::summary`].

pub mod alert;
pub mod bus;
pub mod model;
pub mod optimizer;
pub mod route;
pub mod seed;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use alert::{Alert, AlertPriority};
pub use bus::{Bus, BusStatus};
pub use model::{FleetModel, FleetSummary};
pub use optimizer::{RatedRoute, RouteOptimizer};
pub use route::{Route, RouteStatus};
