//! `fleet-core` — foundational types for the transit fleet simulation.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                     |
//! |--------------|----------------------------------------------|
//! | [`ids`]      | `BusId`, `RouteId`, `AlertId`                |
//! | [`geo`]      | `GeoPoint`                                   |
//! | [`time`]     | `SimClock`, `TimeOfDay`                      |
//! | [`rng`]      | `SimRng` (seedable)                          |
//! | [`severity`] | `Severity` enum for alerts and notifications |
//! | [`error`]    | `FleetError`, `FleetResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod severity;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FleetError, FleetResult};
pub use geo::GeoPoint;
pub use ids::{AlertId, BusId, RouteId};
pub use rng::SimRng;
pub use severity::Severity;
pub use time::{SimClock, TimeOfDay};
