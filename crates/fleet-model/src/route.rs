//! Service routes and their static metrics.

use fleet_core::RouteId;

/// Whether a route is currently in service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteStatus {
    #[default]
    Active,
    Suspended,
}

impl RouteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteStatus::Active    => "Active",
            RouteStatus::Suspended => "Suspended",
        }
    }
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service route.  Fixed at construction; routes are never created or
/// removed at runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    /// Number of stops served.  Positive.
    pub stops: u32,
    /// One-way length in kilometres.
    pub distance_km: f32,
    /// Scheduled end-to-end duration in minutes.
    pub duration_min: f32,
    /// Buses currently assigned to the route.
    pub active_buses: u32,
    pub status: RouteStatus,
}

impl Route {
    /// Stops served per km, normalised by scheduled runs per hour.
    ///
    /// Higher is better.  Degenerate geometry (zero distance or duration)
    /// rates as 0 rather than dividing by zero.
    pub fn efficiency(&self) -> f32 {
        if self.distance_km <= 0.0 || self.duration_min <= 0.0 {
            return 0.0;
        }
        (self.stops as f32 / self.distance_km) * (60.0 / self.duration_min)
    }
}
