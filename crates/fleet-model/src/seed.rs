//! Fixed demo fleet: three buses, three routes, three alerts.
//!
//! Seed data matches the Delhi demo deployment the dashboard ships with.
//! Production installs replace this with [`FleetModel::new`] over real data.
//!
//! [`FleetModel::new`]: crate::FleetModel::new

use fleet_core::{GeoPoint, Severity, TimeOfDay};

use crate::{Alert, AlertPriority, Bus, BusStatus, Route, RouteStatus};

/// The three demo buses.  One per status flavour: active, en route, at stop.
pub fn seed_buses() -> Vec<Bus> {
    vec![
        Bus {
            id: "BUS_001".into(),
            license_plate: "DL-1234".to_owned(),
            route: "Route 42 - Connaught Place Loop".to_owned(),
            driver: "Rajesh Kumar".to_owned(),
            status: BusStatus::Active,
            location: GeoPoint::new(28.6139, 77.2090),
            passengers: 32,
            capacity: 50,
            speed_kmh: 25,
            last_update: TimeOfDay::hms(16, 5, 0),
        },
        Bus {
            id: "BUS_002".into(),
            license_plate: "DL-5678".to_owned(),
            route: "Route 15 - Airport Express".to_owned(),
            driver: "Priya Sharma".to_owned(),
            status: BusStatus::EnRoute,
            location: GeoPoint::new(28.5562, 77.1000),
            passengers: 18,
            capacity: 45,
            speed_kmh: 35,
            last_update: TimeOfDay::hms(16, 4, 45),
        },
        Bus {
            id: "BUS_003".into(),
            license_plate: "DL-9012".to_owned(),
            route: "Route 23 - Metro Link".to_owned(),
            driver: "Anil Verma".to_owned(),
            status: BusStatus::AtStop,
            location: GeoPoint::new(28.6304, 77.2177),
            passengers: 27,
            capacity: 40,
            speed_kmh: 0,
            last_update: TimeOfDay::hms(16, 5, 30),
        },
    ]
}

/// The three demo routes.
pub fn seed_routes() -> Vec<Route> {
    vec![
        Route {
            id: "ROUTE_42".into(),
            name: "Connaught Place Loop".to_owned(),
            stops: 12,
            distance_km: 15.2,
            duration_min: 45.0,
            active_buses: 3,
            status: RouteStatus::Active,
        },
        Route {
            id: "ROUTE_15".into(),
            name: "Airport Express".to_owned(),
            stops: 8,
            distance_km: 28.7,
            duration_min: 35.0,
            active_buses: 2,
            status: RouteStatus::Active,
        },
        Route {
            id: "ROUTE_23".into(),
            name: "Metro Link".to_owned(),
            stops: 15,
            distance_km: 22.3,
            duration_min: 55.0,
            active_buses: 4,
            status: RouteStatus::Active,
        },
    ]
}

/// The initial alert feed.
pub fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "ALT_001".into(),
            severity: Severity::Warning,
            title: "Route Delay".to_owned(),
            message: "Bus DL-1234 delayed by 8 minutes due to traffic".to_owned(),
            timestamp: TimeOfDay::hms(16, 5, 0),
            route: "ROUTE_42".into(),
            priority: AlertPriority::Medium,
        },
        Alert {
            id: "ALT_002".into(),
            severity: Severity::Success,
            title: "On Schedule".to_owned(),
            message: "Bus DL-5678 arrived on time at Terminal 3".to_owned(),
            timestamp: TimeOfDay::hms(16, 3, 0),
            route: "ROUTE_15".into(),
            priority: AlertPriority::Low,
        },
        Alert {
            id: "ALT_003".into(),
            severity: Severity::Info,
            title: "GPS Update".to_owned(),
            message: "Real-time tracking restored for Bus DL-9012".to_owned(),
            timestamp: TimeOfDay::hms(16, 1, 0),
            route: "ROUTE_23".into(),
            priority: AlertPriority::Low,
        },
    ]
}
