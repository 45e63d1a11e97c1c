//! Operational alerts attached to routes.

use fleet_core::{AlertId, RouteId, Severity, TimeOfDay};

/// Triage priority of an alert, independent of its severity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl AlertPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertPriority::Low    => "low",
            AlertPriority::Medium => "medium",
            AlertPriority::High   => "high",
        }
    }
}

impl std::fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the alert feed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub id: AlertId,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub timestamp: TimeOfDay,
    pub route: RouteId,
    pub priority: AlertPriority,
}
