//! Route efficiency rating and recommendations.

use std::collections::HashMap;

use fleet_core::{FleetError, FleetResult, RouteId};

use crate::Route;

/// A route plus its efficiency rating.
#[derive(Clone, Debug)]
pub struct RatedRoute {
    pub route: Route,
    /// `true` once [`RouteOptimizer::optimize`] has been applied.
    pub optimized: bool,
    /// Current efficiency score.  Starts at [`Route::efficiency`]; capped at
    /// 1.0 after optimization.
    pub efficiency: f32,
}

/// Rates routes by [`Route::efficiency`] and serves the top candidates.
#[derive(Default)]
pub struct RouteOptimizer {
    entries: HashMap<RouteId, RatedRoute>,
}

impl RouteOptimizer {
    /// How many routes [`recommendations`](Self::recommendations) returns.
    pub const RECOMMENDATION_COUNT: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route, computing its initial efficiency.  Re-adding a
    /// route replaces the previous entry (and clears its optimized flag).
    pub fn add(&mut self, route: Route) {
        let efficiency = route.efficiency();
        self.entries.insert(
            route.id.clone(),
            RatedRoute { route, optimized: false, efficiency },
        );
    }

    pub fn get(&self, id: &RouteId) -> Option<&RatedRoute> {
        self.entries.get(id)
    }

    /// Mark a route optimized, boosting its efficiency by 15 % capped at 1.0.
    pub fn optimize(&mut self, id: &RouteId) -> FleetResult<&RatedRoute> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| FleetError::RouteNotFound(id.clone()))?;
        entry.optimized = true;
        entry.efficiency = (entry.efficiency * 1.15).min(1.0);
        Ok(entry)
    }

    /// The top routes by descending efficiency, at most
    /// [`RECOMMENDATION_COUNT`](Self::RECOMMENDATION_COUNT).
    ///
    /// Ties break by route ID so the order is stable across runs.
    pub fn recommendations(&self) -> Vec<&RatedRoute> {
        let mut rated: Vec<&RatedRoute> = self.entries.values().collect();
        rated.sort_by(|a, b| {
            b.efficiency
                .total_cmp(&a.efficiency)
                .then_with(|| a.route.id.cmp(&b.route.id))
        });
        rated.truncate(Self::RECOMMENDATION_COUNT);
        rated
    }
}
