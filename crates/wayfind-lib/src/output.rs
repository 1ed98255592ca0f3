//! Rendering and persistence of computed routes.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::graph::Weight;
use crate::path::Route;
use crate::routing::Algorithm;

/// Render a route in the one-stop-per-line file format: each line is the
/// location followed by the accumulated travel time, starting at 0.
pub fn render_route(route: &Route) -> String {
    let mut buffer = String::new();
    for (stop, cost) in route.stops.iter().zip(&route.costs) {
        let _ = writeln!(buffer, "{stop} {cost}");
    }
    buffer
}

/// Write the rendered route to `path`.
pub fn write_route(path: &Path, route: &Route) -> Result<()> {
    std::fs::write(path, render_route(route))?;
    Ok(())
}

/// Step taken during traversal of a computed route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStop {
    pub index: usize,
    pub location: String,
    pub cost: Weight,
}

/// Structured representation of a computed route that higher-level
/// consumers can serialise or render for a terminal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: Algorithm,
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub total_cost: Weight,
    pub stops: Vec<RouteStop>,
}

impl RouteSummary {
    /// Pair a computed route with the algorithm that produced it.
    pub fn new(algorithm: Algorithm, route: &Route) -> Self {
        let stops = route
            .stops
            .iter()
            .zip(&route.costs)
            .enumerate()
            .map(|(index, (location, cost))| RouteStop {
                index,
                location: location.clone(),
                cost: *cost,
            })
            .collect::<Vec<_>>();

        Self {
            algorithm,
            start: route.stops.first().cloned().unwrap_or_default(),
            goal: route.stops.last().cloned().unwrap_or_default(),
            hops: route.hop_count(),
            total_cost: route.total_cost(),
            stops,
        }
    }

    /// Human-readable rendering for terminal output.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, cost {}, algorithm: {})",
            self.start, self.goal, self.hops, self.total_cost, self.algorithm
        );
        for stop in &self.stops {
            let _ = writeln!(buffer, "{:>3}: {} ({})", stop.index, stop.location, stop.cost);
        }
        buffer
    }
}
