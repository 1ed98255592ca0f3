//! Route planning over a parsed query.
//!
//! This module provides:
//! - [`Algorithm`] - The four supported search strategies
//! - [`Query`] - Parsed input: algorithm, endpoints, graph, heuristic table
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in its own planner struct behind the
//! [`RoutePlanner`] trait, so new strategies can be added without modifying
//! the orchestration in [`plan_route`].

mod planner;

pub use planner::{
    select_planner, AStarPlanner, BfsPlanner, DfsPlanner, RoutePlanner, UniformCostPlanner,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, HeuristicTable};
use crate::path::Route;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Breadth-first search (level order, fewest hops).
    Bfs,
    /// Depth-first search (no optimality guarantee).
    Dfs,
    /// Uniform-cost search (minimum accumulated travel time).
    #[serde(rename = "ucs")]
    UniformCost,
    /// A* search (heuristic guided).
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::UniformCost => "UCS",
            Algorithm::AStar => "A*",
        };
        f.write_str(value)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "BFS" => Ok(Algorithm::Bfs),
            "DFS" => Ok(Algorithm::Dfs),
            "UCS" => Ok(Algorithm::UniformCost),
            "A*" => Ok(Algorithm::AStar),
            other => Err(Error::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// A parsed route query: which algorithm to run, the endpoints, and the
/// data the search runs over.
#[derive(Debug, Clone)]
pub struct Query {
    pub algorithm: Algorithm,
    pub start: String,
    pub goal: String,
    pub graph: Graph,
    pub heuristic: HeuristicTable,
}

/// Compute a route using the query's algorithm.
///
/// The search itself reports an unreachable goal as an ordinary value; this
/// orchestrator is where that value becomes [`Error::RouteNotFound`], so
/// callers get a uniform error surface for the whole pipeline.
pub fn plan_route(query: &Query) -> Result<Route> {
    tracing::debug!(
        algorithm = %query.algorithm,
        start = %query.start,
        goal = %query.goal,
        "planning route"
    );

    let planner = select_planner(query.algorithm);
    let route = planner.find_route(&query.graph, &query.heuristic, &query.start, &query.goal)?;

    route.ok_or_else(|| Error::RouteNotFound {
        start: query.start.clone(),
        goal: query.goal.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_tokens_round_trip() {
        for token in ["BFS", "DFS", "UCS", "A*"] {
            let algorithm: Algorithm = token.parse().expect("supported token");
            assert_eq!(algorithm.to_string(), token);
        }
    }

    #[test]
    fn unknown_selector_is_rejected() {
        let error = "IDS".parse::<Algorithm>().expect_err("unsupported token");
        assert!(matches!(error, Error::UnknownAlgorithm { name } if name == "IDS"));
    }

    #[test]
    fn selector_tokens_are_case_sensitive() {
        assert!("bfs".parse::<Algorithm>().is_err());
        assert!("a*".parse::<Algorithm>().is_err());
    }
}
