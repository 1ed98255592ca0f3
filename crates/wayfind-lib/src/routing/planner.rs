//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and one implementation per
//! search algorithm. The strategy pattern allows adding new algorithms
//! without modifying the `plan_route` orchestrator.

use crate::error::Result;
use crate::graph::{Graph, HeuristicTable};
use crate::path::{
    find_route_a_star, find_route_bfs, find_route_dfs, find_route_uniform_cost, Route,
};

use super::Algorithm;

/// Trait for route planning strategies.
///
/// Each implementation encapsulates a specific search algorithm. The
/// heuristic table is passed to every planner so the trait stays uniform;
/// only the A* planner reads it.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> Algorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Ok(Some(route))` when the goal is reached and `Ok(None)`
    /// when it is unreachable.
    fn find_route(
        &self,
        graph: &Graph,
        heuristic: &HeuristicTable,
        start: &str,
        goal: &str,
    ) -> Result<Option<Route>>;
}

/// Breadth-first planner: fewest hops, edge weights accumulated but never
/// consulted when ordering expansion.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn find_route(
        &self,
        graph: &Graph,
        _heuristic: &HeuristicTable,
        start: &str,
        goal: &str,
    ) -> Result<Option<Route>> {
        find_route_bfs(graph, start, goal)
    }
}

/// Depth-first planner: follows the most recently discovered branch first.
#[derive(Debug, Clone, Default)]
pub struct DfsPlanner;

impl RoutePlanner for DfsPlanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn find_route(
        &self,
        graph: &Graph,
        _heuristic: &HeuristicTable,
        start: &str,
        goal: &str,
    ) -> Result<Option<Route>> {
        find_route_dfs(graph, start, goal)
    }
}

/// Uniform-cost planner: expands by accumulated travel time, minimum-cost
/// result for non-negative weights.
#[derive(Debug, Clone, Default)]
pub struct UniformCostPlanner;

impl RoutePlanner for UniformCostPlanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UniformCost
    }

    fn find_route(
        &self,
        graph: &Graph,
        _heuristic: &HeuristicTable,
        start: &str,
        goal: &str,
    ) -> Result<Option<Route>> {
        find_route_uniform_cost(graph, start, goal)
    }
}

/// A* planner: expands by accumulated travel time plus the per-location
/// estimate. The only planner that reads the heuristic table.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn find_route(
        &self,
        graph: &Graph,
        heuristic: &HeuristicTable,
        start: &str,
        goal: &str,
    ) -> Result<Option<Route>> {
        find_route_a_star(graph, heuristic, start, goal)
    }
}

/// Select the planner for the requested algorithm.
pub fn select_planner(algorithm: Algorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        Algorithm::Bfs => Box::new(BfsPlanner),
        Algorithm::Dfs => Box::new(DfsPlanner),
        Algorithm::UniformCost => Box::new(UniformCostPlanner),
        Algorithm::AStar => Box::new(AStarPlanner),
    }
}
