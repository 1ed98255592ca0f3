//! Wayfind library entry points.
//!
//! This crate parses textual route queries, builds the routing graph and
//! heuristic table, and runs one of four search strategies over them to
//! produce a route with per-stop accumulated travel times. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, HeuristicTable, Weight};
pub use input::{load_query, parse_query};
pub use output::{render_route, write_route, RouteStop, RouteSummary};
pub use path::{
    find_route_a_star, find_route_bfs, find_route_dfs, find_route_uniform_cost, Route,
};
pub use routing::{plan_route, select_planner, Algorithm, Query, RoutePlanner};
