//! Parsing of the textual query format.
//!
//! The format is line oriented:
//!
//! ```text
//! UCS            algorithm token (BFS, DFS, UCS, A*)
//! A              start location
//! D              goal location
//! 4              number of edge lines
//! A B 1          from, to, travel time
//! A C 5
//! B D 1
//! C D 1
//! 4              number of heuristic lines
//! D 0            location, estimated remaining travel time
//! B 1
//! C 1
//! A 2
//! ```
//!
//! Location names are non-empty strings of ASCII alphanumerics and `/`.
//! Travel times and estimates are non-negative integers. Duplicate directed
//! edges are rejected, as is any location that has outgoing edges but no
//! heuristic entry.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, HeuristicTable, Weight};
use crate::routing::{Algorithm, Query};

/// Read and parse a query file.
pub fn load_query(path: &Path) -> Result<Query> {
    let text = std::fs::read_to_string(path)?;
    parse_query(&text)
}

/// Parse the textual query format.
pub fn parse_query(text: &str) -> Result<Query> {
    let mut lines = text.lines().map(str::trim);

    let algorithm: Algorithm = required(&mut lines, "an algorithm")?.parse()?;

    let start = required(&mut lines, "a start location")?.to_string();
    let goal = required(&mut lines, "a goal location")?.to_string();
    if !is_valid_location(&start) {
        return Err(invalid(format!("invalid start location '{start}'")));
    }
    if !is_valid_location(&goal) {
        return Err(invalid(format!("invalid goal location '{goal}'")));
    }

    let edge_count = parse_count(required(&mut lines, "an edge count")?, "edge count")?;
    let mut graph = Graph::new();
    for _ in 0..edge_count {
        let line = required(&mut lines, "an edge line")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [from, to, travel_time] = fields.as_slice() else {
            return Err(invalid(format!(
                "expected 'from to travel_time', got '{line}'"
            )));
        };
        if !is_valid_location(from) || !is_valid_location(to) {
            return Err(invalid(format!("invalid location name in edge '{line}'")));
        }
        let weight = parse_travel_time(travel_time)?;
        if graph.contains_edge(from, to) {
            return Err(invalid(format!("duplicate edge: {from} -> {to}")));
        }
        graph.insert_edge(*from, *to, weight);
    }

    let estimate_count = parse_count(
        required(&mut lines, "a heuristic count")?,
        "heuristic count",
    )?;
    let mut heuristic = HeuristicTable::new();
    for _ in 0..estimate_count {
        let line = required(&mut lines, "a heuristic line")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [location, estimate] = fields.as_slice() else {
            return Err(invalid(format!(
                "expected 'location estimate', got '{line}'"
            )));
        };
        if !is_valid_location(location) {
            return Err(invalid(format!("invalid location name '{location}'")));
        }
        heuristic.insert(*location, parse_travel_time(estimate)?);
    }

    for source in graph.sources() {
        if !heuristic.contains(source) {
            return Err(invalid(format!("no heuristic entry for location {source}")));
        }
    }

    debug!(%algorithm, edges = edge_count, estimates = estimate_count, "parsed query");

    Ok(Query {
        algorithm,
        start,
        goal,
        graph,
        heuristic,
    })
}

fn is_valid_location(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '/')
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidInput {
        message: message.into(),
    }
}

fn required<'a>(lines: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    lines
        .next()
        .ok_or_else(|| invalid(format!("unexpected end of input, expected {what}")))
}

fn parse_count(value: &str, what: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| invalid(format!("invalid {what} '{value}'")))
}

/// Parse a travel time or estimate, rejecting negative values distinctly
/// from unparsable ones.
fn parse_travel_time(value: &str) -> Result<Weight> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| invalid(format!("invalid travel time '{value}'")))?;
    if parsed < 0 {
        return Err(invalid("travel times must be non-negative"));
    }
    Ok(parsed as Weight)
}
