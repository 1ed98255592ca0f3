//! Search strategies over the routing graph.
//!
//! All four algorithms share one contract: `Ok(Some(route))` when the goal
//! is reached, `Ok(None)` when the frontier drains without reaching it, and
//! `Err` only for precondition or invariant violations. Each invocation
//! owns its frontier and bookkeeping maps exclusively; the graph and the
//! heuristic table are only ever read.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, HeuristicTable, Weight};

/// A computed route: the stops from start to goal and the accumulated
/// travel time at each stop. `costs` always has the same length as `stops`
/// and starts at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub stops: Vec<String>,
    pub costs: Vec<Weight>,
}

impl Route {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Accumulated travel time at the goal.
    pub fn total_cost(&self) -> Weight {
        self.costs.last().copied().unwrap_or(0)
    }
}

/// Run breadth-first search.
///
/// Neighbours enter the frontier in adjacency-list order and the goal test
/// happens when a location leaves the queue. The reported cost is the
/// edge-weight sum along the breadth-first tree path, which is not
/// necessarily the cheapest route: breadth-first search minimises hops, not
/// travel time.
pub fn find_route_bfs(graph: &Graph, start: &str, goal: &str) -> Result<Option<Route>> {
    let mut frontier = VecDeque::new();
    let mut in_frontier = HashSet::new();
    let mut explored = HashSet::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut costs: HashMap<String, Weight> = HashMap::new();

    frontier.push_back(start.to_string());
    in_frontier.insert(start.to_string());
    parents.insert(start.to_string(), None);
    costs.insert(start.to_string(), 0);

    while let Some(current) = frontier.pop_front() {
        in_frontier.remove(&current);
        if current == goal {
            return reconstruct_route(&parents, &costs, goal).map(Some);
        }
        explored.insert(current.clone());

        let current_cost = costs.get(&current).copied().unwrap_or(0);
        for edge in graph.neighbours(&current) {
            if explored.contains(&edge.target) || in_frontier.contains(&edge.target) {
                continue;
            }
            frontier.push_back(edge.target.clone());
            in_frontier.insert(edge.target.clone());
            parents.insert(edge.target.clone(), Some(current.clone()));
            costs.insert(edge.target.clone(), current_cost + edge.weight);
        }
    }

    Ok(None)
}

/// Run depth-first search.
///
/// Neighbours are pushed in adjacency-list order, so the last neighbour in
/// the list is expanded first. A location may sit on the stack several
/// times before it is first expanded; every push overwrites its recorded
/// predecessor and cost, and the final overwrite before the pop is the one
/// reported. That overwrite behavior is part of the algorithm's observable
/// output and is kept as-is. No optimality guarantee on cost or length.
pub fn find_route_dfs(graph: &Graph, start: &str, goal: &str) -> Result<Option<Route>> {
    let mut frontier = vec![start.to_string()];
    let mut explored = HashSet::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut costs: HashMap<String, Weight> = HashMap::new();

    parents.insert(start.to_string(), None);
    costs.insert(start.to_string(), 0);

    while let Some(current) = frontier.pop() {
        if current == goal {
            return reconstruct_route(&parents, &costs, goal).map(Some);
        }
        explored.insert(current.clone());

        let current_cost = costs.get(&current).copied().unwrap_or(0);
        for edge in graph.neighbours(&current) {
            if explored.contains(&edge.target) {
                continue;
            }
            frontier.push(edge.target.clone());
            parents.insert(edge.target.clone(), Some(current.clone()));
            costs.insert(edge.target.clone(), current_cost + edge.weight);
        }
    }

    Ok(None)
}

/// Run uniform-cost search.
///
/// Guaranteed to return a minimum-cost route for non-negative weights.
/// Equal-cost frontier entries pop in the order they were pushed; the
/// insertion sequence number is the only secondary heap key.
pub fn find_route_uniform_cost(graph: &Graph, start: &str, goal: &str) -> Result<Option<Route>> {
    let mut queue = BinaryHeap::new();
    let mut sequence = Sequence::default();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut costs: HashMap<String, Weight> = HashMap::new();

    parents.insert(start.to_string(), None);
    costs.insert(start.to_string(), 0);
    queue.push(QueueEntry::new(start.to_string(), 0, sequence.next()));

    while let Some(entry) = queue.pop() {
        // Stale entry: a cheaper route to this location was recorded after
        // the entry was pushed.
        if entry.cost > *costs.get(&entry.location).unwrap_or(&Weight::MAX) {
            continue;
        }
        if entry.location == goal {
            return reconstruct_route(&parents, &costs, goal).map(Some);
        }

        for edge in graph.neighbours(&entry.location) {
            let next_cost = entry.cost + edge.weight;
            if next_cost < *costs.get(&edge.target).unwrap_or(&Weight::MAX) {
                costs.insert(edge.target.clone(), next_cost);
                parents.insert(edge.target.clone(), Some(entry.location.clone()));
                queue.push(QueueEntry::new(edge.target.clone(), next_cost, sequence.next()));
            }
        }
    }

    Ok(None)
}

/// Run A* search guided by per-location heuristic estimates.
///
/// The returned route is minimum-cost when the heuristic is admissible
/// (never overestimates the true remaining cost); admissibility is the
/// caller's responsibility and is not verified here. The estimate is looked
/// up once per neighbour expansion, and a location absent from the table
/// fails fast with [`Error::HeuristicMissing`] rather than assuming zero,
/// which would silently degrade the search to uniform cost.
pub fn find_route_a_star(
    graph: &Graph,
    heuristic: &HeuristicTable,
    start: &str,
    goal: &str,
) -> Result<Option<Route>> {
    let mut queue = BinaryHeap::new();
    let mut sequence = Sequence::default();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut costs: HashMap<String, Weight> = HashMap::new();

    parents.insert(start.to_string(), None);
    costs.insert(start.to_string(), 0);
    let start_estimate = lookup_estimate(heuristic, start)?;
    queue.push(AStarEntry::new(start.to_string(), 0, start_estimate, sequence.next()));

    while let Some(entry) = queue.pop() {
        if entry.cost > *costs.get(&entry.location).unwrap_or(&Weight::MAX) {
            continue;
        }
        if entry.location == goal {
            return reconstruct_route(&parents, &costs, goal).map(Some);
        }

        for edge in graph.neighbours(&entry.location) {
            let estimate = lookup_estimate(heuristic, &edge.target)?;
            let next_cost = entry.cost + edge.weight;
            if next_cost < *costs.get(&edge.target).unwrap_or(&Weight::MAX) {
                costs.insert(edge.target.clone(), next_cost);
                parents.insert(edge.target.clone(), Some(entry.location.clone()));
                queue.push(AStarEntry::new(
                    edge.target.clone(),
                    next_cost,
                    estimate,
                    sequence.next(),
                ));
            }
        }
    }

    Ok(None)
}

fn lookup_estimate(heuristic: &HeuristicTable, location: &str) -> Result<Weight> {
    heuristic
        .estimate(location)
        .ok_or_else(|| Error::HeuristicMissing {
            location: location.to_string(),
        })
}

/// Rebuild the route by following predecessor links from `goal` back to the
/// start (the entry with no predecessor), then pairing each stop with its
/// recorded accumulated cost.
///
/// The walk is bounded by the size of the predecessor map; exceeding that
/// bound, or stepping onto a location the map never recorded, means the
/// chain is cyclic or dangling and reconstruction fails with
/// [`Error::MalformedParentChain`].
fn reconstruct_route(
    parents: &HashMap<String, Option<String>>,
    costs: &HashMap<String, Weight>,
    goal: &str,
) -> Result<Route> {
    let mut stops = Vec::new();
    let mut cursor = Some(goal.to_string());

    while let Some(location) = cursor {
        cursor = match parents.get(&location) {
            Some(predecessor) => predecessor.clone(),
            None => return Err(Error::MalformedParentChain),
        };
        stops.push(location);
        if stops.len() > parents.len() {
            return Err(Error::MalformedParentChain);
        }
    }
    stops.reverse();

    let costs = stops
        .iter()
        .map(|stop| costs.get(stop).copied().ok_or(Error::MalformedParentChain))
        .collect::<Result<Vec<_>>>()?;

    Ok(Route { stops, costs })
}

/// Strictly increasing insertion counter used as the secondary heap key, so
/// equal-priority entries pop in push order.
#[derive(Debug, Default)]
struct Sequence(u64);

impl Sequence {
    fn next(&mut self) -> u64 {
        let value = self.0;
        self.0 += 1;
        value
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
struct QueueEntry {
    location: String,
    cost: Weight,
    seq: u64,
}

impl QueueEntry {
    fn new(location: String, cost: Weight, seq: u64) -> Self {
        Self { location, cost, seq }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
struct AStarEntry {
    location: String,
    cost: Weight,
    estimate: Weight,
    seq: u64,
}

impl AStarEntry {
    fn new(location: String, cost: Weight, heuristic: Weight, seq: u64) -> Self {
        Self {
            location,
            cost,
            estimate: cost + heuristic,
            seq,
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
