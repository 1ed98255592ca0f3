use std::collections::HashMap;

/// Travel time attached to a directed edge. Always non-negative; the input
/// loader rejects negative values before a graph is built.
pub type Weight = u64;

/// Directed edge within the routing graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: String,
    pub weight: Weight,
}

/// Adjacency representation of locations and weighted directed edges.
///
/// Each adjacency list keeps the order in which its edges were inserted.
/// That order is significant: breadth-first and depth-first search visit
/// neighbours in exactly the supplied order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge to `from`'s adjacency list.
    pub fn insert_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: Weight,
    ) {
        self.adjacency.entry(from.into()).or_default().push(Edge {
            target: to.into(),
            weight,
        });
    }

    /// Return the neighbours for a given location.
    ///
    /// Unknown and terminal locations yield an empty slice, never an error.
    pub fn neighbours(&self, location: &str) -> &[Edge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Locations with at least one outgoing edge.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// `true` when a directed edge from `from` to `to` is already present.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.neighbours(from).iter().any(|edge| edge.target == to)
    }
}

/// Estimated remaining travel time per location, consulted by A*.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTable {
    estimates: HashMap<String, Weight>,
}

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: impl Into<String>, estimate: Weight) {
        self.estimates.insert(location.into(), estimate);
    }

    /// Estimated remaining cost from `location` to the goal, if known.
    pub fn estimate(&self, location: &str) -> Option<Weight> {
        self.estimates.get(location).copied()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.estimates.contains_key(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_preserve_insertion_order() {
        let mut graph = Graph::new();
        graph.insert_edge("A", "C", 5);
        graph.insert_edge("A", "B", 1);

        let targets: Vec<_> = graph
            .neighbours("A")
            .iter()
            .map(|edge| edge.target.as_str())
            .collect();
        assert_eq!(targets, vec!["C", "B"]);
    }

    #[test]
    fn unknown_location_has_no_neighbours() {
        let graph = Graph::new();
        assert!(graph.neighbours("nowhere").is_empty());
    }

    #[test]
    fn contains_edge_is_directed() {
        let mut graph = Graph::new();
        graph.insert_edge("A", "B", 1);
        assert!(graph.contains_edge("A", "B"));
        assert!(!graph.contains_edge("B", "A"));
    }

    #[test]
    fn heuristic_lookup_misses_are_none() {
        let mut table = HeuristicTable::new();
        table.insert("A", 2);
        assert_eq!(table.estimate("A"), Some(2));
        assert_eq!(table.estimate("B"), None);
        assert!(!table.contains("B"));
    }
}
