use std::fs;

use tempfile::tempdir;

use wayfind_lib::{render_route, write_route, Algorithm, Route, RouteSummary};

fn example_route() -> Route {
    Route {
        stops: vec!["A".to_string(), "B".to_string(), "D".to_string()],
        costs: vec![0, 1, 2],
    }
}

#[test]
fn render_produces_one_stop_per_line() {
    assert_eq!(render_route(&example_route()), "A 0\nB 1\nD 2\n");
}

#[test]
fn first_line_cost_is_always_zero() {
    let rendered = render_route(&example_route());
    let first = rendered.lines().next().expect("at least one line");
    assert!(first.ends_with(" 0"));
}

#[test]
fn write_route_persists_the_rendering() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("route.txt");

    write_route(&path, &example_route()).expect("route written");
    let written = fs::read_to_string(&path).expect("file exists");
    assert_eq!(written, "A 0\nB 1\nD 2\n");
}

#[test]
fn summary_captures_endpoints_and_totals() {
    let summary = RouteSummary::new(Algorithm::UniformCost, &example_route());

    assert_eq!(summary.start, "A");
    assert_eq!(summary.goal, "D");
    assert_eq!(summary.hops, 2);
    assert_eq!(summary.total_cost, 2);
    assert_eq!(summary.stops.len(), 3);
    assert_eq!(summary.stops[2].location, "D");
    assert_eq!(summary.stops[2].cost, 2);
}

#[test]
fn summary_text_leads_with_the_route_header() {
    let summary = RouteSummary::new(Algorithm::AStar, &example_route());
    let text = summary.render_text();
    assert!(text.starts_with("Route: A -> D (2 hops, cost 2, algorithm: A*)"));
}

#[test]
fn summary_serialises_with_snake_case_algorithms() {
    let summary = RouteSummary::new(Algorithm::AStar, &example_route());
    let value = serde_json::to_value(&summary).expect("summary serialises");

    assert_eq!(value["algorithm"], "a-star");
    assert_eq!(value["total_cost"], 2);
    assert_eq!(value["stops"][0]["location"], "A");
}
