use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const EXAMPLE_QUERY: &str = "\
UCS
A
D
4
A B 1
A C 5
B D 1
C D 1
4
D 0
B 1
C 1
A 2
";

fn cli() -> Command {
    cargo_bin_cmd!("wayfind-cli")
}

fn write_query(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("input.txt");
    fs::write(&path, contents).expect("write query file");
    path
}

#[test]
fn solves_the_example_query() {
    let temp = tempdir().expect("create temp dir");
    let input = write_query(temp.path(), EXAMPLE_QUERY);
    let output = temp.path().join("output.txt");

    cli()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: A -> D (2 hops, cost 2, algorithm: UCS)",
        ));

    let written = fs::read_to_string(&output).expect("output file written");
    assert_eq!(written, "A 0\nB 1\nD 2\n");
}

#[test]
fn algorithm_override_beats_the_query_file() {
    let temp = tempdir().expect("create temp dir");
    let input = write_query(temp.path(), EXAMPLE_QUERY);
    let output = temp.path().join("output.txt");

    cli()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--algorithm")
        .arg("DFS")
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: DFS"));

    let written = fs::read_to_string(&output).expect("output file written");
    assert_eq!(written, "A 0\nC 5\nD 6\n");
}

#[test]
fn json_format_emits_a_structured_summary() {
    let temp = tempdir().expect("create temp dir");
    let input = write_query(temp.path(), EXAMPLE_QUERY);
    let output = temp.path().join("output.txt");

    cli()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\": \"ucs\""))
        .stdout(predicate::str::contains("\"total_cost\": 2"));
}

#[test]
fn unknown_algorithm_is_rejected_without_output() {
    let temp = tempdir().expect("create temp dir");
    let input = write_query(temp.path(), &EXAMPLE_QUERY.replacen("UCS", "IDS", 1));
    let output = temp.path().join("output.txt");

    cli()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm 'IDS'"));

    assert!(!output.exists(), "no output file on failure");
}

#[test]
fn unreachable_goal_reports_no_route_distinctly() {
    let query = "\
BFS
A
D
1
A B 3
1
A 1
";
    let temp = tempdir().expect("create temp dir");
    let input = write_query(temp.path(), query);
    let output = temp.path().join("output.txt");

    cli()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between A and D"));

    assert!(!output.exists(), "no output file when no route exists");
}

#[test]
fn missing_input_file_is_reported() {
    let temp = tempdir().expect("create temp dir");

    cli()
        .arg("--input")
        .arg(temp.path().join("absent.txt"))
        .arg("--output")
        .arg(temp.path().join("output.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load query"));
}
