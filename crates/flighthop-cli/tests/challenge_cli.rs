use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture data present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("flighthop-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(fixtures_dir());
    cmd
}

#[test]
fn seeded_challenge_is_deterministic() {
    let run = || {
        cli()
            .arg("challenge")
            .arg("--min-length")
            .arg("2")
            .arg("--seed")
            .arg("42")
            .output()
            .expect("run challenge")
    };

    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn challenge_respects_minimum_length() {
    // Both five-flight pairs in the fixture end in Australia.
    cli()
        .arg("challenge")
        .arg("--min-length")
        .arg("5")
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("to Australia."))
        .stdout(predicate::str::contains("Optimal: 5 flights."));
}

#[test]
fn challenge_hides_the_route_by_default() {
    cli()
        .arg("challenge")
        .arg("--min-length")
        .arg("5")
        .arg("--seed")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimal route:").not());
}

#[test]
fn reveal_includes_the_optimal_route() {
    cli()
        .arg("challenge")
        .arg("--min-length")
        .arg("5")
        .arg("--seed")
        .arg("3")
        .arg("--reveal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimal route:"))
        .stdout(predicate::str::contains(" -> "));
}

#[test]
fn impossible_minimum_fails_cleanly() {
    cli()
        .arg("challenge")
        .arg("--min-length")
        .arg("6")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no country pair is at least 6 flights apart",
        ));
}

#[test]
fn sample_lists_pairs_in_range() {
    cli()
        .arg("sample")
        .arg("--min-length")
        .arg("5")
        .arg("--max-length")
        .arg("5")
        .arg("--count")
        .arg("10")
        .arg("--seed")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "United Kingdom -> Australia (5 flights)",
        ))
        .stdout(predicate::str::contains("Brazil -> Australia (5 flights)"));
}

#[test]
fn empty_sample_explains_itself() {
    cli()
        .arg("sample")
        .arg("--min-length")
        .arg("6")
        .arg("--max-length")
        .arg("9")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No country pair is between 6 and 9 flights apart.",
        ));
}

#[test]
fn sample_json_is_structured() {
    cli()
        .arg("--format")
        .arg("json")
        .arg("sample")
        .arg("--min-length")
        .arg("5")
        .arg("--max-length")
        .arg("5")
        .arg("--seed")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"length\": 5"))
        .stdout(predicate::str::contains("\"destination\": \"Australia\""));
}
