use assert_cmd::Command;
use predicates::prelude::*;

fn sneakdps() -> Command {
    Command::cargo_bin("sneakdps").expect("binary built")
}

#[test]
fn roll_prints_one_face_per_line() {
    let out = sneakdps()
        .args(["roll", "--sides", "6", "--rolls", "5", "--seed", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let faces: Vec<i32> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(faces.len(), 5);
    assert!(faces.iter().all(|f| (1..=6).contains(f)));
}

#[test]
fn roll_is_deterministic_per_seed() {
    let run = || {
        sneakdps()
            .args(["roll", "--rolls", "10", "--seed", "8"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_rejects_zero_sides() {
    sneakdps()
        .args(["roll", "--sides", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one side"));
}

#[test]
fn expected_prints_headline_numbers() {
    sneakdps()
        .arg("expected")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard dmg/action:     1.925"))
        .stdout(predicate::str::contains("sneak attack dmg/action: 2.1875"));
}

#[test]
fn report_text_lines() {
    sneakdps()
        .args(["report", "--iterations", "20000", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed: 3  iterations: 20000"))
        .stdout(predicate::str::contains("BOLT dmg/hit (Da): "))
        .stdout(predicate::str::contains("(exp 12.5)"))
        .stdout(predicate::str::contains("Ph ~= "))
        .stdout(predicate::str::contains("(exp 1.925/action)"))
        .stdout(predicate::str::contains("(exp 2.1875/action)"));
}

#[test]
fn report_json_parses() {
    let out = sneakdps()
        .args(["report", "--iterations", "20000", "--seed", "3", "--parallel", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["seed"], 3);
    assert_eq!(v["standard"]["evaluation"]["iterations"], 20000);
    assert_eq!(v["sneak"]["strategy"], "sneak");
    assert!(v["sneak"]["per_action"]["observed"].as_f64().unwrap() > 0.0);
}

#[test]
fn evaluate_one_strategy() {
    sneakdps()
        .args(["evaluate", "--strategy", "sneak", "--iterations", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sneak attack dmg/action: "));
}

#[test]
fn evaluate_rejects_zero_iterations() {
    sneakdps()
        .args(["evaluate", "--strategy", "standard", "--iterations", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("iteration count must be at least 1"));
}
