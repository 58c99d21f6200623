use assert_cmd::Command;
use predicates::prelude::*;

fn navprice() -> Command {
    Command::cargo_bin("navprice").expect("binary built")
}

#[test]
fn help_lists_flags() {
    navprice()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--timeout-secs"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn list_prints_every_fund() {
    navprice()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ls20   LifeStrategy 20% Equity"))
        .stdout(predicate::str::contains("ls100  LifeStrategy 100% Equity"));
}

#[test]
fn only_unknown_ids_warns_once_each_and_exits_cleanly() {
    navprice()
        .env_remove("RUST_LOG")
        .arg("nope,zzz")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr("Fund with ID nope not recognised\nFund with ID zzz not recognised\n");
}

#[test]
fn verbose_adds_log_events_without_colour_when_piped() {
    navprice()
        .env_remove("RUST_LOG")
        .args(["-v", "nope"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Fund with ID nope not recognised"))
        .stderr(predicate::str::contains("fund id not recognised"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn zero_timeout_is_a_usage_error() {
    navprice()
        .args(["--timeout-secs", "0"])
        .assert()
        .failure()
        .code(2);
}
