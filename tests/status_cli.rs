mod support;

use predicates::str::{contains, is_match};
use support::TestStore;

#[test]
fn status_counts_done_and_pending() {
    let store = TestStore::new();

    store.cmd().args(["add", "One"]).assert().success();
    store.cmd().args(["add", "Two"]).assert().success();
    store.cmd().args(["add", "Three"]).assert().success();
    store.cmd().args(["done", "2"]).assert().success();

    store
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("2 of 3 tasks pending"))
        .stdout(contains("- total: 3"))
        .stdout(contains("- done: 1"))
        .stdout(contains("- pending: 2"));
}

#[test]
fn status_with_empty_store() {
    let store = TestStore::new();

    store
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("no tasks yet"));
}

#[test]
fn status_json_uses_the_envelope() {
    let store = TestStore::new();

    store.cmd().args(["add", "One"]).assert().success();
    store.cmd().args(["done", "1"]).assert().success();

    store
        .cmd()
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(contains("\"schema_version\": \"tdo.v1\""))
        .stdout(contains("\"command\": \"status\""))
        .stdout(contains("\"status\": \"success\""))
        .stdout(is_match("(?s)\"data\"\\s*:\\s*\\{\\s*\"total\"\\s*:\\s*1").unwrap());
}
