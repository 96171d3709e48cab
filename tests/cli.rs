use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("lisp-primitives").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn call_add_by_symbol_and_word() {
    bin()
        .args(["call", "+", "1", "2", "3"])
        .assert()
        .success()
        .stdout("6\n");
    bin()
        .args(["call", "add", "1", "2", "3"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn call_divide_folds_left() {
    bin()
        .args(["call", "divide", "10", "2", "5"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn call_cons_builds_list() {
    bin()
        .args(["call", "cons", "1", "(2 3)"])
        .assert()
        .success()
        .stdout("(1 2 3)\n");
}

#[test]
fn call_cons_with_non_list_fails() {
    bin()
        .args(["call", "cons", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("value '2' is not a list"));
}

#[test]
fn call_unknown_symbol_fails() {
    bin()
        .args(["call", "unknown_symbol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown_symbol"));
}

#[test]
fn call_car_of_empty_list_fails() {
    bin()
        .args(["call", "car", "()"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty list"));
}

#[test]
fn call_cdr_of_empty_list_succeeds() {
    bin()
        .args(["call", "tail", "()"])
        .assert()
        .success()
        .stdout("()\n");
}

#[test]
fn call_rejects_unreadable_argument() {
    bin()
        .args(["call", "+", "1", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument 'two'"));
}

#[test]
fn call_equal_on_strings() {
    bin()
        .args(["call", "equal?", "\"a\"", "\"a\""])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn list_shows_every_primitive() {
    bin()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("add, +")
                .and(predicate::str::contains("equal?, ="))
                .and(predicate::str::contains("car, head"))
                .and(predicate::str::contains("cons")),
        );
}

#[test]
fn no_subcommand_prints_help() {
    bin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
