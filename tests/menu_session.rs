use assert_cmd::Command;
use predicates::prelude::*;

fn kardex(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("kardex").unwrap();
    cmd.env("KARDEX_HOME", home);
    cmd
}

#[test]
fn add_view_exit_session() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .write_stdin("1\nA1\nWidget\nNew\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added: A1"))
        .stdout(predicate::str::contains(
            "ID: A1, Name: Widget, Condition: New",
        ))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn view_of_empty_store() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn invalid_selections_reprompt_instead_of_failing() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .write_stdin("abc\n9\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Returning to menu."))
        .stdout(predicate::str::contains("Invalid option. Try again."))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn duplicate_id_is_reported_and_session_continues() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .write_stdin("1\nA1\nWidget\nNew\n1\nA1\nOther\nUsed\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A record with ID 'A1' already exists"))
        .stdout(predicate::str::contains("Exiting..."));

    // The rejected add left the store with the original record only.
    kardex(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: A1, Name: Widget, Condition: New",
        ))
        .stdout(predicate::str::contains("Other").not());
}

#[test]
fn update_with_blank_new_id_keeps_the_id() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .args(["add", "A1", "Widget", "New"])
        .assert()
        .success();

    kardex(home.path())
        .write_stdin("3\nA1\n\nWidget\nUsed\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record updated: A1"))
        .stdout(predicate::str::contains(
            "ID: A1, Name: Widget, Condition: Used",
        ));
}

#[test]
fn empty_update_field_aborts_and_record_survives() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .args(["add", "A1", "Widget", "New"])
        .assert()
        .success();

    kardex(home.path())
        .write_stdin("3\nA1\nA2\n\nUsed\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name cannot be empty"))
        .stdout(predicate::str::contains(
            "ID: A1, Name: Widget, Condition: New",
        ));
}

#[test]
fn delete_of_missing_id_warns_and_continues() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .write_stdin("4\nZ9\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record not found: Z9"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn session_ends_cleanly_when_input_runs_out() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .write_stdin("2\n")
        .assert()
        .success();
}

#[test]
fn records_persist_between_sessions() {
    let home = tempfile::tempdir().unwrap();

    kardex(home.path())
        .write_stdin("1\nA1\nWidget\nNew\n5\n")
        .assert()
        .success();

    kardex(home.path())
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: A1, Name: Widget, Condition: New",
        ));
}
