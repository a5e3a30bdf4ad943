use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn add_contact() {
    // Add a contact, list it, then exit
    Command::cargo_bin("contact-list")
        .unwrap()
        .write_stdin("1\nAlice\n555-1234\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contact: Alice"))
        .stdout(predicate::str::contains("  0. Alice"))
        .stdout(predicate::str::contains("555-1234"));
}

#[test]
fn add_trims_input_before_storing() {
    Command::cargo_bin("contact-list")
        .unwrap()
        .write_stdin("1\n  Alice  \n 555-1234 \n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contact: Alice"));
}

#[test]
fn add_with_empty_fields_reports_status() {
    // Blank name and phone go through to the store unchanged
    Command::cargo_bin("contact-list")
        .unwrap()
        .write_stdin("1\n\n\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter a contact name and phone number.",
        ))
        .stdout(predicate::str::contains("No contact in contact list!"));
}

#[test]
fn add_can_be_cancelled_from_either_prompt() {
    Command::cargo_bin("contact-list")
        .unwrap()
        .write_stdin("1\n*\n1\nAlice\n*\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contact").not())
        .stdout(predicate::str::contains("No contact in contact list!"));
}

#[test]
fn invalid_menu_entry_is_reported() {
    Command::cargo_bin("contact-list")
        .unwrap()
        .write_stdin("9\n4\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unrecognized command: '9'"));
}
