#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from the user's data, config and log settings.
fn abook_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("abook"));
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("share"))
        .env("NO_COLOR", "1")
        .env_remove("ABOOK_DATA")
        .env_remove("ABOOK_LOG")
        .env_remove("ABOOK_PHONE_FORMAT")
        .env_remove("ABOOK_BIRTHDAY_FORMAT")
        .env_remove("ABOOK_PAGE_SIZE")
        .env_remove("ABOOK_BIRTHDAY_DAYS")
        .arg("--data")
        .arg(temp.path().join("data"));
    cmd
}

#[test]
fn add_then_view_persists_between_runs() {
    let temp = TempDir::new().unwrap();

    abook_cmd(&temp)
        .args(["add", "Anna Smith", "-p", "+38(050)123-45-67", "-e", "Anna@Example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: Anna Smith"));

    assert!(temp.path().join("data").join("contacts.json").exists());

    abook_cmd(&temp)
        .args(["view", "Anna Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+38(050)123-45-67"))
        .stdout(predicate::str::contains("Anna@example.com"));
}

#[test]
fn invalid_phone_fails_and_writes_nothing() {
    let temp = TempDir::new().unwrap();

    abook_cmd(&temp)
        .args(["add", "Anna", "-p", "12ab"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid phone"));

    assert!(!temp.path().join("data").join("contacts.json").exists());
}

#[test]
fn missing_contact_is_an_error() {
    let temp = TempDir::new().unwrap();

    abook_cmd(&temp)
        .args(["view", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such contact: Nobody"));
}

#[test]
fn search_matches_name_and_phone() {
    let temp = TempDir::new().unwrap();
    for (name, phone) in [
        ("Anna", "0501234567"),
        ("Bob", "0671112233"),
        ("Hannah", "0939998877"),
    ] {
        abook_cmd(&temp)
            .args(["add", name, "-p", phone])
            .assert()
            .success();
    }

    abook_cmd(&temp)
        .args(["search", "ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna"))
        .stdout(predicate::str::contains("Hannah"))
        .stdout(predicate::str::contains("Bob").not());

    abook_cmd(&temp)
        .args(["search", "067"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Anna").not());
}

#[test]
fn show_pages_contacts() {
    let temp = TempDir::new().unwrap();
    for name in ["A1", "A2", "A3"] {
        abook_cmd(&temp).args(["add", name]).assert().success();
    }

    abook_cmd(&temp)
        .args(["show", "--page", "2", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A3"))
        .stdout(predicate::str::contains("A1").not())
        .stdout(predicate::str::contains("Page 2 of 2 (3 contacts)"));
}

#[test]
fn birthday_reports_days_left() {
    let temp = TempDir::new().unwrap();
    let today = chrono::Local::now().date_naive();
    let born = today.format("1990-%m-%d").to_string();
    // Feb 29 shifts in non-leap years, so only assert on the plain case.
    if born.ends_with("02-29") {
        return;
    }

    abook_cmd(&temp)
        .args(["add", "Anna", "-b", &born])
        .assert()
        .success();

    abook_cmd(&temp)
        .args(["birthday", "Anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today is Anna's birthday"));

    abook_cmd(&temp)
        .args(["birthdays", "--days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna"))
        .stdout(predicate::str::contains("today"));
}

#[test]
fn notes_with_tags() {
    let temp = TempDir::new().unwrap();

    abook_cmd(&temp)
        .args(["note", "add", "Groceries", "milk", "and", "eggs", "-t", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added: Groceries"));

    abook_cmd(&temp)
        .args(["note", "tag", "1", "weekly"])
        .assert()
        .success();

    abook_cmd(&temp)
        .args(["note", "list", "-t", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Groceries  #home #weekly"));

    abook_cmd(&temp)
        .args(["note", "view", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("milk and eggs"));
}

#[test]
fn config_reads_data_dir_file() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("abook.toml"), "phone_format = \"ukrainian\"\n").unwrap();

    abook_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("phone_format = ukrainian"))
        .stdout(predicate::str::contains("page_size = 10"));

    abook_cmd(&temp)
        .args(["add", "Anna", "-p", "0501234567"])
        .assert()
        .failure();
}

#[test]
fn config_template_lists_keys() {
    let temp = TempDir::new().unwrap();

    abook_cmd(&temp)
        .args(["config", "--template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size"))
        .stdout(predicate::str::contains("birthday_days"));
}

#[test]
fn shell_session_saves_on_exit() {
    let temp = TempDir::new().unwrap();

    abook_cmd(&temp)
        .write_stdin("create Anna\n0501234567\n\n\n\n\nfly\nphone Anna\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to abook!"))
        .stdout(predicate::str::contains("Contact added: Anna"))
        .stdout(predicate::str::contains("Unknown command 'fly'"))
        .stdout(predicate::str::contains("Good bye!"));

    abook_cmd(&temp)
        .args(["phone", "list", "Anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0501234567"));
}

#[test]
fn shell_saves_at_end_of_input() {
    let temp = TempDir::new().unwrap();

    abook_cmd(&temp)
        .arg("shell")
        .write_stdin("note-add Todo\ncall Anna\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));

    abook_cmd(&temp)
        .args(["note", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo"));
}
