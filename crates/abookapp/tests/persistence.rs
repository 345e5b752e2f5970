//! Save and reopen through the file store.

use abookapp::api::AbookApi;
use abookapp::commands::contacts::{ContactField, NewContact};
use abookapp::error::AbookError;
use abookapp::field::Schema;
use abookapp::store::fs::FileStore;
use abookapp::store::DataStore;
use std::fs;
use tempfile::tempdir;

fn open(dir: &std::path::Path) -> AbookApi<FileStore> {
    AbookApi::open(FileStore::new(dir), Schema::default()).unwrap()
}

#[test]
fn first_run_is_empty_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut api = open(dir.path());
    assert!(api.contacts().is_empty());
    assert!(api.notes().is_empty());
    assert!(!api.save_if_dirty().unwrap());
    assert!(!dir.path().join("contacts.json").exists());
}

#[test]
fn reopen_restores_contacts_and_notes_in_order() {
    let dir = tempdir().unwrap();
    let mut api = open(dir.path());
    for name in ["Zoe", "Anna", "Mark"] {
        api.create_contact(NewContact {
            name: name.into(),
            phones: vec!["+38(050)123-45-67".into()],
            ..Default::default()
        })
        .unwrap();
    }
    api.add_field("Anna", ContactField::Birthday, "1990-03-15")
        .unwrap();
    api.add_field("Anna", ContactField::Email, "anna@Example.COM")
        .unwrap();
    api.add_note("Plan", "buy a cake for Anna", &["birthday"])
        .unwrap();
    api.save().unwrap();

    let reopened = open(dir.path());
    assert_eq!(reopened.contacts(), api.contacts());
    assert_eq!(reopened.notes(), api.notes());
    assert_eq!(
        reopened.contacts().keys().collect::<Vec<_>>(),
        vec!["Zoe", "Anna", "Mark"]
    );
    let anna = reopened.contacts().get("Anna").unwrap();
    assert_eq!(anna.email().unwrap().value(), "anna@example.com");
    assert_eq!(anna.phones()[0].raw(), "+38(050)123-45-67");
}

#[test]
fn deletes_survive_reopen() {
    let dir = tempdir().unwrap();
    let mut api = open(dir.path());
    api.create_contact(NewContact {
        name: "Anna".into(),
        ..Default::default()
    })
    .unwrap();
    api.add_note("One", "", &[] as &[&str]).unwrap();
    api.save().unwrap();

    api.delete_contact("Anna").unwrap();
    api.delete_note("1").unwrap();
    api.save().unwrap();

    let reopened = open(dir.path());
    assert!(reopened.contacts().is_empty());
    assert!(reopened.notes().is_empty());
}

#[test]
fn corrupt_snapshot_fails_to_open() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("contacts.json"), "[{\"name\": 42}]").unwrap();

    let store = FileStore::new(dir.path());
    assert!(matches!(
        store.load_contacts(),
        Err(AbookError::Serialization(_))
    ));
    assert!(AbookApi::open(store, Schema::default()).is_err());
}

#[test]
fn tampered_snapshot_names_the_bad_entry() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("contacts.json"),
        r#"[{"name":{"raw":"Anna","value":"Anna"},"phones":[{"raw":"abc","value":"abc"}]}]"#,
    )
    .unwrap();

    let err = AbookApi::open(FileStore::new(dir.path()), Schema::default())
        .err()
        .unwrap();
    assert!(matches!(&err, AbookError::InvalidEntry { key, .. } if key == "Anna"));
    assert!(!err.is_recoverable());
    assert!(err.to_string().contains("'Anna'"));
    assert!(err.to_string().contains("invalid phone"));
}

#[test]
fn blank_stored_name_fails_to_open() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("contacts.json"),
        r#"[{"name":{"raw":"","value":""}}]"#,
    )
    .unwrap();

    let result = AbookApi::open(FileStore::new(dir.path()), Schema::default());
    assert!(matches!(result, Err(AbookError::InvalidEntry { .. })));
}

#[test]
fn stored_note_tags_are_rechecked() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("notes.json"),
        r#"[{"title":{"raw":"Plan","value":"Plan"},"body":"","tags":[{"raw":"two words","value":"two words"}]}]"#,
    )
    .unwrap();

    let err = AbookApi::open(FileStore::new(dir.path()), Schema::default())
        .err()
        .unwrap();
    assert!(matches!(err, AbookError::InvalidEntry { key, .. } if key == "Plan"));
}
