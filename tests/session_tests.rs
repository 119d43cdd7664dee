// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use carteira::models::User;
use carteira::session;

fn user() -> User {
    User {
        id: 7,
        email: "ana@example.com".to_string(),
        name: "Ana".to_string(),
        doc: "000.000.000-00".to_string(),
        phone: "+55 11 90000-0000".to_string(),
        r#type: 1,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    session::save_to(&path, &user()).unwrap();
    let loaded = session::load_from(&path).unwrap().unwrap();
    assert_eq!(loaded.id, 7);
    assert_eq!(loaded.email, "ana@example.com");
}

#[test]
fn missing_file_means_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    assert!(session::load_from(&path).unwrap().is_none());
}

#[test]
fn clear_removes_the_session_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    session::save_to(&path, &user()).unwrap();
    session::clear_at(&path).unwrap();
    assert!(!path.exists());

    // Clearing an already-cleared session is fine.
    session::clear_at(&path).unwrap();
}

#[test]
fn corrupt_session_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(session::load_from(&path).unwrap().is_none());
    // The broken file is gone, so the next load starts clean.
    assert!(!path.exists());
}
