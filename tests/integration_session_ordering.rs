//! Integration tests for session ordering and id uniqueness
//!
//! Drives the session store through interleaved create/touch/rename/delete
//! sequences and checks the invariants the sidebar relies on: ids are never
//! reused and the list is always sorted by recency.

use chatai::session::{display_order, SessionStore};
use std::collections::HashSet;

fn assert_sorted(store: &SessionStore) {
    let listed = store.list();
    for pair in listed.windows(2) {
        assert_ne!(
            display_order(&pair[0], &pair[1]),
            std::cmp::Ordering::Greater,
            "list() out of order: {} before {}",
            pair[0].id,
            pair[1].id
        );
    }
}

#[test]
fn test_ids_stay_unique_across_create_delete_cycles() {
    let mut store = SessionStore::new();
    let mut seen = HashSet::new();

    for round in 0..5 {
        for _ in 0..4 {
            let session = store.create_session();
            assert!(
                seen.insert(session.id.clone()),
                "round {}: id reused: {}",
                round,
                session.id
            );
        }
        // Drop every other surviving session before the next round
        for (i, session) in store.list().into_iter().enumerate() {
            if i % 2 == 0 {
                store.delete_session(&session.id).expect("delete");
            }
        }
    }
}

#[test]
fn test_list_stays_sorted_under_interleaved_mutations() {
    let mut store = SessionStore::new();
    let mut ids = Vec::new();

    for _ in 0..6 {
        ids.push(store.create_session().id);
        assert_sorted(&store);
    }
    for (i, id) in ids.iter().enumerate().step_by(2) {
        store.touch(id, &format!("exchange {}", i)).expect("touch");
        assert_sorted(&store);
    }
    store.rename_session(&ids[1], "Renamed").expect("rename");
    assert_sorted(&store);
    assert_eq!(store.list()[0].id, ids[1], "rename is activity");

    store.delete_session(&ids[1]).expect("delete");
    assert_sorted(&store);
}

#[test]
fn test_active_follows_display_order_after_deletes() {
    let mut store = SessionStore::new();
    let a = store.create_session();
    let b = store.create_session();
    let c = store.create_session();

    // Make A the most recently active, then delete the active session C
    store.touch(&a.id, "latest").expect("touch");
    store.set_active(&c.id).expect("set active");
    store.delete_session(&c.id).expect("delete");
    assert_eq!(store.active_id(), Some(a.id.as_str()));

    store.delete_session(&a.id).expect("delete");
    assert_eq!(store.active_id(), Some(b.id.as_str()));

    store.delete_session(&b.id).expect("delete");
    assert!(store.active_id().is_none());
    assert!(store.is_empty());
}
