//! Behavioral tests for the persisted progress tracker

#![allow(clippy::expect_used, clippy::arithmetic_side_effects)]

use learn_core::{MemoryStore, ProgressRecord, ProgressSession, ProgressStore};

const KEY: &str = "sc-learning-progress";
const IDS: [&str; 4] = ["install", "configure", "first-run", "deploy"];

// ============================================================================
// LOAD BEHAVIORS
// ============================================================================

#[test]
fn given_no_stored_record_when_loading_then_everything_unchecked() {
    // Given/When
    let (session, summary) = ProgressSession::load(MemoryStore::new(), KEY, IDS);

    // Then
    assert!(session.tracker().items().iter().all(|item| !item.checked));
    assert_eq!(summary.done, 0);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.counter_text(), "0/4 complete");
}

#[test]
fn given_corrupt_stored_value_when_loading_then_defaults_to_unchecked() {
    // Given
    let store = MemoryStore::with_value(KEY, "definitely { not json");

    // When
    let (session, summary) = ProgressSession::load(store, KEY, IDS);

    // Then
    assert_eq!(summary.done, 0);
    assert!(session.tracker().items().iter().all(|item| !item.checked));
}

#[test]
fn given_unreadable_storage_when_loading_then_defaults_to_unchecked() {
    let store = MemoryStore::with_value(KEY, r#"{"install":true}"#).failing_reads();

    let (_, summary) = ProgressSession::load(store, KEY, IDS);

    assert_eq!(summary.done, 0);
}

#[test]
fn given_partial_record_when_loading_then_missing_ids_unchecked() {
    // Given
    let store = MemoryStore::with_value(KEY, r#"{"configure":true}"#);

    // When
    let (session, summary) = ProgressSession::load(store, KEY, IDS);

    // Then
    let checked: Vec<_> = session
        .tracker()
        .items()
        .iter()
        .filter(|item| item.checked)
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(checked, vec!["configure"]);
    assert_eq!(summary.percent, 25);
    assert_eq!(summary.fill_width(), "25%");
}

// ============================================================================
// CHANGE BEHAVIORS
// ============================================================================

#[test]
fn given_every_subset_when_checked_then_percent_is_rounded_ratio() {
    let total = IDS.len();
    for mask in 0_u32..(1 << total) {
        // Given
        let (mut session, _) = ProgressSession::load(MemoryStore::new(), KEY, IDS);

        // When
        let mut summary = session.commit();
        for position in 0..total {
            if mask & (1 << position) != 0 {
                summary = session.set_checked(position, true);
            }
        }

        // Then
        let done = mask.count_ones() as usize;
        assert_eq!(summary.done, done);
        assert_eq!(summary.percent as usize, (done * 200 + total) / (2 * total));
    }
}

#[test]
fn given_changes_when_reloading_then_record_round_trips() {
    // Given
    let (mut session, _) = ProgressSession::load(MemoryStore::new(), KEY, IDS);
    session.set_checked(0, true);
    session.set_checked(3, true);
    session.set_checked(0, false);
    session.set_checked(2, true);
    let written = session.tracker().record();

    // When
    let raw = session.store().raw(KEY);
    let reloaded = ProgressRecord::from_stored(raw.as_deref());

    // Then
    assert_eq!(reloaded, written);
    assert!(!reloaded.is_done("install"));
    assert!(reloaded.is_done("first-run"));
    assert!(reloaded.is_done("deploy"));
}

#[test]
fn given_persisted_progress_when_new_session_loads_then_state_restored() {
    // Given
    let store = MemoryStore::new();
    {
        let (mut first, _) = ProgressSession::load(&store, KEY, IDS);
        first.set_checked(1, true);
    }

    // When
    let (second, summary) = ProgressSession::load(&store, KEY, IDS);

    // Then
    assert_eq!(summary.done, 1);
    assert!(second.tracker().items().get(1).is_some_and(|item| item.checked));
}

// ============================================================================
// RESET BEHAVIORS
// ============================================================================

#[test]
fn given_progress_when_reset_then_all_ids_persisted_false() {
    // Given
    let store = MemoryStore::with_value(KEY, r#"{"install":true,"deploy":true}"#);
    let (mut session, before) = ProgressSession::load(store, KEY, IDS);
    assert_eq!(before.done, 2);

    // When
    let summary = session.reset();

    // Then
    assert_eq!(summary.done, 0);
    assert_eq!(summary.percent, 0);
    let stored = session
        .store()
        .get(KEY)
        .expect("memory store reads")
        .expect("record written");
    let record = ProgressRecord::from_json(&stored).expect("valid record");
    assert_eq!(record.len(), IDS.len());
    assert!(record.iter().all(|(_, done)| !done));
}

#[test]
fn given_no_inputs_when_summarising_then_zero_percent() {
    let (mut session, summary) =
        ProgressSession::load(MemoryStore::new(), KEY, std::iter::empty::<String>());

    assert_eq!(summary.percent, 0);
    assert_eq!(summary.counter_text(), "0/0 complete");
    assert_eq!(session.reset().percent, 0);
    assert_eq!(session.store().raw(KEY).as_deref(), Some("{}"));
}
