//! Tests for the worker-portal check-in session log.

use sitedash::session::{CheckAction, CheckinLog, RECENT_LIMIT};

#[test]
fn toggle_tracks_latest_action() {
    let mut log = CheckinLog::new();
    assert!(!log.checked_in());

    log.toggle("w1", CheckAction::In, "08:02");
    assert!(log.checked_in());

    log.toggle("w1", CheckAction::Out, "16:31");
    assert!(!log.checked_in());
}

#[test]
fn log_is_newest_first() {
    let mut log = CheckinLog::new();
    log.toggle("w1", CheckAction::In, "08:00");
    log.toggle("w1", CheckAction::Out, "12:00");
    log.toggle("w1", CheckAction::In, "13:00");

    let entries = log.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].time, "13:00");
    assert_eq!(entries[0].action, CheckAction::In);
    assert_eq!(entries[2].time, "08:00");
}

#[test]
fn log_keeps_only_recent_entries() {
    let mut log = CheckinLog::new();
    for i in 0..25 {
        let action = if i % 2 == 0 { CheckAction::In } else { CheckAction::Out };
        log.toggle("w1", action, &format!("{:02}:00", i % 24));
    }

    assert_eq!(log.entries().len(), RECENT_LIMIT);
    // Last toggle was i == 24 → "00:00"
    assert_eq!(log.entries()[0].time, "00:00");
}

#[test]
fn entry_ids_are_unique() {
    let mut log = CheckinLog::new();
    log.toggle("w1", CheckAction::In, "08:00");
    log.toggle("w2", CheckAction::In, "08:05");

    let entries = log.entries();
    assert_ne!(entries[0].id, entries[1].id);
}
