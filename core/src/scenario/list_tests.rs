//! Tests for scenario records and the ordered list
//!
//! Verifies field validation, positional and id addressing, and the run
//! lock rejecting mutation while a permit is alive.

use std::time::Duration;

use feint_types::{DialogButtons, DialogIcon};

use super::error::{ListError, ValidationError};
use super::list::ScenarioList;
use super::record::{DEFAULT_DELAY, ScenarioRecord, parse_buttons, parse_delay, parse_icon};

/// Create a valid record with the given title and a zero delay
fn make_record(title: &str) -> ScenarioRecord {
    ScenarioRecord::new(
        title,
        "message body",
        DialogIcon::Info,
        DialogButtons::Ok,
        Duration::ZERO,
    )
    .unwrap()
}

#[test]
fn blank_title_is_rejected() {
    let err = ScenarioRecord::new(
        "   ",
        "body",
        DialogIcon::Error,
        DialogButtons::Ok,
        Duration::ZERO,
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::EmptyTitle);
}

#[test]
fn blank_message_is_rejected() {
    let err = ScenarioRecord::new(
        "Disk failure",
        "",
        DialogIcon::Error,
        DialogButtons::Ok,
        Duration::ZERO,
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::EmptyMessage);
}

#[test]
fn icon_and_button_parsing() {
    assert_eq!(parse_icon("warning").unwrap(), DialogIcon::Warning);
    assert_eq!(parse_buttons("yes-no").unwrap(), DialogButtons::YesNo);

    assert_eq!(
        parse_icon("fatal").unwrap_err(),
        ValidationError::UnknownIcon {
            value: "fatal".to_string()
        }
    );
    assert_eq!(
        parse_buttons("retry").unwrap_err(),
        ValidationError::UnknownButtons {
            value: "retry".to_string()
        }
    );
}

#[test]
fn delay_falls_back_to_default() {
    assert_eq!(parse_delay(None), DEFAULT_DELAY);
    assert_eq!(parse_delay(Some("not-a-number")), DEFAULT_DELAY);
    assert_eq!(parse_delay(Some("250")), Duration::from_millis(250));
    assert_eq!(parse_delay(Some(" 0 ")), Duration::ZERO);
}

#[test]
fn with_delay_changes_only_the_delay() {
    let record = make_record("Original");
    let updated = record.with_delay(Duration::from_millis(750));

    assert_eq!(updated.delay(), Duration::from_millis(750));
    assert_eq!(updated.title(), record.title());
    assert_eq!(updated.message(), record.message());
    assert_eq!(updated.icon(), record.icon());
    assert_eq!(updated.buttons(), record.buttons());
}

#[test]
fn add_then_remove_leaves_empty_list() {
    let mut list = ScenarioList::new();
    list.add(make_record("Only")).unwrap();
    assert_eq!(list.len(), 1);

    let removed = list.remove_at(0).unwrap();
    assert_eq!(removed.title(), "Only");
    assert!(list.is_empty());
}

#[test]
fn len_tracks_every_mutation() {
    let mut list = ScenarioList::new();
    for title in ["A", "B", "C"] {
        list.add(make_record(title)).unwrap();
    }
    assert_eq!(list.len(), 3);

    list.remove_at(1).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap().title(), "A");
    assert_eq!(list.get(1).unwrap().title(), "C");

    list.add(make_record("D")).unwrap();
    assert_eq!(list.len(), 3);
}

#[test]
fn out_of_range_index_is_reported() {
    let mut list = ScenarioList::new();
    list.add(make_record("A")).unwrap();

    let err = list.remove_at(3).unwrap_err();
    assert_eq!(err, ListError::OutOfRange { index: 3, len: 1 });

    let err = list.set_delay_at(1, Duration::ZERO).unwrap_err();
    assert_eq!(err, ListError::OutOfRange { index: 1, len: 1 });
}

#[test]
fn ids_stay_valid_across_removal() {
    let mut list = ScenarioList::new();
    let first = list.add(make_record("A")).unwrap();
    let second = list.add(make_record("B")).unwrap();
    let third = list.add(make_record("C")).unwrap();

    list.remove(first).unwrap();

    assert_eq!(list.by_id(second).unwrap().title(), "B");
    assert_eq!(list.id_at(0).unwrap(), second);
    assert_eq!(list.id_at(1).unwrap(), third);
    assert_eq!(list.remove(first).unwrap_err(), ListError::UnknownId);
}

#[test]
fn set_delay_updates_the_record() {
    let mut list = ScenarioList::new();
    let id = list.add(make_record("A")).unwrap();

    list.set_delay_at(0, Duration::from_millis(1500)).unwrap();
    assert_eq!(list.get(0).unwrap().delay(), Duration::from_millis(1500));

    list.set_delay(id, Duration::from_millis(20)).unwrap();
    assert_eq!(list.by_id(id).unwrap().delay(), Duration::from_millis(20));
}

#[test]
fn locked_list_rejects_all_mutation() {
    let mut list = ScenarioList::new();
    list.add(make_record("A")).unwrap();
    let id = list.id_at(0).unwrap();

    let permit = list.begin_run().unwrap();
    assert!(list.is_locked());

    assert_eq!(list.add(make_record("B")).unwrap_err(), ListError::Locked);
    assert_eq!(list.remove_at(0).unwrap_err(), ListError::Locked);
    assert_eq!(list.remove(id).unwrap_err(), ListError::Locked);
    assert_eq!(
        list.set_delay_at(0, Duration::ZERO).unwrap_err(),
        ListError::Locked
    );
    assert_eq!(
        list.set_delay(id, Duration::ZERO).unwrap_err(),
        ListError::Locked
    );
    // Reads stay available during a run
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().title(), "A");

    drop(permit);
    assert!(!list.is_locked());
    list.add(make_record("B")).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn second_run_cannot_start_while_locked() {
    let mut list = ScenarioList::new();
    list.add(make_record("A")).unwrap();

    let permit = list.begin_run().unwrap();
    assert_eq!(list.begin_run().unwrap_err(), ListError::Locked);

    drop(permit);
    assert!(list.begin_run().is_ok());
}

#[test]
fn snapshot_is_isolated_from_later_mutation() {
    let mut list = ScenarioList::new();
    list.add(make_record("A")).unwrap();
    let snapshot = list.snapshot();

    list.add(make_record("B")).unwrap();
    list.set_delay_at(0, Duration::from_millis(900)).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title(), "A");
    assert_eq!(snapshot[0].delay(), Duration::ZERO);
}

#[test]
fn iter_yields_presentation_order() {
    let mut list = ScenarioList::new();
    for title in ["A", "B", "C"] {
        list.add(make_record(title)).unwrap();
    }
    list.remove_at(0).unwrap();

    let titles: Vec<_> = list.iter().map(|(_, record)| record.title().to_string()).collect();
    assert_eq!(titles, ["B", "C"]);
}
