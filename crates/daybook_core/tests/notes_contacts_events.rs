use chrono::NaiveDate;
use daybook_core::model::contact::{ContactGroup, ContactPatch, NewContact};
use daybook_core::model::event::{EventPatch, NewEvent};
use daybook_core::model::note::{NewNote, NotePatch};
use daybook_core::model::ValidationError;
use daybook_core::views::calendar::{days_with_events, events_on};
use daybook_core::views::contacts::{favorites, upcoming_birthdays};
use daybook_core::views::notes::{visible_notes, NoteFilter};
use daybook_core::{ContactStore, EventStore, MemoryStateStorage, NoteStore, StoreError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn note_edits_bump_updated_at_and_pins_sort_first() {
    let mut store = NoteStore::open(MemoryStateStorage::new());
    let first = store
        .add_note(NewNote {
            title: "first".to_string(),
            ..NewNote::default()
        })
        .unwrap();
    let second = store
        .add_note(NewNote {
            title: "second".to_string(),
            ..NewNote::default()
        })
        .unwrap();

    let edited = store
        .update_note(
            first.id,
            NotePatch {
                content: Some("fresh body".to_string()),
                ..NotePatch::default()
            },
        )
        .unwrap();
    assert!(edited.updated_at > first.updated_at);
    assert_eq!(store.get(first.id).unwrap().content, "fresh body");

    store.toggle_pin(second.id).unwrap();
    let order = visible_notes(store.notes(), &NoteFilter::default());
    assert_eq!(order[0].id, second.id);
}

#[test]
fn note_tags_are_normalized_and_collected() {
    let mut store = NoteStore::open(MemoryStateStorage::new());
    let note = store
        .add_note(NewNote {
            title: "tagged".to_string(),
            ..NewNote::default()
        })
        .unwrap();
    let tagged = store
        .set_tags(
            note.id,
            &["Ideas".to_string(), "#ideas".to_string(), "Home".to_string()],
        )
        .unwrap();
    assert_eq!(tagged.tags, vec!["home", "ideas"]);
    assert_eq!(store.all_tags(), vec!["home", "ideas"]);

    let filter = NoteFilter {
        tag: Some("HOME".to_string()),
        ..NoteFilter::default()
    };
    assert_eq!(visible_notes(store.notes(), &filter).len(), 1);
    store.delete_note(note.id).unwrap();
    assert!(visible_notes(store.notes(), &filter).is_empty());
}

#[test]
fn contacts_favorite_and_birthday_views() {
    let mut store = ContactStore::open(MemoryStateStorage::new());
    let mut input = NewContact::named("Mom", ContactGroup::Family);
    input.birthday = NaiveDate::from_ymd_opt(1965, 10, 25);
    let mom = store.add_contact(input).unwrap();
    store
        .add_contact(NewContact::named("Boss", ContactGroup::Work))
        .unwrap();
    assert!(store
        .add_contact(NewContact::named(" ", ContactGroup::Other))
        .is_err());

    store.toggle_favorite(mom.id).unwrap();
    let favorite_names = favorites(store.contacts())
        .into_iter()
        .map(|contact| contact.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(favorite_names, vec!["Mom"]);

    let soon = upcoming_birthdays(store.contacts(), today(), 7);
    assert_eq!(soon.len(), 1);
    assert_eq!(soon[0].days_until, 6);

    store
        .update_contact(
            mom.id,
            ContactPatch {
                birthday: Some(None),
                ..ContactPatch::default()
            },
        )
        .unwrap();
    assert!(upcoming_birthdays(store.contacts(), today(), 7).is_empty());
}

#[test]
fn events_validate_times_and_group_by_day() {
    let mut store = EventStore::open(MemoryStateStorage::new());
    let err = store
        .add_event(NewEvent::all_day("broken", today()).at("14:00", Some("13:00")))
        .unwrap_err();
    assert_eq!(err, StoreError::Validation(ValidationError::EndBeforeStart));

    let dentist = store
        .add_event(NewEvent::all_day("dentist", today()).at("09:00", Some("10:00")))
        .unwrap();
    store
        .add_event(NewEvent::all_day("trip", today().succ_opt().unwrap()))
        .unwrap();

    assert_eq!(events_on(store.events(), today()).len(), 1);
    assert_eq!(days_with_events(store.events(), 2026, 10).len(), 2);

    let moved = store
        .update_event(
            dentist.id,
            EventPatch {
                date: NaiveDate::from_ymd_opt(2026, 11, 2),
                ..EventPatch::default()
            },
        )
        .unwrap();
    assert_eq!(days_with_events(store.events(), 2026, 11).len(), 1);
    store.delete_event(moved.id).unwrap();
    assert_eq!(
        store.delete_event(moved.id).unwrap_err(),
        StoreError::NotFound(moved.id)
    );
}
