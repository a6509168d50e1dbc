mod common;

use common::*;
use kindstore_store::{
    EntityKind, FieldSpec, Store, StoreConfig, StoreError, entity, entity_kinds,
};
use pretty_assertions::assert_eq;

mod elsewhere {
    use super::Song;
    use kindstore_store::entity_kinds;

    // A second declaration site claiming a name that is already in use.
    entity_kinds! {
        pub Tracks: "song" => Song;
    }
}

entity! {
    pub struct Podcast / PodcastPatch {
        pub host: String,
        pub episodes: u32,
        pub explicit: Option<bool>,
    }
}

entity_kinds! {
    pub Podcasts: "podcast" => Podcast;
    pub Drafts: "draft" => Book;
}

// ── Registration ─────────────────────────────────────────────────

#[test]
fn register_is_idempotent() {
    let store = Store::new();
    store.register::<Books>().unwrap();
    store.register::<Books>().unwrap();
    assert_eq!(store.kinds().unwrap(), vec!["book"]);
}

#[test]
fn first_write_registers_the_kind() {
    let store = Store::new();
    store.create(Songs, song("a", 1)).unwrap();
    assert_eq!(store.kinds().unwrap(), vec!["song"]);
}

#[test]
fn kinds_are_sorted() {
    let store = Store::new();
    store.register::<Songs>().unwrap();
    store.register::<Books>().unwrap();
    store.register::<Movies>().unwrap();
    assert_eq!(store.kinds().unwrap(), vec!["book", "movie", "song"]);
}

#[test]
fn two_kinds_may_share_an_entity_type() {
    let store = Store::new();
    store.insert(Books, "1", book("a", "published")).unwrap();
    store.insert(Drafts, "1", book("a", "draft")).unwrap();
    assert_eq!(store.get(Books, "1").unwrap().title, "published");
    assert_eq!(store.get(Drafts, "1").unwrap().title, "draft");
}

// ── Conflicts ────────────────────────────────────────────────────

#[test]
fn second_type_claiming_a_name_conflicts() {
    let store = Store::new();
    store.register::<Songs>().unwrap();
    let err = store.register::<elsewhere::Tracks>().unwrap_err();
    match err {
        StoreError::KindConflict {
            kind,
            existing,
            requested,
        } => {
            assert_eq!(kind, "song");
            assert!(existing.ends_with("Songs"));
            assert!(requested.ends_with("Tracks"));
        }
        other => panic!("expected KindConflict, got {other:?}"),
    }
}

#[test]
fn conflicting_type_cannot_read_or_write() {
    let store = Store::new();
    store.insert(Songs, "1", song("a", 1)).unwrap();
    assert!(matches!(
        store.get(elsewhere::Tracks, "1"),
        Err(StoreError::KindConflict { .. })
    ));
    assert!(matches!(
        store.insert(elsewhere::Tracks, "2", song("b", 2)),
        Err(StoreError::KindConflict { .. })
    ));
    assert_eq!(store.len(Songs).unwrap(), 1);
}

// ── Strict mode ──────────────────────────────────────────────────

fn strict_store() -> Store {
    Store::with_config(StoreConfig {
        strict_kinds: true,
        ..Default::default()
    })
}

#[test]
fn strict_store_rejects_unregistered_kinds() {
    let store = strict_store();
    assert!(matches!(
        store.create(Books, book("a", "b")),
        Err(StoreError::UnknownKind(ref k)) if k == "book"
    ));
    assert!(matches!(
        store.get_all(Books),
        Err(StoreError::UnknownKind(_))
    ));
    assert!(store.kinds().unwrap().is_empty());
}

#[test]
fn strict_store_accepts_registered_kinds() {
    let store = strict_store();
    store.register::<Books>().unwrap();
    let id = store.create(Books, book("a", "b")).unwrap();
    assert_eq!(store.get(Books, &id).unwrap(), book("a", "b"));
}

// ── Schema ───────────────────────────────────────────────────────

#[test]
fn schema_by_name() {
    let store = Store::new();
    store.register::<Podcasts>().unwrap();
    let schema = store.schema("podcast").unwrap();
    assert_eq!(schema, Podcasts::schema());
    assert_eq!(
        schema.fields,
        vec![
            FieldSpec::text("host"),
            FieldSpec::number("episodes"),
            FieldSpec::bool("explicit").optional(),
        ]
    );
}

#[test]
fn schema_of_unknown_kind_fails() {
    let store = Store::new();
    assert!(matches!(
        store.schema("podcast"),
        Err(StoreError::UnknownKind(_))
    ));
}
