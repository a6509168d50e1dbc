use kindstore_model::{EntityKind, EntitySchema, FieldSpec, Patch, entity, entity_kinds};
use pretty_assertions::assert_eq;

entity! {
    pub struct Book / BookPatch {
        pub author: String,
        pub title: String,
    }
}

entity! {
    pub struct Movie / MoviePatch {
        pub director: String,
    }
}

entity_kinds! {
    /// Published books.
    pub Books: "book" => Book;
    pub Drafts: "draft" => Book;
    pub Movies: "movie" => Movie;
}

fn name_of<K: EntityKind>(_kind: K) -> &'static str {
    K::NAME
}

// ── Names ────────────────────────────────────────────────────────

#[test]
fn markers_carry_their_names() {
    assert_eq!(name_of(Books), "book");
    assert_eq!(name_of(Drafts), "draft");
    assert_eq!(name_of(Movies), "movie");
}

#[test]
fn markers_are_zero_sized() {
    assert_eq!(std::mem::size_of::<Books>(), 0);
}

// ── Schema ───────────────────────────────────────────────────────

#[test]
fn schema_uses_kind_name_and_entity_fields() {
    assert_eq!(
        Books::schema(),
        EntitySchema::new(
            "book",
            vec![FieldSpec::text("author"), FieldSpec::text("title")]
        )
    );
}

#[test]
fn kinds_sharing_an_entity_differ_only_by_name() {
    assert_eq!(Drafts::schema().kind, "draft");
    assert_eq!(Drafts::schema().fields, Books::schema().fields);
}

#[test]
fn patch_alias_resolves_to_entity_patch() {
    let patch: Patch<Movies> = MoviePatch {
        director: Some("Agnès Varda".into()),
    };
    assert_eq!(patch.director.as_deref(), Some("Agnès Varda"));
}
