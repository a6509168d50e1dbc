use crate::{Entity, EntitySchema};

/// Maps an entity-kind name to the entity type stored under it.
///
/// Implementors are zero-sized markers passed by value as the "kind"
/// argument of store operations, so `store.get(Books, "123")` can only ever
/// return a `Book`. Use [`entity_kinds!`](crate::entity_kinds) to declare them.
///
/// The mapping is open: kinds can be declared in any module or crate. Names
/// must be unique per store; the store rejects a second marker type that
/// reuses a name.
pub trait EntityKind: Copy + Send + Sync + 'static {
    /// The kind name, e.g. `"book"`.
    const NAME: &'static str;

    /// The entity type stored under this kind.
    type Entity: Entity;

    /// Runtime description of this kind.
    fn schema() -> EntitySchema {
        EntitySchema::new(Self::NAME, <Self::Entity as Entity>::fields())
    }
}

/// The patch type accepted by updates for kind `K`.
pub type Patch<K> = <<K as EntityKind>::Entity as Entity>::Patch;

/// Declares kind markers and maps each one to its entity type.
///
/// ```
/// use kindstore_model::{EntityKind, entity, entity_kinds};
///
/// entity! {
///     pub struct Book / BookPatch {
///         pub author: String,
///         pub title: String,
///     }
/// }
///
/// entity_kinds! {
///     pub Books: "book" => Book;
///     pub Drafts: "draft" => Book;
/// }
///
/// assert_eq!(Books::NAME, "book");
/// assert_eq!(Drafts::NAME, "draft");
/// assert_eq!(Drafts::schema().fields, Books::schema().fields);
/// ```
#[macro_export]
macro_rules! entity_kinds {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis $marker:ident : $name:literal => $entity:ty ;
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $marker;

            impl $crate::EntityKind for $marker {
                const NAME: &'static str = $name;
                type Entity = $entity;
            }
        )*
    };
}
