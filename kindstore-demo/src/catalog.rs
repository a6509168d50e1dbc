//! The catalogue's entity kinds.
//!
//! New kinds can be declared in any other module the same way; the store
//! needs no changes to accept them.

use kindstore_store::{entity, entity_kinds};

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

entity! {
    pub struct Song / SongPatch {
        pub musician: String,
        pub year: u16,
    }
}

entity_kinds! {
    pub Books: "book" => Book;
    pub Movies: "movie" => Movie;
    pub Songs: "song" => Song;
}
