//! Shared entity kinds for store tests: the book/movie/song catalogue.

#![allow(dead_code)]

use kindstore_store::{Store, entity, entity_kinds};

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

entity! {
    pub struct Episode / EpisodePatch {
        pub title: String,
        pub explicit: Option<bool>,
    }
}

entity_kinds! {
    pub Books: "book" => Book;
    pub Episodes: "episode" => Episode;
    pub Movies: "movie" => Movie;
    pub Songs: "song" => Song;
}

pub fn book(author: &str, title: &str) -> Book {
    Book {
        author: author.into(),
        title: title.into(),
    }
}

pub fn movie(director: &str) -> Movie {
    Movie {
        director: director.into(),
    }
}

pub fn song(musician: &str, year: u16) -> Song {
    Song {
        musician: musician.into(),
        year,
    }
}

pub fn episode(title: &str, explicit: Option<bool>) -> Episode {
    Episode {
        title: title.into(),
        explicit,
    }
}

/// A store holding book "123" and movie "456".
pub fn seeded_store() -> Store {
    let store = Store::new();
    store
        .insert(Books, "123", book("Ursula K. Le Guin", "The Dispossessed"))
        .unwrap();
    store.insert(Movies, "456", movie("Agnès Varda")).unwrap();
    store
}
