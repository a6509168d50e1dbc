//! Catalogue kinds and the store walkthrough shared by the demo binary and its tests.

pub mod catalog;

use anyhow::{Context, Result};
use catalog::{Book, BookPatch, Books, Movie, Movies, Song, Songs};
use kindstore_store::{EntityId, Store};
use serde_json::{Map, Value};
use tracing::info;

/// What the walkthrough fetched, created and updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    pub book: Book,
    pub movie: Movie,
    pub movies: Vec<Movie>,
    pub song_id: EntityId,
    pub updated_book: Book,
}

/// Registers the catalogue kinds. Strict configs only accept kinds registered up front.
pub fn register_catalog(store: &Store) -> Result<()> {
    store.register::<Books>().context("registering books")?;
    store.register::<Movies>().context("registering movies")?;
    store.register::<Songs>().context("registering songs")?;
    Ok(())
}

fn seed(store: &Store) -> Result<()> {
    store
        .insert(
            Books,
            "123",
            Book {
                author: "Ursula K. Le Guin".into(),
                title: "The Dispossessed".into(),
            },
        )
        .context("seeding book 123")?;
    store
        .insert(
            Movies,
            "456",
            Movie {
                director: "Agnès Varda".into(),
            },
        )
        .context("seeding movie 456")?;
    Ok(())
}

/// Seeds book 123 and movie 456, then runs one of each store operation.
pub fn run(store: &Store) -> Result<Walkthrough> {
    register_catalog(store)?;
    seed(store)?;

    let book = store.get(Books, "123").context("fetching book 123")?;
    info!(title = %book.title, author = %book.author, "book 123");

    let movie = store.get(Movies, "456").context("fetching movie 456")?;
    info!(director = %movie.director, "movie 456");

    let movies = store.get_all(Movies).context("listing movies")?;
    info!(count = movies.len(), "all movies");

    let song_id = store
        .create(
            Songs,
            Song {
                musician: "John Doe".into(),
                year: 2022,
            },
        )
        .context("creating song")?;
    info!(id = %song_id, "created song");

    let updated_book = store
        .update(
            Books,
            "123",
            BookPatch {
                title: Some("Foo Bar".into()),
                ..Default::default()
            },
        )
        .context("updating book 123")?;
    info!(title = %updated_book.title, "updated book 123");

    Ok(Walkthrough {
        book,
        movie,
        movies,
        song_id,
        updated_book,
    })
}

/// Every registered kind's entities as one JSON object keyed by kind name.
pub fn dump(store: &Store) -> Result<Value> {
    let mut out = Map::new();
    for kind in store.kinds()? {
        out.insert(kind.to_string(), store.get_all_dyn(kind)?.into());
    }
    Ok(Value::Object(out))
}
