//! Builders for small `.apkg` packages used by tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub struct FixtureNote {
    pub id: i64,
    pub fields: Vec<&'static str>,
    /// (deck id, queue) per card
    pub cards: Vec<(i64, i64)>,
}

impl FixtureNote {
    pub fn new(id: i64, fields: Vec<&'static str>, cards: Vec<(i64, i64)>) -> Self {
        Self { id, fields, cards }
    }
}

#[derive(Default)]
pub struct PackageFixture {
    pub decks: Vec<(i64, &'static str)>,
    pub notes: Vec<FixtureNote>,
}

/// Write a minimal Anki collection database
pub fn write_collection_db(path: &Path, fixture: &PackageFixture) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE col (id INTEGER PRIMARY KEY, decks TEXT NOT NULL);
        CREATE TABLE notes (
            id INTEGER PRIMARY KEY,
            guid TEXT NOT NULL,
            mid INTEGER NOT NULL,
            tags TEXT NOT NULL,
            flds TEXT NOT NULL
        );
        CREATE TABLE cards (
            id INTEGER PRIMARY KEY,
            nid INTEGER NOT NULL,
            did INTEGER NOT NULL,
            queue INTEGER NOT NULL
        );
        "#,
    )
    .unwrap();

    let decks: serde_json::Map<String, serde_json::Value> = fixture
        .decks
        .iter()
        .map(|(id, name)| {
            (
                id.to_string(),
                serde_json::json!({ "id": id, "name": name, "collapsed": false }),
            )
        })
        .collect();
    write_deck_blob(&conn, &serde_json::Value::Object(decks).to_string());

    let mut card_id = 1_000;
    for note in &fixture.notes {
        conn.execute(
            "INSERT INTO notes (id, guid, mid, tags, flds) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                note.id,
                format!("guid-{}", note.id),
                1_i64,
                "",
                note.fields.join("\x1f")
            ],
        )
        .unwrap();

        for (deck_id, queue) in &note.cards {
            card_id += 1;
            conn.execute(
                "INSERT INTO cards (id, nid, did, queue) VALUES (?1, ?2, ?3, ?4)",
                params![card_id, note.id, deck_id, queue],
            )
            .unwrap();
        }
    }
}

/// Replace the `col.decks` blob with arbitrary text
pub fn write_deck_blob(conn: &Connection, blob: &str) {
    conn.execute("DELETE FROM col", []).unwrap();
    conn.execute("INSERT INTO col (id, decks) VALUES (1, ?1)", params![blob])
        .unwrap();
}

/// Zip arbitrary entries into `dir/name`
pub fn build_zip(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (entry_name, bytes) in entries {
        zip.start_file(*entry_name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();

    path
}

/// Build `dir/name` as a package holding `collection.anki21`
pub fn build_package(dir: &Path, name: &str, fixture: &PackageFixture) -> PathBuf {
    let db_path = dir.join(format!("{}.db", name));
    write_collection_db(&db_path, fixture);
    let bytes = std::fs::read(&db_path).unwrap();
    std::fs::remove_file(&db_path).unwrap();

    build_zip(
        dir,
        name,
        &[("collection.anki21", bytes.as_slice()), ("media", b"{}".as_slice())],
    )
}
