//! Loading notes, cards and deck names from an extracted collection

use std::collections::{BTreeMap, HashMap};

use rusqlite::Connection;

use super::errors::DatabaseError;
use super::models::{CardPlacement, CardRow, Collection, DeckMeta, Note};

type Result<T> = std::result::Result<T, DatabaseError>;

/// Read every note and attach the deck/suspension state of its cards.
pub fn load_collection(conn: &Connection) -> Result<Collection> {
    let notes = load_notes(conn)?;
    let deck_names = load_deck_names(conn)?;
    let cards = load_cards(conn)?;

    let mut placements: HashMap<i64, Vec<CardPlacement>> = HashMap::new();
    for card in &cards {
        let deck_name = deck_names
            .get(&card.deck_id)
            .cloned()
            .unwrap_or_default();
        placements
            .entry(card.note_id)
            .or_default()
            .push(CardPlacement::new(deck_name, card.is_suspended()));
    }

    log::debug!(
        "Loaded {} notes, {} cards, {} decks",
        notes.len(),
        cards.len(),
        deck_names.len()
    );

    Ok(Collection {
        notes,
        placements,
        deck_names,
    })
}

fn load_notes(conn: &Connection) -> Result<BTreeMap<i64, Note>> {
    let mut stmt = conn.prepare("SELECT id, guid, mid, tags, flds FROM notes ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Note {
            id: row.get(0)?,
            guid: row.get(1)?,
            model_id: row.get(2)?,
            tags: row.get(3)?,
            fields: row.get(4)?,
        })
    })?;

    let mut notes = BTreeMap::new();
    for row_result in rows {
        let note = row_result?;
        notes.insert(note.id, note);
    }
    Ok(notes)
}

fn load_cards(conn: &Connection) -> Result<Vec<CardRow>> {
    let mut stmt = conn.prepare("SELECT nid, did, queue FROM cards ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(CardRow {
            note_id: row.get(0)?,
            deck_id: row.get(1)?,
            queue: row.get(2)?,
        })
    })?;

    let cards = rows.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(cards)
}

fn load_deck_names(conn: &Connection) -> Result<BTreeMap<i64, String>> {
    let mut stmt = conn.prepare("SELECT decks FROM col")?;
    let mut rows = stmt.query([])?;
    let blob: String = match rows.next()? {
        Some(row) => row.get(0)?,
        None => return Err(DatabaseError::MissingConfig),
    };

    parse_deck_names(&blob)
}

/// Decode the `col.decks` JSON object into deck id -> name.
pub fn parse_deck_names(blob: &str) -> Result<BTreeMap<i64, String>> {
    let decks: HashMap<String, DeckMeta> = serde_json::from_str(blob)?;

    decks
        .into_iter()
        .map(|(key, meta)| {
            key.trim()
                .parse::<i64>()
                .map(|id| (id, meta.name))
                .map_err(|_| DatabaseError::InvalidDeckId(key))
        })
        .collect()
}
