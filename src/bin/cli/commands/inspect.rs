use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

#[derive(Default)]
struct DeckCounts {
    active: usize,
    suspended: usize,
}

pub fn run(app: &App, package: &Path, format: &OutputFormat, use_color: bool) -> Result<()> {
    let collection = app.load(package)?;
    let retained = app.policy().retain(&collection).len();
    let classifier = app.classifier()?;

    let mut decks: BTreeMap<&str, DeckCounts> = BTreeMap::new();
    for placement in collection.all_placements() {
        let counts = decks.entry(placement.deck_name.as_str()).or_default();
        if placement.suspended {
            counts.suspended += 1;
        } else {
            counts.active += 1;
        }
    }

    match format {
        OutputFormat::Json => {
            let deck_rows: Vec<serde_json::Value> = decks
                .iter()
                .map(|(name, counts)| {
                    serde_json::json!({
                        "deck": name,
                        "lesson": classifier.classify(name),
                        "active_cards": counts.active,
                        "suspended_cards": counts.suspended,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "package": package,
                "notes": collection.note_count(),
                "cards": collection.card_count(),
                "retained_notes": retained,
                "decks": deck_rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let (bold, dim, reset) = if use_color {
                (Color::BOLD, Color::GRAY, Color::RESET)
            } else {
                ("", "", "")
            };

            println!("{}{}{}", bold, package.display(), reset);
            println!(
                "{} notes, {} cards, {} notes kept after the suspension filter\n",
                collection.note_count(),
                collection.card_count(),
                retained
            );

            if decks.is_empty() {
                println!("No cards found.");
                return Ok(());
            }

            let max_name_len = decks.keys().map(|n| n.chars().count()).max().unwrap_or(4).max(4);

            println!("{:<width$} Active Suspended", "Deck", width = max_name_len + 1);
            println!(
                "{} {} {}",
                "\u{2500}".repeat(max_name_len + 1),
                "\u{2500}".repeat(6),
                "\u{2500}".repeat(9)
            );

            for (name, counts) in &decks {
                let lesson = classifier
                    .classify(name)
                    .map(|label| format!("  {}{}{}", dim, label, reset))
                    .unwrap_or_default();
                println!(
                    "{:<width$} {:>6} {:>9}{}",
                    name,
                    counts.active,
                    counts.suspended,
                    lesson,
                    width = max_name_len + 1
                );
            }

            println!("\n{} decks total", decks.len());
        }
    }

    Ok(())
}
