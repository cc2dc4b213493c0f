use std::path::Path;

use anyhow::Result;

use vocab_diff_lib::Summary;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    primary: &Path,
    reference: &Path,
    save: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let run = app.compare(primary, reference)?;

    // Nothing is written unless both decks loaded.
    let saved = if save {
        Some(app.save_results(&run.diff)?)
    } else {
        None
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "primary": run.primary,
                "reference": run.reference,
                "results": run.diff,
                "saved_to": saved,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_deck_stats("Main deck", &run.primary, use_color));
            println!("{}", terminal::render_deck_stats("Genki deck", &run.reference, use_color));
            println!();

            let summary = Summary::from_diff(&run.diff, app.config.preview_limit);
            println!("{}", terminal::render_summary(&summary, use_color));

            if let Some(path) = saved {
                println!("\nFull results saved to: {}", path.display());
            }
        }
    }

    Ok(())
}
