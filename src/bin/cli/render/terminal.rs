use vocab_diff_lib::{DeckStats, Summary};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// `[a, b, c]`
fn word_list(words: &[String]) -> String {
    format!("[{}]", words.join(", "))
}

/// One line of load counts for a deck
pub fn render_deck_stats(label: &str, stats: &DeckStats, use_color: bool) -> String {
    let mut line = format!(
        "{}: {} notes, {} kept, {} words",
        paint(label, Color::BOLD, use_color),
        stats.total_notes,
        stats.retained_notes,
        stats.parsed_entries
    );
    if stats.skipped_notes > 0 {
        line.push_str(&format!(", {} skipped", stats.skipped_notes));
    }
    if stats.unmatched_notes > 0 {
        line.push_str(&format!(", {} without a lesson", stats.unmatched_notes));
    }
    line
}

/// Missing words per lesson followed by the extras, each trimmed to its preview
pub fn render_summary(summary: &Summary, use_color: bool) -> String {
    let mut lines = Vec::new();

    lines.push(paint("Missing words by lesson:", Color::BOLD, use_color));
    for lesson in &summary.lessons {
        lines.push(String::new());
        lines.push(format!(
            "{} - {} missing word(s)",
            paint(lesson.lesson.as_str(), Color::CYAN, use_color),
            lesson.count
        ));
        lines.push(format!("  {}", word_list(&lesson.preview)));
        if lesson.remaining > 0 {
            lines.push(paint(
                &format!("  ... and {} more", lesson.remaining),
                Color::GRAY,
                use_color,
            ));
        }
    }

    let total_color = if summary.total_missing == 0 { Color::GREEN } else { Color::RED };
    lines.push(String::new());
    lines.push(format!(
        "Total missing: {}",
        paint(&summary.total_missing.to_string(), total_color, use_color)
    ));

    lines.push(String::new());
    lines.push(paint(
        "Extra words in main deck (not in reference):",
        Color::BOLD,
        use_color,
    ));
    lines.push(format!(
        "Total extras: {}",
        paint(&summary.total_extras.to_string(), Color::YELLOW, use_color)
    ));
    if summary.total_extras > 0 {
        lines.push(format!("  {}", word_list(&summary.extras_preview)));
        if summary.extras_remaining > 0 {
            lines.push(paint(
                &format!("  ... and {} more", summary.extras_remaining),
                Color::GRAY,
                use_color,
            ));
        }
    }

    lines.join("\n")
}
