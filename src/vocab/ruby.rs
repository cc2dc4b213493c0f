//! Ruby (furigana) HTML to (term, reading)
//!
//! Reference decks annotate kanji as `<ruby>猫<rt>ねこ</rt></ruby>`. Fields
//! without any usable annotation are kana-only words and become their own
//! reading.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use super::models::VocabEntry;

fn ruby_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<ruby\b[^>]*>(.*?)</ruby\s*>").expect("valid ruby regex"))
}

fn rt_open_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<rt\b[^>]*>").expect("valid rt regex"))
}

/// Where an annotation body stops: its end tag, or the next `<rt>`/`<rp>`
fn rt_boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</rt\s*>|<r[tp]\b").expect("valid rt boundary regex"))
}

fn rp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<rp\b[^>]*>.*?</rp\s*>").expect("valid rp regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

/// An `<rt>` element: the whole element and its text, as byte ranges.
struct Annotation {
    element: Range<usize>,
    body: Range<usize>,
}

/// `<rt>` elements of a ruby body. The end tag is optional: an unclosed
/// annotation runs to the next `<rt>`/`<rp>` or to the end of the body.
fn annotations(inner: &str) -> Vec<Annotation> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(open) = rt_open_regex().find_at(inner, pos) {
        let body_start = open.end();
        let (body_end, element_end) = match rt_boundary_regex().find_at(inner, body_start) {
            Some(end_tag) if end_tag.as_str().starts_with("</") => (end_tag.start(), end_tag.end()),
            Some(next_tag) => (next_tag.start(), next_tag.start()),
            None => (inner.len(), inner.len()),
        };

        found.push(Annotation {
            element: open.start()..element_end,
            body: body_start..body_end,
        });
        pos = element_end;
    }

    found
}

/// The ruby body with every annotation element cut out
fn base_text(inner: &str, annotations: &[Annotation]) -> String {
    let mut base = String::with_capacity(inner.len());
    let mut last = 0;
    for annotation in annotations {
        base.push_str(&inner[last..annotation.element.start]);
        last = annotation.element.end;
    }
    base.push_str(&inner[last..]);
    base
}

const READING_PARENS: [char; 4] = ['(', ')', '（', '）'];

/// Text content of an HTML fragment: tags removed, entities decoded
pub fn plain_text(html: &str) -> String {
    let stripped = tag_regex().replace_all(html, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Normalize a ruby-annotated fragment into a vocabulary entry.
pub fn normalize_ruby(html: &str) -> VocabEntry {
    let mut term = String::new();
    let mut reading = String::new();

    for ruby in ruby_regex().captures_iter(html) {
        let inner = rp_regex().replace_all(&ruby[1], "");
        let inner: &str = &inner;

        let spans = annotations(inner);
        if spans.is_empty() {
            continue;
        }

        term.push_str(&plain_text(&base_text(inner, &spans)));

        for annotation in &spans {
            let text = plain_text(&inner[annotation.body.clone()]);
            reading.extend(text.chars().filter(|c| !READING_PARENS.contains(c)));
        }
    }

    if term.trim().is_empty() {
        let text = plain_text(html);
        let text = text.trim();
        return VocabEntry::new(text, text);
    }

    VocabEntry::new(term.trim(), reading.trim())
}
