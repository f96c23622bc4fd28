use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::db::opinion;

pub mod template;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TIMESTAMP_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Breaks recognised when splitting text into lines; `\r\n` counts once.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// An opinion prepared for the HTML listing. Text fields are already escaped
/// and carry `<br>` in place of line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpinionView {
    pub id: i32,
    pub create_at: String,
    pub topic: String,
    pub content: String,
}

impl OpinionView {
    pub fn from_model(model: &opinion::Model) -> Self {
        OpinionView {
            id: model.id,
            create_at: format_timestamp(&model.create_at),
            topic: to_html_text(&model.topic),
            content: to_html_text(&model.content),
        }
    }
}

/// An opinion as served by the JSON listing: raw text, ISO-8601 timestamp.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OpinionJson {
    pub id: i32,
    pub create_at: String,
    pub topic: String,
    pub content: String,
}

impl OpinionJson {
    pub fn from_model(model: &opinion::Model) -> Self {
        OpinionJson {
            id: model.id,
            create_at: format_timestamp(&model.create_at),
            topic: model.topic.clone(),
            content: model.content.clone(),
        }
    }
}

/// ISO-8601 with microseconds, which are omitted when zero.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format(TIMESTAMP_FORMAT).to_string()
    } else {
        ts.format(TIMESTAMP_MICROS_FORMAT).to_string()
    }
}

/// Escapes `text` for HTML and joins its lines with `<br>`.
pub fn to_html_text(text: &str) -> String {
    split_lines(text)
        .into_iter()
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Splits on every break in `LINE_BREAKS`. A single trailing break does not
/// start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }

        lines.push(&text[start..i]);
        start = i + c.len_utf8();

        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                start += 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
