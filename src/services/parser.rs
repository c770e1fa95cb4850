//! Positional split of the model's reply.
//!
//! Line 0 is the title, line 1 the summary and everything after that is the
//! body. Nothing here checks that the model actually followed that layout; a
//! reply that ignores it still parses, just into the wrong fields.

use crate::models::GeneratedContent;

const PARAGRAPH_BREAK: &str = "\n\n";

pub fn parse_response(raw: &str) -> GeneratedContent {
    let lines: Vec<&str> = raw.split('\n').collect();

    let title = lines.first().map(|l| l.trim()).unwrap_or_default().to_string();
    let summary = lines.get(1).map(|l| l.trim()).unwrap_or_default().to_string();
    let body = lines.get(2..).unwrap_or_default().join("\n");

    GeneratedContent {
        raw_text: raw.to_string(),
        title,
        summary,
        body_paragraphs: split_paragraphs(body.trim()),
    }
}

pub fn split_paragraphs(body: &str) -> Vec<String> {
    body.split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn paragraphs_to_html(paragraphs: &[String], escape: bool) -> String {
    paragraphs
        .iter()
        .map(|p| {
            if escape {
                format!("<p>{}</p>", html_escape::encode_text(p))
            } else {
                format!("<p>{}</p>", p)
            }
        })
        .collect()
}
