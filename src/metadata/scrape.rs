//! Text-fallback parameter scraping
//!
//! Last-resort extractor: strips a model landing page to visible text and
//! scans it for a parameter-count claim like "7B" or "13 billion". The
//! pattern is deliberately loose and can match unrelated numbers ("3B" in
//! prose is accepted as-is); that is a known heuristic limitation.

use regex::Regex;
use std::sync::LazyLock;

/// A number followed by an optional space and "B"/"b", optionally spelled
/// out as "illion", with a word boundary after.
static PARAM_CLAIM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s?b(?:illion)?\b").expect("valid parameter claim regex")
});

/// Scan page HTML for a parameter-count claim, in billions.
///
/// Returns the first match's number with no further validation.
pub fn scan_parameter_claim(html: &str) -> Option<f64> {
    let text = html_to_text(html);
    let captures = PARAM_CLAIM_RE.captures(&text)?;
    captures[1].parse().ok()
}

/// Strip markup down to visible text.
///
/// Tags are replaced with a space so adjacent text does not fuse, and the
/// bodies of script and style elements are dropped entirely. Entities are
/// left as-is; the claim pattern only needs digits and letters.
fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len() / 2);
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let Some(close) = rest.find('>') else {
            // Unterminated tag: nothing visible remains.
            return collapse_whitespace(&out);
        };

        let tag = rest[1..close].trim_start();
        let name: String = tag
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        rest = &rest[close + 1..];
        out.push(' ');

        if name == "script" || name == "style" {
            let closing = format!("</{name}");
            match rest.to_ascii_lowercase().find(&closing) {
                // Leave the closing tag for the next loop pass to consume.
                Some(pos) => rest = &rest[pos..],
                None => return collapse_whitespace(&out),
            }
        }
    }

    out.push_str(rest);
    collapse_whitespace(&out)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
