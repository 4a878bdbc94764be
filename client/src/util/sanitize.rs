//! Best-effort markup stripping for editor input.
//!
//! The transformation endpoint takes raw text, but that text round-trips
//! through the browser (editors, clipboard, error panes), so pasted input
//! is neutralized before submission: container elements whose content is
//! itself executable or styling (`script`, `style`, `iframe`, `object`,
//! `embed`) are removed along with their bodies, and any remaining tags
//! are stripped while their inner text is kept.
//!
//! TRADE-OFFS
//! ==========
//! HL7v2 is pipe-delimited plain text; a bare `<` only counts as a tag
//! opener when followed by a tag-name character, so segment content such
//! as `A < B` passes through untouched. The function never fails — any
//! input produces some output.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

/// Elements removed together with their entire content.
const DROP_WITH_CONTENT: &[&str] = &["script", "style", "iframe", "object", "embed"];

/// Strip markup from `input`, keeping plain text intact.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let without_blocks = drop_container_blocks(input);
    strip_tags(&without_blocks)
}

/// Remove `<tag …>…</tag>` blocks for each dangerous container element.
/// An unclosed opening tag drops everything to the end of the input.
fn drop_container_blocks(input: &str) -> String {
    let mut text = input.to_owned();
    for tag in DROP_WITH_CONTENT {
        text = drop_blocks_for(&text, tag);
    }
    text
}

fn drop_blocks_for(input: &str, tag: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(start) = lower[pos..].find(&open) {
        let start = pos + start;
        out.push_str(&input[pos..start]);
        match lower[start..].find(&close) {
            Some(end) => pos = start + end + close.len(),
            None => return out,
        }
    }
    out.push_str(&input[pos..]);
    out
}

/// Remove remaining tags, keeping their inner text. A `<` only opens a tag
/// when followed by an ASCII letter, `/`, `!` or `?`.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch != '<' {
            out.push(ch);
            continue;
        }
        let opens_tag = chars
            .peek()
            .is_some_and(|&(_, next)| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?'));
        if !opens_tag {
            out.push(ch);
            continue;
        }
        // Skip to the closing '>' or, if none, the rest of the input.
        match input[idx..].find('>') {
            Some(rel_end) => {
                let end = idx + rel_end;
                while chars.peek().is_some_and(|&(i, _)| i <= end) {
                    chars.next();
                }
            }
            None => return out,
        }
    }
    out
}
