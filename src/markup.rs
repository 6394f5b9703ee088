//! HTML fragments shared by the gloss formatter and the entry renderer.

use std::borrow::Cow;

/// Escape `&`, `<` and `>`. Quotes are left alone: the gloss rules match on them.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Self-referential link: the visible text is also the target headword.
pub fn link(word: &str) -> String {
    let word = escape(word);
    format!(r#"<a href="{word}">{word}</a>"#)
}

/// Comma separated links, in order.
pub fn links<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|word| link(word.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
