//! Gloss markup: quoted examples and back-quoted word references.
//!
//! Two rules, applied in order to the escaped gloss text:
//!
//! 1. `"` opens an example that runs to the next `"`, or to the end of the
//!    gloss when the quote is never closed. The run, without its quotes, is
//!    wrapped in `<cite class="ex">`.
//! 2. `` `word' `` (word characters between a backtick and an apostrophe)
//!    becomes a link to `word`.
//!
//! Neither rule can match the other's markup, so the order only matters for
//! text such as `"see `cat'"`, where the link ends up inside the example.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::escape;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)(?:"|$)"#).expect("quoted example pattern"));
static BACKQUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(\w+)'").expect("word reference pattern"));

pub fn format_gloss(raw: &str) -> String {
    let escaped = escape(raw.trim());
    let with_examples = QUOTED.replace_all(&escaped, r#"<cite class="ex">${1}</cite>"#);
    BACKQUOTED
        .replace_all(&with_examples, r#"<a href="${1}">${1}</a>"#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_quoted_examples() {
        assert_eq!(
            format_gloss(r#"a small domesticated animal; "the cat sat""#),
            r#"a small domesticated animal; <cite class="ex">the cat sat</cite>"#
        );
        assert_eq!(
            format_gloss(r#"move fast; "he ran"; "run, Lola""#),
            r#"move fast; <cite class="ex">he ran</cite>; <cite class="ex">run, Lola</cite>"#
        );
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        assert_eq!(
            format_gloss(r#"lacking; "a lack of "#),
            r#"lacking; <cite class="ex">a lack of</cite>"#
        );
    }

    #[test]
    fn links_backquoted_words() {
        assert_eq!(
            format_gloss("see `feline' and `lion'"),
            r#"see <a href="feline">feline</a> and <a href="lion">lion</a>"#
        );
        assert_eq!(format_gloss("`two words'"), "`two words'");
    }

    #[test]
    fn escapes_before_marking_up() {
        assert_eq!(
            format_gloss(r#"x < y; "a & b""#),
            r#"x &lt; y; <cite class="ex">a &amp; b</cite>"#
        );
    }
}
