//! Entry units, the per-headword collector, and document rendering.

use std::sync::Arc;

use indexmap::IndexMap;
use wordnet_db::LookupError;
use wordnet_types::{Synset, SynsetType};

use crate::gloss::format_gloss;
use crate::markup::{escape, links};
use crate::resolve::{Relations, Resolver};

pub const CONTENT_TYPE: &str = "text/html;charset=utf-8";

const ARTICLE_HEAD: &str = concat!(
    r#"<script src="~/js/styleswitcher.js"></script>"#,
    r#"<link rel="stylesheet" href="~/css/default.css" type="text/css">"#,
    r#"<link rel="alternate stylesheet" href="~/css/night.css" type="text/css" title="Night">"#,
);

pub fn pos_label(synset_type: SynsetType) -> &'static str {
    match synset_type {
        SynsetType::Noun => "n.",
        SynsetType::Verb => "v.",
        SynsetType::Adj => "adj.",
        SynsetType::AdjSatellite => "adj. satellite",
        SynsetType::Adv => "adv.",
    }
}

/// One rendering of a single (synset, word position) pair.
#[derive(Clone, Debug)]
pub struct EntryUnit {
    pub pos_label: &'static str,
    /// Formatted once per synset and shared by all of its words.
    pub gloss: Arc<str>,
    pub synonyms: Vec<String>,
    pub relations: Relations,
}

impl EntryUnit {
    pub fn render(&self) -> String {
        let mut html = format!(r#"<i class="pos">{}</i> {}"#, self.pos_label, self.gloss);
        if !self.synonyms.is_empty() {
            html.push_str(r#"<br/><small class="co">Synonyms:</small> "#);
            html.push_str(&links(&self.synonyms));
        }
        for (label, words) in &self.relations {
            if words.is_empty() {
                continue;
            }
            html.push_str(&format!(
                r#"<br/><small class="co">{}:</small> {}"#,
                escape(label),
                links(words)
            ));
        }
        html
    }
}

/// The other headwords of a synset, without any occurrence of the word at
/// `position` and without repeats.
pub fn synonyms(headwords: &[String], position: usize) -> Vec<String> {
    let own = &headwords[position];
    let mut out: Vec<String> = Vec::new();
    for word in headwords {
        if word != own && !out.contains(word) {
            out.push(word.clone());
        }
    }
    out
}

/// Headword -> entry units, in discovery order. Append-only.
#[derive(Debug, Default)]
pub struct Collector {
    entries: IndexMap<String, Vec<EntryUnit>>,
    units: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one unit per word of `synset` and append each to its headword.
    pub fn add_synset(
        &mut self,
        synset: &Synset<'_>,
        resolver: &Resolver<'_>,
    ) -> Result<(), LookupError> {
        let headwords = synset.headwords();
        let gloss: Arc<str> = format_gloss(synset.gloss).into();
        let pos_label = pos_label(synset.synset_type);

        for (position, headword) in headwords.iter().enumerate() {
            let relations = resolver.relations(synset, &headwords, position)?;
            self.push(
                headword.clone(),
                EntryUnit {
                    pos_label,
                    gloss: Arc::clone(&gloss),
                    synonyms: synonyms(&headwords, position),
                    relations,
                },
            );
        }
        Ok(())
    }

    pub fn push(&mut self, headword: String, unit: EntryUnit) {
        self.entries.entry(headword).or_default().push(unit);
        self.units += 1;
    }

    pub fn get(&self, headword: &str) -> Option<&[EntryUnit]> {
        self.entries.get(headword).map(Vec::as_slice)
    }

    /// Number of distinct headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unit_count(&self) -> usize {
        self.units
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EntryUnit])> {
        self.entries
            .iter()
            .map(|(headword, units)| (headword.as_str(), units.as_slice()))
    }

    /// Rendered documents in discovery order, consuming the collector.
    pub fn into_documents(self) -> impl Iterator<Item = (String, String)> {
        self.entries.into_iter().filter_map(|(headword, units)| {
            render_document(&headword, &units).map(|html| (headword, html))
        })
    }
}

/// Full HTML document for a headword; `None` when there is nothing to show.
pub fn render_document(headword: &str, units: &[EntryUnit]) -> Option<String> {
    let body = match units {
        [] => return None,
        [unit] => unit.render(),
        _ => {
            let items: String = units
                .iter()
                .map(|unit| format!("<li>{}</li>", unit.render()))
                .collect();
            format!("<ol>{items}</ol>")
        }
    };
    Some(format!(
        "{ARTICLE_HEAD}<h1>{}</h1><span>{body}</span>",
        escape(headword)
    ))
}
