//! Pointer resolution: follow a synset's pointers into the data files and
//! collect the referenced words under their relation labels.

use indexmap::IndexMap;
use tracing::warn;
use wordnet_db::{LookupError, WordNet};
use wordnet_types::{Pointer, Synset};

use crate::symbols::{SymbolTable, is_domain_marker};

/// Relation label -> referenced words, both in first-seen order.
pub type Relations = IndexMap<String, Vec<String>>;

pub struct Resolver<'w> {
    wordnet: &'w WordNet,
    symbols: &'w SymbolTable,
}

impl<'w> Resolver<'w> {
    pub fn new(wordnet: &'w WordNet, symbols: &'w SymbolTable) -> Self {
        Self { wordnet, symbols }
    }

    /// Resolve the pointers of `synset` that apply to the word at `position`.
    ///
    /// `headwords` are the display forms of `synset.words`. Whole-synset
    /// relations leave out target words that are already synonyms.
    pub fn relations(
        &self,
        synset: &Synset<'_>,
        headwords: &[String],
        position: usize,
    ) -> Result<Relations, LookupError> {
        let mut relations = Relations::new();
        for pointer in &synset.pointers {
            if !applies_to(pointer, position) || is_domain_marker(pointer.symbol) {
                continue;
            }
            let label = self.label(synset, pointer.symbol);
            let target = self.wordnet.synset_at(pointer.target)?;
            let group = relations.entry(label).or_default();

            match pointer.dst_word {
                Some(index) => {
                    let word = target
                        .words
                        .get(usize::from(index) - 1)
                        .ok_or(LookupError::WordIndex {
                            file: pointer.target.pos.data_file_name(),
                            offset: pointer.target.offset,
                            index,
                        })?
                        .display();
                    if !group.iter().any(|w| *w == word) {
                        group.push(word.into_owned());
                    }
                }
                None => {
                    for word in target.words.iter().map(|w| w.display()) {
                        if !headwords.iter().any(|h| *h == word)
                            && !group.iter().any(|w| *w == word)
                        {
                            group.push(word.into_owned());
                        }
                    }
                }
            }
        }
        Ok(relations)
    }

    fn label(&self, synset: &Synset<'_>, symbol: &str) -> String {
        match self.symbols.label(synset.synset_type, symbol) {
            Some(label) => label.to_string(),
            None => {
                let id = synset.id();
                warn!(
                    "unknown pointer symbol {} for {} in {} at offset {}",
                    symbol,
                    synset.synset_type.to_char(),
                    id.pos.data_file_name(),
                    id.offset
                );
                symbol.to_string()
            }
        }
    }
}

/// Pointers with a source word only apply to that word's position.
fn applies_to(pointer: &Pointer<'_>, position: usize) -> bool {
    match pointer.src_word {
        Some(src) => usize::from(src) == position + 1,
        None => true,
    }
}
