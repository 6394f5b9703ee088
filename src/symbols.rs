//! Pointer symbol labels per synset type.

use std::collections::HashMap;

use wordnet_types::SynsetType;

/// First characters of domain pointers (`;c`, `-r`, ...). These relations are
/// not rendered.
pub const DOMAIN_MARKERS: [char; 2] = [';', '-'];

pub fn is_domain_marker(symbol: &str) -> bool {
    symbol.starts_with(DOMAIN_MARKERS)
}

/// Immutable `synset type -> symbol -> label` map.
///
/// A symbol is only meaningful relative to the type of the synset it appears
/// in: `\` is "Pertainyms" on adjectives but "Derived from adjective" on adverbs.
pub struct SymbolTable {
    labels: HashMap<SynsetType, HashMap<&'static str, &'static str>>,
}

impl SymbolTable {
    /// The WordNet 3.x pointer symbols.
    pub fn wordnet() -> Self {
        let types = [
            SynsetType::Noun,
            SynsetType::Verb,
            SynsetType::Adj,
            SynsetType::AdjSatellite,
            SynsetType::Adv,
        ];
        let labels = types
            .into_iter()
            .map(|ty| (ty, symbols_for(ty).iter().copied().collect()))
            .collect();
        Self { labels }
    }

    pub fn label(&self, synset_type: SynsetType, symbol: &str) -> Option<&'static str> {
        self.labels.get(&synset_type)?.get(symbol).copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::wordnet()
    }
}

fn symbols_for(synset_type: SynsetType) -> &'static [(&'static str, &'static str)] {
    match synset_type {
        SynsetType::Noun => &[
            ("!", "Antonyms"),
            ("@", "Hypernyms"),
            ("@i", "Instance hypernyms"),
            ("~", "Hyponyms"),
            ("~i", "Instance hyponyms"),
            ("#m", "Member holonyms"),
            ("#s", "Substance holonyms"),
            ("#p", "Part holonyms"),
            ("%m", "Member meronyms"),
            ("%s", "Substance meronyms"),
            ("%p", "Part meronyms"),
            ("=", "Attributes"),
            ("+", "Derivationally related forms"),
            (";c", "Domain of synset - TOPIC"),
            ("-c", "Member of this domain - TOPIC"),
            (";r", "Domain of synset - REGION"),
            ("-r", "Member of this domain - REGION"),
            (";u", "Domain of synset - USAGE"),
            ("-u", "Member of this domain - USAGE"),
        ],
        SynsetType::Verb => &[
            ("!", "Antonyms"),
            ("@", "Hypernyms"),
            ("~", "Hyponyms"),
            ("*", "Entailments"),
            (">", "Cause"),
            ("^", "Also see"),
            ("$", "Verb group"),
            ("+", "Derivationally related forms"),
            (";c", "Domain of synset - TOPIC"),
            (";r", "Domain of synset - REGION"),
            (";u", "Domain of synset - USAGE"),
        ],
        SynsetType::Adj | SynsetType::AdjSatellite => &[
            ("!", "Antonyms"),
            ("+", "Derivationally related forms"),
            ("&", "Similar to"),
            ("<", "Participle of verb"),
            ("\\", "Pertainyms"),
            ("=", "Attributes"),
            ("^", "Also see"),
            (";c", "Domain of synset - TOPIC"),
            (";r", "Domain of synset - REGION"),
            (";u", "Domain of synset - USAGE"),
        ],
        SynsetType::Adv => &[
            ("!", "Antonyms"),
            ("\\", "Derived from adjective"),
            ("+", "Derivationally related forms"),
            (";c", "Domain of synset - TOPIC"),
            (";r", "Domain of synset - REGION"),
            (";u", "Domain of synset - USAGE"),
        ],
    }
}
