//! Shared, zero-copy types that mirror WordNet's `data.*` record layout.
//!
//! Text fields borrow from the backing buffer (`&str`); numeric fields keep
//! their raw representation (`offset`, `lex_id`, pointer source/target
//! indices). Display forms (underscores turned into spaces) are produced on
//! demand through [`Lemma::display`].
//!
//! ```rust
//! use wordnet_types::{Pos, SynsetId, decode_st};
//!
//! let pos = Pos::from_char('s').unwrap();
//! let id = SynsetId { pos, offset: 1740 };
//! assert_eq!(id.pos, Pos::Adj);
//! assert_eq!(decode_st("0a0b"), Some((Some(10), Some(11))));
//! ```

use std::borrow::Cow;
use std::fmt;

/// Part-of-speech marker as used to pick a data file (`n`, `v`, `a`/`s`, `r`).
///
/// Adjective satellites live in `data.adj`, so `s` maps to [`Pos::Adj`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

    /// Parse a WordNet POS character into an enum.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' | 's' => Some(Pos::Adj),
            'r' => Some(Pos::Adv),
            _ => None,
        }
    }

    /// Name of the data file holding records of this POS.
    pub fn data_file_name(self) -> &'static str {
        match self {
            Pos::Noun => "data.noun",
            Pos::Verb => "data.verb",
            Pos::Adj => "data.adj",
            Pos::Adv => "data.adv",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        })
    }
}

/// `(offset, pos)` pair uniquely identifying a synset within the WordNet files.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SynsetId {
    pub pos: Pos,
    pub offset: u32,
}

/// Raw `ss_type` marker from `data.*`, including adjective satellites.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SynsetType {
    Noun,
    Verb,
    Adj,
    Adv,
    AdjSatellite,
}

impl SynsetType {
    /// Parse the `ss_type` character from a data line.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(SynsetType::Noun),
            'v' => Some(SynsetType::Verb),
            'a' => Some(SynsetType::Adj),
            's' => Some(SynsetType::AdjSatellite),
            'r' => Some(SynsetType::Adv),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            SynsetType::Noun => 'n',
            SynsetType::Verb => 'v',
            SynsetType::Adj => 'a',
            SynsetType::AdjSatellite => 's',
            SynsetType::Adv => 'r',
        }
    }

    /// The data file this type is stored in.
    pub fn pos(self) -> Pos {
        match self {
            SynsetType::Noun => Pos::Noun,
            SynsetType::Verb => Pos::Verb,
            SynsetType::Adj | SynsetType::AdjSatellite => Pos::Adj,
            SynsetType::Adv => Pos::Adv,
        }
    }
}

/// A lemma token and its per-synset `lex_id`.
///
/// `text` is the raw token with any adjective syntactic marker (`(a)`, `(p)`,
/// `(ip)`) already split off into `marker`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lemma<'a> {
    pub text: &'a str,
    pub lex_id: u8,
    pub marker: Option<&'a str>,
}

impl<'a> Lemma<'a> {
    /// Headword display form: underscores become spaces.
    pub fn display(&self) -> Cow<'a, str> {
        if self.text.contains('_') {
            Cow::Owned(self.text.replace('_', " "))
        } else {
            Cow::Borrowed(self.text)
        }
    }
}

/// Pointer metadata from the `p_cnt` section.
///
/// `src_word`/`dst_word` are 1-based word numbers; `None` stands for the
/// `00` "whole synset" value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pointer<'a> {
    pub symbol: &'a str,
    pub target: SynsetId,
    pub src_word: Option<u16>,
    pub dst_word: Option<u16>,
}

impl Pointer<'_> {
    /// Whether the relation holds between the two synsets as a whole.
    pub fn is_whole_synset(&self) -> bool {
        self.src_word.is_none() && self.dst_word.is_none()
    }
}

/// Decoded synset record. The gloss is kept raw.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Synset<'a> {
    pub offset: u32,
    pub lex_filenum: &'a str,
    pub synset_type: SynsetType,
    pub words: Vec<Lemma<'a>>,
    pub pointers: Vec<Pointer<'a>>,
    pub gloss: &'a str,
}

impl Synset<'_> {
    pub fn id(&self) -> SynsetId {
        SynsetId {
            pos: self.synset_type.pos(),
            offset: self.offset,
        }
    }

    /// Display forms of all words, in record order, duplicates kept.
    pub fn headwords(&self) -> Vec<String> {
        self.words.iter().map(|w| w.display().into_owned()).collect()
    }
}

/// Decode the four-hex source/target field used in pointer blocks.
///
/// High byte is the source word number, low byte is the target word number.
/// Zero indicates "not specified" per WordNet conventions. Returns `None`
/// when the field is not exactly four hex digits.
pub fn decode_st(hex4: &str) -> Option<(Option<u16>, Option<u16>)> {
    if hex4.len() != 4 || !hex4.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let val = u16::from_str_radix(hex4, 16).ok()?;
    let src = val >> 8;
    let dst = val & 0x00FF;
    let src = if src == 0 { None } else { Some(src) };
    let dst = if dst == 0 { None } else { Some(dst) };
    Some((src, dst))
}
