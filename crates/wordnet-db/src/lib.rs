//! Random-access reader for WordNet `data.*` files.
//!
//! Each category file (`data.noun`, `data.verb`, `data.adj`, `data.adv`) is
//! opened once and held for the lifetime of a [`WordNet`]. Records are read
//! two ways over the same bytes:
//!
//! - sequentially, through [`WordNet::records`], which skips the license
//!   header lines that start with whitespace;
//! - directly, through [`WordNet::synset_at`], which seeks to a pointer's byte
//!   offset and decodes the single line found there. The files are their own
//!   index: no lookup table is built.
//!
//! Callers choose between memory-mapped files or owned buffers at runtime via
//! [`LoadMode`].
//!
//! # Example
//! ```no_run
//! use wordnet_db::{LoadMode, WordNet, parse_record};
//!
//! # fn main() -> anyhow::Result<()> {
//! let wn = WordNet::load_with_mode("/path/to/wordnet", LoadMode::Mmap)?;
//! for line in wn.records().take(3) {
//!     let synset = parse_record(line.bytes)?;
//!     for ptr in &synset.pointers {
//!         let target = wn.synset_at(ptr.target)?;
//!         println!("{} -> {}", synset.words[0].text, target.words[0].text);
//!     }
//! }
//! # Ok(()) }
//! ```

mod error;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use wordnet_types::{Lemma, Pointer, Pos, Synset, SynsetId, SynsetType, decode_st};

pub use error::{DecodeError, LoadError, LookupError};

/// Strategy for loading dictionary files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map each WordNet file (fast, zero-copy).
    Mmap,
    /// Read each file into an owned buffer (portable fallback).
    Owned,
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// One opened category file, addressable by byte offset.
pub struct DataFile {
    pos: Pos,
    path: PathBuf,
    buffer: Buffer,
}

impl DataFile {
    pub fn open(path: impl Into<PathBuf>, pos: Pos, mode: LoadMode) -> Result<Self, LoadError> {
        let path = path.into();
        let buffer = load_file(&path, mode)?;
        Ok(Self { pos, path, buffer })
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &'static str {
        self.pos.data_file_name()
    }

    /// Raw bytes of the line starting at `offset`, without the line terminator.
    pub fn line_at(&self, offset: u32) -> Result<&[u8], LookupError> {
        let bytes = self.buffer.as_slice();
        let start = offset as usize;
        if start >= bytes.len() {
            return Err(LookupError::OffsetOutOfRange {
                file: self.name(),
                offset,
            });
        }
        let rest = &bytes[start..];
        let end = rest.iter().position(|b| *b == b'\n').unwrap_or(rest.len());
        Ok(strip_cr(&rest[..end]))
    }

    /// Decode the record stored at `offset`.
    ///
    /// The record's own offset field must match `offset`, so a pointer into
    /// the middle of a line is reported instead of silently misread.
    pub fn synset_at(&self, offset: u32) -> Result<Synset<'_>, LookupError> {
        let line = self.line_at(offset)?;
        let synset = parse_record(line).map_err(|source| LookupError::Decode {
            file: self.name(),
            offset,
            source,
        })?;
        if synset.offset != offset {
            return Err(LookupError::OffsetMismatch {
                file: self.name(),
                requested: offset,
                found: synset.offset,
            });
        }
        Ok(synset)
    }

    /// Record lines of this file in file order.
    pub fn records(&self) -> impl Iterator<Item = RecordLine<'_>> + '_ {
        let pos = self.pos;
        self.buffer
            .as_slice()
            .split(|b| *b == b'\n')
            .enumerate()
            .map(|(idx, raw)| (idx + 1, strip_cr(raw)))
            .filter(|(_, line)| is_record_line(line))
            .map(move |(lineno, bytes)| RecordLine { pos, lineno, bytes })
    }
}

/// A raw record line plus where it came from.
#[derive(Clone, Copy, Debug)]
pub struct RecordLine<'a> {
    pub pos: Pos,
    pub lineno: usize,
    pub bytes: &'a [u8],
}

impl RecordLine<'_> {
    pub fn file_name(&self) -> &'static str {
        self.pos.data_file_name()
    }
}

/// The set of opened category files of one WordNet `dict` directory.
pub struct WordNet {
    dict_dir: PathBuf,
    files: Vec<DataFile>,
}

impl WordNet {
    /// Open the category files of a WordNet source directory.
    ///
    /// Defaults to memory-mapping the source files. Use [`load_with_mode`] to
    /// force owned buffers instead.
    ///
    /// [`load_with_mode`]: WordNet::load_with_mode
    pub fn load(source_dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with_mode(source_dir, LoadMode::Mmap)
    }

    /// Open the category files choosing between mmap and owned buffers.
    ///
    /// `source_dir` is either a distribution root containing `dict/` or the
    /// `dict` directory itself. Files are kept in file name order, which is
    /// the order [`records`](WordNet::records) walks them in.
    pub fn load_with_mode(source_dir: impl AsRef<Path>, mode: LoadMode) -> Result<Self, LoadError> {
        let dict_dir = resolve_dict_dir(source_dir.as_ref())?;

        let mut present: Vec<Pos> = Pos::ALL
            .into_iter()
            .filter(|pos| dict_dir.join(pos.data_file_name()).is_file())
            .collect();
        if present.is_empty() {
            return Err(LoadError::NoDataFiles(dict_dir));
        }
        present.sort_by_key(|pos| pos.data_file_name());

        let files = present
            .into_iter()
            .map(|pos| DataFile::open(dict_dir.join(pos.data_file_name()), pos, mode))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dict_dir, files })
    }

    pub fn dict_dir(&self) -> &Path {
        &self.dict_dir
    }

    pub fn files(&self) -> &[DataFile] {
        &self.files
    }

    /// The opened file for `pos`, if one was present.
    pub fn file(&self, pos: Pos) -> Option<&DataFile> {
        self.files.iter().find(|f| f.pos == pos)
    }

    /// Categories that had no data file in the directory.
    pub fn missing(&self) -> Vec<Pos> {
        Pos::ALL
            .into_iter()
            .filter(|pos| self.file(*pos).is_none())
            .collect()
    }

    /// Stream every record line of every file, file by file.
    pub fn records(&self) -> impl Iterator<Item = RecordLine<'_>> + '_ {
        self.files.iter().flat_map(DataFile::records)
    }

    /// Seek to `id.offset` in the file for `id.pos` and decode that record.
    pub fn synset_at(&self, id: SynsetId) -> Result<Synset<'_>, LookupError> {
        self.file(id.pos)
            .ok_or(LookupError::MissingFile(id.pos))?
            .synset_at(id.offset)
    }
}

/// Locate the directory holding the `data.*` files.
pub fn resolve_dict_dir(source_dir: &Path) -> Result<PathBuf, LoadError> {
    let nested = source_dir.join("dict");
    if nested.is_dir() {
        return Ok(nested);
    }
    let is_dict = Pos::ALL
        .iter()
        .any(|pos| source_dir.join(pos.data_file_name()).is_file());
    if is_dict {
        return Ok(source_dir.to_path_buf());
    }
    Err(LoadError::NotWordNet(source_dir.to_path_buf()))
}

/// Decode a raw record line (bytes as read from a data file).
pub fn parse_record(line: &[u8]) -> Result<Synset<'_>, DecodeError> {
    let text = std::str::from_utf8(line)?;
    parse_synset(text)
}

/// Decode one `data.*` line:
///
/// `offset lex_filenum ss_type w_cnt {word lex_id}... p_cnt {ptr offset pos st}... | gloss`
///
/// Counts `w_cnt` and `lex_id` are hex, `p_cnt` and offsets are decimal.
/// Anything between the pointer block and `|` (verb frames) is ignored.
pub fn parse_synset(line: &str) -> Result<Synset<'_>, DecodeError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let (meta, gloss) = line.split_once('|').ok_or(DecodeError::MissingGloss)?;
    let mut fields = meta.split_ascii_whitespace();

    let token = next_field(&mut fields, "offset")?;
    let offset: u32 = token
        .parse()
        .map_err(|_| DecodeError::invalid("offset", token))?;
    let lex_filenum = next_field(&mut fields, "lex_filenum")?;

    let token = next_field(&mut fields, "ss_type")?;
    let synset_type = single_char(token)
        .and_then(SynsetType::from_char)
        .ok_or_else(|| DecodeError::invalid("ss_type", token))?;

    let token = next_field(&mut fields, "w_cnt")?;
    let w_cnt =
        usize::from_str_radix(token, 16).map_err(|_| DecodeError::invalid("w_cnt", token))?;
    if w_cnt == 0 {
        return Err(DecodeError::NoWords);
    }

    let is_adj = matches!(synset_type, SynsetType::Adj | SynsetType::AdjSatellite);
    let mut words = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = next_field(&mut fields, "word")?;
        let token = next_field(&mut fields, "lex_id")?;
        let lex_id =
            u8::from_str_radix(token, 16).map_err(|_| DecodeError::invalid("lex_id", token))?;
        let (text, marker) = if is_adj {
            split_marker(word)
        } else {
            (word, None)
        };
        words.push(Lemma {
            text,
            lex_id,
            marker,
        });
    }

    let token = next_field(&mut fields, "p_cnt")?;
    let p_cnt: usize = token
        .parse()
        .map_err(|_| DecodeError::invalid("p_cnt", token))?;

    let mut pointers = Vec::with_capacity(p_cnt);
    for _ in 0..p_cnt {
        let symbol = next_field(&mut fields, "pointer symbol")?;
        let token = next_field(&mut fields, "pointer offset")?;
        let target_offset: u32 = token
            .parse()
            .map_err(|_| DecodeError::invalid("pointer offset", token))?;
        let token = next_field(&mut fields, "pointer pos")?;
        let target_pos = single_char(token)
            .and_then(Pos::from_char)
            .ok_or_else(|| DecodeError::invalid("pointer pos", token))?;
        let token = next_field(&mut fields, "pointer source/target")?;
        let (src_word, dst_word) =
            decode_st(token).ok_or_else(|| DecodeError::invalid("pointer source/target", token))?;
        pointers.push(Pointer {
            symbol,
            target: SynsetId {
                pos: target_pos,
                offset: target_offset,
            },
            src_word,
            dst_word,
        });
    }

    Ok(Synset {
        offset,
        lex_filenum,
        synset_type,
        words,
        pointers,
        gloss: gloss.trim(),
    })
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<&'a str, DecodeError> {
    fields.next().ok_or(DecodeError::Truncated { field })
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Split an adjective syntactic marker (`(a)`, `(p)`, `(ip)`) off a word.
fn split_marker(word: &str) -> (&str, Option<&str>) {
    for marker in ["(ip)", "(a)", "(p)"] {
        if let Some(stem) = word.strip_suffix(marker)
            && !stem.is_empty()
        {
            return (stem, Some(&marker[1..marker.len() - 1]));
        }
    }
    (word, None)
}

/// Header lines start with two spaces; blank lines carry no record either.
fn is_record_line(line: &[u8]) -> bool {
    if line.iter().all(u8::is_ascii_whitespace) {
        return false;
    }
    !matches!(line, [a, b, ..] if a.is_ascii_whitespace() && b.is_ascii_whitespace())
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    match mode {
        LoadMode::Mmap => unsafe { Mmap::map(&file) }
            .map(Buffer::Mmap)
            .map_err(|source| LoadError::Map {
                path: path.to_path_buf(),
                source,
            }),
        LoadMode::Owned => {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .map_err(|source| LoadError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(Buffer::Owned(buf))
        }
    }
}

fn strip_cr(line: &[u8]) -> &[u8] {
    if line.ends_with(b"\r") {
        &line[..line.len() - 1]
    } else {
        line
    }
}
