//! Turn WordNet `data.*` files into one HTML dictionary entry per headword.
//!
//! Every synset is decoded, its pointers are followed into the sibling data
//! files by byte offset, and one [`EntryUnit`] is built per word of the synset.
//! Units accumulate per headword in source order and are rendered into a
//! document that is handed to a [`Store`].
//!
//! ```no_run
//! use wordnet_db::WordNet;
//! use wordnet_dict::{MemoryStore, convert};
//!
//! # fn main() -> anyhow::Result<()> {
//! let wn = WordNet::load("/path/to/wordnet")?;
//! let mut store = MemoryStore::new();
//! let summary = convert(&wn, &mut store, "")?;
//! println!("{} entries", summary.entries);
//! # Ok(()) }
//! ```

pub mod assets;
pub mod convert;
pub mod entry;
pub mod error;
pub mod gloss;
pub mod markup;
pub mod resolve;
pub mod store;
pub mod symbols;

pub use convert::{Summary, collect, convert, emit};
pub use entry::{CONTENT_TYPE, Collector, EntryUnit, render_document};
pub use error::{ConvertError, Result};
pub use gloss::format_gloss;
pub use resolve::{Relations, Resolver};
pub use store::{JsonlStore, MemoryStore, Store};
pub use symbols::SymbolTable;
