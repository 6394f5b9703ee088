use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wordnet_db::{LoadMode, WordNet, parse_record};

fn main() -> Result<()> {
    let dict_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p wordnet-db --example stats -- <path-to-wordnet-dir>")?;

    let wn = WordNet::load_with_mode(&dict_dir, LoadMode::Mmap)
        .with_context(|| format!("loading WordNet from {}", dict_dir.display()))?;

    let mut synset_count = 0usize;
    let mut word_count = 0usize;
    let mut markers: HashMap<String, usize> = HashMap::new();
    let mut whole_synset_pointers = 0usize;
    let mut word_pointers = 0usize;
    let mut symbols: HashMap<String, usize> = HashMap::new();

    for line in wn.records() {
        let syn = parse_record(line.bytes)
            .with_context(|| format!("{}:{}", line.file_name(), line.lineno))?;
        synset_count += 1;
        word_count += syn.words.len();
        for marker in syn.words.iter().filter_map(|w| w.marker) {
            *markers.entry(marker.to_string()).or_default() += 1;
        }
        for ptr in &syn.pointers {
            if ptr.is_whole_synset() {
                whole_synset_pointers += 1;
            } else {
                word_pointers += 1;
            }
            *symbols.entry(ptr.symbol.to_string()).or_default() += 1;
        }
    }

    println!("Dictionary: {}", wn.dict_dir().display());
    for file in wn.files() {
        println!("  {}", file.path().display());
    }
    println!("Synsets      : {}", synset_count);
    println!("Words in synsets: {}", word_count);
    let mut markers: Vec<_> = markers.into_iter().collect();
    markers.sort();
    for (marker, count) in markers {
        println!("  ({marker}) {count}");
    }
    println!("Whole-synset pointers: {}", whole_synset_pointers);
    println!("Word-to-word pointers: {}", word_pointers);

    let mut symbols: Vec<_> = symbols.into_iter().collect();
    symbols.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (symbol, count) in symbols {
        println!("  {symbol:>3} {count}");
    }

    Ok(())
}
