use std::env;
use std::path::PathBuf;

use wordnet_db::{LoadMode, WordNet, parse_record};

fn dict_dir() -> Option<PathBuf> {
    env::var("WORDNET_DIR").ok().map(PathBuf::from)
}

#[test]
fn every_pointer_resolves_in_a_real_dictionary() {
    let Some(dir) = dict_dir() else {
        eprintln!("skipping: WORDNET_DIR not set");
        return;
    };
    let wn = WordNet::load_with_mode(&dir, LoadMode::Mmap).expect("load wordnet");

    let mut records = 0usize;
    let mut pointers = 0usize;
    for line in wn.records() {
        let synset = parse_record(line.bytes)
            .unwrap_or_else(|e| panic!("{}:{}: {e}", line.file_name(), line.lineno));
        for ptr in &synset.pointers {
            wn.synset_at(ptr.target).expect("pointer target");
            pointers += 1;
        }
        records += 1;
    }

    assert!(records > 10_000, "too few records");
    assert!(pointers > records, "too few pointers");
}
