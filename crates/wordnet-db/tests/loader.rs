mod common;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use common::write_dict;
use wordnet_db::{LoadError, LoadMode, LookupError, WordNet, parse_record};
use wordnet_types::{Pos, SynsetId, SynsetType};

fn sample_dict(dir: &Path) -> HashMap<String, u32> {
    let noun: &[(&str, &str)] = &[
        (
            "cat",
            "{cat} 05 n 02 cat 0 feline 0 001 @ {mammal} n 0000 | a small domesticated animal \"the cat sat\"  ",
        ),
        (
            "mammal",
            "{mammal} 05 n 01 mammal 0 001 ~ {cat} n 0000 | a warm-blooded animal  ",
        ),
    ];
    let verb: &[(&str, &str)] = &[(
        "purr",
        "{purr} 30 v 01 purr 0 001 + {cat} n 0101 01 + 02 00 | make a soft noise  ",
    )];
    let adj: &[(&str, &str)] = &[("feral", "{feral} 00 s 01 feral(a) 0 000 | wild and menacing  ")];
    write_dict(dir, &[("data.noun", noun), ("data.verb", verb), ("data.adj", adj)])
}

#[test]
fn loads_dict_subdirectory_and_streams_records_in_file_name_order() {
    let root = tempfile::tempdir().unwrap();
    let dict = root.path().join("dict");
    fs::create_dir(&dict).unwrap();
    sample_dict(&dict);

    let wn = WordNet::load(root.path()).expect("load dict");
    assert_eq!(wn.dict_dir(), dict.as_path());
    assert_eq!(wn.missing(), vec![Pos::Adv]);

    let lines: Vec<_> = wn.records().collect();
    let order: Vec<Pos> = lines.iter().map(|l| l.pos).collect();
    assert_eq!(order, vec![Pos::Adj, Pos::Noun, Pos::Noun, Pos::Verb]);
    // two header lines precede every record block
    assert_eq!(lines[0].lineno, 3);
    assert_eq!(lines[2].lineno, 4);
    assert_eq!(lines[0].file_name(), "data.adj");

    let feral = parse_record(lines[0].bytes).unwrap();
    assert_eq!(feral.synset_type, SynsetType::AdjSatellite);
    assert_eq!(feral.headwords(), vec!["feral"]);
    assert_eq!(feral.words[0].marker, Some("a"));
}

#[test]
fn pointer_offsets_resolve_to_the_referenced_record() {
    let dir = tempfile::tempdir().unwrap();
    let offsets = sample_dict(dir.path());

    let wn = WordNet::load_with_mode(dir.path(), LoadMode::Owned).unwrap();
    let cat = wn
        .file(Pos::Noun)
        .unwrap()
        .synset_at(offsets["{cat}"])
        .unwrap();
    let target = wn.synset_at(cat.pointers[0].target).unwrap();

    let mammal_line = wn
        .records()
        .find(|l| l.bytes.starts_with(format!("{:08}", offsets["{mammal}"]).as_bytes()))
        .unwrap();
    assert_eq!(target, parse_record(mammal_line.bytes).unwrap());
    assert_eq!(target.headwords(), vec!["mammal"]);

    let purr = wn
        .synset_at(SynsetId {
            pos: Pos::Verb,
            offset: offsets["{purr}"],
        })
        .unwrap();
    let back = wn.synset_at(purr.pointers[0].target).unwrap();
    assert_eq!(back.offset, offsets["{cat}"]);
}

#[test]
fn rejects_offsets_that_do_not_start_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let offsets = sample_dict(dir.path());
    let wn = WordNet::load(dir.path()).unwrap();

    let inside = SynsetId {
        pos: Pos::Noun,
        offset: offsets["{cat}"] + 1,
    };
    assert!(matches!(
        wn.synset_at(inside),
        Err(LookupError::Decode { .. } | LookupError::OffsetMismatch { .. })
    ));

    let past_end = SynsetId {
        pos: Pos::Noun,
        offset: 1_000_000,
    };
    assert!(matches!(
        wn.synset_at(past_end),
        Err(LookupError::OffsetOutOfRange { file: "data.noun", .. })
    ));

    let header = SynsetId {
        pos: Pos::Noun,
        offset: 0,
    };
    assert!(matches!(
        wn.synset_at(header),
        Err(LookupError::Decode { .. })
    ));
}

#[test]
fn reports_missing_category_files() {
    let dir = tempfile::tempdir().unwrap();
    sample_dict(dir.path());
    let wn = WordNet::load(dir.path()).unwrap();
    let err = wn
        .synset_at(SynsetId {
            pos: Pos::Adv,
            offset: 0,
        })
        .unwrap_err();
    assert!(matches!(err, LookupError::MissingFile(Pos::Adv)));
}

#[test]
fn rejects_directories_without_wordnet_files() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        WordNet::load(dir.path()),
        Err(LoadError::NotWordNet(_))
    ));

    fs::create_dir(dir.path().join("dict")).unwrap();
    assert!(matches!(
        WordNet::load(dir.path()),
        Err(LoadError::NoDataFiles(_))
    ));
}

#[test]
fn handles_crlf_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let line = "00000000 05 n 01 cat 0 000 | a feline  ";
    fs::write(dir.path().join("data.noun"), format!("{line}\r\n")).unwrap();

    let wn = WordNet::load(dir.path()).unwrap();
    let syn = wn
        .synset_at(SynsetId {
            pos: Pos::Noun,
            offset: 0,
        })
        .unwrap();
    assert_eq!(syn.gloss, "a feline");
    assert_eq!(wn.records().count(), 1);
}
