//! The two passes of a conversion: collect entry units from every record,
//! then render each headword and hand it to the store.

use std::time::Instant;

use tracing::{debug, info};
use wordnet_db::{WordNet, parse_record};

use crate::assets::{add_assets, write_tags};
use crate::entry::{CONTENT_TYPE, Collector};
use crate::error::{ConvertError, Result};
use crate::resolve::Resolver;
use crate::store::Store;
use crate::symbols::SymbolTable;

const PROGRESS_EVERY: usize = 5000;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub records: usize,
    pub units: usize,
    pub entries: usize,
}

/// Run a full conversion into `store`: tags, assets, then one document per
/// headword in discovery order.
pub fn convert<S: Store>(wordnet: &WordNet, store: &mut S, created_by: &str) -> Result<Summary> {
    write_tags(store, created_by)?;
    add_assets(store)?;

    let symbols = SymbolTable::wordnet();
    let (collector, records) = collect(wordnet, &symbols)?;
    let units = collector.unit_count();
    let entries = emit(collector, store)?;

    Ok(Summary {
        records,
        units,
        entries,
    })
}

/// First pass: decode every record and build its entry units.
///
/// Returns the collector and the number of records read.
pub fn collect(wordnet: &WordNet, symbols: &SymbolTable) -> Result<(Collector, usize)> {
    let start = Instant::now();
    let resolver = Resolver::new(wordnet, symbols);
    let mut collector = Collector::new();
    let mut records = 0usize;

    for line in wordnet.records() {
        let synset = parse_record(line.bytes).map_err(|source| ConvertError::Decode {
            file: line.file_name(),
            line: line.lineno,
            text: String::from_utf8_lossy(line.bytes).into_owned(),
            source,
        })?;
        collector
            .add_synset(&synset, &resolver)
            .map_err(|source| ConvertError::Lookup {
                file: line.file_name(),
                line: line.lineno,
                source,
            })?;

        records += 1;
        if records % PROGRESS_EVERY == 0 {
            debug!("{records} records read");
        }
    }

    info!(
        "collected {} headwords from {} records in {} ms",
        collector.len(),
        records,
        start.elapsed().as_millis()
    );
    Ok((collector, records))
}

/// Second pass: render and store every headword. Returns the documents added.
pub fn emit<S: Store>(collector: Collector, store: &mut S) -> Result<usize> {
    let start = Instant::now();
    let mut added = 0usize;
    for (headword, html) in collector.into_documents() {
        store.add(html.as_bytes(), &headword, CONTENT_TYPE)?;
        added += 1;
    }
    info!("stored {added} entries in {} ms", start.elapsed().as_millis());
    Ok(added)
}
