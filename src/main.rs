use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;
use wordnet_db::{LoadMode, WordNet};

use wordnet_dict::{JsonlStore, convert};

const DEFAULT_SOURCE_DIR: &str = ".";
const DEFAULT_OUTPUT: &str = "wordnet.jsonl";

#[derive(Parser, Debug)]
#[command(name = "wordnet2dict")]
#[command(about = "Convert WordNet data files into one HTML entry per headword")]
struct Cli {
    /// WordNet source directory (containing a dict subdirectory). Defaults to
    /// $WORDNET_DIR, then the current directory.
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output file (JSON lines).
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Value for the created.by tag, e.g. a name or email.
    #[arg(short = 'a', long, default_value = "")]
    created_by: String,

    /// How to open the data files: mmap or owned. Defaults to $WORDNET_LOAD_MODE, then mmap.
    #[arg(long, value_parser = parse_load_mode_arg)]
    load_mode: Option<LoadMode>,
}

#[derive(Debug, Clone)]
struct Config {
    source_dir: PathBuf,
    output: PathBuf,
    created_by: String,
    load_mode: LoadMode,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config(Cli::parse());
    info!(
        "reading wordnet from {} (mode: {:?})",
        config.source_dir.display(),
        config.load_mode
    );

    let start = Instant::now();
    let wordnet = WordNet::load_with_mode(&config.source_dir, config.load_mode)
        .with_context(|| format!("loading WordNet from {}", config.source_dir.display()))?;
    for pos in wordnet.missing() {
        warn!(
            "{} not found in {}",
            pos.data_file_name(),
            wordnet.dict_dir().display()
        );
    }

    let mut store = JsonlStore::create(&config.output)
        .with_context(|| format!("creating {}", config.output.display()))?;
    let summary = convert(&wordnet, &mut store, &config.created_by)?;
    store
        .finish()
        .with_context(|| format!("writing {}", config.output.display()))?;

    info!(
        "wrote {} entries ({} senses from {} records) to {} in {} ms",
        summary.entries,
        summary.units,
        summary.records,
        config.output.display(),
        start.elapsed().as_millis()
    );
    Ok(())
}

fn load_config(cli: Cli) -> Config {
    let source_dir = cli
        .source_dir
        .or_else(|| env::var("WORDNET_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
    let load_mode = cli
        .load_mode
        .or_else(|| {
            env::var("WORDNET_LOAD_MODE")
                .ok()
                .as_deref()
                .and_then(parse_load_mode)
        })
        .unwrap_or(LoadMode::Mmap);

    Config {
        source_dir,
        output: cli.output,
        created_by: cli.created_by,
        load_mode,
    }
}

fn parse_load_mode(raw: &str) -> Option<LoadMode> {
    match raw.to_ascii_lowercase().as_str() {
        "mmap" => Some(LoadMode::Mmap),
        "owned" => Some(LoadMode::Owned),
        _ => None,
    }
}

fn parse_load_mode_arg(raw: &str) -> Result<LoadMode, String> {
    parse_load_mode(raw).ok_or_else(|| format!("unknown load mode `{raw}` (expected mmap or owned)"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
