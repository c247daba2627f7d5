//! WordSearch - interactive word lookup over text files

mod shell;
mod source;

use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::{ensure, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use wordcache::{WordCache, DEFAULT_CAPACITY};
use wordindex::tokenizer::tokenize;
use wordindex::{InvertedIndex, DEFAULT_BUCKETS};

use crate::source::{discover, Document};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files or directories to index
    #[arg(default_value = "texts")]
    paths: Vec<PathBuf>,

    /// Cache capacity (number of words)
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Hash table bucket count
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Answer these words and exit instead of prompting
    #[arg(short, long)]
    query: Vec<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries query results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    ensure!(args.capacity > 0, "cache capacity must be at least 1");
    ensure!(args.buckets > 0, "bucket count must be at least 1");

    let index = build_index(&args.paths, args.buckets);
    let stats = index.stats();
    info!(
        "Indexed {} words from {} documents ({} of {} buckets used, longest chain {})",
        stats.words, stats.documents, stats.used_buckets, stats.buckets, stats.longest_chain
    );

    let cache = WordCache::new(index, args.capacity);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.query.is_empty() {
        for raw in &args.query {
            shell::answer(&cache, raw, &mut out)?;
        }
    } else {
        writeln!(out, "indexed {} files", cache.index().document_count())?;
        writeln!(out, "type a word to search (empty line to quit)")?;
        shell::run(&cache, io::stdin().lock(), &mut out)?;
    }

    let stats = cache.stats();
    info!(
        "Lookups: {} from cache, {} from index, {} absent (hit ratio {:.2})",
        stats.hits(),
        stats.index_hits(),
        stats.absent(),
        stats.hit_ratio()
    );

    Ok(())
}

/// Build phase: read every document and feed its words to a fresh index
fn build_index(paths: &[PathBuf], buckets: usize) -> InvertedIndex {
    let mut index = InvertedIndex::with_buckets(buckets);

    for source in discover(paths) {
        let doc = match Document::open(&source) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };
        debug!("Indexing {} from {}", doc.name, doc.path.display());
        let text = doc.text();
        index.index_document(&doc.name, tokenize(&text));
    }

    index
}
