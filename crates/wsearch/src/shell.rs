//! Interactive query loop

use std::io::{self, BufRead, Write};
use wordcache::{Provenance, WordCache};
use wordindex::tokenizer::normalize;

/// Prompt for words until an empty line or end of input
pub fn run<R: BufRead, W: Write>(cache: &WordCache, input: R, out: &mut W) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            break;
        }

        answer(cache, line, out)?;
    }

    Ok(())
}

/// Normalize one raw query, look it up and print the result
pub fn answer<W: Write>(cache: &WordCache, raw: &str, out: &mut W) -> io::Result<()> {
    let word = normalize(raw);
    if word.is_empty() {
        return writeln!(out, "please type letters or numbers");
    }

    let result = cache.lookup(&word);
    match result.provenance() {
        Provenance::Cache | Provenance::Index => {
            writeln!(out, "from {}", result.provenance())?;
            let names: Vec<&str> = result.document_names().collect();
            writeln!(out, "found in: {}", names.join(" "))
        }
        Provenance::Absent => writeln!(out, "not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordindex::tokenizer::tokenize;
    use wordindex::InvertedIndex;

    fn cache() -> WordCache {
        let mut index = InvertedIndex::new();
        index.index_document("doc1.txt", tokenize("test small"));
        index.index_document("doc2.txt", tokenize("alpha"));
        index.index_document("doc3.txt", tokenize("small test"));
        WordCache::new(index, 5)
    }

    fn session(input: &str) -> String {
        let cache = cache();
        let mut out = Vec::new();
        run(&cache, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_transcript() {
        let out = session("Test\ntest,\nmissing\n!!\n\nalpha\n");

        assert_eq!(
            out,
            "> from index\nfound in: doc3.txt doc1.txt\n\
             > from cache\nfound in: doc3.txt doc1.txt\n\
             > not found\n\
             > please type letters or numbers\n\
             > "
        );
    }

    #[test]
    fn test_eof_ends_session() {
        let out = session("alpha");
        assert_eq!(out, "> from index\nfound in: doc2.txt\n> ");
    }

    #[test]
    fn test_crlf_input() {
        let out = session("small\r\n\r\n");
        assert_eq!(out, "> from index\nfound in: doc3.txt doc1.txt\n> ");
    }
}
