//! Document source: text files on disk

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use memmap2::Mmap;
use tracing::warn;
use walkdir::WalkDir;
use wordindex::{Error, Result};

/// A file to index and the name it is indexed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Location on disk
    pub path: PathBuf,
    /// Document name, unique among discovered sources
    pub name: String,
}

/// A document mapped into memory
pub struct Document {
    /// Document name
    pub name: String,
    /// Path the document was read from
    pub path: PathBuf,
    map: Option<Mmap>,
}

impl Document {
    /// Open and map a discovered source
    ///
    /// # Returns
    /// * `Result<Document>` - `Error::DocumentUnreadable` if the file cannot be opened or mapped
    pub fn open(source: &Source) -> Result<Self> {
        let path = source.path.as_path();
        let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
        let len = file.metadata().map_err(|e| Error::unreadable(path, e))?.len();

        // Zero-length files cannot be mapped on every platform.
        let map = if len == 0 {
            None
        } else {
            // SAFETY: the map is read-only and dropped once the document is indexed.
            Some(unsafe { Mmap::map(&file) }.map_err(|e| Error::unreadable(path, e))?)
        };

        Ok(Self {
            name: source.name.clone(),
            path: path.to_path_buf(),
            map,
        })
    }

    /// Document text, invalid UTF-8 replaced
    pub fn text(&self) -> Cow<'_, str> {
        match &self.map {
            Some(map) => String::from_utf8_lossy(map),
            None => Cow::Borrowed(""),
        }
    }
}

/// Path of `file` below `root`, `/`-separated
fn relative_name(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand directories into their regular files, sorted by path
///
/// Files found under a directory are named by their path relative to
/// it, so `a/notes.txt` and `b/notes.txt` stay distinct documents. Plain
/// paths are named as given and passed through untouched so that
/// unreadable files surface later as `Error::DocumentUnreadable`. If two
/// sources would still share a name, the later one is named by its full
/// path.
pub fn discover(paths: &[PathBuf]) -> Vec<Source> {
    let mut sources = Vec::new();
    let mut taken = HashSet::new();

    let mut push = |path: PathBuf, name: String| {
        let name = if taken.contains(&name) {
            path.display().to_string()
        } else {
            name
        };
        taken.insert(name.clone());
        sources.push(Source { path, name });
    };

    for root in paths {
        if !root.is_dir() {
            push(root.clone(), root.display().to_string());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => found.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry under {}: {}", root.display(), e),
            }
        }
        found.sort();

        for file in found {
            let name = relative_name(root, &file);
            push(file, name);
        }
    }

    sources
}
