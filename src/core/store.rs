//! Quote corpus store
//!
//! Holds the corpus in memory and mirrors it to a flat JSON file.
//! The corpus is append-only: quotes are never removed or reordered.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::quote::Quote;
use crate::error::{Error, Result};

/// Owned, injectable quote corpus
#[derive(Debug, Default)]
pub struct QuoteStore {
    path: Option<PathBuf>,
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Load the corpus from `path`. A missing file is an empty corpus.
    pub fn open(path: &Path) -> Result<Self> {
        let quotes = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str::<Vec<Quote>>(&content).map_err(|e| {
                Error::Store(format!("failed to parse {}: {}", path.display(), e))
            })?
        } else {
            debug!(path = %path.display(), "Quote file missing, starting empty");
            Vec::new()
        };

        info!(path = %path.display(), quotes = quotes.len(), "Loaded quote corpus");

        Ok(Self {
            path: Some(path.to_path_buf()),
            quotes,
        })
    }

    /// Store with no backing file
    pub fn in_memory(quotes: Vec<Quote>) -> Self {
        Self { path: None, quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append a quote and persist the whole corpus.
    ///
    /// A failed write rolls the append back, so memory and file agree.
    pub fn append(&mut self, quote: Quote) -> Result<()> {
        self.quotes.push(quote);
        if let Err(e) = self.save() {
            self.quotes.pop();
            warn!(error = %e, "Failed to persist quote, append rolled back");
            return Err(e);
        }
        Ok(())
    }

    /// Write the corpus back to its file, if it has one
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, to_json_pretty(&self.quotes)?)?;
        debug!(path = %path.display(), quotes = self.quotes.len(), "Saved quote corpus");
        Ok(())
    }
}

/// Four-space indented JSON, non-ASCII kept as-is
fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| Error::Store(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = QuoteStore::open(&dir.path().join("quotes.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");

        let mut store = QuoteStore::open(&path).unwrap();
        store.append(Quote::new("Breathe.", ["stress"])).unwrap();
        store.append(Quote::new("Smile.", ["joy"])).unwrap();

        let reloaded = QuoteStore::open(&path).unwrap();
        let texts: Vec<_> = reloaded.quotes().iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["Breathe.", "Smile."]);
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");

        let mut store = QuoteStore::open(&path).unwrap();
        store.append(Quote::new("Café au lait.", ["joy"])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Café au lait."));
        assert!(content.contains("\n        \"quote\": "));
    }

    #[test]
    fn test_invalid_file_is_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, "{not json").unwrap();

        let err = QuoteStore::open(&path).unwrap_err();
        assert!(matches!(err, Error::Store(_)));
    }

    #[test]
    fn test_failed_write_leaves_corpus_unchanged() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("quotes.json");

        let mut store = QuoteStore::open(&path).unwrap();
        assert!(store.is_empty());

        let result = store.append(Quote::new("Breathe.", ["stress"]));
        assert!(result.is_err());
        assert_eq!(store.len(), 0);
        assert!(store.quotes().is_empty());
    }

    #[test]
    fn test_in_memory_append_keeps_order() {
        let mut store = QuoteStore::in_memory(vec![Quote::new("A", ["joy"])]);
        store.append(Quote::new("B", ["joy"])).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.quotes()[1].text, "B");
        assert!(store.path().is_none());
    }
}
