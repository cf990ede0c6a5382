//! Catalog Store
//!
//! Ordered book list plus its JSON mirror on disk.
//!
//! ## Responsibilities
//! - Load the catalog at startup (missing file → empty catalog)
//! - Overwrite the whole file on save (temp file + rename)
//! - Enforce ISBN uniqueness on add
//! - Toggle issued/available status

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::Config;
use crate::error::{CatalogError, Result};

use super::Book;

/// In-memory catalog backed by a single JSON file
///
/// The process exclusively owns the in-memory list. No file locking is done:
/// two processes saving the same path race and the last writer wins.
pub struct CatalogStore {
    /// JSON file mirroring `books`
    path: PathBuf,

    /// Records in insertion order
    books: Vec<Book>,
}

impl CatalogStore {
    /// Create an empty store bound to `path` (nothing is read yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            books: Vec::new(),
        }
    }

    /// Create a store from config and load it
    ///
    /// A failed load is logged and leaves the catalog empty, so the caller
    /// always gets a usable store.
    pub fn open(config: &Config) -> Self {
        let mut store = Self::new(&config.catalog_path);
        if let Err(e) = store.load() {
            tracing::error!("Failed to load catalog: {}", e);
        }
        store
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace the in-memory catalog with the file contents
    ///
    /// Returns the number of books loaded. On error the catalog is left empty.
    pub fn load(&mut self) -> Result<usize> {
        self.books.clear();

        if !self.path.exists() {
            tracing::info!(
                "Catalog file {} not found, starting with an empty catalog",
                self.path.display()
            );
            return Ok(0);
        }

        self.books = Self::read_books(&self.path)?;
        self.warn_duplicate_isbns();
        tracing::info!("Loaded {} books from catalog", self.books.len());
        Ok(self.books.len())
    }

    /// Write the full catalog to disk
    ///
    /// Data goes to a sibling `.tmp` file first and is renamed over the
    /// catalog, so the old file stays intact if serialization or the write
    /// fails part way.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let written = self
            .write_temp(&temp_path)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(CatalogError::from));
        if let Err(e) = written {
            // Never leave a stale temp file next to the catalog
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        tracing::info!("Saved {} books to catalog", self.books.len());
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a book; rejects an ISBN already in the catalog
    pub fn add(&mut self, book: Book) -> Result<()> {
        if self.search_by_isbn(&book.isbn).is_some() {
            return Err(CatalogError::DuplicateIsbn(book.isbn));
        }
        tracing::debug!("Adding book {}", book.isbn);
        self.books.push(book);
        Ok(())
    }

    /// Mark an available book as issued
    pub fn issue(&mut self, isbn: &str) -> Result<()> {
        let book = self.find_mut(isbn)?;
        if !book.issue() {
            return Err(CatalogError::AlreadyIssued(book.isbn.clone()));
        }
        tracing::debug!("Issued book {}", book.isbn);
        Ok(())
    }

    /// Mark an issued book as available again
    pub fn return_book(&mut self, isbn: &str) -> Result<()> {
        let book = self.find_mut(isbn)?;
        if !book.return_book() {
            return Err(CatalogError::NotIssued(book.isbn.clone()));
        }
        tracing::debug!("Returned book {}", book.isbn);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Case-insensitive substring match on title, in catalog order
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let query = query.trim().to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Exact ISBN match after trimming
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        let isbn = isbn.trim();
        self.books.iter().find(|b| b.isbn == isbn)
    }

    /// Human-readable line for every book, in catalog order
    pub fn display_all(&self) -> Vec<String> {
        self.books.iter().map(Book::to_string).collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get the catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn read_books(path: &Path) -> Result<Vec<Book>> {
        // Read first so OS errors surface as Io, not as a JSON error
        let content = fs::read_to_string(path)?;
        let root: Value = serde_json::from_str(&content)?;
        if !root.is_array() {
            return Err(CatalogError::InvalidRoot);
        }
        Ok(serde_json::from_value(root)?)
    }

    fn write_temp(&self, temp_path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(temp_path)?);
        serde_json::to_writer_pretty(&mut writer, &self.books)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }

    /// Loaded files are kept as-is; repeated ISBNs are only reported.
    fn warn_duplicate_isbns(&self) {
        let mut seen = HashSet::new();
        for book in &self.books {
            if !seen.insert(book.isbn.as_str()) {
                tracing::warn!("Catalog contains duplicate ISBN {}", book.isbn);
            }
        }
    }

    fn find_mut(&mut self, isbn: &str) -> Result<&mut Book> {
        let isbn = isbn.trim();
        self.books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))
    }

    /// "catalog.json" → "catalog.json.tmp"
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
