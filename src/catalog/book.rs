//! Book record
//!
//! Fields are trimmed on construction and on decode. Decoding is lenient:
//! missing text fields become empty and a missing or unknown status becomes
//! `available`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Availability of a single book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    /// Parse the stored status text, falling back to `Available`.
    ///
    /// NOTE: unknown values are coerced silently. Stricter validation would
    /// reject them, but existing catalogs rely on the fallback.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim() {
            "issued" => BookStatus::Issued,
            _ => BookStatus::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog record, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBook")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

impl Book {
    /// Create an available book
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self::with_status(title, author, isbn, BookStatus::Available)
    }

    pub fn with_status(title: &str, author: &str, isbn: &str, status: BookStatus) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            isbn: isbn.trim().to_string(),
            status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Mark as issued. Returns false if it already was.
    pub fn issue(&mut self) -> bool {
        if !self.is_available() {
            return false;
        }
        self.status = BookStatus::Issued;
        true
    }

    /// Mark as available again. Returns false if it was not issued.
    pub fn return_book(&mut self) -> bool {
        if self.is_available() {
            return false;
        }
        self.status = BookStatus::Available;
        true
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {} (ISBN: {}) [{}]",
            self.title, self.author, self.isbn, self.status
        )
    }
}

/// On-disk shape accepted when reading a catalog
#[derive(Deserialize)]
struct RawBook {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    isbn: String,
    #[serde(default = "default_status")]
    status: String,
}

fn default_status() -> String {
    BookStatus::Available.as_str().to_string()
}

impl From<RawBook> for Book {
    fn from(raw: RawBook) -> Self {
        Book::with_status(
            &raw.title,
            &raw.author,
            &raw.isbn,
            BookStatus::parse_lenient(&raw.status),
        )
    }
}
