//! Catalog Module
//!
//! Book records and the store that persists them.
//!
//! ## File Format
//! A top-level JSON array of objects:
//!
//! ```text
//! [
//!   { "title": "Dune", "author": "Herbert", "isbn": "111", "status": "available" }
//! ]
//! ```
//!
//! `status` is `available` or `issued`; anything else reads as `available`.

mod book;
mod store;

pub use book::{Book, BookStatus};
pub use store::CatalogStore;
