//! # librarian
//!
//! Two small console utilities sharing one crate:
//! - A library catalog manager: book records persisted to a JSON file,
//!   with add / issue / return / search through a numbered menu
//! - A calorie tracker: meals accumulated in memory for one session
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────┐      ┌──────────────────────────┐
//! │   librarian (binary)     │      │ calorie-tracker (binary) │
//! └────────────┬─────────────┘      └────────────┬─────────────┘
//!              │                                 │
//! ┌────────────▼─────────────────────────────────▼─────────────┐
//! │                 menu (Prompter over BufRead/Write)          │
//! └────────────┬─────────────────────────────────┬─────────────┘
//!              │                                 │
//!              ▼                                 ▼
//!   ┌────────────────────┐            ┌────────────────────┐
//!   │   CatalogStore     │            │    CalorieLog      │
//!   │ (Vec<Book> + JSON) │            │   (in memory)      │
//!   └────────────────────┘            └────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logging;

pub mod catalog;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result, TrackerError};
pub use config::Config;
pub use catalog::{Book, BookStatus, CatalogStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of librarian
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
