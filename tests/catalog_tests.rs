//! Tests for CatalogStore
//!
//! These tests verify:
//! - Insertion order and ISBN uniqueness
//! - Issue/return status toggling
//! - Title and ISBN search
//! - Save/load round trips and load fallbacks

use std::fs;
use std::path::PathBuf;

use librarian::catalog::{Book, BookStatus, CatalogStore};
use librarian::config::Config;
use librarian::CatalogError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_catalog() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    (temp_dir, path)
}

fn store_with_books(path: &PathBuf, books: &[(&str, &str, &str)]) -> CatalogStore {
    let mut store = CatalogStore::new(path);
    for (title, author, isbn) in books {
        store.add(Book::new(title, author, isbn)).unwrap();
    }
    store
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_preserves_insertion_order() {
    let (_temp, path) = setup_temp_catalog();
    let store = store_with_books(
        &path,
        &[("Zebra", "A", "3"), ("Apple", "B", "1"), ("Mango", "C", "2")],
    );

    assert_eq!(store.len(), 3);
    let isbns: Vec<&str> = store.books().iter().map(|b| b.isbn.as_str()).collect();
    assert_eq!(isbns, vec!["3", "1", "2"]);
}

#[test]
fn test_add_duplicate_isbn_rejected() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = store_with_books(&path, &[("Dune", "Herbert", "111")]);

    let result = store.add(Book::new("Other", "Someone", "111"));

    assert!(matches!(result, Err(CatalogError::DuplicateIsbn(ref isbn)) if isbn == "111"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.books()[0].title, "Dune");
}

#[test]
fn test_add_duplicate_detected_after_trimming() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = store_with_books(&path, &[("Dune", "Herbert", "111")]);

    let result = store.add(Book::new("Dune", "Herbert", "  111  "));

    assert!(result.is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_new_store_is_empty() {
    let store = CatalogStore::new("nowhere.json");
    assert!(store.is_empty());
    assert!(store.display_all().is_empty());
}

// =============================================================================
// Issue / Return Tests
// =============================================================================

#[test]
fn test_issue_twice_fails_then_return_restores() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = store_with_books(&path, &[("One", "A", "1"), ("Two", "B", "2")]);

    store.issue("1").unwrap();
    assert_eq!(store.search_by_isbn("1").unwrap().status, BookStatus::Issued);

    let again = store.issue("1");
    assert!(matches!(again, Err(CatalogError::AlreadyIssued(_))));

    store.return_book("1").unwrap();
    assert_eq!(store.search_by_isbn("1").unwrap().status, BookStatus::Available);

    assert_eq!(
        store.display_all(),
        vec![
            "One — A (ISBN: 1) [available]".to_string(),
            "Two — B (ISBN: 2) [available]".to_string(),
        ]
    );
}

#[test]
fn test_return_available_book_fails() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = store_with_books(&path, &[("One", "A", "1")]);

    let result = store.return_book("1");

    assert!(matches!(result, Err(CatalogError::NotIssued(_))));
    assert!(store.books()[0].is_available());
}

#[test]
fn test_issue_and_return_unknown_isbn() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = store_with_books(&path, &[("One", "A", "1")]);

    assert!(matches!(store.issue("999"), Err(CatalogError::NotFound(_))));
    assert!(matches!(store.return_book("999"), Err(CatalogError::NotFound(_))));
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_by_title_case_insensitive_substring() {
    let (_temp, path) = setup_temp_catalog();
    let store = store_with_books(
        &path,
        &[
            ("Warfare", "A", "1"),
            ("Peace", "B", "2"),
            ("The Art of War", "C", "3"),
        ],
    );

    let titles: Vec<&str> = store
        .search_by_title("war")
        .iter()
        .map(|b| b.title.as_str())
        .collect();

    assert_eq!(titles, vec!["Warfare", "The Art of War"]);
}

#[test]
fn test_search_by_title_no_match() {
    let (_temp, path) = setup_temp_catalog();
    let store = store_with_books(&path, &[("Peace", "B", "2")]);

    assert!(store.search_by_title("dragon").is_empty());
}

#[test]
fn test_search_by_isbn_trims_query() {
    let (_temp, path) = setup_temp_catalog();
    let store = store_with_books(&path, &[("Dune", "Herbert", "111")]);

    assert_eq!(store.search_by_isbn(" 111 ").unwrap().title, "Dune");
    assert!(store.search_by_isbn("11").is_none());
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_load_roundtrip() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = store_with_books(&path, &[("One", "A", "1"), ("Two", "B", "2")]);
    store.issue("2").unwrap();
    store.save().unwrap();

    let mut reloaded = CatalogStore::new(&path);
    let count = reloaded.load().unwrap();

    assert_eq!(count, 2);
    assert_eq!(reloaded.books(), store.books());
}

#[test]
fn test_save_load_empty_catalog() {
    let (_temp, path) = setup_temp_catalog();
    CatalogStore::new(&path).save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");

    let mut reloaded = CatalogStore::new(&path);
    assert_eq!(reloaded.load().unwrap(), 0);
    assert!(reloaded.is_empty());
}

#[test]
fn test_dune_scenario() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = CatalogStore::new(&path);
    store
        .add(Book::with_status("Dune", "Herbert", "111", BookStatus::Available))
        .unwrap();
    store.save().unwrap();

    let mut reloaded = CatalogStore::new(&path);
    reloaded.load().unwrap();

    let book = reloaded.search_by_isbn("111").unwrap();
    assert_eq!(book.status, BookStatus::Available);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("catalog.json");

    let store = store_with_books(&path, &[("One", "A", "1")]);
    store.save().unwrap();

    assert!(path.exists());
    assert!(!path.with_file_name("catalog.json.tmp").exists());
}

#[test]
fn test_save_preserves_non_ascii() {
    let (_temp, path) = setup_temp_catalog();
    let store = store_with_books(&path, &[("Cien años de soledad", "García Márquez", "9")]);
    store.save().unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Cien años de soledad"));
    assert!(raw.contains("  {"), "expected indented output, got {raw}");

    let mut reloaded = CatalogStore::new(&path);
    reloaded.load().unwrap();
    assert_eq!(reloaded.books()[0].author, "García Márquez");
}

#[test]
fn test_save_overwrites_previous_contents() {
    let (_temp, path) = setup_temp_catalog();
    store_with_books(&path, &[("One", "A", "1"), ("Two", "B", "2")])
        .save()
        .unwrap();
    store_with_books(&path, &[("Three", "C", "3")]).save().unwrap();

    let mut reloaded = CatalogStore::new(&path);
    assert_eq!(reloaded.load().unwrap(), 1);
    assert_eq!(reloaded.books()[0].isbn, "3");
}

#[test]
fn test_load_missing_file_is_empty() {
    let (_temp, path) = setup_temp_catalog();
    let mut store = CatalogStore::new(&path);

    assert_eq!(store.load().unwrap(), 0);
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_load_non_array_root_fails_and_empties() {
    let (_temp, path) = setup_temp_catalog();
    fs::write(&path, r#"{"title": "Dune"}"#).unwrap();

    let mut store = store_with_books(&path, &[("Stale", "X", "0")]);
    let result = store.load();

    assert!(matches!(result, Err(CatalogError::InvalidRoot)));
    assert!(store.is_empty());
}

#[test]
fn test_load_malformed_json_fails_and_empties() {
    let (_temp, path) = setup_temp_catalog();
    fs::write(&path, "[{ not json").unwrap();

    let mut store = CatalogStore::new(&path);

    assert!(matches!(store.load(), Err(CatalogError::Json(_))));
    assert!(store.is_empty());
}

#[test]
fn test_load_tolerates_missing_and_invalid_fields() {
    let (_temp, path) = setup_temp_catalog();
    fs::write(
        &path,
        r#"[
            {"title": " Dune ", "author": "Herbert", "isbn": "111"},
            {"title": "Emma", "isbn": "222", "status": "borrowed"},
            {"title": "Ulysses", "author": "Joyce", "isbn": "333", "status": "issued"}
        ]"#,
    )
    .unwrap();

    let mut store = CatalogStore::new(&path);
    assert_eq!(store.load().unwrap(), 3);

    let books = store.books();
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].status, BookStatus::Available);
    assert_eq!(books[1].author, "");
    assert_eq!(books[1].status, BookStatus::Available);
    assert_eq!(books[2].status, BookStatus::Issued);
}

#[test]
fn test_load_unreadable_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as a file
    let mut store = store_with_books(&temp_dir.path().to_path_buf(), &[("Stale", "X", "0")]);
    let result = store.load();

    assert!(matches!(result, Err(CatalogError::Io(_))), "got {result:?}");
    assert!(store.is_empty());
}

#[test]
fn test_failed_save_removes_temp_file() {
    let (_temp, path) = setup_temp_catalog();
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupied"), "x").unwrap();

    let store = store_with_books(&path, &[("One", "A", "1")]);
    let result = store.save();

    assert!(matches!(result, Err(CatalogError::Io(_))), "got {result:?}");
    assert!(!path.with_file_name("catalog.json.tmp").exists());
    assert!(path.join("occupied").exists());
}

#[test]
fn test_load_keeps_duplicate_isbns() {
    let (_temp, path) = setup_temp_catalog();
    fs::write(
        &path,
        r#"[{"title": "A", "isbn": "1"}, {"title": "B", "isbn": "1"}]"#,
    )
    .unwrap();

    let mut store = CatalogStore::new(&path);

    assert_eq!(store.load().unwrap(), 2);
    assert_eq!(store.search_by_isbn("1").unwrap().title, "A");
}

#[test]
fn test_open_falls_back_to_empty_on_bad_file() {
    let (_temp, path) = setup_temp_catalog();
    fs::write(&path, "42").unwrap();

    let config = Config::builder().catalog_path(&path).no_log_file().build();
    let store = CatalogStore::open(&config);

    assert!(store.is_empty());
    assert_eq!(store.path(), path.as_path());
}
