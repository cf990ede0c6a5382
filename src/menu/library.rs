//! Catalog manager menu loop

use std::io::{self, BufRead, Write};

use crate::catalog::{Book, CatalogStore};

use super::Prompter;

/// Top-level menu entries, numbered 1-6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LibraryAction {
    Add,
    Issue,
    Return,
    ViewAll,
    Search,
    Exit,
}

impl LibraryAction {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Issue),
            "3" => Some(Self::Return),
            "4" => Some(Self::ViewAll),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &[&str] = &[
    "",
    "=== Library Inventory Manager ===",
    "1. Add Book",
    "2. Issue Book",
    "3. Return Book",
    "4. View All Books",
    "5. Search",
    "6. Exit",
];

/// Run the catalog menu until the user exits or input ends
///
/// The catalog is saved after every add/issue/return and once more on exit.
/// Save failures are logged and the loop keeps going.
pub fn run_library<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    loop {
        for line in MENU {
            prompter.say(line)?;
        }

        let Some(choice) = prompter.ask("Enter choice (1-6): ")? else {
            break;
        };

        match LibraryAction::from_choice(&choice) {
            Some(LibraryAction::Add) => {
                let Some(title) = prompter.ask_non_empty("Title: ")? else { break };
                let Some(author) = prompter.ask_non_empty("Author: ")? else { break };
                let Some(isbn) = prompter.ask_non_empty("ISBN: ")? else { break };

                match store.add(Book::new(&title, &author, &isbn)) {
                    Ok(()) => {
                        persist(store);
                        prompter.say("Book added.")?;
                    }
                    Err(e) => {
                        tracing::warn!("Add rejected: {}", e);
                        prompter.say(format!("Error: {}", e))?;
                    }
                }
            }
            Some(LibraryAction::Issue) => {
                let Some(isbn) = prompter.ask_non_empty("ISBN to issue: ")? else { break };
                let message = match store.issue(&isbn) {
                    Ok(()) => "Book issued.".to_string(),
                    Err(e) => format!("Issue failed: {}", e),
                };
                persist(store);
                prompter.say(message)?;
            }
            Some(LibraryAction::Return) => {
                let Some(isbn) = prompter.ask_non_empty("ISBN to return: ")? else { break };
                let message = match store.return_book(&isbn) {
                    Ok(()) => "Book returned.".to_string(),
                    Err(e) => format!("Return failed: {}", e),
                };
                persist(store);
                prompter.say(message)?;
            }
            Some(LibraryAction::ViewAll) => {
                let lines = store.display_all();
                if lines.is_empty() {
                    prompter.say("No books in catalog.")?;
                }
                for line in lines {
                    prompter.say(line)?;
                }
            }
            Some(LibraryAction::Search) => {
                let Some(sub) = prompter.ask_non_empty("Search 1) Title  2) ISBN: ")? else {
                    break;
                };
                match sub.as_str() {
                    "1" => {
                        let Some(query) = prompter.ask_non_empty("Title query: ")? else { break };
                        let results = store.search_by_title(&query);
                        if results.is_empty() {
                            prompter.say("No matches.")?;
                        }
                        for book in results {
                            prompter.say(book)?;
                        }
                    }
                    "2" => {
                        let Some(isbn) = prompter.ask_non_empty("ISBN: ")? else { break };
                        match store.search_by_isbn(&isbn) {
                            Some(book) => prompter.say(book)?,
                            None => prompter.say("No such ISBN.")?,
                        }
                    }
                    _ => prompter.say("Invalid choice.")?,
                }
            }
            Some(LibraryAction::Exit) => break,
            None => prompter.say("Invalid option.")?,
        }
    }

    persist(store);
    prompter.say("Exiting.")?;
    Ok(())
}

fn persist(store: &CatalogStore) {
    if let Err(e) = store.save() {
        tracing::error!("Failed to save catalog: {}", e);
    }
}
