//! Interactive numbered menu.
//!
//! The loop reads answers line by line, so it runs the same on a terminal
//! and on piped input. Storage failures inside an action are reported and the
//! menu carries on; bad numbers are reprompted; end of input ends the loop.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use bookshop_core::{BookField, BookSelection, BookshopError, FuzzyMatcher, NewBook, StorageEngine};

use crate::helpers::{parse_book_id, parse_field_choice, parse_yes, Prompter};
use crate::ui::{badge, book_grid, Badge, UiContext};

pub const WELCOME: &str = "Welcome to the bookshop database manager!";

pub const MAIN_MENU: &str = "
Please choose from the following menu:

1. Add a new book
2. Change book quantity
3. Edit book title or author name
4. Delete a book
5. Search books
6. List all
0. Exit
";

const FIELD_MENU: &str = "Please select the value you would like to update

1. Title
2. Author
";

const RETRY: &str = "Invalid input! Please try again.";
const RETURN_PROMPT: &str = "Press enter to return to the main menu...";

/// What the loop does after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Ends the current action when input runs out.
macro_rules! answer {
    ($expr:expr) => {
        match $expr? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Menu<'a, S, R, W> {
    storage: &'a S,
    matcher: FuzzyMatcher,
    ui: UiContext,
    prompter: Prompter<R, W>,
}

impl<'a, S: StorageEngine, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(storage: &'a S, matcher: FuzzyMatcher, ui: UiContext, input: R, output: W) -> Self {
        Self {
            storage,
            matcher,
            ui,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run the loop until the user picks "0" or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.prompter.say(WELCOME)?;

        loop {
            let Some(choice) = self.prompter.ask(MAIN_MENU)? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err) => match err.downcast::<BookshopError>() {
                    Ok(store_err) => {
                        warn!(error = %store_err, "menu action failed");
                        let line = badge(&self.ui, Badge::Err, &store_err.to_string());
                        self.prompter.say(&line)?;
                    }
                    Err(other) => return Err(other),
                },
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> anyhow::Result<Flow> {
        match choice {
            "1" => self.add_book(),
            "2" => self.change_quantity(),
            "3" => self.edit_book(),
            "4" => self.delete_book(),
            "5" => {
                if !self.search_and_show()? {
                    return Ok(Flow::Exit);
                }
                answer!(self.prompter.ask(RETURN_PROMPT));
                Ok(Flow::Continue)
            }
            "6" => {
                let books = self.storage.fetch(&BookSelection::All)?;
                self.prompter.say(&book_grid(&self.ui, &books))?;
                answer!(self.prompter.ask(RETURN_PROMPT));
                Ok(Flow::Continue)
            }
            "0" => {
                self.prompter.say("Exiting...")?;
                Ok(Flow::Exit)
            }
            _ => {
                self.prompter.say("Invalid selection! Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_book(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say("Adding a new book:")?;
        let title = answer!(self.prompter.ask("Book title: "));
        let author = answer!(self.prompter.ask("Author: "));
        let quantity = answer!(self
            .prompter
            .ask_integer("Quantity: ", "Please enter a number!"));

        self.storage
            .create(&NewBook::new(title.clone(), author, quantity))?;
        self.prompter.say(&format!("\n{} added successfully!", title))?;
        Ok(Flow::Continue)
    }

    fn change_quantity(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say("Change book quantity")?;
        if !self.search_and_show()? {
            return Ok(Flow::Exit);
        }
        let id = answer!(self
            .prompter
            .ask_until("\nID of book to edit: ", RETRY, parse_book_id));
        let quantity = answer!(self.prompter.ask_integer("New quantity: ", RETRY));

        self.storage.update_quantity(id, quantity)?;
        self.prompter
            .say(&format!("\nBook {} updated a quantity of {}", id, quantity))?;
        Ok(Flow::Continue)
    }

    fn edit_book(&mut self) -> anyhow::Result<Flow> {
        self.prompter
            .say("Please search for the book you want to edit. (leave blank to show all)")?;
        if !self.search_and_show()? {
            return Ok(Flow::Exit);
        }
        let id = answer!(self
            .prompter
            .ask_until("\nBook ID to edit: ", RETRY, parse_book_id));
        let field = answer!(self
            .prompter
            .ask_until(FIELD_MENU, RETRY, parse_field_choice));

        let (prompt, done) = match field {
            BookField::Title => ("New title: ", "\nTitle updated successfully!"),
            BookField::Author => ("New Author name: ", "\nAuthor updated successfully!"),
        };
        let value = answer!(self.prompter.ask(prompt));

        self.storage.edit_field(id, field, &value)?;
        self.prompter.say(done)?;
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> anyhow::Result<Flow> {
        self.prompter
            .say("Please search for a book to delete. (leave blank to show all)")?;
        if !self.search_and_show()? {
            return Ok(Flow::Exit);
        }
        let id = answer!(self
            .prompter
            .ask_until("\nBook ID to delete: ", RETRY, parse_book_id));
        let confirm = answer!(self
            .prompter
            .ask("\nAre you sure you want to delete this book? (y/n)"));

        if !parse_yes(&confirm) {
            self.prompter.say("Deletion cancelled.")?;
        } else if self.storage.delete(id)? {
            self.prompter.say("Book deleted successfully.")?;
        } else {
            self.prompter
                .say(&format!("No book with ID {}; nothing deleted.", id))?;
        }
        Ok(Flow::Continue)
    }

    /// Ask for a query and show the matching books.
    ///
    /// A blank query shows every book. Returns `false` when input ran out.
    fn search_and_show(&mut self) -> anyhow::Result<bool> {
        let Some(query) = self.prompter.ask("Search: ")? else {
            return Ok(false);
        };
        let books = self.storage.fetch(&BookSelection::All)?;

        let shown = if query.trim().is_empty() {
            self.prompter
                .say(&format!("Showing all {} books.", books.len()))?;
            books
        } else {
            let ids = self.matcher.find_ids(&query, &books);
            self.prompter
                .say(&format!("{} matches found.", ids.len()))?;
            ids.iter()
                .filter_map(|id| books.iter().find(|book| book.id == *id).cloned())
                .collect()
        };

        self.prompter.say(&book_grid(&self.ui, &shown))?;
        Ok(true)
    }
}
