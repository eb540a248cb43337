//! # Shell Commands
//!
//! Parses one line of user input into a [`Command`].
//!
//! ```text
//! list                  show products matching the current filters
//! search <text>         set the search term (empty clears it)
//! category <name>       set the category filter ("All" clears it)
//! categories            list categories
//! add <id>              add one unit of a product to the cart
//! remove <id>           remove a product line from the cart
//! clear                 empty the cart
//! theme [light|dark]    toggle the theme, or switch to the one named
//! cart                  show the cart
//! state                 print the app state and filters as JSON
//! help                  show this text
//! quit                  leave
//! ```

use shopvibe_core::validation::parse_product_id;
use shopvibe_core::{ProductId, Theme};

use crate::error::{AppError, AppResult};

pub const HELP: &str = "\
Commands:
  list                  show products matching the current filters
  search <text>         set the search term (empty clears it)
  category <name>       set the category filter (\"All\" clears it)
  categories            list categories
  add <id>              add one unit of a product to the cart
  remove <id>           remove a product line from the cart
  clear                 empty the cart
  theme [light|dark]    toggle the theme, or switch to the one named
  cart                  show the cart
  state                 print the app state and filters as JSON
  help                  show this text
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Category(String),
    Categories,
    Add(ProductId),
    Remove(ProductId),
    Clear,
    /// `None` toggles; `Some` switches to that theme.
    Theme(Option<Theme>),
    Cart,
    State,
    Help,
    Quit,
}

impl Command {
    /// Parses a line. The keyword is case-insensitive; arguments keep their
    /// case since category matching is exact.
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "search" | "find" => Command::Search(rest.to_string()),
            "category" | "cat" => Command::Category(rest.to_string()),
            "categories" => Command::Categories,
            "add" => Command::Add(parse_product_id(rest)?),
            "remove" | "rm" => Command::Remove(parse_product_id(rest)?),
            "clear" => Command::Clear,
            "theme" if rest.is_empty() => Command::Theme(None),
            "theme" => Command::Theme(Some(rest.parse()?)),
            "cart" => Command::Cart,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(AppError::InvalidCommand(line.to_string())),
        };

        Ok(command)
    }
}
