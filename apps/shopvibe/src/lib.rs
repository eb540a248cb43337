//! # ShopVibe Shell
//!
//! Terminal front end for the storefront core.
//!
//! ## Module Organization
//! ```text
//! shopvibe/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── session.rs      ◄─── Store + catalog view for one user
//! ├── command.rs      ◄─── Line parser
//! ├── render.rs       ◄─── Plain-text output
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: info,shopvibe=debug; override with RUST_LOG              │
//! │                                                                         │
//! │  2. Load Catalog Config                                                 │
//! │     • env > catalog.toml > defaults                                     │
//! │                                                                         │
//! │  3. Fetch Products Once                                                 │
//! │     • Failure shows "Failed to fetch data from API." and continues      │
//! │                                                                         │
//! │  4. Command Loop                                                        │
//! │     • One line in, one rendered block out, until `quit` or EOF          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod error;
pub mod render;
pub mod session;

use std::io::{self, BufRead, Write};

use shopvibe_catalog::{CatalogClient, CatalogConfig, CatalogResult, CatalogSnapshot};
use serde::Serialize;
use shopvibe_core::{Action, AppState, CatalogStatus, FilterCriteria};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub use command::Command;
pub use error::{AppError, AppResult};
pub use session::Session;

/// What the loop does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// What the `state` command prints.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    state: &'a AppState,
    filters: &'a FilterCriteria,
    catalog: &'a CatalogStatus,
}

/// Runs the shell on stdin/stdout.
pub fn run() -> AppResult<()> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting ShopVibe");

    let mut session = Session::new();
    session.catalog_mut().begin_loading();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(fetch_catalog());
    session.apply_fetch(result);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut session, stdin.lock(), stdout.lock())?;

    info!(
        session_id = %session.id(),
        actions = session.store().dispatched(),
        "Session ended"
    );
    Ok(())
}

async fn fetch_catalog() -> CatalogResult<CatalogSnapshot> {
    let config = CatalogConfig::load(None)?;
    let client = CatalogClient::new(&config)?;
    client.fetch_products().await
}

/// Reads commands until `quit` or end of input.
///
/// Per-command errors are printed and the loop continues; only I/O on
/// `input`/`output` ends it early.
pub fn run_shell<R, W>(session: &mut Session, input: R, mut output: W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render::catalog(session.catalog()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", render::prompt(session.state()))?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = Command::parse(&line).and_then(|command| execute(session, command));
        match outcome {
            Ok(Outcome::Continue(text)) => writeln!(output, "{}", text)?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                warn!(error = %e, input = %line.trim(), "Command failed");
                writeln!(output, "{}", e)?;
            }
        }
    }

    Ok(())
}

/// Applies one command to the session and renders the result.
pub fn execute(session: &mut Session, command: Command) -> AppResult<Outcome> {
    debug!(?command, "Executing command");

    let text = match command {
        Command::List => render::catalog(session.catalog()),
        Command::Search(term) => {
            session.catalog_mut().set_search_term(term);
            render::catalog(session.catalog())
        }
        Command::Category(category) => {
            session.catalog_mut().set_category(category);
            render::catalog(session.catalog())
        }
        Command::Categories => render::categories(session.catalog()),
        Command::Add(id) => {
            let title = session.add_product(id)?.title.clone();
            format!("Added {} ({} in cart)", title, session.state().unit_count())
        }
        Command::Remove(id) => {
            let had_line = session.state().cart_item(id).is_some();
            session.dispatch(Action::RemoveFromCart(id));
            if had_line {
                format!("Removed product {}", id)
            } else {
                format!("Product {} is not in the cart", id)
            }
        }
        Command::Clear => {
            session.dispatch(Action::ClearCart);
            render::EMPTY_CART.to_string()
        }
        Command::Theme(target) => {
            // Only toggling exists as an action, so a named theme toggles
            // when it differs from the current one.
            if target != Some(session.state().theme) {
                session.dispatch(Action::ToggleTheme);
            }
            format!("Theme: {}", session.state().theme)
        }
        Command::Cart => render::cart(session.state()),
        Command::State => serde_json::to_string_pretty(&Snapshot {
            state: session.state(),
            filters: session.catalog().criteria(),
            catalog: session.catalog().status(),
        })?,
        Command::Help => command::HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Continue(text))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with shell output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopvibe=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shopvibe_core::{Product, Rating, Theme};

    fn product(id: u32, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn loaded_session() -> Session {
        let mut session = Session::new();
        session.apply_fetch(Ok(CatalogSnapshot {
            products: vec![
                product(1, "Mens Cotton Jacket", 55.99, "men's clothing"),
                product(2, "Silver Ring", 10.0, "jewelery"),
                product(3, "SSD 1TB", 109.0, "electronics"),
            ],
            rejected: 0,
            fetched_at: Utc::now(),
        }));
        session
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_shell(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_execute_filters() {
        let mut session = loaded_session();

        let Outcome::Continue(text) =
            execute(&mut session, Command::Search("ring".into())).unwrap()
        else {
            panic!("expected output");
        };
        assert!(text.contains("Silver Ring"));
        assert_eq!(text.lines().count(), 1);

        let Outcome::Continue(text) =
            execute(&mut session, Command::Category("electronics".into())).unwrap()
        else {
            panic!("expected output");
        };
        assert_eq!(text, render::NO_MATCHES);
    }

    #[test]
    fn test_execute_cart_flow() {
        let mut session = loaded_session();

        execute(&mut session, Command::Add(2)).unwrap();
        execute(&mut session, Command::Add(2)).unwrap();
        execute(&mut session, Command::Add(1)).unwrap();
        assert_eq!(session.state().unit_count(), 3);
        assert_eq!(session.store().totals().total_display.to_string(), "$75.99");

        let out = execute(&mut session, Command::Remove(2)).unwrap();
        assert_eq!(out, Outcome::Continue("Removed product 2".into()));
        assert_eq!(session.state().unit_count(), 1);

        let out = execute(&mut session, Command::Remove(2)).unwrap();
        assert_eq!(out, Outcome::Continue("Product 2 is not in the cart".into()));

        execute(&mut session, Command::Clear).unwrap();
        assert!(session.state().is_cart_empty());
    }

    #[test]
    fn test_execute_theme_and_quit() {
        let mut session = loaded_session();
        assert_eq!(
            execute(&mut session, Command::Theme(None)).unwrap(),
            Outcome::Continue("Theme: dark".into())
        );
        assert_eq!(session.state().theme, Theme::Dark);
        assert_eq!(execute(&mut session, Command::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_execute_named_theme() {
        let mut session = loaded_session();

        execute(&mut session, Command::Theme(Some(Theme::Light))).unwrap();
        assert_eq!(session.state().theme, Theme::Light);
        assert_eq!(session.store().dispatched(), 0);

        let out = execute(&mut session, Command::Theme(Some(Theme::Dark))).unwrap();
        assert_eq!(out, Outcome::Continue("Theme: dark".into()));

        execute(&mut session, Command::Theme(Some(Theme::Dark))).unwrap();
        assert_eq!(session.state().theme, Theme::Dark);
        assert_eq!(session.store().dispatched(), 1);
    }

    #[test]
    fn test_execute_state_is_json() {
        let mut session = loaded_session();
        execute(&mut session, Command::Add(3)).unwrap();
        execute(&mut session, Command::Search("ssd".into())).unwrap();

        let Outcome::Continue(text) = execute(&mut session, Command::State).unwrap() else {
            panic!("expected output");
        };
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["state"]["theme"], "light");
        assert_eq!(json["state"]["cartItems"][0]["quantity"], 1);
        assert_eq!(json["filters"]["searchTerm"], "ssd");
        assert_eq!(json["filters"]["category"], "All");
        assert_eq!(json["catalog"]["status"], "ready");
    }

    #[test]
    fn test_shell_reports_errors_and_continues() {
        let mut session = loaded_session();
        let out = run_script(&mut session, "add 99\ndance\nadd 1\ncart\nquit\n");

        assert!(out.contains("No product with id 99 in the catalog"));
        assert!(out.contains("Unknown command: dance"));
        assert!(out.contains("Your Cart (1 items)"));
        assert!(out.contains("Total: $55.99"));
        assert_eq!(session.state().unit_count(), 1);
    }

    #[test]
    fn test_shell_after_failed_fetch() {
        let mut session = Session::new();
        session.apply_fetch(Err(shopvibe_catalog::CatalogError::HttpStatus { status: 500 }));

        let out = run_script(&mut session, "list\nadd 1\ntheme\ntheme sepia\n");
        assert!(out.starts_with(session::FETCH_FAILED_MESSAGE));
        assert!(out.contains("No product with id 1 in the catalog"));
        assert!(out.contains("theme must be one of"));
        assert_eq!(session.state().theme, Theme::Dark);
    }
}
