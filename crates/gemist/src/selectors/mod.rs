// ABOUTME: Selector table for the npo.nl page layouts.
// ABOUTME: Serializable table definitions, their compiled form and the embedded default.

//! Selector set.
//!
//! Submodules:
//! - `spec`: serde data model of the table (`SelectorTable`, `FieldSpec`, `SelectorSpec`).
//! - `compiled`: validated, compiled selectors and the value-reading helpers.
//! - `loader`: the embedded npo.nl table and the shared default instance.

pub mod compiled;
pub mod loader;
pub mod spec;

pub use compiled::{CompiledField, Selectors};
pub use loader::{default_selectors, load_builtin_table, load_table};
pub use spec::{FieldSpec, SelectorSpec, SelectorTable};
