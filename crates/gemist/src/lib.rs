// ABOUTME: Library entry point for extracting programme and broadcast metadata from npo.nl pages.
// ABOUTME: Re-exports the public API: Parser, ParserBuilder, Options, the record types and GemistError.

//! Gemist - metadata extraction for Uitzending Gemist (npo.nl) pages.
//!
//! The crate turns an HTML byte stream into one of three records:
//! [`MediaItem`] (fields every page has), [`Broadcast`] (a single audio or
//! video broadcast page) or [`Program`] (a programme page with its list of
//! recent broadcasts). Where the page comes from is up to the caller.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//!
//! fn main() -> Result<(), gemist::GemistError> {
//!     let page = File::open("zembla.html")?;
//!     let broadcast = gemist::parse_broadcast(page)?;
//!     println!("{} ({:?}, {}s)", broadcast.item.title, broadcast.kind, broadcast.length.as_secs());
//!     Ok(())
//! }
//! ```

pub mod duration_parse;
pub mod error;
pub mod extractors;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod models;
pub mod options;
pub mod parser;
pub mod selectors;
pub mod time_parse;

pub use crate::duration_parse::{parse_duration, HourMode};
pub use crate::error::{DateContext, GemistError, Result};
#[cfg(feature = "fetch")]
pub use crate::fetch::{get_broadcast, get_program};
pub use crate::models::{Broadcast, BroadcastProxy, MediaItem, MediaKind, Program};
pub use crate::options::{ListPolicy, Options, ParserBuilder};
pub use crate::parser::{
    parse_broadcast, parse_broadcast_str, parse_media_item, parse_media_item_str, parse_program,
    parse_program_str, Parser,
};
pub use crate::selectors::{load_builtin_table, SelectorTable, Selectors};
pub use crate::time_parse::{parse_broadcast_date, parse_local_date, translate_dutch_date};
