// ABOUTME: Field extraction for the three page shapes of the site.
// ABOUTME: Media item (shared), broadcast (type-dispatched) and programme (list walk).

//! Extraction module.
//!
//! Every extractor takes the document root as a `scraper::ElementRef` and the
//! compiled [`Selectors`](crate::selectors::Selectors); none of them mutate
//! shared state.
//!
//! Submodules:
//! - `media_item`: title, description, URL and images shared by all pages.
//! - `broadcast`: broadcast pages, with the audio/video `MediaStrategy`.
//! - `program`: programme pages and their broadcast list.

pub mod broadcast;
pub mod media_item;
pub mod program;

pub use broadcast::{extract_broadcast, MediaStrategy};
pub use media_item::extract_media_item;
pub use program::{extract_broadcast_list, extract_broadcast_proxy, extract_program};
