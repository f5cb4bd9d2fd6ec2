// ABOUTME: Parse entrypoints turning an HTML byte stream into MediaItem, Broadcast or Program.
// ABOUTME: Parser bundles the compiled selectors with Options; free functions use the defaults.

use std::io::Read;
use std::sync::Arc;

use scraper::Html;
use tracing::instrument;

use crate::error::Result;
use crate::extractors::{extract_broadcast, extract_media_item, extract_program};
use crate::models::{Broadcast, MediaItem, Program};
use crate::options::{Options, ParserBuilder};
use crate::selectors::{default_selectors, Selectors};

/// Extracts records from npo.nl pages.
///
/// A parser holds no per-call state: the selectors are shared read-only and
/// every call builds and drops its own document tree, so one parser can be
/// used from several threads at once.
#[derive(Debug, Clone)]
pub struct Parser {
    selectors: Arc<Selectors>,
    opts: Options,
}

impl Parser {
    pub fn new(selectors: Arc<Selectors>, opts: Options) -> Self {
        Self { selectors, opts }
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Parses the fields shared by every page.
    #[instrument(level = "debug", skip_all)]
    pub fn parse_media_item<R: Read>(&self, r: R) -> Result<MediaItem> {
        self.parse_media_item_str(&read_page(r)?)
    }

    pub fn parse_media_item_str(&self, html: &str) -> Result<MediaItem> {
        let doc = Html::parse_document(html);
        extract_media_item(doc.root_element(), &self.selectors.media_item)
    }

    /// Parses a broadcast page.
    #[instrument(level = "debug", skip_all)]
    pub fn parse_broadcast<R: Read>(&self, r: R) -> Result<Broadcast> {
        self.parse_broadcast_str(&read_page(r)?)
    }

    pub fn parse_broadcast_str(&self, html: &str) -> Result<Broadcast> {
        let doc = Html::parse_document(html);
        extract_broadcast(doc.root_element(), &self.selectors, &self.opts)
    }

    /// Parses a programme page and its broadcast list.
    #[instrument(level = "debug", skip_all)]
    pub fn parse_program<R: Read>(&self, r: R) -> Result<Program> {
        self.parse_program_str(&read_page(r)?)
    }

    pub fn parse_program_str(&self, html: &str) -> Result<Program> {
        let doc = Html::parse_document(html);
        extract_program(doc.root_element(), &self.selectors, &self.opts)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(default_selectors(), Options::default())
    }
}

fn read_page<R: Read>(mut r: R) -> Result<String> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Parses the shared fields of any page with the default parser.
pub fn parse_media_item<R: Read>(r: R) -> Result<MediaItem> {
    Parser::default().parse_media_item(r)
}

/// Parses a broadcast page with the default parser.
pub fn parse_broadcast<R: Read>(r: R) -> Result<Broadcast> {
    Parser::default().parse_broadcast(r)
}

/// Parses a programme page with the default parser.
pub fn parse_program<R: Read>(r: R) -> Result<Program> {
    Parser::default().parse_program(r)
}

pub fn parse_media_item_str(html: &str) -> Result<MediaItem> {
    Parser::default().parse_media_item_str(html)
}

pub fn parse_broadcast_str(html: &str) -> Result<Broadcast> {
    Parser::default().parse_broadcast_str(html)
}

pub fn parse_program_str(html: &str) -> Result<Program> {
    Parser::default().parse_program_str(html)
}
