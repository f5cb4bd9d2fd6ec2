// ABOUTME: Convenience fetchers that download a page and hand it to the parse entrypoints.
// ABOUTME: Only a blocking GET; retries, proxies and TLS tuning are left to the caller.

use reqwest::blocking::Client;
use tracing::instrument;

use crate::error::{GemistError, Result};
use crate::models::{Broadcast, Program};
use crate::parser::Parser;

fn fetch(client: &Client, url: &str) -> Result<reqwest::blocking::Response> {
    let fetch_err = |source| GemistError::Fetch {
        url: url.to_string(),
        source,
    };
    client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)
}

impl Parser {
    /// Fetches `url` with `client` and parses it as a broadcast page.
    #[instrument(level = "info", skip(self, client))]
    pub fn fetch_broadcast(&self, client: &Client, url: &str) -> Result<Broadcast> {
        self.parse_broadcast(fetch(client, url)?)
    }

    /// Fetches `url` with `client` and parses it as a programme page.
    #[instrument(level = "info", skip(self, client))]
    pub fn fetch_program(&self, client: &Client, url: &str) -> Result<Program> {
        self.parse_program(fetch(client, url)?)
    }
}

/// Gets a broadcast page and parses it with the default parser.
pub fn get_broadcast(url: &str) -> Result<Broadcast> {
    Parser::default().fetch_broadcast(&Client::new(), url)
}

/// Gets a programme page and parses it with the default parser.
pub fn get_program(url: &str) -> Result<Program> {
    Parser::default().fetch_program(&Client::new(), url)
}
