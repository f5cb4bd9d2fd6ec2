// ABOUTME: Configuration options for page extraction including ListPolicy, Options and ParserBuilder.
// ABOUTME: ParserBuilder provides a fluent API for constructing Parser instances with custom settings.

use std::sync::Arc;

use chrono_tz::Tz;

use crate::duration_parse::HourMode;
use crate::error::Result;
use crate::parser::Parser;
use crate::selectors::{default_selectors, SelectorTable, Selectors};

/// What happens when one item of a broadcast list fails to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPolicy {
    /// Stop at the malformed item and keep the items gathered before it.
    #[default]
    StopAtFirstError,
    /// Fail the whole programme with the item's error.
    Strict,
}

/// Configuration options for a Parser.
#[derive(Debug, Clone)]
pub struct Options {
    pub hour_mode: HourMode,
    pub list_policy: ListPolicy,
    /// Zone in which localized (offset-less) dates are interpreted.
    pub timezone: Tz,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hour_mode: HourMode::default(),
            list_policy: ListPolicy::default(),
            timezone: chrono_tz::Europe::Amsterdam,
        }
    }
}

/// Builder for constructing Parser instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ParserBuilder {
    opts: Options,
    selectors: Option<Arc<Selectors>>,
}

impl ParserBuilder {
    /// Create a new ParserBuilder with default options and the built-in selectors.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
            selectors: None,
        }
    }

    /// Set how the hour group of `h:mm:ss` durations is treated.
    pub fn hour_mode(mut self, mode: HourMode) -> Self {
        self.opts.hour_mode = mode;
        self
    }

    /// Set what happens when a broadcast list item is malformed.
    pub fn list_policy(mut self, policy: ListPolicy) -> Self {
        self.opts.list_policy = policy;
        self
    }

    /// Set the zone for localized dates.
    pub fn timezone(mut self, tz: Tz) -> Self {
        self.opts.timezone = tz;
        self
    }

    /// Use already compiled selectors, e.g. shared between several parsers.
    pub fn selectors(mut self, selectors: Arc<Selectors>) -> Self {
        self.selectors = Some(selectors);
        self
    }

    /// Compile and use a custom selector table.
    pub fn selector_table(self, table: &SelectorTable) -> Result<Self> {
        let compiled = table.compile()?;
        Ok(self.selectors(Arc::new(compiled)))
    }

    /// Build the Parser with the configured options.
    pub fn build(self) -> Parser {
        let selectors = self.selectors.unwrap_or_else(default_selectors);
        Parser::new(selectors, self.opts)
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}
