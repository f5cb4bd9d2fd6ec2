// ABOUTME: Compiled form of the selector table and the value-reading helpers built on it.
// ABOUTME: Selectors are parsed once at construction and shared read-only afterwards.

//! Compiled selectors.
//!
//! Key behaviors:
//! - Candidate selectors are tried in order; the first yielding a value wins.
//! - Text specs read the first direct text child of a matching element,
//!   untrimmed. Elements without a text child are skipped.
//! - Attribute specs read the raw attribute value, untrimmed. An attribute that
//!   is present but empty still counts as a value.

use scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

use crate::error::{GemistError, Result};
use crate::selectors::spec::{
    BroadcastTable, FieldSpec, ListItemTable, MediaItemTable, MediaTable, ProgramTable,
    SelectorSpec, SelectorTable,
};

fn compile_css(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| GemistError::Selector(format!("{:?}: {}", css, e)))
}

/// First direct text child of an element, if any.
pub fn first_text(el: ElementRef<'_>) -> Option<String> {
    el.children()
        .find_map(|node| node.value().as_text().map(|t| t.text.to_string()))
}

/// One compiled candidate.
#[derive(Debug, Clone)]
pub enum CompiledSpec {
    Text(Selector),
    Attr(Selector, String),
}

impl CompiledSpec {
    fn compile(spec: &SelectorSpec) -> Result<Self> {
        match spec {
            SelectorSpec::Text(css) => Ok(CompiledSpec::Text(compile_css(css)?)),
            SelectorSpec::Attr(parts) => match parts.as_slice() {
                [css, attr] => Ok(CompiledSpec::Attr(compile_css(css)?, attr.clone())),
                _ => Err(GemistError::Selector(format!(
                    "attribute selector needs [css, attr], got {:?}",
                    parts
                ))),
            },
        }
    }

    fn values<'a>(&'a self, scope: ElementRef<'a>) -> impl Iterator<Item = String> + 'a {
        let (sel, attr) = match self {
            CompiledSpec::Text(sel) => (sel, None),
            CompiledSpec::Attr(sel, attr) => (sel, Some(attr.as_str())),
        };
        scope.select(sel).filter_map(move |el| match attr {
            Some(attr) => el.value().attr(attr).map(str::to_string),
            None => first_text(el),
        })
    }
}

/// A field's compiled candidate list.
#[derive(Debug, Clone)]
pub struct CompiledField {
    name: String,
    specs: Vec<CompiledSpec>,
}

impl CompiledField {
    pub fn compile(name: &str, field: &FieldSpec) -> Result<Self> {
        if field.selectors.is_empty() {
            return Err(GemistError::Selector(format!("{} has no selectors", name)));
        }
        let specs = field
            .selectors
            .iter()
            .map(CompiledSpec::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: name.to_string(),
            specs,
        })
    }

    /// Returns the first value found by the first candidate that finds any.
    pub fn first(&self, scope: ElementRef<'_>) -> Option<String> {
        for (i, spec) in self.specs.iter().enumerate() {
            if let Some(value) = spec.values(scope).next() {
                if i > 0 {
                    debug!(field = %self.name, candidate = i, "fallback selector matched");
                }
                return Some(value);
            }
        }
        None
    }

    /// Returns every value found by the first candidate that finds any.
    pub fn all(&self, scope: ElementRef<'_>) -> Vec<String> {
        for spec in &self.specs {
            let values: Vec<String> = spec.values(scope).collect();
            if !values.is_empty() {
                return values;
            }
        }
        Vec::new()
    }
}

#[derive(Debug, Clone)]
pub struct MediaItemSelectors {
    pub title: CompiledField,
    pub description: CompiledField,
    pub url: CompiledField,
    pub images: CompiledField,
}

impl MediaItemSelectors {
    fn compile(t: &MediaItemTable) -> Result<Self> {
        Ok(Self {
            title: CompiledField::compile("title", &t.title)?,
            description: CompiledField::compile("description", &t.description)?,
            url: CompiledField::compile("url", &t.url)?,
            images: CompiledField::compile("images", &t.images)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MediaSelectors {
    pub length: CompiledField,
    pub media_url: CompiledField,
}

impl MediaSelectors {
    fn compile(kind: &str, t: &MediaTable) -> Result<Self> {
        Ok(Self {
            length: CompiledField::compile(&format!("{} length", kind), &t.length)?,
            media_url: CompiledField::compile(&format!("{} media url", kind), &t.media_url)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BroadcastSelectors {
    pub media_type: CompiledField,
    pub long_description: CompiledField,
    pub date: CompiledField,
    pub audio_prefix: String,
    pub video_prefix: String,
    pub audio: MediaSelectors,
    pub video: MediaSelectors,
}

impl BroadcastSelectors {
    fn compile(t: &BroadcastTable) -> Result<Self> {
        Ok(Self {
            media_type: CompiledField::compile("type", &t.media_type)?,
            long_description: CompiledField::compile("long description", &t.long_description)?,
            date: CompiledField::compile("date", &t.date)?,
            audio_prefix: t.audio_prefix.clone(),
            video_prefix: t.video_prefix.clone(),
            audio: MediaSelectors::compile("audio", &t.audio)?,
            video: MediaSelectors::compile("video", &t.video)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ListItemSelectors {
    pub title: CompiledField,
    pub description: CompiledField,
    pub image: CompiledField,
    pub url: CompiledField,
    pub info: CompiledField,
    pub length: CompiledField,
}

impl ListItemSelectors {
    fn compile(t: &ListItemTable) -> Result<Self> {
        Ok(Self {
            title: CompiledField::compile("item title", &t.title)?,
            description: CompiledField::compile("item description", &t.description)?,
            image: CompiledField::compile("item image", &t.image)?,
            url: CompiledField::compile("item url", &t.url)?,
            info: CompiledField::compile("item info", &t.info)?,
            length: CompiledField::compile("item length", &t.length)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProgramSelectors {
    pub list: Selector,
    pub count_attribute: String,
    pub item_tag: String,
    pub info_separator: String,
    pub item: ListItemSelectors,
}

impl ProgramSelectors {
    fn compile(t: &ProgramTable) -> Result<Self> {
        if t.info_separator.is_empty() {
            return Err(GemistError::Selector("empty info separator".to_string()));
        }
        Ok(Self {
            list: compile_css(&t.list)?,
            count_attribute: t.count_attribute.clone(),
            item_tag: t.item_tag.to_ascii_lowercase(),
            info_separator: t.info_separator.clone(),
            item: ListItemSelectors::compile(&t.item)?,
        })
    }
}

/// The validated, compiled selector table.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub base_url: Url,
    pub media_item: MediaItemSelectors,
    pub broadcast: BroadcastSelectors,
    pub program: ProgramSelectors,
}

impl SelectorTable {
    /// Validates the table and compiles every selector in it.
    pub fn compile(&self) -> Result<Selectors> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| GemistError::Selector(format!("base url {:?}: {}", self.base_url, e)))?;
        Ok(Selectors {
            base_url,
            media_item: MediaItemSelectors::compile(&self.media_item)?,
            broadcast: BroadcastSelectors::compile(&self.broadcast)?,
            program: ProgramSelectors::compile(&self.program)?,
        })
    }
}
