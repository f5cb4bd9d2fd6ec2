// ABOUTME: Programme page extraction, including the broadcast list walk.
// ABOUTME: Builds BroadcastProxy records per list item and applies the configured ListPolicy.

use scraper::ElementRef;
use tracing::{debug, info, warn};
use url::Url;

use crate::duration_parse::parse_duration;
use crate::error::{DateContext, GemistError, Result};
use crate::extractors::media_item::extract_media_item;
use crate::models::{BroadcastProxy, MediaItem, Program};
use crate::options::{ListPolicy, Options};
use crate::selectors::compiled::ProgramSelectors;
use crate::selectors::Selectors;
use crate::time_parse::parse_local_date;

/// Extracts a programme and its broadcast list.
pub fn extract_program(root: ElementRef<'_>, sel: &Selectors, opts: &Options) -> Result<Program> {
    let item = extract_media_item(root, &sel.media_item)?;
    let broadcasts = extract_broadcast_list(root, sel, opts)?;

    Ok(Program { item, broadcasts })
}

/// Walks the broadcast list container in document order.
///
/// The container's declared count only sizes the output. A malformed item
/// either ends the walk (keeping earlier items) or fails the call, depending
/// on `opts.list_policy`.
pub fn extract_broadcast_list(
    root: ElementRef<'_>,
    sel: &Selectors,
    opts: &Options,
) -> Result<Vec<BroadcastProxy>> {
    let psel = &sel.program;
    let list = root
        .select(&psel.list)
        .next()
        .ok_or(GemistError::MissingField("broadcast list"))?;

    let declared = declared_count(list, &psel.count_attribute)?;
    let items: Vec<ElementRef<'_>> = list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == psel.item_tag)
        .collect();

    let mut broadcasts = Vec::with_capacity(declared.min(items.len()));
    for (index, el) in items.into_iter().enumerate() {
        match extract_broadcast_proxy(el, psel, &sel.base_url, opts) {
            Ok(bp) => broadcasts.push(bp),
            Err(err) => match opts.list_policy {
                ListPolicy::StopAtFirstError => {
                    warn!(index, error = %err, "stopping broadcast list at malformed item");
                    break;
                }
                ListPolicy::Strict => return Err(GemistError::item(index, err)),
            },
        }
    }

    info!(
        count = broadcasts.len(),
        declared, "extracted broadcast list"
    );
    Ok(broadcasts)
}

fn declared_count(list: ElementRef<'_>, attr: &str) -> Result<usize> {
    let raw = list
        .value()
        .attr(attr)
        .ok_or_else(|| GemistError::ListCount(String::new()))?;
    raw.trim()
        .parse()
        .map_err(|_| GemistError::ListCount(raw.to_string()))
}

/// Extracts one list item.
pub fn extract_broadcast_proxy(
    el: ElementRef<'_>,
    sel: &ProgramSelectors,
    base_url: &Url,
    opts: &Options,
) -> Result<BroadcastProxy> {
    let isel = &sel.item;

    let title = isel
        .title
        .first(el)
        .ok_or(GemistError::MissingField("title"))?;

    // An item without a teaser paragraph is still valid.
    let description = isel.description.first(el).unwrap_or_default();

    let image = isel
        .image
        .first(el)
        .ok_or(GemistError::MissingField("image"))?;

    let href = isel.url.first(el).ok_or(GemistError::MissingField("url"))?;
    let url = base_url
        .join(&href)
        .map_err(|_| GemistError::InvalidUrl(href.clone()))?;

    let info = isel
        .info
        .first(el)
        .ok_or(GemistError::MissingField("info"))?;
    let mut parts = info.split(sel.info_separator.as_str());
    let (sub_title, raw_date) = match (parts.next(), parts.next()) {
        (Some(sub_title), Some(raw_date)) => (sub_title, raw_date),
        _ => return Err(GemistError::InfoLine(info.clone())),
    };
    let date = parse_local_date(raw_date, opts.timezone, DateContext::List)?;

    let raw_length = isel
        .length
        .first(el)
        .ok_or(GemistError::MissingField("length"))?;
    let length = parse_duration(&raw_length, opts.hour_mode)?;

    debug!(%url, "extracted broadcast list item");

    Ok(BroadcastProxy {
        item: MediaItem {
            title: title.trim().to_string(),
            description,
            image_urls: vec![image],
            url: url.into(),
        },
        sub_title: sub_title.to_string(),
        date,
        length,
    })
}
