// ABOUTME: Extraction of the fields shared by every page shape.
// ABOUTME: Reads title, description, canonical URL and image list from page metadata.

use scraper::ElementRef;

use crate::error::{GemistError, Result};
use crate::models::MediaItem;
use crate::selectors::compiled::MediaItemSelectors;

/// Extracts the shared media item fields from a page.
///
/// Title, description and URL are mandatory. Images are optional: every
/// declared image is kept in document order, empty values dropped.
pub fn extract_media_item(root: ElementRef<'_>, sel: &MediaItemSelectors) -> Result<MediaItem> {
    let title = sel
        .title
        .first(root)
        .ok_or(GemistError::MissingField("title"))?;
    let description = sel
        .description
        .first(root)
        .ok_or(GemistError::MissingField("description"))?;
    let url = sel.url.first(root).ok_or(GemistError::MissingField("url"))?;

    let image_urls = sel
        .images
        .all(root)
        .into_iter()
        .filter(|u| !u.is_empty())
        .collect();

    Ok(MediaItem {
        title,
        description,
        image_urls,
        url,
    })
}
