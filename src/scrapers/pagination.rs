use scraper::Html;
use std::collections::BTreeSet;

use super::selectors;
use crate::parsers::clean_text;

/// Page numbers advertised by the pagination control, ascending and without repeats.
///
/// Links whose text is not a page number ("Next", "»") are ignored. A page
/// with no pagination control yields an empty list.
pub fn discover_pages(html: &str) -> Vec<u32> {
    let document = Html::parse_document(html);

    document
        .select(&selectors::PAGE_LINK)
        .filter_map(|link| clean_text(&link.text().collect::<String>()).parse::<u32>().ok())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
