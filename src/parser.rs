//! RSS 2.0 document parsing.
//!
//! Keeps every field as raw text: downstream stages own date normalization
//! and thumbnail derivation, so nothing is interpreted here. Unknown elements
//! are ignored and missing ones default to empty, per the wire contract.

use crate::types::{RawItem, Result};
use tracing::debug;

/// Parse a feed document into its items, in document order.
pub fn parse_items(content: &[u8]) -> Result<Vec<RawItem>> {
    let channel = rss::Channel::read_from(content)?;
    let items = channel.items().iter().map(raw_item).collect::<Vec<_>>();
    debug!(count = items.len(), "parsed feed channel");
    Ok(items)
}

fn raw_item(item: &rss::Item) -> RawItem {
    // Some feeds put the article body in content:encoded and leave
    // description empty; the thumbnail scan wants whichever is populated.
    let description = item
        .description()
        .or_else(|| item.content())
        .unwrap_or_default();

    RawItem {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        description: description.to_string(),
        pub_date: item.pub_date().unwrap_or_default().to_string(),
        enclosure_url: item.enclosure().map(|e| e.url().to_string()),
        enclosure_type: item.enclosure().map(|e| e.mime_type().to_string()),
    }
}
