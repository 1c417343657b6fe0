//! Per-item enrichment: stamping the source name and deriving a display
//! thumbnail.

use crate::types::{NewsItem, RawItem};
use regex::Regex;
use std::sync::OnceLock;

/// Build a [`NewsItem`] from a parsed feed item. The thumbnail is best
/// effort, tried in order:
///
/// 1. the enclosure URL, when the declared MIME type begins with `image`;
/// 2. the first `src="..."`/`src='...'` attribute found in the HTML
///    description;
/// 3. none.
pub fn enrich(item: RawItem, source_name: &str) -> NewsItem {
    let image_url = derive_image(&item);
    NewsItem {
        title: item.title,
        link: item.link,
        description: item.description,
        pub_date: item.pub_date,
        source_name: source_name.to_string(),
        image_url,
    }
}

fn derive_image(item: &RawItem) -> Option<String> {
    let is_image_enclosure = item
        .enclosure_type
        .as_deref()
        .is_some_and(|t| t.starts_with("image"));
    if is_image_enclosure {
        if let Some(url) = item.enclosure_url.clone() {
            return Some(url);
        }
    }
    extract_image_src(&item.description)
}

/// First `src` attribute value in an HTML fragment. The attribute name is
/// matched case-sensitively; either quote style is accepted.
fn extract_image_src(html: &str) -> Option<String> {
    static SRC_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = SRC_PATTERN
        .get_or_init(|| Regex::new(r#"src\s*=\s*['"]([^'"]+)['"]"#).expect("valid src pattern"));
    pattern
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(description: &str) -> RawItem {
        RawItem {
            title: "t".to_string(),
            description: description.to_string(),
            ..RawItem::default()
        }
    }

    #[test]
    fn image_enclosure_wins_over_description() {
        let item = RawItem {
            enclosure_url: Some("http://x/enclosed.jpg".to_string()),
            enclosure_type: Some("image/jpeg".to_string()),
            description: r#"<img src="http://x/inline.png">"#.to_string(),
            ..RawItem::default()
        };
        let news = enrich(item, "A");
        assert_eq!(news.image_url.as_deref(), Some("http://x/enclosed.jpg"));
    }

    #[test]
    fn non_image_enclosure_is_ignored() {
        let item = RawItem {
            enclosure_url: Some("http://x/audio.mp3".to_string()),
            enclosure_type: Some("audio/mpeg".to_string()),
            description: r#"<img src="http://x/inline.png">"#.to_string(),
            ..RawItem::default()
        };
        let news = enrich(item, "A");
        assert_eq!(news.image_url.as_deref(), Some("http://x/inline.png"));
    }

    #[test]
    fn description_scan_accepts_either_quote_style() {
        let news = enrich(raw("<img src='http://x/a.png'>"), "A");
        assert_eq!(news.image_url.as_deref(), Some("http://x/a.png"));

        let news = enrich(raw(r#"<img width="10" src="http://x/b.png">"#), "A");
        assert_eq!(news.image_url.as_deref(), Some("http://x/b.png"));
    }

    #[test]
    fn missing_image_is_not_an_error() {
        let news = enrich(raw("plain text, no markup"), "A");
        assert_eq!(news.image_url, None);
    }

    #[test]
    fn source_name_comes_from_the_source_not_the_content() {
        let news = enrich(raw("BBC reports that..."), "Vanguard");
        assert_eq!(news.source_name, "Vanguard");
    }
}
