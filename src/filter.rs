//! Category-specific keyword filtering.
//!
//! Matching is a case-insensitive substring test over `title + " " +
//! description`, not tokenized: "cup" matches "cupcake" and "app" matches
//! "happy". The production keyword tables are tuned around this behavior, so
//! switching to token matching would change category contents.

use crate::types::NewsItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPolicy {
    /// Item passes iff none of the keywords occur in title + description.
    Exclude(Vec<String>),
    /// Item passes iff at least one keyword occurs in title + description.
    Include(Vec<String>),
    /// Passes everything. Used where the source selection alone defines the
    /// topical scope.
    #[default]
    None,
}

impl FilterPolicy {
    pub fn exclude<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterPolicy::Exclude(keywords.into_iter().map(Into::into).collect())
    }

    pub fn include<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterPolicy::Include(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            FilterPolicy::Exclude(keywords) => {
                let content = searchable_text(item);
                !keywords.iter().any(|k| content.contains(&k.to_lowercase()))
            }
            FilterPolicy::Include(keywords) => {
                let content = searchable_text(item);
                keywords.iter().any(|k| content.contains(&k.to_lowercase()))
            }
            FilterPolicy::None => true,
        }
    }

    pub fn apply(&self, items: Vec<NewsItem>) -> Vec<NewsItem> {
        if matches!(self, FilterPolicy::None) {
            return items;
        }
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

fn searchable_text(item: &NewsItem) -> String {
    format!("{} {}", item.title, item.description).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            ..NewsItem::default()
        }
    }

    #[test]
    fn exclude_drops_matching_items() {
        let policy = FilterPolicy::exclude(["football", "movie"]);
        let kept = policy.apply(vec![
            item("Election results", "Votes counted overnight"),
            item("Football transfer news", "Club signs striker"),
            item("New movie review", ""),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Election results");
    }

    #[test]
    fn include_keeps_only_matching_items() {
        let policy = FilterPolicy::include(["tech", "ai"]);
        let kept = policy.apply(vec![
            item("AI breakthrough", "New model announced"),
            item("Market report", "Stocks climb"),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "AI breakthrough");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let policy = FilterPolicy::include(["football"]);
        assert!(policy.matches(&item("FOOTBALL Tonight", "")));

        let exclude = FilterPolicy::exclude(["Football"]);
        assert!(!exclude.matches(&item("football tonight", "")));
    }

    #[test]
    fn matching_is_substring_not_tokenized() {
        // "cup" matching "cupcake" is intentional.
        let policy = FilterPolicy::include(["cup"]);
        assert!(policy.matches(&item("Cupcake festival opens", "")));
    }

    #[test]
    fn description_is_searched_too() {
        let policy = FilterPolicy::include(["netflix"]);
        assert!(policy.matches(&item("Streaming wars", "Netflix adds subscribers")));
    }

    #[test]
    fn no_op_passes_everything() {
        let policy = FilterPolicy::None;
        let kept = policy.apply(vec![item("anything", "at all")]);
        assert_eq!(kept.len(), 1);
    }
}
