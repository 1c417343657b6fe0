use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Refresh interval recommended to presentation-layer callers that poll on a
/// timer. The engine itself never schedules anything.
pub const RECOMMENDED_REFRESH_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// A named, URL-addressed feed. Identity is the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One `<item>` as parsed from a feed document. All fields are raw text as
/// received; absent elements default to empty/None.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub enclosure_url: Option<String>,
    pub enclosure_type: Option<String>,
}

/// The unit the rest of the system consumes. Immutable once enriched.
///
/// This struct is also the wire contract with the bookmark-persistence
/// collaborator, which stores snapshots keyed by `link`. Every field is
/// defaulted on deserialization so stored snapshots survive schema drift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub source_name: String,
    pub image_url: Option<String>,
}

/// Result of one category request. `Empty` is the distinguishable no-results
/// signal: every source failed or every item was filtered out. Correlating
/// that with "was a previous fetch successful" is the caller's job; the
/// engine keeps no history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsOutcome {
    Items(Vec<NewsItem>),
    Empty,
}

impl NewsOutcome {
    pub fn from_items(items: Vec<NewsItem>) -> Self {
        if items.is_empty() {
            NewsOutcome::Empty
        } else {
            NewsOutcome::Items(items)
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        match self {
            NewsOutcome::Items(items) => items,
            NewsOutcome::Empty => &[],
        }
    }

    pub fn into_items(self) -> Vec<NewsItem> {
        match self {
            NewsOutcome::Items(items) => items,
            NewsOutcome::Empty => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NewsOutcome::Empty)
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            // Some feeds reject non-browser client identifiers, so present a
            // desktop Chrome UA.
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            timeout_seconds: 30,
            max_retries: 1,
            retry_delay_seconds: 2,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Feed parse error: {0}")]
    Parse(#[from] rss::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("{0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
