pub mod aggregator;
pub mod dates;
pub mod enrich;
pub mod fetcher;
pub mod filter;
pub mod parser;
pub mod registry;
pub mod types;

pub use aggregator::NewsAggregator;
pub use fetcher::{FetchFeed, HttpFetcher};
pub use filter::FilterPolicy;
pub use registry::{Category, CategorySpec, FilterOrder, GroupSpec, Registry, SourceGroup};
pub use types::{
    AggregatorError, FeedSource, FetchConfig, NewsItem, NewsOutcome, RawItem, Result,
    RECOMMENDED_REFRESH_INTERVAL,
};
