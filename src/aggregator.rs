//! Per-category orchestration: fan-out fetch across a source group, fan-in
//! merge, enrich, filter, sort, window.

use crate::dates;
use crate::enrich::enrich;
use crate::fetcher::{FetchFeed, HttpFetcher};
use crate::registry::{Category, FilterOrder, GroupSpec, Registry};
use crate::types::{FeedSource, FetchConfig, NewsItem, NewsOutcome, RawItem, Result};
use futures::future::join_all;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct NewsAggregator {
    registry: Registry,
    fetcher: Arc<dyn FetchFeed>,
}

impl NewsAggregator {
    pub fn new(registry: Registry, fetcher: Arc<dyn FetchFeed>) -> Self {
        Self { registry, fetcher }
    }

    /// Production configuration: the default registry over an HTTP fetcher.
    pub fn with_defaults() -> Result<Self> {
        let fetcher = HttpFetcher::new(FetchConfig::default())?;
        Ok(Self::new(Registry::default(), Arc::new(fetcher)))
    }

    /// The engine's sole externally visible operation.
    ///
    /// Always returns an outcome, never an error: a source that fails
    /// contributes zero items, and a category where everything failed or was
    /// filtered out comes back as [`NewsOutcome::Empty`].
    pub async fn get_news(&self, category: Category) -> NewsOutcome {
        let Some(spec) = self.registry.spec(category) else {
            warn!(%category, "no source configuration for category");
            return NewsOutcome::Empty;
        };

        let mut blended = Vec::new();
        for group_spec in &spec.groups {
            let mut pool = self.fetch_group(group_spec).await;
            if spec.filter_order == FilterOrder::PerGroup {
                pool = spec.filter.apply(pool);
            }
            pool.truncate(group_spec.take);
            blended.extend(pool);
        }

        if spec.filter_order == FilterOrder::AfterBlend {
            blended = spec.filter.apply(blended);
        }

        sort_newest_first(&mut blended);
        blended.truncate(spec.display_limit);

        info!(%category, items = blended.len(), "aggregated category");
        NewsOutcome::from_items(blended)
    }

    /// One fan-out/fan-in batch: every source in the group fetched
    /// concurrently, merged only after all have finished. The join is the one
    /// place a failed source is swallowed; it degrades to zero items and a
    /// warning, so siblings are never blocked or aborted by it.
    async fn fetch_group(&self, group_spec: &GroupSpec) -> Vec<NewsItem> {
        let fetches = group_spec
            .group
            .sources
            .iter()
            .map(|source| self.fetch_source(source));
        let results = join_all(fetches).await;

        let mut pool = Vec::new();
        for (source, result) in group_spec.group.sources.iter().zip(results) {
            match result {
                Ok(raw_items) => {
                    debug!(source = %source.name, items = raw_items.len(), "source contributed");
                    pool.extend(raw_items.into_iter().map(|item| enrich(item, &source.name)));
                }
                Err(e) => {
                    warn!(source = %source.name, error = %e, "source failed, contributing no items");
                }
            }
        }

        sort_newest_first(&mut pool);
        pool.truncate(group_spec.fetch_limit);
        pool
    }

    async fn fetch_source(&self, source: &FeedSource) -> Result<Vec<RawItem>> {
        self.fetcher.fetch_items(source).await
    }
}

fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by_key(|item| Reverse(dates::normalize(&item.pub_date)));
}
