//! Static source registry: which feeds each category pulls from, how each
//! group is capped, and which keyword policy applies.
//!
//! All of this is immutable configuration injected at construction. The
//! production tables live in [`Registry::default`]; tests build small
//! registries of their own.

use crate::filter::FilterPolicy;
use crate::types::{AggregatorError, FeedSource};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    World,
    Foreign,
    Sport,
    Tech,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::World,
        Category::Foreign,
        Category::Sport,
        Category::Tech,
        Category::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::World => "world",
            Category::Foreign => "foreign",
            Category::Sport => "sport",
            Category::Tech => "tech",
            Category::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AggregatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "world" => Ok(Category::World),
            "foreign" => Ok(Category::Foreign),
            "sport" => Ok(Category::Sport),
            "tech" => Ok(Category::Tech),
            "entertainment" => Ok(Category::Entertainment),
            other => Err(AggregatorError::UnknownCategory(other.to_string())),
        }
    }
}

/// An ordered set of sources fetched together as one fan-out batch.
#[derive(Debug, Clone)]
pub struct SourceGroup {
    pub sources: Vec<FeedSource>,
}

impl SourceGroup {
    pub fn new(sources: Vec<FeedSource>) -> Self {
        Self { sources }
    }
}

/// One group's role inside a category: how many items the group keeps after
/// its own time sort (`fetch_limit`), and how many of those go into the
/// cross-group blend (`take`).
#[derive(Debug, Clone)]
pub struct GroupSpec {
    pub group: SourceGroup,
    pub fetch_limit: usize,
    pub take: usize,
}

/// Whether the keyword policy runs on each group's truncated pool before
/// blending, or once on the blended pool. Categories differ on this, so it is
/// a per-category knob rather than a global order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOrder {
    PerGroup,
    AfterBlend,
}

#[derive(Debug, Clone)]
pub struct CategorySpec {
    pub groups: Vec<GroupSpec>,
    pub filter: FilterPolicy,
    pub filter_order: FilterOrder,
    pub display_limit: usize,
}

#[derive(Debug, Clone)]
pub struct Registry {
    categories: HashMap<Category, CategorySpec>,
}

impl Registry {
    pub fn new(categories: HashMap<Category, CategorySpec>) -> Self {
        Self { categories }
    }

    pub fn spec(&self, category: Category) -> Option<&CategorySpec> {
        self.categories.get(&category)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let local = || {
            SourceGroup::new(vec![
                FeedSource::new("Vanguard", "https://www.vanguardngr.com/feed"),
                FeedSource::new("The Guardian", "https://guardian.ng/feed"),
                FeedSource::new("Premium Times", "https://www.premiumtimesng.com/feed"),
                FeedSource::new("Punch", "https://punchng.com/feed"),
                FeedSource::new("Daily Post", "https://dailypost.ng/feed"),
                FeedSource::new("Tribune", "https://tribuneonlineng.com/feed"),
            ])
        };
        let foreign = || {
            SourceGroup::new(vec![
                FeedSource::new("BBC World", "https://feeds.bbci.co.uk/news/world/rss.xml"),
                FeedSource::new("CNN", "http://rss.cnn.com/rss/edition_world.rss"),
                FeedSource::new("Al Jazeera", "https://www.aljazeera.com/xml/rss/all.xml"),
            ])
        };
        let sport = SourceGroup::new(vec![
            FeedSource::new("Complete Sports (NG)", "https://www.completesports.com/feed"),
            FeedSource::new("BBC Football", "https://feeds.bbci.co.uk/sport/football/rss.xml"),
            FeedSource::new("Sky Sports Football", "https://www.skysports.com/rss/11095"),
            FeedSource::new("Goal", "https://www.goal.com/feeds/en/news"),
        ]);
        let tech = SourceGroup::new(vec![
            FeedSource::new("TechCrunch", "https://techcrunch.com/feed/"),
            FeedSource::new("The Verge", "https://www.theverge.com/rss/index.xml"),
            FeedSource::new("Wired", "https://www.wired.com/feed/rss"),
            FeedSource::new(
                "Vanguard Tech",
                "https://www.vanguardngr.com/category/technology/feed/",
            ),
        ]);
        let entertainment = SourceGroup::new(vec![
            FeedSource::new("Variety", "https://variety.com/feed/"),
            FeedSource::new("Hollywood Reporter", "https://www.hollywoodreporter.com/feed/"),
            FeedSource::new(
                "Vanguard Entertainment",
                "https://www.vanguardngr.com/category/entertainment/feed/",
            ),
            FeedSource::new(
                "Punch Entertainment",
                "https://punchng.com/topics/entertainment/feed/",
            ),
        ]);

        let world_exclude = FilterPolicy::exclude([
            "tech",
            "technology",
            "software",
            "app",
            "gadget",
            "smartphone",
            "iphone",
            "android",
            "sport",
            "football",
            "soccer",
            "basketball",
            "tennis",
            "golf",
            "match",
            "league",
            "cup",
            "movie",
            "entertainment",
            "cinema",
            "celebrity",
            "music",
            "song",
            "album",
            "artist",
            "actor",
            "actress",
            "hollywood",
            "nollywood",
            "box office",
            "gaming",
            "nintendo",
            "playstation",
            "xbox",
        ]);
        let sport_include = FilterPolicy::include([
            "football",
            "soccer",
            "league",
            "club",
            "premier league",
            "champions league",
            "afcon",
            "super eagles",
            "npfl",
            "nigerian league",
            "nations cup",
            "world cup",
            "coach",
            "striker",
            "manchester",
            "chelsea",
            "liverpool",
            "arsenal",
            "real madrid",
            "barcelona",
            "bayern",
            "psg",
            "italy",
            "spain",
            "germany",
            "france",
            "ucl",
            "uel",
            "transfers",
        ]);
        let tech_include = FilterPolicy::include([
            "tech",
            "technology",
            "ai",
            "artificial intelligence",
            "software",
            "hardware",
            "app",
            "startup",
            "silicon",
            "semiconductor",
            "robot",
            "computing",
            "digital",
            "smartphone",
            "mobile",
            "internet",
            "google",
            "apple",
            "microsoft",
            "meta",
            "tesla",
        ]);
        let entertainment_include = FilterPolicy::include([
            "movie",
            "film",
            "cinema",
            "entertainment",
            "celebrity",
            "music",
            "song",
            "album",
            "artist",
            "singer",
            "actor",
            "actress",
            "hollywood",
            "nollywood",
            "showbiz",
            "award",
            "series",
            "streaming",
            "netflix",
            "theatre",
            "tv",
        ]);

        let mut categories = HashMap::new();
        categories.insert(
            Category::World,
            CategorySpec {
                groups: vec![
                    GroupSpec {
                        group: local(),
                        fetch_limit: 60,
                        take: 14,
                    },
                    GroupSpec {
                        group: foreign(),
                        fetch_limit: 30,
                        take: 6,
                    },
                ],
                filter: world_exclude,
                filter_order: FilterOrder::PerGroup,
                display_limit: 20,
            },
        );
        categories.insert(
            Category::Foreign,
            CategorySpec {
                groups: vec![GroupSpec {
                    group: foreign(),
                    fetch_limit: 20,
                    take: 20,
                }],
                filter: FilterPolicy::None,
                filter_order: FilterOrder::AfterBlend,
                display_limit: 20,
            },
        );
        categories.insert(
            Category::Sport,
            CategorySpec {
                groups: vec![GroupSpec {
                    group: sport,
                    fetch_limit: 100,
                    take: 100,
                }],
                filter: sport_include,
                filter_order: FilterOrder::AfterBlend,
                display_limit: 20,
            },
        );
        categories.insert(
            Category::Tech,
            CategorySpec {
                groups: vec![GroupSpec {
                    group: tech,
                    fetch_limit: 100,
                    take: 100,
                }],
                filter: tech_include,
                filter_order: FilterOrder::AfterBlend,
                display_limit: 20,
            },
        );
        categories.insert(
            Category::Entertainment,
            CategorySpec {
                groups: vec![GroupSpec {
                    group: entertainment,
                    fetch_limit: 100,
                    take: 100,
                }],
                filter: entertainment_include,
                filter_order: FilterOrder::AfterBlend,
                display_limit: 20,
            },
        );

        Registry::new(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_every_category() {
        let registry = Registry::default();
        for category in Category::ALL {
            let spec = registry.spec(category).expect("category configured");
            assert!(!spec.groups.is_empty());
            assert!(spec.display_limit > 0);
            for group_spec in &spec.groups {
                assert!(!group_spec.group.sources.is_empty());
                assert!(group_spec.take <= group_spec.fetch_limit);
            }
        }
    }

    #[test]
    fn world_blends_local_and_foreign_at_fixed_ratio() {
        let registry = Registry::default();
        let world = registry.spec(Category::World).unwrap();
        assert_eq!(world.groups.len(), 2);
        assert_eq!(world.groups[0].take, 14);
        assert_eq!(world.groups[1].take, 6);
        assert_eq!(world.filter_order, FilterOrder::PerGroup);
        assert!(matches!(world.filter, FilterPolicy::Exclude(_)));
    }

    #[test]
    fn category_parses_from_str() {
        assert_eq!("Sport".parse::<Category>().unwrap(), Category::Sport);
        assert!("weather".parse::<Category>().is_err());
    }
}
