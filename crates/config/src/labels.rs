use std::collections::BTreeMap;
use std::fmt;

use crate::LocaleTag;

static DEFAULT_LABELS: once_cell::sync::Lazy<Labels> = once_cell::sync::Lazy::new(Labels::default);

/// Names of the UI strings the generator renders in page chrome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelKey {
    AvailableRssFeeds,
    Newer,
    Older,
    ReadMore,
    RssFeed,
    RssFeeds,
    SeeAllPosts,
}

impl LabelKey {
    pub const ALL: [LabelKey; 7] = [
        LabelKey::AvailableRssFeeds,
        LabelKey::Newer,
        LabelKey::Older,
        LabelKey::ReadMore,
        LabelKey::RssFeed,
        LabelKey::RssFeeds,
        LabelKey::SeeAllPosts,
    ];

    /// Key as it appears in the serialized configuration
    pub fn as_str(self) -> &'static str {
        match self {
            LabelKey::AvailableRssFeeds => "availableRSSFeeds",
            LabelKey::Newer => "newer",
            LabelKey::Older => "older",
            LabelKey::ReadMore => "readMore",
            LabelKey::RssFeed => "rssFeed",
            LabelKey::RssFeeds => "rssFeeds",
            LabelKey::SeeAllPosts => "seeAllPosts",
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// One locale's UI strings.
///
/// Keys missing from a serialized table take the generator's English default.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Labels {
    #[serde(rename = "availableRSSFeeds")]
    pub available_rss_feeds: String,
    pub newer: String,
    pub older: String,
    pub read_more: String,
    pub rss_feed: String,
    pub rss_feeds: String,
    pub see_all_posts: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            available_rss_feeds: "Available RSS feeds".to_owned(),
            newer: "Newer".to_owned(),
            older: "Older".to_owned(),
            read_more: "Read more".to_owned(),
            rss_feed: "RSS feed".to_owned(),
            rss_feeds: "RSS feeds".to_owned(),
            see_all_posts: "See all posts".to_owned(),
        }
    }
}

impl Labels {
    pub fn get(&self, key: LabelKey) -> &str {
        match key {
            LabelKey::AvailableRssFeeds => &self.available_rss_feeds,
            LabelKey::Newer => &self.newer,
            LabelKey::Older => &self.older,
            LabelKey::ReadMore => &self.read_more,
            LabelKey::RssFeed => &self.rss_feed,
            LabelKey::RssFeeds => &self.rss_feeds,
            LabelKey::SeeAllPosts => &self.see_all_posts,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LabelKey, &str)> + '_ {
        LabelKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Per-locale label overrides, keyed by locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Translations(BTreeMap<LocaleTag, Labels>);

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lang: LocaleTag, labels: Labels) -> Option<Labels> {
        self.0.insert(lang, labels)
    }

    pub fn get(&self, lang: &LocaleTag) -> Option<&Labels> {
        self.0.get(lang)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocaleTag, &Labels)> + '_ {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Resolve the labels for `lang`.
    ///
    /// Tries the exact tag, then any table sharing the primary language, then the
    /// generator defaults.
    pub fn labels_for(&self, lang: &LocaleTag) -> &Labels {
        if let Some(labels) = self.get(lang) {
            return labels;
        }
        if let Some((tag, labels)) = self
            .iter()
            .find(|(tag, _)| tag.language() == lang.language())
        {
            log::debug!("No labels for `{lang}`, using `{tag}`");
            return labels;
        }
        log::debug!("No labels for `{lang}`, using defaults");
        &DEFAULT_LABELS
    }
}

impl FromIterator<(LocaleTag, Labels)> for Translations {
    fn from_iter<I: IntoIterator<Item = (LocaleTag, Labels)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
