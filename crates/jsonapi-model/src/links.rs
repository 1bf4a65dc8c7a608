use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::meta::Meta;

/// One hyperlink value: a bare URL string or an object carrying `href`
/// plus link-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link {
    /// Bare URL string.
    Url(String),
    /// Link object with `href` and metadata.
    Object {
        /// Target URL.
        href: String,
        /// Link-level metadata, omitted when empty.
        #[serde(skip_serializing_if = "Meta::is_empty", default)]
        meta: Meta,
    },
}

impl Link {
    /// Creates a bare URL link.
    pub fn url(href: impl Into<String>) -> Self {
        Link::Url(href.into())
    }

    /// Creates a link object with metadata.
    pub fn object(href: impl Into<String>, meta: Meta) -> Self {
        Link::Object {
            href: href.into(),
            meta,
        }
    }

    /// Target URL regardless of representation.
    pub fn href(&self) -> &str {
        match self {
            Link::Url(href) => href,
            Link::Object { href, .. } => href,
        }
    }
}

/// Key-ordered link mapping (`links` members).
///
/// Ordering, merge, and identity rules match [`Meta`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(IndexMap<String, Link>);

impl Links {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts a link, returning the previous link for the name if any.
    pub fn insert(&mut self, name: impl Into<String>, link: Link) -> Option<Link> {
        self.0.insert(name.into(), link)
    }

    /// Inserts a bare URL link.
    pub fn insert_url(&mut self, name: impl Into<String>, href: impl Into<String>) -> Option<Link> {
        self.insert(name, Link::url(href))
    }

    /// Looks up a link by name.
    pub fn get(&self, name: &str) -> Option<&Link> {
        self.0.get(name)
    }

    /// Returns `true` when the mapping carries no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Left-biased union: entries of `self` win on name conflict.
    pub fn merge(mut self, other: Links) -> Links {
        for (name, link) in other.0 {
            self.0.entry(name).or_insert(link);
        }
        self
    }
}

impl FromIterator<(String, Link)> for Links {
    fn from_iter<I: IntoIterator<Item = (String, Link)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
