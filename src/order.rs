//! Post ordering inside one (category, language) group.
//!
//! Ordering has two levels:
//!
//! 1. Native posts come before translation placeholders (posts with a
//!    non-empty `original_language_url`), whatever the order mode.
//! 2. Within each of those two partitions, posts follow [`OrderBy`].
//!
//! Posts that compare equal keep their input order: [`sort_posts`] is a
//! stable sort and there is no third key.

use crate::collate;
use crate::types::Post;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How posts are ordered within a page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderBy {
    /// `-date`
    #[default]
    NewestFirst,
    /// `date`
    OldestFirst,
    /// `-title`
    TitleDescending,
    /// `title`
    TitleAscending,
}

type PostCmp = fn(&Post, &Post) -> Ordering;

/// Config key for each mode.
const KEYS: [(&str, OrderBy); 4] = [
    ("-date", OrderBy::NewestFirst),
    ("date", OrderBy::OldestFirst),
    ("-title", OrderBy::TitleDescending),
    ("title", OrderBy::TitleAscending),
];

/// Secondary comparator for each mode.
const COMPARATORS: [(OrderBy, PostCmp); 4] = [
    (OrderBy::NewestFirst, newest_first),
    (OrderBy::OldestFirst, oldest_first),
    (OrderBy::TitleDescending, title_descending),
    (OrderBy::TitleAscending, title_ascending),
];

impl OrderBy {
    /// Parse a config key. Anything unrecognized means `-date`.
    pub fn parse(key: &str) -> Self {
        KEYS.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, order)| *order)
            .unwrap_or_default()
    }

    /// The config key for this mode.
    pub fn key(self) -> &'static str {
        KEYS.iter()
            .find(|(_, order)| *order == self)
            .map(|(k, _)| *k)
            .unwrap_or("-date")
    }

    fn comparator(self) -> PostCmp {
        COMPARATORS
            .iter()
            .find(|(order, _)| *order == self)
            .map(|(_, cmp)| *cmp)
            .unwrap_or(newest_first)
    }
}

impl From<String> for OrderBy {
    fn from(key: String) -> Self {
        Self::parse(&key)
    }
}

impl From<OrderBy> for String {
    fn from(order: OrderBy) -> Self {
        order.key().to_string()
    }
}

fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.date.cmp(&a.date)
}

fn oldest_first(a: &Post, b: &Post) -> Ordering {
    a.date.cmp(&b.date)
}

fn title_descending(a: &Post, b: &Post) -> Ordering {
    collate::compare(&b.title, &a.title)
}

fn title_ascending(a: &Post, b: &Post) -> Ordering {
    collate::compare(&a.title, &b.title)
}

/// Compare two posts: native before redirect, then by `order_by`.
pub fn compare(a: &Post, b: &Post, order_by: OrderBy) -> Ordering {
    a.is_redirect()
        .cmp(&b.is_redirect())
        .then_with(|| (order_by.comparator())(a, b))
}

/// Stable in-place sort of a language group.
pub fn sort_posts(posts: &mut [&Post], order_by: OrderBy) {
    posts.sort_by(|a, b| compare(a, b, order_by));
}
