//! Content and output types shared by every generation step.
//!
//! `Post` and `Category` are read-only views of the host's content model.
//! `PageDescriptor` is what the generator hands back to the rendering layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single content item as seen by the category generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub date: DateTime<Utc>,
    pub title: String,
    /// Language tag (`"en"`, `"zh-TW"`). Absent means the site default language.
    #[serde(default, rename = "lang", skip_serializing_if = "Option::is_none")]
    pub language_tag: Option<String>,
    /// Set when this post only points at content authored in another language.
    #[serde(
        default,
        rename = "original_lang_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_language_url: Option<String>,
}

impl Post {
    /// Whether this post is a translation placeholder rather than native content.
    ///
    /// An empty `original_language_url` counts as absent.
    pub fn is_redirect(&self) -> bool {
        self.original_language_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }
}

/// A named grouping of posts, addressed by its slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display name
    pub name: String,
    /// URL-safe identifier, unique within the site
    pub slug: String,
    /// Posts in no particular order
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Category {
    /// Number of posts whose effective language is `language`.
    pub fn post_count_for(&self, language: &str, default_language: &str) -> usize {
        self.posts
            .iter()
            .filter(|p| crate::partition::effective_language(p, default_language) == language)
            .count()
    }
}

/// Opaque values the rendering layer gets alongside every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    /// Category display name
    pub category: String,
    /// Category slug
    pub slug: String,
    /// Language tag of the listed posts
    pub lang: String,
}

/// One listing page: its address, its slice of posts, and navigation links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDescriptor<'a> {
    /// URL path of this page (`/categories/tech/`, `/categories/tech/page/2/`)
    pub path: String,
    /// This page's own address, same as `path`
    pub current_url: String,
    /// Path of page 1, shared by every page of the sequence
    pub base: String,
    /// 1-based page number
    #[serde(rename = "current")]
    pub page_number: usize,
    #[serde(rename = "total")]
    pub total_pages: usize,
    pub posts: Vec<&'a Post>,
    pub prev: Option<usize>,
    pub prev_link: Option<String>,
    pub next: Option<usize>,
    pub next_link: Option<String>,
    /// Template hints, most specific first
    pub layout: Vec<String>,
    pub data: PageData,
}
