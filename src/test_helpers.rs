//! Shared test utilities for the category generator test suite.
//!
//! Provides post/category builders and lookup helpers over generated pages.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let categories = vec![category("tech", vec![
//!     post("a", "en", "2024-01-01"),
//!     redirect(post("b", "en", "2024-01-02"), "/zh-TW/posts/b/"),
//! ])];
//! let pages = generate(&categories, &config);
//!
//! let page = find_page(&pages, "/categories/tech/");
//! assert_eq!(page_post_ids(page), ["a", "b"]);
//! ```

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{Category, PageDescriptor, Post};

// =========================================================================
// Builders
// =========================================================================

/// Midnight UTC of a `YYYY-MM-DD` date. Panics on a malformed date.
pub fn date(ymd: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad test date '{ymd}': {e}"))
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// A native post with an explicit language tag.
pub fn post(id: &str, lang: &str, ymd: &str) -> Post {
    Post {
        id: id.to_string(),
        date: date(ymd),
        title: id.to_string(),
        language_tag: Some(lang.to_string()),
        original_language_url: None,
    }
}

/// A native post without a language tag.
pub fn untagged(id: &str, ymd: &str) -> Post {
    Post {
        language_tag: None,
        ..post(id, "", ymd)
    }
}

/// An untagged post identified by its title, for ordering tests.
pub fn dated(title: &str, ymd: &str) -> Post {
    untagged(title, ymd)
}

/// Turn a post into a translation placeholder.
pub fn redirect(post: Post, url: &str) -> Post {
    Post {
        original_language_url: Some(url.to_string()),
        ..post
    }
}

/// A category whose display name equals its slug.
pub fn category(slug: &str, posts: Vec<Post>) -> Category {
    Category {
        name: slug.to_string(),
        slug: slug.to_string(),
        posts,
    }
}

// =========================================================================
// Page lookups - panics with a clear message on miss
// =========================================================================

/// Find a generated page by path. Panics if not found.
pub fn find_page<'p, 'a>(pages: &'p [PageDescriptor<'a>], path: &str) -> &'p PageDescriptor<'a> {
    pages.iter().find(|p| p.path == path).unwrap_or_else(|| {
        let paths = page_paths(pages);
        panic!("page '{path}' not found. Available: {paths:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All page paths in output order.
pub fn page_paths<'p>(pages: &'p [PageDescriptor]) -> Vec<&'p str> {
    pages.iter().map(|p| p.path.as_str()).collect()
}

/// Post ids on one page, in page order.
pub fn page_post_ids<'a>(page: &PageDescriptor<'a>) -> Vec<&'a str> {
    page.posts.iter().map(|&p| p.id.as_str()).collect()
}
