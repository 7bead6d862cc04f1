//! Human-readable and JSON reports of generated category pages.
//!
//! # Output Format
//!
//! Pages are grouped into the (category, language) sequences they were
//! generated as, in generation order:
//!
//! ```text
//! Technology [en] → /categories/tech/ (12 posts, 2 pages)
//!     1/2 /categories/tech/ (10 posts)
//!     2/2 /categories/tech/page/2/ (2 posts)
//! Technology [zh-TW] → /zh-TW/categories/tech/ (1 post, 1 page)
//!     1/1 /zh-TW/categories/tech/ (1 post)
//!
//! Generated 3 pages for 1 category in 2 languages
//! ```
//!
//! # Architecture
//!
//! [`format_generate_output`] returns `Vec<String>` for testability and
//! [`print_generate_output`] writes it to stdout. Format functions are pure.

use crate::types::PageDescriptor;
use std::collections::BTreeSet;

/// `"1 post"` / `"3 posts"`.
fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line for one page sequence.
///
/// ```text
/// Technology [en] → /categories/tech/ (12 posts, 2 pages)
/// ```
fn sequence_header(first: &PageDescriptor, post_count: usize) -> String {
    format!(
        "{} [{}] → {} ({}, {})",
        first.data.category,
        first.data.lang,
        first.base,
        count(post_count, "post", "posts"),
        count(first.total_pages, "page", "pages"),
    )
}

/// Format a run report for a list of generated pages.
pub fn format_generate_output(pages: &[PageDescriptor]) -> Vec<String> {
    let mut lines = Vec::new();

    // Page 1 starts each sequence; the following total_pages - 1 entries belong to it.
    let mut rest = pages;
    while let Some(first) = rest.first() {
        let len = first.total_pages.clamp(1, rest.len());
        let (sequence, tail) = rest.split_at(len);
        let post_count = sequence.iter().map(|p| p.posts.len()).sum();

        lines.push(sequence_header(first, post_count));
        for page in sequence {
            lines.push(format!(
                "{}{}/{} {} ({})",
                indent(1),
                page.page_number,
                page.total_pages,
                page.path,
                count(page.posts.len(), "post", "posts"),
            ));
        }
        rest = tail;
    }

    let categories: BTreeSet<&str> = pages.iter().map(|p| p.data.slug.as_str()).collect();
    let languages: BTreeSet<&str> = pages.iter().map(|p| p.data.lang.as_str()).collect();

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Generated {} for {} in {}",
        count(pages.len(), "page", "pages"),
        count(categories.len(), "category", "categories"),
        count(languages.len(), "language", "languages"),
    ));
    lines
}

/// Print the run report to stdout.
pub fn print_generate_output(pages: &[PageDescriptor]) {
    for line in format_generate_output(pages) {
        println!("{}", line);
    }
}

/// Pretty JSON for the rendering layer.
pub fn to_json(pages: &[PageDescriptor]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(pages)
}
