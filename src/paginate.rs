//! Splitting an ordered post list into addressed pages.
//!
//! ## Addressing
//!
//! Page 1 lives at the base path itself, later pages append the page format
//! with `%d` replaced by the page number:
//!
//! ```text
//! /categories/tech/          page 1
//! /categories/tech/page/2/   page 2
//! /categories/tech/page/3/   page 3
//! ```
//!
//! [`paginate`] is the general routine; [`build`] fixes the format and
//! layout used for category listings.

use crate::types::{PageData, PageDescriptor, Post};

/// Path format for pages after the first.
pub const PAGE_FORMAT: &str = "page/%d/";

/// Template hints attached to category listing pages.
pub const CATEGORY_LAYOUT: [&str; 3] = ["category", "archive", "index"];

/// Options for [`paginate`].
#[derive(Debug, Clone)]
pub struct PaginateOptions {
    /// Posts per page. `0` puts everything on a single page.
    pub per_page: usize,
    /// Appended to the base for pages after the first; `%d` is the page number.
    pub format: String,
    pub layout: Vec<String>,
    pub data: PageData,
}

/// Path of page `number` under `base`. `base` must end with `/`.
pub fn page_path(base: &str, format: &str, number: usize) -> String {
    if number <= 1 {
        base.to_string()
    } else {
        format!("{}{}", base, format.replace("%d", &number.to_string()))
    }
}

/// Split `posts` into consecutive pages in input order.
///
/// Empty input yields no pages. Every page but the last holds exactly
/// `per_page` posts.
pub fn paginate<'a>(
    base: &str,
    posts: &[&'a Post],
    options: &PaginateOptions,
) -> Vec<PageDescriptor<'a>> {
    if posts.is_empty() {
        return Vec::new();
    }

    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    let chunk_size = if options.per_page == 0 {
        posts.len()
    } else {
        options.per_page
    };
    let total = posts.len().div_ceil(chunk_size);
    let link = |n: usize| page_path(&base, &options.format, n);

    posts
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, chunk)| {
            let current = i + 1;
            let prev = (current > 1).then_some(current - 1);
            let next = (current < total).then_some(current + 1);
            PageDescriptor {
                path: link(current),
                current_url: link(current),
                base: base.clone(),
                page_number: current,
                total_pages: total,
                posts: chunk.to_vec(),
                prev,
                prev_link: prev.map(link),
                next,
                next_link: next.map(link),
                layout: options.layout.clone(),
                data: options.data.clone(),
            }
        })
        .collect()
}

/// Pages for one category listing: [`PAGE_FORMAT`] addressing, [`CATEGORY_LAYOUT`] hints.
pub fn build<'a>(
    path_prefix: &str,
    ordered_posts: &[&'a Post],
    page_size: usize,
    data: PageData,
) -> Vec<PageDescriptor<'a>> {
    let options = PaginateOptions {
        per_page: page_size,
        format: PAGE_FORMAT.to_string(),
        layout: CATEGORY_LAYOUT.iter().map(|s| s.to_string()).collect(),
        data,
    };
    paginate(path_prefix, ordered_posts, &options)
}
