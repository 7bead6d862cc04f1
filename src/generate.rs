//! Category listing generation across languages.
//!
//! For every category and every configured language, in that nesting order,
//! the generator selects the posts of that language, sorts them and splits
//! them into pages. Output order follows the iteration order:
//!
//! ```text
//! tech  / en     /categories/tech/, /categories/tech/page/2/
//! tech  / zh-TW  /zh-TW/categories/tech/
//! life  / en     /categories/life/
//! ```
//!
//! A (category, language) pair with no posts produces nothing. The default
//! language's pages have no language prefix.
//!
//! Generation is a pure function of its inputs: no I/O and no shared state.

use crate::config::{self, EffectiveConfig, SiteConfig};
use crate::order;
use crate::paginate;
use crate::partition;
use crate::types::{Category, PageData, PageDescriptor};
use tracing::debug;

/// Listing pages for every (category, language) pair with posts.
pub fn generate<'a>(
    categories: &'a [Category],
    config: &EffectiveConfig,
) -> Vec<PageDescriptor<'a>> {
    if !config.enabled {
        debug!("category generation disabled");
        return Vec::new();
    }

    let default_language = config.languages.default_language();
    let mut pages = Vec::new();

    for category in categories {
        for language in config.languages.iter() {
            let mut posts = partition::partition(category, language, default_language);
            if posts.is_empty() {
                debug!(category = %category.slug, language, "no posts, skipping");
                continue;
            }
            order::sort_posts(&mut posts, config.order_by);

            let path = category_path(&category.slug, language, default_language);
            let data = PageData {
                category: category.name.clone(),
                slug: category.slug.clone(),
                lang: language.to_string(),
            };
            let sequence = paginate::build(&path, &posts, config.page_size, data);
            debug!(
                category = %category.slug,
                language,
                posts = posts.len(),
                pages = sequence.len(),
                path = %path,
                "generated category pages"
            );
            pages.extend(sequence);
        }
    }

    debug!(
        categories = categories.len(),
        languages = config.languages.len(),
        pages = pages.len(),
        "category generation complete"
    );
    pages
}

/// Resolve the site config, then [`generate`].
pub fn generate_for_site<'a>(
    categories: &'a [Category],
    site: &SiteConfig,
) -> Vec<PageDescriptor<'a>> {
    generate(categories, &config::resolve(site))
}

/// Base path of a category listing in `language`.
///
/// `/categories/<slug>/` for the default language, `/<language>/categories/<slug>/`
/// for the others.
pub fn category_path(slug: &str, language: &str, default_language: &str) -> String {
    if language == default_language {
        format!("/categories/{slug}/")
    } else {
        format!("/{language}/categories/{slug}/")
    }
}
