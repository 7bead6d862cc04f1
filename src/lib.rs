//! # i18n-category-gen
//!
//! Localized, paginated category listing pages for a static site.
//!
//! Given the site's categories (each holding its posts) and the configured
//! languages, the generator produces one page sequence per (category,
//! language) pair that has posts. Each page carries its URL path, its slice
//! of posts, prev/next links, and the category name, slug and language for
//! the template.
//!
//! # Pipeline
//!
//! ```text
//! SiteConfig ──resolve──▶ EffectiveConfig
//!
//! for category, for language:
//!     partition   posts of that language (untagged → default language)
//!     sort        native before placeholders, then order_by
//!     paginate    chunks of page_size, page 1 at the base path
//! ```
//!
//! Everything is a pure, synchronous function of its inputs. The host owns
//! the content model, template rendering and file writing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Site config keys, `config.toml` loading, resolution into [`config::EffectiveConfig`] |
//! | [`types`] | `Post`, `Category` and the output `PageDescriptor` |
//! | [`partition`] | Selects a category's posts for one language |
//! | [`order`] | `OrderBy` modes and the post comparator |
//! | [`collate`] | Locale-aware title comparison |
//! | [`paginate`] | Splits an ordered list into addressed pages |
//! | [`generate`] | Runs the above for every category × language |
//! | [`output`] | Text and JSON reports of a run |
//!
//! # Design Decisions
//!
//! ## Default Language Has No Prefix
//!
//! The first configured language is the site's default. Its listings live at
//! `/categories/<slug>/`; every other language is nested under its tag, as in
//! `/zh-TW/categories/<slug>/`. Existing single-language URLs therefore stay
//! valid when a second language is added.
//!
//! ## Placeholders Sort Last
//!
//! A post with `original_lang_url` set stands in for content written in
//! another language. Such posts always follow native posts in a listing,
//! whatever the order mode, so readers see content in their language first.
//!
//! ## Stable Ties
//!
//! Posts with equal dates (or titles) keep the order in which the category
//! lists them. There is no third sort key.
//!
//! # Example
//!
//! ```
//! use i18n_category_gen::config::{load_config_str, resolve};
//! use i18n_category_gen::generate::generate;
//! use i18n_category_gen::types::{Category, Post};
//!
//! let site = load_config_str(r#"language = ["en", "zh-TW"]"#).unwrap();
//! let categories = vec![Category {
//!     name: "Tech".into(),
//!     slug: "tech".into(),
//!     posts: vec![Post {
//!         id: "hello".into(),
//!         date: "2024-01-01T00:00:00Z".parse().unwrap(),
//!         title: "Hello".into(),
//!         language_tag: Some("zh-TW".into()),
//!         original_language_url: None,
//!     }],
//! }];
//!
//! let pages = generate(&categories, &resolve(&site));
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].path, "/zh-TW/categories/tech/");
//! ```

pub mod collate;
pub mod config;
pub mod generate;
pub mod order;
pub mod output;
pub mod paginate;
pub mod partition;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
