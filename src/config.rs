//! Site configuration and its resolution into per-run settings.
//!
//! The generator reads a handful of keys from the host's site config:
//!
//! ```toml
//! language = ["en", "zh-TW"]   # or a single tag: language = "en"
//! per_page = 10                # global page size
//!
//! [i18n_category_generator]
//! enable = true
//! per_page = 10
//! order_by = "-date"           # -date | date | -title | title
//!
//! [category_generator]         # legacy block, only per_page is read
//! per_page = 10
//! ```
//!
//! ## Precedence
//!
//! [`resolve`] flattens these into an [`EffectiveConfig`]:
//!
//! - `page_size`: `i18n_category_generator.per_page` → `category_generator.per_page`
//!   → `per_page` → `10`
//! - `order_by`: `i18n_category_generator.order_by` → `-date`
//! - `enabled`: `i18n_category_generator.enable` → `true`
//! - `languages`: `language`, a scalar becoming a one-element list → `["en"]`
//!
//! The first language is the default language. Its pages have no language
//! prefix and posts without a tag belong to it.
//!
//! Unknown keys inside `[i18n_category_generator]` are rejected to catch typos.
//! The top level and `[category_generator]` are shared with other host
//! features, so unknown keys there are ignored.

use crate::order::OrderBy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Page size used when no config level sets one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Language used when the site config has none.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The subset of the host's site configuration this crate reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Configured languages, first one is the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageSetting>,
    /// Global page size shared by all listing generators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_category_generator: Option<I18nCategoryConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_generator: Option<CategoryGeneratorConfig>,
}

/// `language` may be written as one tag or as a list of tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageSetting {
    Single(String),
    Many(Vec<String>),
}

/// The `[i18n_category_generator]` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nCategoryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

/// The legacy `[category_generator]` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryGeneratorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
}

/// Ordered, never-empty list of language tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages(Vec<String>);

impl Languages {
    /// Build from a list of tags. An empty list falls back to [`DEFAULT_LANGUAGE`].
    pub fn new(tags: Vec<String>) -> Self {
        if tags.is_empty() {
            Self(vec![DEFAULT_LANGUAGE.to_string()])
        } else {
            Self(tags)
        }
    }

    /// The first configured language.
    pub fn default_language(&self) -> &str {
        &self.0[0]
    }

    pub fn is_default(&self, tag: &str) -> bool {
        self.default_language() == tag
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: the list is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<LanguageSetting> for Languages {
    fn from(setting: LanguageSetting) -> Self {
        match setting {
            LanguageSetting::Single(tag) => Self::new(vec![tag]),
            LanguageSetting::Many(tags) => Self::new(tags),
        }
    }
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub enabled: bool,
    /// Posts per page. `0` puts every post of a group on a single page.
    pub page_size: usize,
    pub order_by: OrderBy,
    pub languages: Languages,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        resolve(&SiteConfig::default())
    }
}

/// Flatten the site config into the settings the generator runs with.
pub fn resolve(site: &SiteConfig) -> EffectiveConfig {
    let feature = site.i18n_category_generator.as_ref();

    let page_size = feature
        .and_then(|f| f.per_page)
        .or_else(|| site.category_generator.as_ref().and_then(|c| c.per_page))
        .or(site.per_page)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    EffectiveConfig {
        enabled: feature.and_then(|f| f.enable).unwrap_or(true),
        page_size,
        order_by: feature.and_then(|f| f.order_by).unwrap_or_default(),
        languages: site.language.clone().map(Languages::from).unwrap_or_default(),
    }
}

/// Parse site config from TOML text.
pub fn load_config_str(content: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load `config.toml` from the given directory.
///
/// A missing file yields the defaults; invalid TOML or a mistyped key in
/// `[i18n_category_generator]` is an error.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    load_config_str(&content)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
pub fn stock_config_toml() -> &'static str {
    r##"# Localized category pages
# ========================
# All settings are optional. Values shown below are the defaults.

# Site languages. The first one is the default language: its pages live at
# /categories/<slug>/ and posts without a `lang` belong to it. Every other
# language gets a prefix, e.g. /zh-TW/categories/<slug>/.
# A single tag may be written as a plain string: language = "en"
language = ["en"]

# Global page size, used when neither block below sets one.
per_page = 10

# ---------------------------------------------------------------------------
# Localized category generator
# ---------------------------------------------------------------------------
[i18n_category_generator]
# Set to false to skip generating category pages entirely.
enable = true

# Posts per page. 0 disables pagination.
per_page = 10

# Post order within a page sequence: -date | date | -title | title
# Unknown values fall back to -date. Translation placeholders
# (posts with original_lang_url) always come last.
order_by = "-date"

# ---------------------------------------------------------------------------
# Legacy category generator (only per_page is read)
# ---------------------------------------------------------------------------
# [category_generator]
# per_page = 10
"##
}
