//! Splitting a category's posts by language.
//!
//! Every post has exactly one effective language: its own tag, or the
//! site's default language when it has none. A post therefore lands in
//! exactly one group, and posts tagged with a language the site does not
//! configure end up in no generated page at all.

use crate::types::{Category, Post};

/// The language a post is listed under.
pub fn effective_language<'a>(post: &'a Post, default_language: &'a str) -> &'a str {
    post.language_tag.as_deref().unwrap_or(default_language)
}

/// Posts of `category` whose effective language is `language`, in category order.
pub fn partition<'a>(
    category: &'a Category,
    language: &str,
    default_language: &str,
) -> Vec<&'a Post> {
    category
        .posts
        .iter()
        .filter(|post| effective_language(post, default_language) == language)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::collections::HashSet;

    fn ids<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
        posts.iter().map(|&p| p.id.as_str()).collect()
    }

    #[test]
    fn untagged_post_uses_default_language() {
        let p = untagged("p1", "2024-01-01");
        assert_eq!(effective_language(&p, "en"), "en");
        assert_eq!(effective_language(&p, "ja"), "ja");
    }

    #[test]
    fn tagged_post_keeps_its_language() {
        let p = post("p1", "zh-TW", "2024-01-01");
        assert_eq!(effective_language(&p, "en"), "zh-TW");
    }

    #[test]
    fn filters_by_language() {
        let cat = category(
            "tech",
            vec![
                post("a", "en", "2024-01-01"),
                post("b", "zh-TW", "2024-01-02"),
                post("c", "en", "2024-01-03"),
            ],
        );
        assert_eq!(ids(&partition(&cat, "en", "en")), ["a", "c"]);
        assert_eq!(ids(&partition(&cat, "zh-TW", "en")), ["b"]);
    }

    #[test]
    fn untagged_posts_join_default_group_only() {
        let cat = category(
            "tech",
            vec![untagged("a", "2024-01-01"), post("b", "en", "2024-01-02")],
        );
        assert_eq!(ids(&partition(&cat, "en", "en")), ["a", "b"]);
        assert!(partition(&cat, "zh-TW", "en").is_empty());
    }

    #[test]
    fn untagged_posts_follow_a_non_english_default() {
        let cat = category(
            "tech",
            vec![untagged("a", "2024-01-01"), post("b", "en", "2024-01-02")],
        );
        assert_eq!(ids(&partition(&cat, "zh-TW", "zh-TW")), ["a"]);
        assert_eq!(ids(&partition(&cat, "en", "zh-TW")), ["b"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let cat = category("tech", vec![post("a", "en", "2024-01-01")]);
        assert!(partition(&cat, "fr", "en").is_empty());
        assert!(partition(&category("empty", vec![]), "en", "en").is_empty());
    }

    #[test]
    fn every_post_lands_in_exactly_one_group() {
        let languages = ["en", "zh-TW", "ja"];
        let cat = category(
            "mixed",
            vec![
                post("a", "en", "2024-01-01"),
                untagged("b", "2024-01-02"),
                post("c", "ja", "2024-01-03"),
                post("d", "zh-TW", "2024-01-04"),
                untagged("e", "2024-01-05"),
            ],
        );

        let mut seen = HashSet::new();
        let mut total = 0;
        for lang in languages {
            for p in partition(&cat, lang, languages[0]) {
                assert!(seen.insert(p.id.as_str()), "post {} in two groups", p.id);
                total += 1;
            }
        }
        assert_eq!(total, cat.posts.len());
    }

    #[test]
    fn post_count_for_matches_partition() {
        let cat = category(
            "tech",
            vec![
                untagged("a", "2024-01-01"),
                post("b", "en", "2024-01-02"),
                post("c", "de", "2024-01-03"),
            ],
        );
        assert_eq!(cat.post_count_for("en", "en"), 2);
        assert_eq!(cat.post_count_for("de", "en"), 1);
        assert_eq!(cat.post_count_for("fr", "en"), 0);
    }
}
