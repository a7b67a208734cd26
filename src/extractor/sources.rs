//! Candidate sources for each preview field.
//!
//! A field is an ordered chain of pure source functions; evaluation walks
//! the chain and stops at the first source that yields a non-empty value.
//! Empty or whitespace-only values count as "not found" so the chain keeps
//! going.

use scraper::{Html, Selector};

pub type Source = fn(&Html) -> Option<String>;

pub const TITLE_CHAIN: &[Source] = &[title_tag, og_title, twitter_title, first_h1, first_h2];

pub const DESCRIPTION_CHAIN: &[Source] = &[meta_description, og_description, twitter_description];

pub const IMAGE_CHAIN: &[Source] = &[og_image, twitter_image];

/// Walk a chain and return the first non-empty value, or `None` when every
/// source comes up empty.
pub fn first_non_empty(document: &Html, chain: &[Source]) -> Option<String> {
    chain.iter().find_map(|source| source(document))
}

fn title_tag(document: &Html) -> Option<String> {
    element_text(document, "head title")
}

fn og_title(document: &Html) -> Option<String> {
    meta_property(document, "og:title")
}

fn twitter_title(document: &Html) -> Option<String> {
    meta_name(document, "twitter:title")
}

fn first_h1(document: &Html) -> Option<String> {
    element_text(document, "h1")
}

fn first_h2(document: &Html) -> Option<String> {
    element_text(document, "h2")
}

fn meta_description(document: &Html) -> Option<String> {
    meta_name(document, "description")
}

fn og_description(document: &Html) -> Option<String> {
    meta_property(document, "og:description")
}

fn twitter_description(document: &Html) -> Option<String> {
    meta_name(document, "twitter:description")
}

fn og_image(document: &Html) -> Option<String> {
    meta_property(document, "og:image")
}

fn twitter_image(document: &Html) -> Option<String> {
    meta_name(document, "twitter:image")
}

fn meta_property(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn meta_name(document: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[name="{name}"]"#)).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
