use std::fs;

use crate::extractor::extract;
use crate::urls::parse_base;

#[test]
fn extracts_article_fixture() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");
    let base = parse_base("https://example.com/article").unwrap();

    let metadata = extract(&html, &base).unwrap();

    // <title> text outranks the og/twitter tags
    assert_eq!(metadata.title.as_deref(), Some("Sample Article - News Site"));
    assert_eq!(
        metadata.description.as_deref(),
        Some("A short summary of the sample article.")
    );
    // relative og:image resolved against the base origin
    assert_eq!(
        metadata.image.as_deref(),
        Some("https://example.com/images/sample.jpg")
    );
}

#[test]
fn title_tag_beats_og_title() {
    let html = r#"<html><head>
        <title>Page Title</title>
        <meta property="og:title" content="OG Title">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Page Title"));
}

#[test]
fn empty_title_tag_falls_through_to_og_title() {
    let html = r#"<html><head>
        <title></title>
        <meta property="og:title" content="OG Title">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("OG Title"));
}

#[test]
fn whitespace_title_counts_as_absent() {
    let html = r#"<html><head>
        <title>   </title>
        <meta name="twitter:title" content="Twitter Title">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Twitter Title"));
}

#[test]
fn title_falls_back_to_first_h1() {
    let html = r#"<html><body><h1>World</h1><h1>Second</h1></body></html>"#;
    let base = parse_base("https://example.com:8080/x").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("World"));
}

#[test]
fn title_falls_back_to_first_h2() {
    let html = r#"<html><body><p>intro</p><h2>Section Heading</h2></body></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Section Heading"));
}

#[test]
fn missing_title_chain_yields_none() {
    let html = r#"<html><body><p>Just a paragraph.</p></body></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert!(metadata.title.is_none());
}

#[test]
fn description_prefers_meta_name() {
    let html = r#"<html><head>
        <meta name="description" content="Plain description">
        <meta property="og:description" content="OG description">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.description.as_deref(), Some("Plain description"));
}

#[test]
fn description_falls_back_to_twitter() {
    let html = r#"<html><head>
        <meta name="twitter:description" content="Twitter description">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.description.as_deref(), Some("Twitter description"));
}

#[test]
fn relative_og_image_is_resolved() {
    let html = r#"<html><head>
        <meta property="og:image" content="/img/a.png">
    </head></html>"#;
    let base = parse_base("https://example.com/article").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.image.as_deref(), Some("https://example.com/img/a.png"));
}

#[test]
fn absolute_og_image_passes_through() {
    let html = r#"<html><head>
        <meta property="og:image" content="https://cdn.example.com/x.png">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.image.as_deref(), Some("https://cdn.example.com/x.png"));
}

#[test]
fn image_falls_back_to_twitter() {
    let html = r#"<html><head>
        <meta name="twitter:image" content="pics/card.png">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.image.as_deref(), Some("https://example.com/pics/card.png"));
}

#[test]
fn only_first_og_image_is_consulted() {
    let html = r#"<html><head>
        <meta property="og:image" content="/first.png">
        <meta property="og:image" content="/second.png">
    </head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.image.as_deref(), Some("https://example.com/first.png"));
}

#[test]
fn missing_image_stays_absent() {
    let html = r#"<html><head><title>No image here</title></head></html>"#;
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert!(metadata.image.is_none());
}

#[test]
fn malformed_html_is_tolerated() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract(html, &base).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Broken"));
}

#[test]
fn empty_document_yields_all_absent() {
    let base = parse_base("https://example.com").unwrap();

    let metadata = extract("", &base).unwrap();
    assert!(metadata.title.is_none());
    assert!(metadata.description.is_none());
    assert!(metadata.image.is_none());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn extract_never_panics(html in ".*") {
            let base = parse_base("https://example.com").unwrap();
            // Errors are fine, panics are not
            let _ = extract(&html, &base);
        }

        #[test]
        fn present_image_is_absolute(path in "[a-z]{1,12}/[a-z]{1,12}\\.png") {
            let html = format!(
                r#"<html><head><meta property="og:image" content="{path}"></head></html>"#
            );
            let base = parse_base("https://example.com").unwrap();
            let metadata = extract(&html, &base).unwrap();
            let image = metadata.image.unwrap();
            prop_assert!(image.starts_with("https://example.com/"));
        }
    }
}
