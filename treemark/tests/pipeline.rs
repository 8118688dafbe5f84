//! Markdown source all the way through ingestion and processing.

use treemark::{parse_markdown, process, ConfiguredRoutes, Node, ProcessOptions};

fn find_with_class<'a>(node: &'a Node, class: &str, out: &mut Vec<&'a Node>) {
    if node.attribute("class") == Some(class) {
        out.push(node);
    }
    for child in &node.children {
        find_with_class(child, class, out);
    }
}

#[test]
fn a_document_processes_end_to_end() {
    let source = "\
# Guide

Intro paragraph with a [link](/wiki/en/Some_Page).

## Install

![logo](/assets/logo.png \"The logo\")

## Install

- first
  - nested
";

    let mut root = parse_markdown(source);
    let output = process(
        &mut root,
        &ProcessOptions::default(),
        &ConfiguredRoutes::default(),
    )
    .unwrap();

    assert_eq!(output.title.as_deref(), Some("Guide"));

    let slugs: Vec<&str> = output.toc.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["install", "install.1"]);

    assert_eq!(output.first_image.as_deref(), Some("/assets/logo.png"));

    // The lone-image paragraph became a figure with its caption appended.
    let mut figures = Vec::new();
    find_with_class(&root, "md__figure-container", &mut figures);
    assert_eq!(figures.len(), 1);
    let caption = figures[0].children.last().unwrap();
    assert_eq!(caption.flatten_text(), "The logo");

    // The nested list item picked up the deep modifier.
    let mut deep_items = Vec::new();
    find_with_class(&root, "md__list-item md__list-item--deep", &mut deep_items);
    assert_eq!(deep_items.len(), 1);
    assert_eq!(deep_items[0].flatten_text(), "nested");

    // Ordinary blocks got their generic classes.
    let mut paragraphs = Vec::new();
    find_with_class(&root, "md__paragraph", &mut paragraphs);
    assert!(!paragraphs.is_empty());
    let mut links = Vec::new();
    find_with_class(&root, "md__link", &mut links);
    assert_eq!(links.len(), 1);
}

#[test]
fn wiki_documents_relativize_their_own_links() {
    let options = ProcessOptions {
        wiki_locale: Some("en".to_string()),
        relative_url_root: Some("/wiki/en/Client".to_string()),
        ..ProcessOptions::default()
    };

    let mut root = parse_markdown("[see also](/wiki/en/Other_Page)\n");
    process(&mut root, &options, &ConfiguredRoutes::default()).unwrap();

    let link = &root.children[0].children[0];
    assert_eq!(link.url(), Some("../Other_Page"));
}
