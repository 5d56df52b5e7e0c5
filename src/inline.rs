//! Inline tokenizer.
//!
//! Text is split into styled runs by successive passes: `**` bold, `_`
//! italic, `` ` `` code, then images and links. Emphasis runs first so that
//! brackets inside styled text are never read as link syntax.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{TextNode, TextType};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Matches images too; callers reject matches preceded by `!`
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// A `[label](url)` occurrence inside a string
struct Found<'t> {
    start: usize,
    end: usize,
    label: &'t str,
    url: &'t str,
}

fn find_all<'t>(re: &Regex, text: &'t str) -> impl Iterator<Item = Found<'t>> {
    re.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(Found {
            start: whole.start(),
            end: whole.end(),
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    })
}

fn find_images(text: &str) -> Vec<Found<'_>> {
    find_all(&IMAGE_RE, text).collect()
}

fn find_links(text: &str) -> Vec<Found<'_>> {
    find_all(&LINK_RE, text)
        .filter(|found| !text[..found.start].ends_with('!'))
        .collect()
}

/// Return `(alt, url)` for every image in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|f| (f.label.to_string(), f.url.to_string()))
        .collect()
}

/// Return `(anchor, url)` for every link in `text`, excluding images
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|f| (f.label.to_string(), f.url.to_string()))
        .collect()
}

/// Split plain nodes on `delimiter`, styling every odd-indexed piece.
///
/// Delimiters are not checked for pairing: with an odd count, the text after
/// the last delimiter takes `text_type`.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &str,
    text_type: TextType,
) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.text_type != TextType::Text {
            out.push(node);
            continue;
        }
        for (i, piece) in node.text.split(delimiter).enumerate() {
            let piece_type = if i % 2 == 0 { TextType::Text } else { text_type };
            out.push(TextNode::new(piece, piece_type));
        }
    }
    out
}

pub fn split_nodes_image(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_found(nodes, TextType::Image, find_images)
}

pub fn split_nodes_link(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_found(nodes, TextType::Link, find_links)
}

/// Plain text around each match is kept only when non-empty
fn split_nodes_found(
    nodes: Vec<TextNode>,
    text_type: TextType,
    find: fn(&str) -> Vec<Found<'_>>,
) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.text_type != TextType::Text {
            out.push(node);
            continue;
        }
        let text = node.text.as_str();
        let mut last = 0;
        for found in find(text) {
            if found.start > last {
                out.push(TextNode::new(&text[last..found.start], TextType::Text));
            }
            out.push(TextNode::with_url(found.label, text_type, found.url));
            last = found.end;
        }
        if last < text.len() {
            out.push(TextNode::new(&text[last..], TextType::Text));
        }
    }
    out
}

/// Tokenize a line of markdown into styled text runs
pub fn text_to_textnodes(text: &str) -> Vec<TextNode> {
    let nodes = vec![TextNode::new(text, TextType::Text)];
    let nodes = split_nodes_delimiter(nodes, "**", TextType::Bold);
    let nodes = split_nodes_delimiter(nodes, "_", TextType::Italic);
    let nodes = split_nodes_delimiter(nodes, "`", TextType::Code);
    let nodes = split_nodes_image(nodes);
    split_nodes_link(nodes)
}
