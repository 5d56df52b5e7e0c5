use crate::block::{self, BlockType, FENCE};
use crate::html::HtmlNode;
use crate::inline::text_to_textnodes;

/// Lower a whole markdown document into a `div` holding one node per block
pub fn markdown_to_html_node(markdown: &str) -> HtmlNode {
    let children = block::markdown_to_blocks(markdown)
        .into_iter()
        .map(|block| block_to_html_node(block, block::block_to_block_type(block)))
        .collect();
    HtmlNode::parent("div", children)
}

/// Lower a single block of the given type
pub fn block_to_html_node(block: &str, block_type: BlockType) -> HtmlNode {
    match block_type {
        BlockType::Paragraph => paragraph(block),
        BlockType::Heading => heading(block),
        BlockType::Code => code(block),
        BlockType::Quote => quote(block),
        BlockType::UnorderedList => list("ul", block, |line| {
            line.strip_prefix("- ").unwrap_or(line)
        }),
        BlockType::OrderedList => list("ol", block, |line| match line.split_once(". ") {
            Some((_, rest)) if block::list_numeral(line).is_some() => rest,
            _ => line,
        }),
    }
}

/// Text of the first `# ` line, if any
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}

fn text_to_children(text: &str) -> Vec<HtmlNode> {
    text_to_textnodes(text)
        .iter()
        .map(|node| node.to_html_node())
        .collect()
}

fn paragraph(block: &str) -> HtmlNode {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    HtmlNode::parent("p", text_to_children(&text))
}

fn heading(block: &str) -> HtmlNode {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    let text = block.split_once(' ').map_or("", |(_, rest)| rest);
    HtmlNode::parent(format!("h{level}"), text_to_children(text))
}

fn code(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.split('\n').collect();
    let content = match lines.as_slice() {
        [only] => only
            .strip_prefix(FENCE)
            .and_then(|rest| rest.strip_suffix(FENCE))
            .unwrap_or_default()
            .to_string(),
        [_, inner @ .., last] if last.trim() == FENCE => {
            let mut content = inner.join("\n");
            content.push('\n');
            content
        }
        [_, inner @ .., last] => {
            let last = last.strip_suffix(FENCE).unwrap_or(*last);
            let mut body = inner.to_vec();
            body.push(last);
            body.join("\n")
        }
        [] => String::new(),
    };
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", content)])
}

fn quote(block: &str) -> HtmlNode {
    let text = block
        .split('\n')
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    HtmlNode::parent("blockquote", text_to_children(&text))
}

fn list(tag: &str, block: &str, strip_marker: impl Fn(&str) -> &str) -> HtmlNode {
    let items = block
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| HtmlNode::parent("li", text_to_children(strip_marker(line))))
        .collect();
    HtmlNode::parent(tag, items)
}
