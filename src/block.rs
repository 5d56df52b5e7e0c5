/// Opening and closing marker of a fenced code block
pub(crate) const FENCE: &str = "```";

/// Block-level kinds a run of markdown lines can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. The first matching rule wins; anything else is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if block.trim().is_empty() {
        return BlockType::Paragraph;
    }
    let lines: Vec<&str> = block.split('\n').collect();

    if is_heading(block) {
        BlockType::Heading
    } else if is_code(&lines) {
        BlockType::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockType::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// `#` to `######` followed by a space. Only the first 7 characters are
/// inspected, so seven or more hashes never make a heading.
fn is_heading(block: &str) -> bool {
    let head: String = block.chars().take(7).collect();
    let hashes = head.bytes().take_while(|&b| b == b'#').count();
    hashes > 0 && head[hashes..].starts_with(' ')
}

fn is_code(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) => first.starts_with(FENCE) && last.ends_with(FENCE),
        _ => false,
    }
}

/// Every non-blank line at index `i` must start with `{i + 1}. `
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .all(|(i, line)| list_numeral(line) == Some(i + 1))
}

/// The leading `<digits>` of a `<digits>. ` list line
pub(crate) fn list_numeral(line: &str) -> Option<usize> {
    let (numeral, _) = line.split_once(". ")?;
    if numeral.is_empty() || !numeral.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    numeral.parse().ok()
}
