//! Block splitting and classification

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    /// ATX heading with level 1-6
    Heading,
    /// Fenced code block
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks separated by blank lines.
///
/// Every block is trimmed; blocks that are empty after trimming are dropped.
pub fn split_into_blocks(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a block from its own text.
///
/// Rules are checked in priority order and the first match wins: heading,
/// code, quote, unordered list, ordered list, otherwise paragraph.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    if heading_level(block).is_some() {
        return BlockKind::Heading;
    }

    if lines.len() > 1
        && lines.first().is_some_and(|line| line.starts_with("```"))
        && lines.last().is_some_and(|line| line.starts_with("```"))
    {
        return BlockKind::Code;
    }

    if block.starts_with('>') && lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if block.starts_with("- ") && lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if block.starts_with("1. ")
        && lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&ordered_marker(i)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Level of an ATX heading: 1-6 `#` followed by a space
pub(crate) fn heading_level(block: &str) -> Option<usize> {
    let level = block.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&level) && block[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

/// Marker text (`"1. "`, `"2. "`, ...) expected on line `index` of an ordered list
pub(crate) fn ordered_marker(index: usize) -> String {
    format!("{}. ", index + 1)
}
