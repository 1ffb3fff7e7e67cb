//! Line-oriented block scanner
//!
//! A forward-only pass over the source lines. Each line (or run of lines)
//! is classified into exactly one top-level block; classification branches
//! are tried in a fixed priority order and there is no backtracking.
//! Paragraph and list-item text is handed to the inline scanner; heading,
//! blockquote, and fenced-code text is taken verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use upmark_core::Node;

use crate::inline::parse_inline;

/// Ordered-list marker: one or more digits followed by a dot. The numeric
/// value is ignored; ordinals are neither validated nor renumbered.
static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.").expect("valid ordered-list pattern"));

/// Parse Markdown source into an AST rooted at [`Node::Document`].
///
/// The source is trimmed at the document boundary only, then split on
/// newlines; individual lines are trimmed per branch as the grammar
/// requires. Fenced-code bodies are the one place raw lines survive.
pub fn parse(source: &str) -> Node {
    let lines: Vec<&str> = source.trim().split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            blocks.push(Node::LineBreak);
            i += 1;
            continue;
        }

        if let Some(heading) = scan_heading(line) {
            blocks.push(heading);
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix('>') {
            // One node per line; consecutive quote lines stay siblings.
            blocks.push(Node::BlockQuote(rest.trim().to_string()));
            i += 1;
            continue;
        }

        if is_fence_opener(line) {
            let (block, next) = scan_fenced_code(line, &lines, i);
            blocks.push(block);
            i = next;
            continue;
        }

        if line.starts_with("![") {
            blocks.push(scan_image(line));
            i += 1;
            continue;
        }

        if ORDERED_MARKER.is_match(line) {
            let (block, next) = scan_list(&lines, i, true);
            blocks.push(block);
            i = next;
            continue;
        }

        if strip_bullet_marker(line).is_some() {
            let (block, next) = scan_list(&lines, i, false);
            blocks.push(block);
            i = next;
            continue;
        }

        blocks.push(Node::Paragraph(parse_inline(line)));
        i += 1;
    }
    Node::Document(blocks)
}

/// Match `#`-prefixed headings, longest marker first so `###` is never
/// read as `##` plus a leftover `#`.
fn scan_heading(line: &str) -> Option<Node> {
    for level in (1..=6).rev() {
        if let Some(rest) = line.strip_prefix(&"######"[..level]) {
            return Some(Node::Heading {
                level: level as u8,
                text: rest.trim().to_string(),
            });
        }
    }
    None
}

/// A fence opener starts with ``` and has no second ``` later in the same
/// line; `` ```abc``` `` is inline code and belongs to the paragraph branch.
fn is_fence_opener(line: &str) -> bool {
    line.starts_with("```") && !line[3..].contains("```")
}

/// Consume a fenced code block starting at line `i` (the opener). Body
/// lines are kept raw and joined with `\n`; the closer line is consumed but
/// excluded. An unterminated fence runs to the end of the document.
fn scan_fenced_code(opener: &str, lines: &[&str], mut i: usize) -> (Node, usize) {
    let language = opener[3..].trim().to_string();
    i += 1;
    let mut body = Vec::new();
    while i < lines.len() {
        if lines[i].starts_with("```") {
            i += 1;
            break;
        }
        body.push(lines[i]);
        i += 1;
    }
    (
        Node::CodeBlock {
            code: body.join("\n"),
            language,
        },
        i,
    )
}

/// Block-level image, entered on a line starting with `![`.
///
/// When `]` is not immediately followed by `(`, the URL is empty and the
/// rest of the line is dropped, not reprocessed as inline content.
fn scan_image(line: &str) -> Node {
    let Some(pos) = line[2..].find(']') else {
        return Node::Image {
            alt: line[2..].trim().to_string(),
            src: String::new(),
        };
    };
    let idx = pos + 2;
    let alt = line[2..idx].trim().to_string();
    let after = &line[idx + 1..];
    if !after.starts_with('(') {
        return Node::Image {
            alt,
            src: String::new(),
        };
    }
    let rest = &after[1..];
    let src = match rest.find(')') {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    };
    Node::Image {
        alt,
        src: src.to_string(),
    }
}

/// Group a maximal run of matching list lines into one list node, one
/// `ListItem` of inline nodes per line. Stops at the first line that does
/// not match; lists do not nest and a gap ends the group.
fn scan_list(lines: &[&str], mut i: usize, ordered: bool) -> (Node, usize) {
    let mut items = Vec::new();
    while i < lines.len() {
        let line = lines[i].trim();
        let rest = if ordered {
            strip_ordered_marker(line)
        } else {
            strip_bullet_marker(line)
        };
        let Some(rest) = rest else { break };
        items.push(Node::ListItem(parse_inline(rest)));
        i += 1;
    }
    let list = if ordered {
        Node::OrderedList(items)
    } else {
        Node::UnorderedList(items)
    };
    (list, i)
}

fn strip_ordered_marker(line: &str) -> Option<&str> {
    let m = ORDERED_MARKER.find(line)?;
    Some(line[m.end()..].trim())
}

fn strip_bullet_marker(line: &str) -> Option<&str> {
    ["* ", "+ ", "- "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}
