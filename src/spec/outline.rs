//! Building the indented outline of a collected suite.
//!
//! Tests arrive as a flat list, each with the chain of groups it lives in.
//! Walking that list while keeping the currently open chain on a stack gives
//! the points where a group is entered, and only those produce a block:
//!
//! ```text
//! parser                     <- entered by parser::number
//!     Parsing of literals.
//!     number                 <- the test itself, one level deeper
//!         Parses numbers.
//!     string                 <- parser is still open, only the test is new
//! lexer                      <- parser was closed, lexer entered
//!     ...
//! ```
//!
//! A name is written at most once per outline. A group that shows up again
//! after it was closed (because its tests were not contiguous) is not
//! repeated, and its later children end up under whichever block precedes
//! them.

use std::{collections::HashSet, fmt};

use log::{debug, trace};

use crate::spec::{ChainNode, CollectedItem};

/// Name of the synthetic node wrapping parametrized instances, never written.
pub const INSTANCE_MARKER: &str = "()";

/// One level of indentation.
pub const INDENT: &str = "    ";

/// One entry of the outline: a name line followed by its documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutlineBlock {
    depth: usize,
    name: String,
    docs: Vec<String>,
}

impl OutlineBlock {
    /// A block without documentation, `depth` levels deep (0 is top level).
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
            docs: Vec::new(),
        }
    }

    /// Attach documentation.
    ///
    /// Surrounding whitespace of the whole text and of every line is removed.
    pub fn with_docs(self, docs: &str) -> Self {
        Self {
            docs: split_lines(docs.trim())
                .map(|line| line.trim().to_string())
                .collect(),
            ..self
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn docs(&self) -> &[String] {
        &self.docs
    }

    pub fn indent(&self) -> String {
        INDENT.repeat(self.depth)
    }
}

impl fmt::Display for OutlineBlock {
    /// Every line, including the last, ends with a line break.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.indent();
        writeln!(f, "{indent}{}", self.name)?;
        for line in &self.docs {
            writeln!(f, "{indent}{INDENT}{line}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outline {
    /// The blocks in the order their nodes were first entered.
    pub blocks: Vec<OutlineBlock>,

    /// Every name that produced a block.
    pub seen: HashSet<String>,
}

impl Outline {
    /// Build the outline of collected items, in collection order.
    pub fn from_items<'i, 't: 'i>(items: impl IntoIterator<Item = &'i CollectedItem<'t>>) -> Self {
        build_outline(items.into_iter().map(CollectedItem::chain))
    }

    /// All blocks concatenated.
    pub fn render(&self) -> String {
        self.blocks.iter().map(ToString::to_string).collect()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'..='\x0c'
            | '\x1c'..='\x1e'
            | '\u{85}'
            | '\u{2028}'..='\u{2029}'
    )
}

/// Split on every line break, `\r\n` counts as one.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = (!text.is_empty()).then_some(text);
    std::iter::from_fn(move || {
        let text = rest?;
        let Some(at) = text.find(is_line_break) else {
            rest = None;
            return Some(text);
        };
        let after = match text[at..].starts_with("\r\n") {
            true => at + 2,
            false => at + text[at..].chars().next().map_or(1, char::len_utf8),
        };
        rest = (after < text.len()).then(|| &text[after..]);
        Some(&text[..at])
    })
}

fn is_prefix(stack: &[ChainNode<'_>], chain: &[ChainNode<'_>]) -> bool {
    stack.len() <= chain.len()
        && stack
            .iter()
            .zip(chain)
            .all(|(open, node)| open.same_node(node))
}

/// Build an outline from ancestor chains, see the [module docs](self).
///
/// Every chain runs from the outermost group down to the test itself. An
/// empty chain contributes nothing.
pub fn build_outline<'t, C>(chains: impl IntoIterator<Item = C>) -> Outline
where
    C: IntoIterator<Item = ChainNode<'t>>,
{
    let mut stack: Vec<ChainNode<'t>> = Vec::new();
    let mut outline = Outline::default();

    for chain in chains {
        let chain: Vec<_> = chain.into_iter().collect();
        while !is_prefix(&stack, &chain) {
            stack.pop();
        }

        let retained = stack.len();
        for node in &chain[retained..] {
            // Pushed even when skipped, deeper nodes keep their depth.
            stack.push(*node);

            if node.name == INSTANCE_MARKER {
                trace!("skipping instance marker at depth {}", stack.len());
                continue;
            }

            if outline.seen.contains(node.name) {
                debug!("{:?} is already part of the spec, skipping", node.name);
                continue;
            }

            let mut block = OutlineBlock::new(stack.len() - 1, node.name);
            if let Some(docs) = node.docs {
                block = block.with_docs(docs);
            }
            outline.seen.insert(node.name.to_string());
            outline.blocks.push(block);
        }
    }

    outline
}
