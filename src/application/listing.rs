//! Rendering chains and single nodes as text lines.

use std::fmt::Display;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{ChainArena, DomainResult, NodeId};

/// Text wrapped around a rendered chain: `prefix`, then every value followed by
/// `separator`, then `suffix`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Delimiters {
    pub prefix: String,
    pub separator: String,
    pub suffix: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            prefix: "<".into(),
            separator: ",".into(),
            suffix: ">".into(),
        }
    }
}

/// Renders the chain starting at `head` without a trailing newline.
///
/// The separator follows every value, including the last one: `<10,20,>`.
/// An empty chain renders as prefix immediately followed by suffix.
#[instrument(level = "debug", skip(arena))]
pub fn render_list<T: Display>(
    arena: &ChainArena<T>,
    head: Option<NodeId>,
    delimiters: &Delimiters,
) -> DomainResult<String> {
    if let Some(id) = head {
        arena.require(id)?;
    }

    let mut line = delimiters.prefix.clone();
    for (_, node) in arena.successors(head) {
        line.push_str(&node.to_string());
        line.push_str(&delimiters.separator);
    }
    line.push_str(&delimiters.suffix);
    Ok(line)
}

/// Writes the rendered chain as one line to `out`.
pub fn write_list<T: Display, W: Write>(
    out: &mut W,
    arena: &ChainArena<T>,
    head: Option<NodeId>,
    delimiters: &Delimiters,
) -> ApplicationResult<()> {
    let line = render_list(arena, head, delimiters)?;
    writeln!(out, "{}", line).io_context("write list")
}

/// Prints the chain to stdout with the default `<`, `,`, `>` delimiters.
pub fn print_list<T: Display>(arena: &ChainArena<T>, head: Option<NodeId>) -> ApplicationResult<()> {
    write_list(&mut io::stdout().lock(), arena, head, &Delimiters::default())
}

/// Writes a single node's display string as one line to `out`.
pub fn write_node<T: Display, W: Write>(
    out: &mut W,
    arena: &ChainArena<T>,
    id: NodeId,
) -> ApplicationResult<()> {
    let node = arena.require(id)?;
    writeln!(out, "{}", node).io_context("write node")
}

/// Prints a single node's display string to stdout.
pub fn print_node<T: Display>(arena: &ChainArena<T>, id: NodeId) -> ApplicationResult<()> {
    write_node(&mut io::stdout().lock(), arena, id)
}
