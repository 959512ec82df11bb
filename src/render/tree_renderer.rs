use std::io::{self, Write};

use colored::Colorize;
use snafu::{ResultExt, Snafu};

use crate::filesystem::Node;

const BRANCH_CONNECTOR: &str = "├───";
const LAST_CONNECTOR: &str = "└───";
/// Prefix fragment below a node that has more siblings after it
const CONTINUATION_FRAGMENT: &str = "│\t";
/// Prefix fragment below the last node of a level
const BLANK_FRAGMENT: &str = "\t";

/// Writes a built tree as indented text, one line per node.
///
/// Output is pre-order: a directory's line comes before all of its
/// descendants, and a subtree is finished before its next sibling starts.
pub struct TreeRenderer<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> TreeRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            colored: false,
        }
    }

    /// Paint directory labels when enabled.
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn render(&mut self, nodes: &[Node]) -> Result<(), RenderError> {
        let mut prefix = Vec::new();
        self.render_level(nodes, &mut prefix)?;
        self.out.flush().context(WriteSnafu)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_level(
        &mut self,
        nodes: &[Node],
        prefix: &mut Vec<&'static str>,
    ) -> Result<(), RenderError> {
        for (index, node) in nodes.iter().enumerate() {
            let is_last = index + 1 == nodes.len();
            self.write_line(prefix, node, is_last)?;

            if node.is_directory() {
                prefix.push(if is_last {
                    BLANK_FRAGMENT
                } else {
                    CONTINUATION_FRAGMENT
                });
                let result = self.render_level(node.children(), prefix);
                prefix.pop();
                result?;
            }
        }
        Ok(())
    }

    fn write_line(
        &mut self,
        prefix: &[&str],
        node: &Node,
        is_last: bool,
    ) -> Result<(), RenderError> {
        let connector = if is_last {
            LAST_CONNECTOR
        } else {
            BRANCH_CONNECTOR
        };
        let label = if self.colored && node.is_directory() {
            node.name().blue().bold().to_string()
        } else {
            node.to_string()
        };

        let line = format!("{}{connector}{label}\n", prefix.concat());
        self.out.write_all(line.as_bytes()).context(WriteSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("Failed to write tree output"))]
    WriteError { source: io::Error },
}
