// src/input/parse.rs

//! Line parser for dependency instructions.

use anyhow::Context;
use regex::Regex;

use crate::errors::{Result, SimdagError};
use crate::types::TaskName;

const EDGE_PATTERN: &str = r"^Step (\S+) must be finished before step (\S+) can begin\.$";

/// One "must finish before" instruction read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub before: TaskName,
    pub after: TaskName,
    /// 1-based source line.
    pub line: usize,
}

/// Parses lines of the form
/// `Step C must be finished before step A can begin.`
#[derive(Debug, Clone)]
pub struct EdgeParser {
    pattern: Regex,
}

impl EdgeParser {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(EDGE_PATTERN).context("compiling edge pattern")?;
        Ok(Self { pattern })
    }

    /// Parse a single trimmed, non-empty line.
    pub fn parse_line(&self, line_no: usize, line: &str) -> Result<Edge> {
        let caps = self
            .pattern
            .captures(line)
            .ok_or_else(|| SimdagError::Parse {
                line: line_no,
                content: line.to_string(),
            })?;

        Ok(Edge {
            before: caps[1].to_string(),
            after: caps[2].to_string(),
            line: line_no,
        })
    }

    /// Parse every non-blank line of `text`, in order.
    pub fn parse(&self, text: &str) -> Result<Vec<Edge>> {
        text.lines()
            .enumerate()
            .map(|(idx, raw)| (idx + 1, raw.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_no, line)| self.parse_line(line_no, line))
            .collect()
    }
}

/// Convenience wrapper around [`EdgeParser::parse`].
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    EdgeParser::new()?.parse(text)
}
