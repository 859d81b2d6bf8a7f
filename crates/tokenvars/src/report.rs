// ABOUTME: Renders converted variable blocks and validation issues for the terminal
// ABOUTME: Supports selector wrapping, section selection, issue trees and JSON output

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tokenvars_core::ValidationError;
use tokenvars_types::{ConvertedTokens, PathSegment, ValidationIssue};

use crate::cli::Section;
use crate::config::OutputConfig;

const INDENT: &str = "  ";

/// One of the three generated variable blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Base,
    Light,
    Dark,
}

impl Block {
    pub const ALL: [Block; 3] = [Block::Base, Block::Light, Block::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Block::Base => "theme",
            Block::Light => "light",
            Block::Dark => "dark",
        }
    }

    /// Field name in JSON output
    pub fn key(self) -> &'static str {
        match self {
            Block::Base => "base_map",
            Block::Light => "light_map",
            Block::Dark => "dark_map",
        }
    }

    pub fn content(self, tokens: &ConvertedTokens) -> &str {
        match self {
            Block::Base => &tokens.base_map,
            Block::Light => &tokens.light_map,
            Block::Dark => &tokens.dark_map,
        }
    }
}

/// Renders the blocks a section selects, optionally wrapped in selectors
#[derive(Debug, Clone)]
pub struct Report<'a> {
    config: &'a OutputConfig,
    section: Section,
    wrap: bool,
}

impl<'a> Report<'a> {
    /// `force_wrap` turns wrapping on regardless of the config
    pub fn new(config: &'a OutputConfig, section: Section, force_wrap: bool) -> Self {
        Self {
            config,
            section,
            wrap: force_wrap || config.wrap_selectors,
        }
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    fn block_text(&self, block: Block, tokens: &ConvertedTokens) -> String {
        let content = block.content(tokens);
        if self.wrap {
            wrap_in_selector(self.config.selector(block), content)
        } else {
            content.to_string()
        }
    }

    /// Selected blocks separated by a blank line, with a trailing newline
    pub fn render_text(&self, tokens: &ConvertedTokens) -> String {
        let blocks: Vec<String> = self
            .section
            .blocks()
            .iter()
            .map(|block| self.block_text(*block, tokens))
            .collect();
        format!("{}\n", blocks.join("\n\n"))
    }

    /// Selected blocks as a JSON object keyed by block
    pub fn render_json(&self, tokens: &ConvertedTokens) -> Result<String> {
        let mut object = Map::new();
        for block in self.section.blocks() {
            object.insert(
                block.key().to_string(),
                Value::String(self.block_text(*block, tokens)),
            );
        }
        let mut text = serde_json::to_string_pretty(&Value::Object(object))
            .context("Failed to serialize converted tokens")?;
        text.push('\n');
        Ok(text)
    }
}

/// `selector {` + indented content + `}`
pub fn wrap_in_selector(selector: &str, content: &str) -> String {
    let body: Vec<String> = content
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect();
    format!("{selector} {{\n{}\n}}", body.join("\n"))
}

/// Issues as an indented tree, shared path prefixes printed once.
///
/// Assumes issues arrive in document order, as the validator reports them.
pub fn render_issue_tree(error: &ValidationError) -> String {
    let mut lines = vec![error.to_string()];
    let mut printed: &[PathSegment] = &[];

    for issue in error.issues() {
        let Some((leaf, parents)) = issue.path.split_last() else {
            lines.push(issue.to_string());
            printed = &[];
            continue;
        };

        let shared = printed
            .iter()
            .zip(parents)
            .take_while(|(a, b)| a == b)
            .count();
        for (depth, segment) in parents.iter().enumerate().skip(shared) {
            lines.push(format!("{}{segment}", INDENT.repeat(depth)));
        }
        lines.push(format!(
            "{}{leaf}: {}",
            INDENT.repeat(parents.len()),
            issue.message
        ));
        printed = parents;
    }

    format!("{}\n", lines.join("\n"))
}

/// Issues as a pretty-printed JSON array
pub fn render_issues_json(issues: &[ValidationIssue]) -> Result<String> {
    let mut text =
        serde_json::to_string_pretty(issues).context("Failed to serialize validation issues")?;
    text.push('\n');
    Ok(text)
}
