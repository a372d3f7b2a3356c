// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Line oriented document model used by the backends
//!
//! ```text
//! <preamble fragments>
//!
//! statement;
//! header
//! {
//!     nested statement;
//! };
//! ```

use ahash::AHashSet;

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq)]
enum Line {
    Statement(String),
    Blank,
    Block(Block),
}

/// A sequence of statements and nested blocks.
///
/// The root block has no header and renders its children without braces or
/// indentation. Nested blocks are created with [`Block::nested`], which hands
/// the new block to a closure and appends it once the closure returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    header: Option<String>,
    children: Vec<Line>,
}

impl Block {
    /// Top level block without header or delimiters
    pub fn root() -> Self {
        Self::default()
    }

    fn with_header(header: String) -> Self {
        Self {
            header: Some(header),
            children: Vec::new(),
        }
    }

    /// Append `text;`
    pub fn statement(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        text.push(';');
        self.children.push(Line::Statement(text));
    }

    /// Append an empty separator line
    pub fn blank(&mut self) {
        self.children.push(Line::Blank);
    }

    /// Build a child block under `header` and append it to this block.
    ///
    /// If `fill` fails the child is dropped and nothing is appended.
    pub fn nested<E>(
        &mut self,
        header: impl Into<String>,
        fill: impl FnOnce(&mut Block) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut child = Block::with_header(header.into());
        fill(&mut child)?;
        self.children.push(Line::Block(child));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Render to lines, nested content indented by 4 spaces per level
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.write_lines(&mut out);
        out
    }

    fn write_lines(&self, out: &mut Vec<String>) {
        match &self.header {
            None => {
                for child in &self.children {
                    child.write_lines(out);
                }
            }
            Some(header) => {
                out.push(header.clone());
                out.push("{".to_string());
                let start = out.len();
                for child in &self.children {
                    child.write_lines(out);
                }
                for line in &mut out[start..] {
                    if !line.is_empty() {
                        line.insert_str(0, INDENT);
                    }
                }
                out.push("};".to_string());
            }
        }
    }
}

impl Line {
    fn write_lines(&self, out: &mut Vec<String>) {
        match self {
            Line::Statement(text) => out.push(text.clone()),
            Line::Blank => out.push(String::new()),
            Line::Block(block) => block.write_lines(out),
        }
    }
}

/// Definitions emitted once at the top of a document, keyed by name
#[derive(Debug, Clone, Default)]
pub struct Preamble {
    keys: AHashSet<String>,
    fragments: Vec<String>,
}

impl Preamble {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under `key`. Returns false if the key was already
    /// registered, in which case the first definition is kept.
    pub fn register(&mut self, key: &str, text: &str) -> bool {
        if self.keys.contains(key) {
            return false;
        }
        self.keys.insert(key.to_string());
        self.fragments.push(text.to_string());
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments in registration order
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

/// A complete output document: preamble followed by the body
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub preamble: Preamble,
    pub body: Block,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join everything with `\n`, without a trailing newline
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.preamble.fragments().to_vec();
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(self.body.lines());
        lines.join("\n")
    }
}
