//! Text buffer implementation using rope data structure with
//! per-line highlight tracking

use ropey::Rope;
use std::fmt;
use tracing::trace;

use crate::surface::EditorSurface;

/// Text buffer that records which lines carry the active-line tag.
///
/// Uses a rope so large programs stay cheap to store and index by line.
#[derive(Clone)]
pub struct HighlightBuffer {
    rope: Rope,
    highlighted: Vec<usize>,
}

impl HighlightBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            highlighted: Vec::new(),
        }
    }

    /// Replace the entire buffer content, dropping all highlights
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.highlighted.clear();
    }

    /// Get a line of text
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            Some(self.rope.line(line_idx).to_string())
        } else {
            None
        }
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Check if a line currently carries the tag
    pub fn is_highlighted(&self, line: usize) -> bool {
        self.highlighted.contains(&line)
    }

    /// Lines currently tagged, in tag order
    pub fn highlighted_lines(&self) -> &[usize] {
        &self.highlighted
    }
}

impl EditorSurface for HighlightBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn set_line_highlight(&mut self, line: usize) {
        if !self.highlighted.contains(&line) {
            self.highlighted.push(line);
            trace!(line, "line highlight set");
        }
    }

    fn clear_line_highlight(&mut self, line: usize) {
        self.highlighted.retain(|&l| l != line);
    }

    fn clear_all_highlights(&mut self) {
        self.highlighted.clear();
    }
}

impl Default for HighlightBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for HighlightBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            highlighted: Vec::new(),
        }
    }
}

impl fmt::Display for HighlightBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}
