//! Page source loading and section extraction.
//!
//! The landing copy ships inside the binary; a path argument substitutes
//! any other markdown file. Sections come from top-level ATX headings via
//! tree-sitter queries, so the nav always mirrors the document structure
//! rather than a separately maintained label list.

use crate::formats::Format;
use crate::section::{slugify, Section};
use std::collections::HashMap;
use std::path::Path;
use std::{fs, io};
use streaming_iterator::StreamingIterator;
use thiserror::Error;
use tree_sitter::{Parser, Query, QueryCursor};

/// Landing copy compiled into the binary, used when no path is given.
pub const EMBEDDED_PAGE: &str = include_str!("../content/landing.md");

#[derive(Debug, Error)]
/// Failures while turning a page source into sections.
pub enum PageError {
    /// The page file could not be read.
    #[error("failed to read page source: {0}")]
    Io(#[from] io::Error),
    /// The grammar or queries failed to load, or parsing produced no tree.
    #[error("failed to parse page source")]
    Parse,
    /// The source contains no top-level headings to navigate between.
    #[error("no sections found in page source")]
    NoSections,
}

/// Reads the page source from `path`, or returns the embedded copy.
///
/// # Errors
///
/// Returns [`PageError::Io`] if the file cannot be read.
pub fn load_page(path: Option<&Path>) -> Result<String, PageError> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => Ok(EMBEDDED_PAGE.to_string()),
    }
}

/// Extracts nav sections from top-level headings in `source`.
///
/// Each section spans from its heading row to the next top-level heading
/// (or the end of the page). Deeper headings stay inside their parent
/// section; the nav only lists the top level.
///
/// # Errors
///
/// Returns [`PageError::Parse`] if the grammar cannot be loaded and
/// [`PageError::NoSections`] if no top-level heading exists.
pub fn extract_sections(source: &str, format: &impl Format) -> Result<Vec<Section>, PageError> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language).map_err(|_| PageError::Parse)?;
    let tree = parser.parse(source, None).ok_or(PageError::Parse)?;

    let heading_query = Query::new(&language, format.section_query()).map_err(|_| PageError::Parse)?;
    let title_query = Query::new(&language, format.title_query()).map_err(|_| PageError::Parse)?;

    // Titles keyed by heading row, captured from the heading's inline node.
    let mut titles: HashMap<usize, String> = HashMap::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&title_query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            if let Ok(text) = node.utf8_text(source.as_bytes()) {
                titles.insert(node.start_position().row, text.trim().to_string());
            }
        }
    }

    let mut headings: Vec<(usize, usize)> = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&heading_query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            if let Some(level) = heading_level(node) {
                headings.push((node.start_position().row, level));
            }
        }
    }
    headings.sort_unstable();

    let total_rows = source.lines().count();
    let top_level: Vec<(usize, usize)> = headings
        .iter()
        .copied()
        .filter(|&(_, level)| level == 1)
        .collect();

    let mut sections = Vec::with_capacity(top_level.len());
    for (i, &(row, level)) in top_level.iter().enumerate() {
        let line_end = top_level
            .get(i + 1)
            .map_or(total_rows, |&(next_row, _)| next_row);
        let title = titles
            .get(&row)
            .cloned()
            .unwrap_or_else(|| format!("Section {}", i + 1));
        sections.push(Section {
            id: slugify(&title),
            title,
            level,
            line_start: row,
            line_end,
        });
    }

    if sections.is_empty() {
        return Err(PageError::NoSections);
    }
    Ok(sections)
}

/// Reads the heading depth from the ATX marker child ("#" count).
fn heading_level(heading: tree_sitter::Node) -> Option<usize> {
    let mut walker = heading.walk();
    for child in heading.children(&mut walker) {
        let kind = child.kind();
        if let Some(digits) = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
        {
            return digits.parse().ok();
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
