//! Format trait and implementations for different page source types.
//!
//! This module defines the `Format` trait which abstracts over different
//! text formats the landing copy could be written in by providing
//! tree-sitter queries specific to each format. Only markdown is shipped;
//! the page content is markdown both embedded and on disk.

pub mod markdown;

/// Tree-sitter language and queries for locating sections in a page source.
pub trait Format {
    /// Grammar used to parse the page source.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing one node per section heading.
    fn section_query(&self) -> &str;
    /// Query capturing the heading's title text.
    fn title_query(&self) -> &str;
}
