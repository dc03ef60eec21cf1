//! Error types for loading a syntax tree.
//!
//! Trees come from an external parser, so everything here describes input
//! that cannot be trusted as-is: unreadable files, malformed JSON, and spans
//! that do not fit the source text.

use std::path::PathBuf;
use thiserror::Error;

/// An error that occurs while loading or validating a syntax tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A tree or source file could not be read from disk.
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tree file is not valid JSON or does not match the expected shape.
    #[error("Invalid syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree file does not say which source file it describes.
    #[error("Syntax tree '{}' has no \"file\" entry", .path.display())]
    MissingSource { path: PathBuf },

    /// A span starts after it ends.
    #[error("Span {start}..{end} is inverted")]
    InvertedSpan { start: usize, end: usize },

    /// A span reaches past the end of the source text.
    #[error("Span {start}..{end} is out of bounds for source of {len} bytes")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// A span splits a multi-byte character.
    #[error("Span {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: usize, end: usize },

    /// Attributes of one element are not in source order or overlap.
    #[error("Attribute at {start}..{end} of <{element}> overlaps or precedes the previous attribute")]
    UnorderedAttributes {
        element: String,
        start: usize,
        end: usize,
    },
}
