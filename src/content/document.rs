//! Document model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::FrontMatter;

/// A resolved content record: rendered body plus structured metadata.
///
/// Documents are produced once by the [`ContentStore`](super::ContentStore)
/// and are read-only inputs to page rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Structured metadata from the front-matter block
    pub front: FrontMatter,

    /// Raw markdown content
    pub raw: String,

    /// Rendered HTML body. Trusted downstream: it is inserted into pages
    /// verbatim.
    pub body: String,

    /// Source file path (relative to the source directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,
}

impl Document {
    /// The unique content route of this document
    pub fn route(&self) -> &str {
        &self.front.path
    }
}
