//! Content store - loads documents and resolves content queries
//!
//! The store is the content-resolution step that page rendering consumes:
//! given a route it yields exactly one [`Document`], and it answers the
//! navigation queries (reading-order neighbors, subsections, outline) that
//! the generator uses to fill in page regions.

use anyhow::{bail, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{Document, FrontMatter, MarkdownRenderer};

/// Reading-order neighbors of a document
#[derive(Debug, Default)]
pub struct Neighbors<'a> {
    pub prev: Option<&'a Document>,
    pub next: Option<&'a Document>,
}

/// All documents of a site, indexed by route
pub struct ContentStore {
    /// Documents keyed by route, in scan order
    documents: IndexMap<String, Document>,
    /// Routes sorted into reading order (ascending index arrays)
    reading_order: Vec<String>,
}

impl ContentStore {
    /// Load all markdown documents under a source directory
    pub fn load<P: AsRef<Path>>(source_dir: P) -> Result<Self> {
        let source_dir = source_dir.as_ref();
        let renderer = MarkdownRenderer::new();
        let mut documents: IndexMap<String, Document> = IndexMap::new();

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let doc = match load_document(source_dir, path, &renderer) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!("Failed to load document {:?}: {}", path, e);
                    continue;
                }
            };

            if doc.front.path.is_empty() {
                tracing::warn!("Skipping {:?}: front-matter has no path", path);
                continue;
            }

            if let Some(existing) = documents.get(&doc.front.path) {
                bail!(
                    "Duplicate route {:?}: {:?} and {:?}",
                    doc.front.path,
                    existing.source,
                    doc.source
                );
            }
            documents.insert(doc.front.path.clone(), doc);
        }

        let mut reading_order: Vec<String> = documents.keys().cloned().collect();
        reading_order.sort_by(|a, b| {
            let da = &documents[a];
            let db = &documents[b];
            da.front
                .index
                .cmp(&db.front.index)
                .then_with(|| a.cmp(b))
        });

        tracing::info!("Loaded {} documents", documents.len());

        Ok(Self {
            documents,
            reading_order,
        })
    }

    /// Resolve a route to its single document
    pub fn resolve(&self, path: &str) -> Option<&Document> {
        self.documents.get(path)
    }

    /// All documents in reading order
    pub fn outline(&self) -> Vec<&Document> {
        self.reading_order
            .iter()
            .map(|route| &self.documents[route])
            .collect()
    }

    /// Previous and next documents of the document carrying the given
    /// sequence token. Tokens are opaque: they are only compared for
    /// identity, and neighbors come from reading order.
    pub fn neighbors(&self, sequence: Option<&str>) -> Neighbors<'_> {
        let Some(token) = sequence else {
            return Neighbors::default();
        };

        let pos = self
            .reading_order
            .iter()
            .position(|route| self.documents[route].front.sequence.as_deref() == Some(token));

        let Some(pos) = pos else {
            return Neighbors::default();
        };

        Neighbors {
            prev: pos
                .checked_sub(1)
                .map(|i| &self.documents[&self.reading_order[i]]),
            next: self
                .reading_order
                .get(pos + 1)
                .map(|route| &self.documents[route]),
        }
    }

    /// Direct subsections of a position in the numbering tree, in reading
    /// order. An empty index yields the top-level sections.
    pub fn subsections_of(&self, index: &[u32]) -> Vec<&Document> {
        self.reading_order
            .iter()
            .map(|route| &self.documents[route])
            .filter(|doc| {
                doc.front.index.len() == index.len() + 1 && doc.front.index.starts_with(index)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Load a single document from a file
fn load_document(source_dir: &Path, path: &Path, renderer: &MarkdownRenderer) -> Result<Document> {
    let content = fs::read_to_string(path)?;
    let (front, body_md) = FrontMatter::parse(&content)?;

    let source = path
        .strip_prefix(source_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();

    let body = renderer.render(body_md)?;

    Ok(Document {
        front,
        raw: body_md.to_string(),
        body,
        source,
        full_source: path.to_path_buf(),
    })
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
