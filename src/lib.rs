//! quire: a static site generator for numbered, book-style documentation
//!
//! Every page carries an index position in a hierarchical table of
//! contents, a title hierarchy, and a sequence token placing it in reading
//! order. Pages are composed from reusable regions (sidebar, prev/next
//! strips, subsections, footer, page navigation) by a pure page renderer
//! and serialized with Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod page;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main Quire application
#[derive(Clone)]
pub struct Quire {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Quire {
    /// Create a new Quire instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
