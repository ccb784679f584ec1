//! Render a single page and print the composed output

use anyhow::{anyhow, Result};

use crate::content::ContentStore;
use crate::page::PageRenderer;
use crate::Quire;

/// Resolve one route and print its composed page as JSON.
///
/// This is the raw page renderer output (region tree plus title), before
/// the theme serializes it to HTML. Useful for host pipelines doing their
/// own layout.
pub fn run(app: &Quire, path: &str) -> Result<()> {
    let store = ContentStore::load(&app.source_dir)?;

    let doc = store
        .resolve(path)
        .ok_or_else(|| anyhow!("No document at route {:?}", path))?;

    let output = PageRenderer::render(doc, &app.config);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
