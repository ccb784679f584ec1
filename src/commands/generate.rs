//! Generate the static site

use anyhow::Result;

use crate::content::ContentStore;
use crate::generator::Generator;
use crate::Quire;

/// Load all content and generate the site
pub fn run(app: &Quire) -> Result<()> {
    let store = ContentStore::load(&app.source_dir)?;
    if store.is_empty() {
        tracing::warn!("No documents found in {:?}", app.source_dir);
    }

    let generator = Generator::new(app)?;
    generator.generate(&store)?;

    Ok(())
}
