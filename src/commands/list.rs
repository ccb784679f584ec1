//! List site content

use anyhow::Result;

use crate::content::ContentStore;
use crate::page::section_number;
use crate::Quire;

/// Print all documents in reading order
pub fn run(app: &Quire) -> Result<()> {
    let store = ContentStore::load(&app.source_dir)?;

    for doc in store.outline() {
        let number = section_number(&doc.front.index);
        let title = doc.front.titles.last().unwrap_or("-");
        println!("{:<8} {:<32} {}", number, doc.route(), title);
    }

    println!("Total: {} documents", store.len());
    Ok(())
}
