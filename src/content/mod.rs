//! Content module - documents, front-matter, and content queries

mod document;
mod frontmatter;
mod markdown;
mod store;

pub use document::Document;
pub use frontmatter::{FrontMatter, TitleInfo};
pub use markdown::MarkdownRenderer;
pub use store::{ContentStore, Neighbors};
