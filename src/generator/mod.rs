//! Generator module - composes pages and writes static HTML files
//!
//! The generator is the host pipeline sitting behind the pure page
//! renderer: it resolves the keys carried by each visual region (index
//! arrays, sequence tokens, routes) into concrete links using the content
//! store, then serializes the page through the embedded Tera theme.

use anyhow::Result;
use std::fs;

use crate::content::{ContentStore, Document};
use crate::helpers::page_url;
use crate::page::{section_number, PageOutput, PageRenderer, Region};
use crate::templates::{NavLink, PageData, SidebarItem, SiteData, TemplateRenderer};
use crate::Quire;
use tera::Context;
use walkdir::WalkDir;

/// Region keys collected from a composed page tree
#[derive(Debug, Default)]
struct RegionKeys {
    sidebar_index: Vec<u32>,
    subsections_index: Vec<u32>,
    sequence: Option<String>,
    navi_path: String,
    body: String,
}

impl RegionKeys {
    fn from_tree(tree: &Region) -> Self {
        let mut keys = RegionKeys::default();
        keys.visit(tree);
        keys
    }

    fn visit(&mut self, region: &Region) {
        match region {
            Region::Sidebar { index } => self.sidebar_index = index.clone(),
            Region::PrevNext { sequence } => self.sequence = sequence.clone(),
            Region::Body { html } => self.body = html.clone(),
            Region::Subsections { index } => self.subsections_index = index.clone(),
            Region::Footer => {}
            Region::PageNavi { path } => self.navi_path = path.clone(),
            Region::Container { children, .. } => {
                for child in children {
                    self.visit(child);
                }
            }
        }
    }
}

/// Static site generator using the embedded Tera theme
pub struct Generator {
    app: Quire,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &Quire) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            app: app.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, store: &ContentStore) -> Result<()> {
        fs::create_dir_all(&self.app.public_dir)?;

        for doc in store.outline() {
            let html = self.render_page(doc, store)?;

            let clean_path = doc.route().trim_matches('/');
            let output_path = if clean_path.is_empty() {
                self.app.public_dir.join("index.html")
            } else {
                self.app.public_dir.join(clean_path).join("index.html")
            };

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
            }
            fs::write(&output_path, &html)
                .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
            tracing::debug!("Generated page: {:?}", output_path);
        }

        self.copy_source_assets()?;

        tracing::info!("Generated {} pages", store.len());
        Ok(())
    }

    /// Render a single document to HTML
    pub fn render_page(&self, doc: &Document, store: &ContentStore) -> Result<String> {
        let output = PageRenderer::render(doc, &self.app.config);
        let context = self.build_context(doc, &output, store);
        self.renderer.render("layout.html", &context)
    }

    /// Resolve region keys against the store and fill the template context
    fn build_context(&self, doc: &Document, output: &PageOutput, store: &ContentStore) -> Context {
        let config = &self.app.config;
        let keys = RegionKeys::from_tree(&output.tree);

        let mut context = Context::new();
        context.insert(
            "site",
            &SiteData {
                title: config.title.clone(),
                description: config.description.clone(),
                author: config.author.clone(),
                language: config.language.clone(),
                root: config.root.clone(),
            },
        );
        context.insert(
            "page",
            &PageData {
                title: output.title.clone(),
                body: keys.body.clone(),
                path: keys.navi_path.clone(),
                index: keys.subsections_index.clone(),
            },
        );

        context.insert("sidebar", &self.build_sidebar(doc, store));

        let neighbors = store.neighbors(keys.sequence.as_deref());
        context.insert("prev", &neighbors.prev.map(|d| self.nav_link(d)));
        context.insert("next", &neighbors.next.map(|d| self.nav_link(d)));

        let subsections: Vec<NavLink> = store
            .subsections_of(&keys.subsections_index)
            .into_iter()
            .map(|d| self.nav_link(d))
            .collect();
        context.insert("subsections", &subsections);

        context.insert("page_navi", &self.build_page_navi(&keys, store));

        context.insert(
            "current_year",
            &chrono::Utc::now().format("%Y").to_string(),
        );

        context
    }

    /// Sidebar entries: the contents page first, then every numbered
    /// section in reading order
    fn build_sidebar(&self, current: &Document, store: &ContentStore) -> Vec<SidebarItem> {
        let mut items = Vec::new();

        if let Some(contents) = store.resolve(&self.app.config.contents_path) {
            items.push(SidebarItem {
                link: self.nav_link(contents),
                depth: 0,
                current: contents.route() == current.route(),
            });
        }

        for doc in store.outline() {
            if doc.front.index.is_empty() {
                continue;
            }
            items.push(SidebarItem {
                link: self.nav_link(doc),
                depth: doc.front.index.len(),
                current: doc.route() == current.route(),
            });
        }

        items
    }

    /// Quick page navigation: contents page, then the parent section
    fn build_page_navi(&self, keys: &RegionKeys, store: &ContentStore) -> Vec<NavLink> {
        let mut links = Vec::new();

        if let Some(contents) = store.resolve(&self.app.config.contents_path) {
            if contents.route() != keys.navi_path {
                links.push(self.nav_link(contents));
            }
        }

        if keys.subsections_index.len() >= 2 {
            let parent_index = &keys.subsections_index[..keys.subsections_index.len() - 1];
            if let Some(parent) = store
                .outline()
                .into_iter()
                .find(|d| d.front.index == parent_index)
            {
                links.push(self.nav_link(parent));
            }
        }

        links
    }

    /// Link to a document: numbered label plus its pretty URL
    fn nav_link(&self, doc: &Document) -> NavLink {
        let label = match doc.front.titles.last() {
            Some(title) if doc.front.index.is_empty() => title.to_string(),
            Some(title) => format!("{} {}", section_number(&doc.front.index), title),
            None => doc.route().to_string(),
        };
        NavLink {
            label,
            url: page_url(&self.app.config, doc.route()),
        }
    }

    /// Copy non-markdown assets from the source tree to the public
    /// directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.app.source_dir;

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if matches!(ext, Some("md") | Some("markdown")) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let dest = self.app.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_doc(dir: &Path, name: &str, front: &str, body: &str) {
        let content = format!("---\n{}\n---\n\n{}\n", front, body);
        fs::write(dir.join(name), content).unwrap();
    }

    fn sample_site() -> (tempfile::TempDir, Quire, ContentStore) {
        let base = tempfile::tempdir().unwrap();
        fs::write(base.path().join("_config.yml"), "title: Docs\n").unwrap();

        let source = base.path().join("source");
        fs::create_dir_all(&source).unwrap();
        write_doc(
            &source,
            "contents.md",
            "path: /contents\nsequence: 0\ntitles: [Contents]",
            "# Contents",
        );
        write_doc(
            &source,
            "ch1.md",
            "path: /ch1\nindex: [1]\nsequence: 1\ntitles: [Book, Chapter 1]",
            "Chapter one.",
        );
        write_doc(
            &source,
            "ch1s1.md",
            "path: /ch1/s1\nindex: [1, 1]\nsequence: 2\ntitles: [Book, Chapter 1, First]",
            "Section 1.1",
        );
        fs::write(source.join("style.css"), "body {}\n").unwrap();

        let app = Quire::new(base.path()).unwrap();
        let store = ContentStore::load(&app.source_dir).unwrap();
        (base, app, store)
    }

    #[test]
    fn test_generate_writes_all_pages() {
        let (_base, app, store) = sample_site();
        let generator = Generator::new(&app).unwrap();
        generator.generate(&store).unwrap();

        assert!(app.public_dir.join("contents/index.html").exists());
        assert!(app.public_dir.join("ch1/index.html").exists());
        assert!(app.public_dir.join("ch1/s1/index.html").exists());
    }

    #[test]
    fn test_generated_page_carries_computed_title() {
        let (_base, app, store) = sample_site();
        let generator = Generator::new(&app).unwrap();
        generator.generate(&store).unwrap();

        let shallow = fs::read_to_string(app.public_dir.join("ch1/index.html")).unwrap();
        assert!(shallow.contains("<title>Docs | Chapter 1</title>"));

        let nested = fs::read_to_string(app.public_dir.join("ch1/s1/index.html")).unwrap();
        assert!(nested.contains("<title>Docs | 1.1 First</title>"));
    }

    #[test]
    fn test_generated_page_links_neighbors() {
        let (_base, app, store) = sample_site();
        let generator = Generator::new(&app).unwrap();

        let doc = store.resolve("/ch1").unwrap();
        let html = generator.render_page(doc, &store).unwrap();

        // Prev is the contents page, next is section 1.1; both strips
        // carry the links
        assert!(html.matches("href=\"/contents/\"").count() >= 2);
        assert!(html.contains("href=\"/ch1/s1/\""));
        assert!(html.contains("1.1 First"));
    }

    #[test]
    fn test_subsections_listed_on_parent_page() {
        let (_base, app, store) = sample_site();
        let generator = Generator::new(&app).unwrap();

        let doc = store.resolve("/ch1").unwrap();
        let html = generator.render_page(doc, &store).unwrap();
        assert!(html.contains("class=\"subsections\""));
        assert!(html.contains("1.1 First"));
    }

    #[test]
    fn test_contents_page_lists_top_sections() {
        let (_base, app, store) = sample_site();
        let generator = Generator::new(&app).unwrap();

        let doc = store.resolve("/contents").unwrap();
        let html = generator.render_page(doc, &store).unwrap();
        // Derived index is empty, so subsections are the top-level chapters
        assert!(html.contains("1 Chapter 1"));
        // No number segment on the contents page title
        assert!(html.contains("<title>Docs | Contents</title>"));
    }

    #[test]
    fn test_assets_are_copied() {
        let (_base, app, store) = sample_site();
        let generator = Generator::new(&app).unwrap();
        generator.generate(&store).unwrap();

        assert!(app.public_dir.join("style.css").exists());
    }
}
