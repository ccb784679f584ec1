//! Built-in theme templates using the Tera template engine
//!
//! The theme is embedded directly in the binary. It is the host rendering
//! pipeline for composed pages: it serializes the region tree that
//! [`PageRenderer`](crate::page::PageRenderer) produces, after the
//! generator has resolved region keys into concrete links.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Document bodies are pre-rendered trusted HTML, so autoescaping
        // stays off for the whole theme
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            (
                "partials/sidebar.html",
                include_str!("theme/partials/sidebar.html"),
            ),
            (
                "partials/prevnext.html",
                include_str!("theme/partials/prevnext.html"),
            ),
            (
                "partials/subsections.html",
                include_str!("theme/partials/subsections.html"),
            ),
            (
                "partials/footer.html",
                include_str!("theme/partials/footer.html"),
            ),
            (
                "partials/pagenavi.html",
                include_str!("theme/partials/pagenavi.html"),
            ),
        ])?;

        tera.register_filter("section_number", section_number_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: join an index array into a section number ("2.3")
fn section_number_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let index = tera::try_get_value!("section_number", "value", Vec<u32>, value);
    Ok(tera::Value::String(crate::page::section_number(&index)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub root: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    /// Computed document title (site title plus section title)
    pub title: String,
    /// Pre-rendered body markup, inserted verbatim
    pub body: String,
    /// Content route
    pub path: String,
    /// Derived index array (empty for the contents page)
    pub index: Vec<u32>,
}

/// A resolved navigation link
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: String,
    pub url: String,
}

/// A sidebar entry: a link plus its depth in the outline
#[derive(Debug, Clone, Serialize)]
pub struct SidebarItem {
    pub link: NavLink,
    pub depth: usize,
    /// Whether this entry is the page being rendered
    pub current: bool,
}
