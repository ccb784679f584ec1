//! Page composition
//!
//! [`PageRenderer`] binds one resolved [`Document`] plus the site
//! configuration into a [`PageOutput`]: a tree of visual regions and a
//! computed document title. It is a pure function of its inputs; resolving
//! the region keys (sidebar outline, neighbor links, subsection links)
//! against the content store is the generator's job.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Document;

/// Position of a document in the numbering hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePosition {
    /// The table-of-contents page (or any page without an index).
    /// Displays no hierarchical numbering.
    Root,
    /// A numbered section, e.g. [2, 3] = section 2.3
    Section(Vec<u32>),
}

impl PagePosition {
    /// Derive the position from front-matter. The contents route is always
    /// root, whatever its index says.
    pub fn of(doc: &Document, site: &SiteConfig) -> Self {
        if doc.front.path == site.contents_path || doc.front.index.is_empty() {
            PagePosition::Root
        } else {
            PagePosition::Section(doc.front.index.clone())
        }
    }

    /// The derived index array: empty for the root page
    pub fn index(&self) -> &[u32] {
        match self {
            PagePosition::Root => &[],
            PagePosition::Section(index) => index,
        }
    }
}

/// A visual region of a composed page.
///
/// Leaf regions carry only the key their renderer needs: the sidebar and
/// subsections list take an index array, the prev/next strip a sequence
/// token, the page navigation a route. Actual link resolution and HTML
/// serialization happen downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "region", rename_all = "snake_case")]
pub enum Region {
    Sidebar { index: Vec<u32> },
    PrevNext { sequence: Option<String> },
    Body { html: String },
    Subsections { index: Vec<u32> },
    Footer,
    PageNavi { path: String },
    Container { class: String, children: Vec<Region> },
}

impl Region {
    fn container(class: &str, children: Vec<Region>) -> Self {
        Region::Container {
            class: class.to_string(),
            children,
        }
    }
}

/// A composed page: the region tree plus the document title.
///
/// The title is out-of-band page metadata, not a node in the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOutput {
    pub title: String,
    pub tree: Region,
}

/// Join an index array into a section number, e.g. [2, 3] -> "2.3"
pub fn section_number(index: &[u32]) -> String {
    index
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Composes documents into pages
pub struct PageRenderer;

impl PageRenderer {
    /// Compose a page from a document and the site configuration.
    ///
    /// Pure and synchronous: the same inputs always yield the same output.
    pub fn render(doc: &Document, site: &SiteConfig) -> PageOutput {
        let position = PagePosition::of(doc, site);
        let title = Self::page_title(doc, site, &position);

        let index = position.index().to_vec();
        let sequence = doc.front.sequence.clone();

        let tree = Region::container(
            "layout",
            vec![
                Region::Sidebar {
                    index: index.clone(),
                },
                Region::container(
                    "main-content",
                    vec![
                        Region::PrevNext {
                            sequence: sequence.clone(),
                        },
                        Region::container(
                            "container",
                            vec![Region::container(
                                "section",
                                vec![
                                    Region::Body {
                                        html: doc.body.clone(),
                                    },
                                    Region::Subsections { index },
                                ],
                            )],
                        ),
                        Region::Footer,
                        Region::PrevNext { sequence },
                    ],
                ),
                Region::container(
                    "page-navi",
                    vec![Region::PageNavi {
                        path: doc.front.path.clone(),
                    }],
                ),
            ],
        );

        PageOutput { title, tree }
    }

    /// Compute the document title.
    ///
    /// The site title stands alone when the document has no title
    /// hierarchy. Otherwise the most specific title is appended, prefixed
    /// with the section number when the page sits at least two levels deep.
    fn page_title(doc: &Document, site: &SiteConfig, position: &PagePosition) -> String {
        let Some(last) = doc.front.titles.last() else {
            return site.title.clone();
        };

        let index = position.index();
        if index.len() >= 2 {
            format!("{} | {} {}", site.title, section_number(index), last)
        } else {
            format!("{} | {}", site.title, last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FrontMatter, TitleInfo};
    use std::path::PathBuf;

    fn site(title: &str) -> SiteConfig {
        SiteConfig {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn doc(path: &str, index: Vec<u32>, titles: TitleInfo) -> Document {
        Document {
            front: FrontMatter {
                path: path.to_string(),
                index,
                sequence: Some("5".to_string()),
                titles,
                extra: Default::default(),
            },
            raw: String::new(),
            body: "<p>hello</p>".to_string(),
            source: "test.md".to_string(),
            full_source: PathBuf::from("test.md"),
        }
    }

    fn titles(entries: &[&str]) -> TitleInfo {
        TitleInfo::Present(entries.iter().map(|s| s.to_string()).collect())
    }

    /// Collect every region of a given discriminant, depth first
    fn collect<'a>(region: &'a Region, out: &mut Vec<&'a Region>) {
        out.push(region);
        if let Region::Container { children, .. } = region {
            for child in children {
                collect(child, out);
            }
        }
    }

    fn flat(tree: &Region) -> Vec<&Region> {
        let mut out = Vec::new();
        collect(tree, &mut out);
        out
    }

    #[test]
    fn test_absent_titles_use_site_title_unmodified() {
        let out = PageRenderer::render(
            &doc("/ch1", vec![1], TitleInfo::Absent),
            &site("Docs"),
        );
        assert_eq!(out.title, "Docs");
    }

    #[test]
    fn test_shallow_page_omits_number_segment() {
        let out = PageRenderer::render(
            &doc("/ch1", vec![1], titles(&["Book", "Chapter 1"])),
            &site("Docs"),
        );
        assert_eq!(out.title, "Docs | Chapter 1");
    }

    #[test]
    fn test_nested_page_title_carries_section_number() {
        let out = PageRenderer::render(
            &doc(
                "/ch2/s3",
                vec![2, 3],
                titles(&["Book", "Chapter 2", "Section 3"]),
            ),
            &site("Docs"),
        );
        assert_eq!(out.title, "Docs | 2.3 Section 3");
    }

    #[test]
    fn test_empty_title_entries_are_filtered() {
        let out = PageRenderer::render(
            &doc("/ch1", vec![1], titles(&["", "Real Title"])),
            &site("Docs"),
        );
        assert_eq!(out.title, "Docs | Real Title");
    }

    #[test]
    fn test_all_empty_titles_behave_like_absent() {
        let out = PageRenderer::render(&doc("/ch1", vec![1], titles(&["", ""])), &site("Docs"));
        assert_eq!(out.title, "Docs");
    }

    #[test]
    fn test_contents_page_derives_empty_index() {
        // Whatever the front-matter index says, the contents route is root
        let out = PageRenderer::render(
            &doc("/contents", vec![4, 2], titles(&["Contents"])),
            &site("Docs"),
        );

        for region in flat(&out.tree) {
            match region {
                Region::Sidebar { index } | Region::Subsections { index } => {
                    assert!(index.is_empty());
                }
                _ => {}
            }
        }
        // And the number segment is omitted from the title
        assert_eq!(out.title, "Docs | Contents");
    }

    #[test]
    fn test_composition_shape() {
        let document = doc(
            "/ch2/s3",
            vec![2, 3],
            titles(&["Book", "Chapter 2", "Section 3"]),
        );
        let out = PageRenderer::render(&document, &site("Docs"));
        let regions = flat(&out.tree);

        // The prev/next strip appears above and below the body
        let strips: Vec<_> = regions
            .iter()
            .filter(|r| matches!(r, Region::PrevNext { .. }))
            .collect();
        assert_eq!(strips.len(), 2);
        for strip in strips {
            assert_eq!(
                *strip,
                &Region::PrevNext {
                    sequence: Some("5".to_string())
                }
            );
        }

        // The body is inserted verbatim
        assert!(regions.contains(&&Region::Body {
            html: "<p>hello</p>".to_string()
        }));

        // One sidebar, one subsections list, one footer, one page navi
        assert_eq!(
            regions
                .iter()
                .filter(|r| matches!(r, Region::Sidebar { .. }))
                .count(),
            1
        );
        assert!(regions.contains(&&Region::Subsections {
            index: vec![2, 3]
        }));
        assert!(regions.contains(&&Region::Footer));
        assert!(regions.contains(&&Region::PageNavi {
            path: "/ch2/s3".to_string()
        }));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let document = doc(
            "/ch2/s3",
            vec![2, 3],
            titles(&["Book", "Chapter 2", "Section 3"]),
        );
        let config = site("Docs");
        let first = PageRenderer::render(&document, &config);
        let second = PageRenderer::render(&document, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_section_number() {
        assert_eq!(section_number(&[2, 3]), "2.3");
        assert_eq!(section_number(&[1]), "1");
        assert_eq!(section_number(&[]), "");
    }
}
