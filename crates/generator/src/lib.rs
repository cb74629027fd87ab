// Static site generation with Leptos SSR

pub mod components;
pub mod markdown;
pub mod shell;

use retriever_site_core::Site;
use std::path::PathBuf;

pub use components::{render_footer, render_header, render_page};
pub use shell::render_document;

/// A rendered route ready to be written to disk
pub struct GeneratedPage {
    pub route: String,
    /// Path relative to the output directory
    pub path: PathBuf,
    pub html: String,
}

pub struct GeneratedSite {
    pub pages: Vec<GeneratedPage>,
}

/// Render every page of the site into a complete HTML document
pub fn generate_site(site: &Site) -> GeneratedSite {
    let pages = site
        .pages
        .iter()
        .map(|page| {
            log::debug!("rendering route {}", page.route);
            GeneratedPage {
                route: page.route.clone(),
                path: page.output_path(),
                html: render_document(site, page),
            }
        })
        .collect();

    GeneratedSite { pages }
}

/// Render the document for a single route, if the site defines it
pub fn render_route(site: &Site, route: &str) -> Option<String> {
    site.page(route).map(|page| render_document(site, page))
}
