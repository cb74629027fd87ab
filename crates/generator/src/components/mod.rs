//! Presentational components. Each is a pure mapping from its props to
//! markup; the `render_*` helpers turn one into an HTML fragment.

mod footer;
mod header;
mod page;
#[cfg(test)]
pub(crate) mod test_support;

pub use footer::Footer;
pub use header::Header;
pub use page::Page;

use crate::markdown::render_markdown;
use leptos::prelude::*;
use retriever_site_core::{PageContent, Partner, SiteConfig, Theme};

/// Empty comment Leptos leaves between adjacent nodes for hydration
const HYDRATION_MARKER: &str = "<!>";

/// Render a view to an HTML string inside a throwaway reactive owner.
///
/// Output is never hydrated, so hydration markers are stripped. Text and
/// attribute values are escaped by Leptos, so a literal marker cannot come
/// from content.
fn render_fragment<V: IntoView>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner
        .with(|| build().to_html())
        .replace(HYDRATION_MARKER, "")
}

/// Render the site banner for the given site-wide properties
pub fn render_header(config: &SiteConfig, theme: &Theme) -> String {
    render_fragment(|| {
        view! {
            <Header
                site_title={config.title.clone()}
                nav_links={config.nav_links.clone()}
                layout={config.header_layout}
                logo={config.logo.clone()}
                theme={theme.clone()}
            />
        }
    })
}

/// Render the partner footer
pub fn render_footer(partners: &[Partner], theme: &Theme) -> String {
    render_fragment(|| {
        view! { <Footer partners={partners.to_vec()} theme={theme.clone()}/> }
    })
}

/// Render a page's own content, without header or footer
pub fn render_page(page: &PageContent) -> String {
    let body_html = render_markdown(&page.body);
    render_fragment(|| {
        view! {
            <Page
                heading={page.heading.clone()}
                body_html=body_html
                outbound_link={page.outbound_link.clone()}
            />
        }
    })
}
