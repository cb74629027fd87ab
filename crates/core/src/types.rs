use serde::Deserialize;
use std::path::PathBuf;

/// Complete site configuration
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub theme: Theme,
    pub partners: Vec<Partner>,
    pub pages: Vec<PageContent>,
}

impl Site {
    /// Look up the page registered for a route
    pub fn page(&self, route: &str) -> Option<&PageContent> {
        self.pages.iter().find(|p| p.route == route)
    }

    /// Every route the site defines, in page order
    pub fn routes(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.route.as_str()).collect()
    }
}

/// Site-wide properties handed to every component at render time
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    pub title: String,
    pub description: Option<String>,
    pub nav_links: Vec<NavLink>,
    pub header_layout: HeaderLayout,
    /// Site-root path of the logo shown by the letterhead layout
    pub logo: Option<String>,
}

/// A labelled link to a route
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub route: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
        }
    }
}

/// How the header arranges its title and navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// Full-width banner, title centered above the nav row
    #[default]
    Banner,
    /// Narrow letterhead, logo and title on one row
    Letterhead,
}

/// Route-level content
#[derive(Debug, Clone)]
pub struct PageContent {
    pub route: String,
    /// Document title; the site title is used when absent
    pub title: Option<String>,
    pub heading: String,
    /// Markdown source of the page body
    pub body: String,
    pub outbound_link: NavLink,
}

impl PageContent {
    /// Output file for this page, relative to the build directory
    pub fn output_path(&self) -> PathBuf {
        route_output_path(&self.route)
    }
}

/// Map a route to the file that serves it: `/` is `index.html`,
/// `/sponsor` is `sponsor/index.html`.
pub fn route_output_path(route: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in route.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    path
}

/// Partner logo shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Partner {
    pub name: String,
    /// Site-root path of the logo image
    pub logo: String,
    pub link: String,
    /// Fixed logo width in pixels; the natural aspect ratio is kept when absent
    pub width: Option<u32>,
}

/// Presentational constants shared by every component
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub header_background: String,
    pub header_opacity: f32,
    pub header_padding: String,
    pub text_color: String,
    pub title_font_size: String,
    pub link_margin: String,
    pub footer_background: String,
    pub footer_height: String,
    pub logo_height: String,
    pub content_max_width: String,
    /// Space above page content, clearing the absolutely positioned header
    pub content_padding_top: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_background: "#ffc20e".to_string(),
            header_opacity: 0.65,
            header_padding: "1.45rem 1.0875rem".to_string(),
            text_color: "#000000".to_string(),
            title_font_size: "76px".to_string(),
            link_margin: "20px".to_string(),
            footer_background: "#ffffff".to_string(),
            footer_height: "100px".to_string(),
            logo_height: "90px".to_string(),
            content_max_width: "960px".to_string(),
            content_padding_top: "300px".to_string(),
        }
    }
}

impl Theme {
    /// Inline style shared by every anchor the components emit
    pub fn link_style(&self) -> String {
        format!(
            "color:{};text-decoration:none;margin:{}",
            self.text_color, self.link_margin
        )
    }
}
