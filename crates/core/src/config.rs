use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    nav: Vec<NavLink>,
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    partner: Vec<Partner>,
    #[serde(default)]
    page: Vec<RawPage>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSite {
    #[serde(default)]
    title: String,
    description: Option<String>,
    #[serde(default)]
    header_layout: HeaderLayout,
    logo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    route: String,
    title: Option<String>,
    #[serde(default)]
    heading: String,
    #[serde(default)]
    body: String,
    #[serde(default = "home_link")]
    link: NavLink,
}

fn home_link() -> NavLink {
    NavLink::new("Go back to the homepage", "/")
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let path = path.as_ref();
    log::debug!("reading site config from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let logo = match raw.site.logo {
        Some(logo) => Some(validate_asset_path(&logo, "site.logo")?),
        None => None,
    };

    let nav_links = raw
        .nav
        .into_iter()
        .map(|link| {
            validate_route(&link.route, "nav.route")?;
            Ok(link)
        })
        .collect::<Result<Vec<_>>>()?;

    let partners = raw
        .partner
        .into_iter()
        .map(|p| {
            validate_route(&p.link, "partner.link")?;
            let logo = validate_asset_path(&p.logo, "partner.logo")?;
            Ok(Partner { logo, ..p })
        })
        .collect::<Result<Vec<_>>>()?;

    // Keyed on the output file: `/sponsor` and `/sponsor/` are one page
    let mut seen = HashMap::new();
    let mut pages = Vec::with_capacity(raw.page.len());
    for page in raw.page {
        validate_route(&page.route, "page.route")?;
        validate_route(&page.link.route, "page.link.route")?;
        if let Some(existing) = seen.insert(route_output_path(&page.route), page.route.clone()) {
            return Err(Error::ConfigParse(format!(
                "Duplicate page route '{}' (same page as '{}')",
                page.route, existing
            )));
        }
        pages.push(PageContent {
            route: page.route,
            title: page.title,
            heading: page.heading,
            body: page.body,
            outbound_link: page.link,
        });
    }

    log::debug!(
        "parsed site '{}': {} nav links, {} partners, {} pages",
        raw.site.title,
        nav_links.len(),
        partners.len(),
        pages.len()
    );

    Ok(Site {
        config: SiteConfig {
            title: raw.site.title,
            description: raw.site.description,
            nav_links,
            header_layout: raw.site.header_layout,
            logo,
        },
        theme: raw.theme,
        partners,
        pages,
    })
}

/// The Retriever Robotics site as shipped: home and sponsor pages,
/// HOME/SPONSOR navigation and the two partner logos.
pub fn default_site() -> Site {
    Site {
        config: SiteConfig {
            title: "Retriever Robotics".to_string(),
            description: Some("The UMBC robotics team".to_string()),
            nav_links: vec![NavLink::new("HOME", "/"), NavLink::new("SPONSOR", "/sponsor")],
            header_layout: HeaderLayout::Banner,
            logo: None,
        },
        theme: Theme::default(),
        partners: vec![
            Partner {
                name: "UMBC".to_string(),
                logo: "/UMBC-horizontal-color.png".to_string(),
                link: "/".to_string(),
                width: None,
            },
            Partner {
                name: "Retriever Robotics".to_string(),
                logo: "/retrieverRoboticsBW.png".to_string(),
                link: "/".to_string(),
                width: Some(90),
            },
        ],
        pages: vec![
            PageContent {
                route: "/".to_string(),
                title: None,
                heading: "Retriever Robotics".to_string(),
                body: "We design, build and program robots at UMBC.".to_string(),
                outbound_link: NavLink::new("Become a sponsor", "/sponsor"),
            },
            PageContent {
                route: "/sponsor".to_string(),
                title: Some("Sponsor".to_string()),
                heading: "Hi from the sponsor page".to_string(),
                body: "Sponsor us or else.".to_string(),
                outbound_link: home_link(),
            },
        ],
    }
}

/// Check that a route is a site-absolute path.
///
/// Routes must start with `/` and must not contain whitespace, `.` or `..`
/// segments, or empty segments other than a trailing slash.
fn validate_route(route: &str, field_name: &str) -> Result<()> {
    if !route.starts_with('/') {
        return Err(Error::ConfigParse(format!(
            "Route in '{}' must start with '/': '{}'",
            field_name, route
        )));
    }

    if route.chars().any(char::is_whitespace) {
        return Err(Error::ConfigParse(format!(
            "Route in '{}' must not contain whitespace: '{}'",
            field_name, route
        )));
    }

    if route.split('/').any(|segment| segment == "..") {
        return Err(Error::ConfigParse(format!(
            "Parent directory references (..) not allowed in '{}': '{}'",
            field_name, route
        )));
    }

    let segments: Vec<&str> = route.split('/').collect();
    let interior = &segments[1..segments.len() - 1];
    if segments.iter().any(|segment| *segment == ".") || interior.iter().any(|s| s.is_empty()) {
        return Err(Error::ConfigParse(format!(
            "Route in '{}' must not contain '.' or empty segments: '{}'",
            field_name, route
        )));
    }

    Ok(())
}

/// Validate a static asset path and normalize it to a site-root path.
///
/// Assets live in the site's `static/` folder and are referenced from the
/// site root, so `logo.png` and `/logo.png` name the same file. Parent
/// directory references are rejected so a config cannot point outside the
/// static folder.
fn validate_asset_path(path_str: &str, field_name: &str) -> Result<String> {
    let trimmed = path_str.trim();

    if trimmed.trim_start_matches('/').is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    if trimmed.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(Error::ConfigParse(format!(
            "Parent directory references (..) not allowed in '{}': '{}'",
            field_name, path_str
        )));
    }

    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{}", trimmed))
    }
}
