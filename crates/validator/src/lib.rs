// Site validation: route table, asset references, sensible defaults

use retriever_site_core::Site;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a parsed site for dangling routes and missing or unused assets.
///
/// `static_dir` is the folder copied verbatim into the site root; asset
/// checks are skipped when it is `None`.
pub fn validate_site(site: &Site, static_dir: Option<&Path>) -> ValidationReport {
    let mut report = ValidationReport::default();
    let routes: HashSet<&str> = site.routes().into_iter().collect();

    if !routes.contains("/") {
        report.errors.push("No page defined for the home route '/'".to_string());
    }

    for link in &site.config.nav_links {
        if !routes.contains(link.route.as_str()) {
            report.errors.push(format!(
                "Nav link '{}' points to undefined route '{}'",
                link.label, link.route
            ));
        }
    }

    for page in &site.pages {
        if !routes.contains(page.outbound_link.route.as_str()) {
            report.errors.push(format!(
                "Page '{}' links to undefined route '{}'",
                page.route, page.outbound_link.route
            ));
        }
    }

    for partner in &site.partners {
        if !routes.contains(partner.link.as_str()) {
            report.errors.push(format!(
                "Partner '{}' links to undefined route '{}'",
                partner.name, partner.link
            ));
        }
    }

    if site.config.title.trim().is_empty() {
        report.warnings.push("Site title is empty".to_string());
    }
    if site.config.nav_links.is_empty() {
        report
            .warnings
            .push("No nav links defined; the header will render without navigation".to_string());
    }
    if site.partners.is_empty() {
        report
            .warnings
            .push("No partners defined; the footer will be empty".to_string());
    }

    if let Some(static_dir) = static_dir {
        check_assets(site, static_dir, &mut report);
    }

    report.info.push(format!(
        "{} page(s), {} nav link(s), {} partner(s)",
        site.pages.len(),
        site.config.nav_links.len(),
        site.partners.len()
    ));

    log::debug!(
        "validated site: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    report
}

/// Every asset path the site references, as site-root paths
fn referenced_assets(site: &Site) -> Vec<&str> {
    site.partners
        .iter()
        .map(|p| p.logo.as_str())
        .chain(site.config.logo.as_deref())
        .collect()
}

/// Site-root form of a path relative to the output directory
fn site_path(relative: &Path) -> String {
    format!(
        "/{}",
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    )
}

fn check_assets(site: &Site, static_dir: &Path, report: &mut ValidationReport) {
    let referenced = referenced_assets(site);

    if !static_dir.is_dir() {
        if !referenced.is_empty() {
            report.warnings.push(format!(
                "Static directory not found: {}",
                static_dir.display()
            ));
        }
        return;
    }

    for asset in &referenced {
        if !static_dir.join(asset.trim_start_matches('/')).is_file() {
            report.warnings.push(format!(
                "Asset '{}' not found in {}",
                asset,
                static_dir.display()
            ));
        }
    }

    let referenced: HashSet<&str> = referenced.into_iter().collect();
    let rendered: HashSet<String> = site
        .pages
        .iter()
        .map(|page| site_path(&page.output_path()))
        .collect();

    let mut static_files = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                report
                    .warnings
                    .push(format!("Cannot read static directory entry: {}", err));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        static_files += 1;
        let Ok(relative) = entry.path().strip_prefix(static_dir) else {
            continue;
        };
        let asset_path = site_path(relative);

        if rendered.contains(&asset_path) {
            report.errors.push(format!(
                "Static file '{}' would overwrite a rendered page",
                asset_path
            ));
        } else if !referenced.contains(asset_path.as_str()) {
            log::debug!("unreferenced static file {}", asset_path);
            report
                .warnings
                .push(format!("Static file '{}' is never referenced", asset_path));
        }
    }

    report
        .info
        .push(format!("{} static file(s) in {}", static_files, static_dir.display()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use retriever_site_core::{NavLink, default_site};
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a static dir holding the given files
    fn create_static_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, b"fake image data").unwrap();
        }
        dir
    }

    #[test]
    fn test_default_site_is_valid() {
        let report = validate_site(&default_site(), None);
        assert!(report.is_ok(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
        assert_eq!(report.info.len(), 1);
    }

    #[test]
    fn test_dangling_nav_route() {
        let mut site = default_site();
        site.config.nav_links.push(NavLink::new("BLOG", "/blog"));

        let report = validate_site(&site, None);
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("'/blog'"));
        assert!(report.errors[0].contains("BLOG"));
    }

    #[test]
    fn test_missing_home_page() {
        let mut site = default_site();
        site.pages.retain(|p| p.route != "/");

        let report = validate_site(&site, None);
        assert!(report.errors.iter().any(|e| e.contains("home route")));
        // sponsor page, nav HOME and both partners all point at '/'
        assert_eq!(report.errors.len(), 5);
    }

    #[test]
    fn test_empty_site_warns() {
        let mut site = default_site();
        site.config.title = String::new();
        site.config.nav_links.clear();
        site.partners.clear();

        let report = validate_site(&site, None);
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_assets_present() {
        let dir = create_static_dir(&["UMBC-horizontal-color.png", "retrieverRoboticsBW.png"]);
        let report = validate_site(&default_site(), Some(dir.path()));
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
        assert!(report.info.iter().any(|i| i.contains("2 static file(s)")));
    }

    #[test]
    fn test_missing_asset_warns() {
        let dir = create_static_dir(&["UMBC-horizontal-color.png"]);
        let report = validate_site(&default_site(), Some(dir.path()));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("/retrieverRoboticsBW.png"));
    }

    #[test]
    fn test_unreferenced_asset_warns() {
        let dir = create_static_dir(&[
            "UMBC-horizontal-color.png",
            "retrieverRoboticsBW.png",
            "img/old-logo.png",
        ]);
        let report = validate_site(&default_site(), Some(dir.path()));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("/img/old-logo.png"));
    }

    #[test]
    fn test_static_file_shadowing_page_is_error() {
        let dir = create_static_dir(&[
            "UMBC-horizontal-color.png",
            "retrieverRoboticsBW.png",
            "index.html",
            "sponsor/index.html",
        ]);
        let report = validate_site(&default_site(), Some(dir.path()));

        assert!(!report.is_ok());
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().any(|e| e.contains("'/index.html'")));
        assert!(report.errors.iter().any(|e| e.contains("'/sponsor/index.html'")));
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_static_subdir_warns() {
        use std::os::unix::fs::PermissionsExt;

        let dir = create_static_dir(&[
            "UMBC-horizontal-color.png",
            "retrieverRoboticsBW.png",
            "locked/photo.png",
        ]);
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores directory permissions, so only check when the lock holds
        let readable = fs::read_dir(&locked).is_ok();
        let report = validate_site(&default_site(), Some(dir.path()));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !readable {
            assert!(
                report
                    .warnings
                    .iter()
                    .any(|w| w.contains("Cannot read static directory entry"))
            );
        }
    }

    #[test]
    fn test_missing_static_dir() {
        let dir = TempDir::new().unwrap();
        let report = validate_site(&default_site(), Some(&dir.path().join("static")));
        assert!(report.warnings[0].contains("Static directory not found"));
    }
}
