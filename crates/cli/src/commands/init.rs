use anyhow::{Context, Result};
use retriever_site_core::parse_site_toml_str;
use std::fs;
use std::path::{Path, PathBuf};

use super::{SITE_TOML, STATIC_DIR};

const DEFAULT_TITLE: &str = "Retriever Robotics";

/// Escape a string for safe inclusion in a TOML basic string
///
/// The template is written by hand to keep its comments, so values are
/// escaped here rather than serialized with the toml crate.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a new site directory.
///
/// Writes a site.toml describing the home and sponsor pages, the HOME and
/// SPONSOR nav links and the two partner logos, and creates an empty
/// `static/` folder for the logo images.
///
/// # Errors
///
/// Returns an error if the directory doesn't exist, site.toml already
/// exists, or a file operation fails.
pub async fn run(path: PathBuf, title: Option<String>) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join(SITE_TOML);
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    write_site_toml(&path, title.as_deref().unwrap_or(DEFAULT_TITLE))?;
    fs::create_dir_all(path.join(STATIC_DIR)).context("Failed to create static directory")?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── site.toml            ← Edit title, nav, partners and pages");
    println!("  └── static/              ← Put logo images here");

    println!("\nNext steps:");
    println!("  1. Copy UMBC-horizontal-color.png and retrieverRoboticsBW.png into static/");
    println!("  2. Validate: retriever-site validate {}", path.display());
    println!("  3. Build: retriever-site build {} --output public", path.display());

    Ok(())
}

fn site_toml_template(title: &str) -> String {
    format!(
        r##"# Site-wide properties
[site]
title = "{title}"
description = "The UMBC robotics team"
header_layout = "banner"   # banner | letterhead
# logo = "/retrieverRoboticsBW.png"   # shown by the letterhead layout

# Header navigation, in display order
[[nav]]
label = "HOME"
route = "/"

[[nav]]
label = "SPONSOR"
route = "/sponsor"

# Styling shared by header and footer; every key is optional
[theme]
header_background = "#ffc20e"
header_opacity = 0.65
text_color = "#000000"

# Footer partner logos, paths relative to static/
[[partner]]
name = "UMBC"
logo = "/UMBC-horizontal-color.png"
link = "/"

[[partner]]
name = "Retriever Robotics"
logo = "/retrieverRoboticsBW.png"
link = "/"
width = 90

# Pages; body is Markdown
[[page]]
route = "/"
heading = "{title}"
body = "We design, build and program robots at UMBC."
link = {{ label = "Become a sponsor", route = "/sponsor" }}

[[page]]
route = "/sponsor"
title = "Sponsor"
heading = "Hi from the sponsor page"
body = "Sponsor us or else."
link = {{ label = "Go back to the homepage", route = "/" }}
"##,
        title = toml_escape_string(title)
    )
}

fn write_site_toml(base: &Path, title: &str) -> Result<()> {
    let content = site_toml_template(title);

    // Refuse to write a file the parser would reject
    parse_site_toml_str(&content).context("Generated site.toml is invalid")?;

    fs::write(base.join(SITE_TOML), content).context("Failed to write site.toml")?;
    Ok(())
}
