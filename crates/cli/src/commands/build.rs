use anyhow::{Context, Result};
use retriever_site_core::Site;
use retriever_site_generator::generate_site;
use retriever_site_validator::validate_site;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{STATIC_DIR, load_site};

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let site = load_site(&path)?;

    println!("✓ Loaded: {}", site.config.title);
    println!("  Pages: {}", site.pages.len());
    println!("  Partners: {}", site.partners.len());
    println!();

    let static_dir = path.join(STATIC_DIR);
    let report = validate_site(&site, Some(&static_dir));
    for warning in &report.warnings {
        eprintln!("   ⚠ Warning: {}", warning);
    }
    if !report.is_ok() {
        for error in &report.errors {
            eprintln!("   ✗ {}", error);
        }
        anyhow::bail!("Site has {} error(s); fix them before building", report.errors.len());
    }

    fs::create_dir_all(&output).context("Failed to create output directory")?;

    println!("📄 Rendering pages...");
    let written = write_pages(&site, &output)?;
    println!("   ✓ Rendered {} page(s)", written);

    println!("🎨 Copying static files...");
    let copied = copy_static(&static_dir, &output)?;
    println!("   ✓ Copied {} static file(s)", copied);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Render every page and write it below `output`
fn write_pages(site: &Site, output: &Path) -> Result<usize> {
    let generated = generate_site(site);

    for page in &generated.pages {
        let dst = output.join(&page.path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, &page.html).with_context(|| format!("Failed to write {}", dst.display()))?;
        log::info!("wrote {} -> {}", page.route, dst.display());
    }

    Ok(generated.pages.len())
}

/// Copy the static folder verbatim into the output root
fn copy_static(static_dir: &Path, output: &Path) -> Result<usize> {
    if !static_dir.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = entry.context("Failed to read static directory")?;
        let relative = entry
            .path()
            .strip_prefix(static_dir)
            .context("Static file outside static directory")?;
        let dst = output.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &dst)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
