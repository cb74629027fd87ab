use super::{STATIC_DIR, load_site};
use retriever_site_validator::validate_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let site = load_site(&path)?;
    println!("✓ site.toml valid");
    println!("  Site: {}", site.config.title);
    println!("  Pages: {}", site.pages.len());

    let report = validate_site(&site, Some(&path.join(STATIC_DIR)));

    for info in &report.info {
        println!("  {}", info);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✓ Site is valid");
    Ok(())
}
