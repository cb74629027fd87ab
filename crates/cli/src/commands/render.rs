use super::load_site;
use anyhow::Result;
use retriever_site_generator::render_route;
use std::path::PathBuf;

/// Print one rendered route to stdout
pub async fn run(path: PathBuf, route: String) -> Result<()> {
    let site = load_site(&path)?;

    match render_route(&site, &route) {
        Some(html) => {
            print!("{}", html);
            Ok(())
        }
        None => anyhow::bail!(
            "No page for route '{}'. Known routes: {}",
            route,
            site.routes().join(", ")
        ),
    }
}
