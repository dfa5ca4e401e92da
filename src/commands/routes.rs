//! Inspect the redirect table

use anyhow::Result;

use crate::Site;

/// Resolve a single path, or print the whole redirect table
pub fn run(site: &Site, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) => match site.resolve_redirect(p) {
            Some(dest) => println!("{} -> {}", p, dest),
            None => println!("{} (no redirect)", p),
        },
        None => {
            println!("Redirects ({}):", site.config.redirects.len());
            for (from, to) in &site.config.redirects {
                println!("  {} -> {}", from, to);
            }
        }
    }

    Ok(())
}
