//! Validate the posts collection

use anyhow::Result;

use crate::Site;

/// Load the collection and report every validation failure
pub fn run(site: &Site) -> Result<()> {
    let collection = site.load_collection()?;

    println!("Validated {} post(s)", collection.len());
    for post in collection.posts_by_date() {
        println!(
            "  {} - {} [{}]",
            post.pub_date.format("%Y-%m-%d"),
            post.title,
            post.source
        );
    }

    if collection.failures().is_empty() {
        return Ok(());
    }

    println!();
    for failure in collection.failures() {
        println!("  {}: {}", failure.source.display(), failure.error);
    }
    anyhow::bail!(
        "{} post(s) failed schema validation",
        collection.failures().len()
    );
}
