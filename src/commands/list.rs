//! List the validated posts

use anyhow::Result;

use crate::Site;

/// Print the collection, newest first; invalid entries are skipped
pub fn run(site: &Site) -> Result<()> {
    let collection = site.load_collection()?;

    println!("Posts ({}):", collection.len());
    for post in collection.posts_by_date() {
        println!(
            "  {} - {} /{}",
            post.pub_date.format("%Y-%m-%d"),
            post.title,
            post.slug
        );
    }

    if !collection.failures().is_empty() {
        println!(
            "  ({} entr{} skipped, run `check` for details)",
            collection.failures().len(),
            if collection.failures().len() == 1 {
                "y"
            } else {
                "ies"
            }
        );
    }

    Ok(())
}
