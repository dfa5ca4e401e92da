//! Create a new post file

use anyhow::Result;
use std::fs;

use crate::Site;

/// Scaffold a post with the three required front-matter fields
pub fn run(site: &Site, title: &str, path: Option<&str>) -> Result<()> {
    let slug = slug::slugify(title);
    let filename = match path {
        Some(p) => format!("{}.md", p),
        None => format!("{}.md", slug),
    };

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let today = chrono::Local::now().date_naive();
    let content = format!(
        "---\ntitle: \"{}\"\nslug: \"{}\"\npubDate: {}\n---\n\n",
        title.replace('"', "\\\""),
        slug,
        today.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}
