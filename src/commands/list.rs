//! List loaded posts

use anyhow::Result;

use crate::Postview;

/// Print a one-line summary per loaded post
pub fn run(app: &Postview) -> Result<()> {
    let store = app.store()?;

    println!("Posts ({}):", store.len());
    for post in store.posts() {
        println!(
            "  {} - {} [{}]",
            post.created.format("%Y-%m-%d"),
            post.title,
            post.author_name().unwrap_or(&app.config.author_fallback),
        );
    }

    Ok(())
}
