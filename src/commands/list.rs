//! List posts, newest first

use anyhow::Result;

use crate::helpers::format_date;
use crate::Blog;

/// Print every post as `date - title [id]`
pub fn run(blog: &Blog) -> Result<()> {
    let repo = blog.repository();
    let summaries = repo.list_summaries()?;

    println!("Posts ({}):", summaries.len());
    for post in summaries {
        println!(
            "  {} - {} [{}]",
            format_date(&post.date, &blog.config.date_format),
            post.title,
            post.id
        );
    }

    Ok(())
}
