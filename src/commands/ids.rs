//! Print every post id

use anyhow::Result;

use crate::Blog;

/// One id per line, the route set for anything linking to posts
pub fn run(blog: &Blog) -> Result<()> {
    for id in blog.repository().list_ids()? {
        println!("{}", id);
    }
    Ok(())
}
