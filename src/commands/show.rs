//! Render a single post

use anyhow::Result;

use crate::content::RepositoryError;
use crate::helpers::time_tag;
use crate::Blog;

/// Print one post as an HTML fragment: title, date, rendered body.
/// A missing post and a malformed one get different messages.
pub fn run(blog: &Blog, id: &str) -> Result<()> {
    let post = match blog.repository().get_post(id) {
        Ok(post) => post,
        Err(RepositoryError::NotFound(id)) => {
            anyhow::bail!("no such post: {}", id);
        }
        Err(err @ RepositoryError::Parse { .. }) => {
            return Err(anyhow::Error::new(err).context("post exists but could not be parsed"));
        }
        Err(err) => return Err(err.into()),
    };

    println!("<h1>{}</h1>", post.title);
    println!("{}", time_tag(&post.date, Some(&blog.config.date_format)));
    println!();
    println!("{}", post.content_html);

    Ok(())
}
