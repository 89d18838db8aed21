//! Validate every post

use anyhow::Result;

use crate::Blog;

/// Parse and render every enumerated post, reporting each failure.
/// This is the strict counterpart of the listing's skip policy.
pub fn run(blog: &Blog) -> Result<()> {
    let repo = blog.repository();
    let ids = repo.list_ids()?;

    let mut failures = 0;
    for id in &ids {
        match repo.get_post(id) {
            Ok(_) => println!("  ok   {}", id),
            Err(err) => {
                failures += 1;
                println!("  FAIL {}: {}", id, err);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} post(s) failed to parse", failures, ids.len());
    }

    println!("All {} post(s) parsed", ids.len());
    Ok(())
}
