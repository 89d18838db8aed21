//! Post models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Listing data for a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Post identifier, the source filename without its extension
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date, the sort key for listings
    pub date: NaiveDateTime,
}

/// A fully loaded post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier, the source filename without its extension
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDateTime,

    /// Rendered HTML content
    pub content_html: String,

    /// Source file the post was loaded from
    pub source: PathBuf,
}

impl Post {
    /// Listing view of this post
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            date: self.date,
        }
    }
}
