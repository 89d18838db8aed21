//! mdblog-rs: a markdown post repository for file-backed blogs
//!
//! This crate loads blog posts from a directory of markdown files with
//! front-matter and exposes sorted listings and id-based lookup, the data
//! layer a page-rendering frontend consumes.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

pub use content::{
    FrontMatter, FrontMatterError, MarkdownRenderer, Post, PostRepository, PostSummary,
    RepositoryError,
};

/// The blog application handle
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Posts directory
    pub posts_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Repository over this blog's posts directory
    pub fn repository(&self) -> PostRepository {
        let renderer = MarkdownRenderer::with_options(
            &self.config.highlight.theme,
            self.config.highlight.enable,
        );
        PostRepository::with_renderer(&self.posts_dir, renderer)
    }
}
