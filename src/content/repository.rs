//! Post repository - reads a directory of markdown posts

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::{FrontMatter, FrontMatterError, MarkdownRenderer, Post, PostSummary};

/// Errors surfaced by [`PostRepository`]
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("no post found for id `{0}`")]
    NotFound(String),

    #[error("malformed post {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read interface over a directory of markdown posts.
///
/// Every call re-reads the filesystem; the source files are the single
/// source of truth and are never written. Calls are independent, so the
/// repository can be shared freely across threads.
pub struct PostRepository {
    posts_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl PostRepository {
    /// Create a repository over a posts directory
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self::with_renderer(posts_dir, MarkdownRenderer::new())
    }

    /// Create a repository with a preconfigured renderer
    pub fn with_renderer<P: AsRef<Path>>(posts_dir: P, renderer: MarkdownRenderer) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            renderer,
        }
    }

    /// List every post, newest first.
    ///
    /// Posts sharing a date are ordered by id ascending. A post whose
    /// front-matter is missing or malformed is skipped with a warning
    /// rather than failing the whole listing; read failures still fail
    /// the call.
    pub fn list_summaries(&self) -> Result<Vec<PostSummary>, RepositoryError> {
        let mut summaries = Vec::new();

        for path in self.post_files()? {
            match self.read_summary(&path) {
                Ok(summary) => summaries.push(summary),
                Err(err @ RepositoryError::Io(_)) => return Err(err),
                Err(err) => {
                    tracing::warn!("skipping post {:?}: {}", path, err);
                }
            }
        }

        summaries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(summaries)
    }

    /// List every post id, ascending.
    ///
    /// Ids come from the same enumeration as [`Self::list_summaries`], so
    /// the id set always matches the file set, malformed posts included.
    pub fn list_ids(&self) -> Result<Vec<String>, RepositoryError> {
        let mut ids: Vec<String> = self.post_files()?.iter().map(|p| post_id(p)).collect();
        ids.sort();
        Ok(ids)
    }

    /// Load one post by id, rendering its body to HTML
    pub fn get_post(&self, id: &str) -> Result<Post, RepositoryError> {
        let path = self
            .locate(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        let raw = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&raw).map_err(|e| parse_error(&path, e))?;
        let title = fm.require_title().map_err(|e| parse_error(&path, e))?.to_string();
        let date = fm.resolve_date().map_err(|e| parse_error(&path, e))?;
        let content_html = self.renderer.render(body);

        Ok(Post {
            id: id.to_string(),
            title,
            date,
            content_html,
            source: path,
        })
    }

    /// Enumerate the markdown files directly inside the posts directory,
    /// in a stable order
    fn post_files(&self) -> Result<Vec<PathBuf>, RepositoryError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| RepositoryError::Io(e.into()))?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Resolve an id back to its source file
    fn locate(&self, id: &str) -> Option<PathBuf> {
        // Ids name files directly inside the posts directory, never beyond it
        if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
            return None;
        }

        for ext in ["md", "markdown"] {
            let candidate = self.posts_dir.join(format!("{id}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }

    fn read_summary(&self, path: &Path) -> Result<PostSummary, RepositoryError> {
        let raw = fs::read_to_string(path)?;
        let (fm, _body) = FrontMatter::parse(&raw).map_err(|e| parse_error(path, e))?;
        let title = fm.require_title().map_err(|e| parse_error(path, e))?.to_string();
        let date = fm.resolve_date().map_err(|e| parse_error(path, e))?;

        Ok(PostSummary {
            id: post_id(path),
            title,
            date,
        })
    }
}

fn parse_error(path: &Path, source: FrontMatterError) -> RepositoryError {
    RepositoryError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

/// Derive a post id from its source filename
fn post_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, date: &str, title: &str, body: &str) {
        let content = format!("---\ntitle: {title}\ndate: {date}\n---\n\n{body}\n");
        fs::write(dir.join(name), content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "a.md", "2020-01-02", "A", "# Hello");
        write_post(dir.path(), "b.md", "2020-01-01", "B", "body of b");
        write_post(dir.path(), "c.md", "2021-06-30 12:00:00", "C", "body of c");
        dir
    }

    #[test]
    fn test_one_id_per_file_no_duplicates() {
        let dir = fixture();
        let repo = PostRepository::new(dir.path());

        let ids = repo.list_ids().unwrap();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_summaries_sorted_newest_first() {
        let dir = fixture();
        let repo = PostRepository::new(dir.path());

        let summaries = repo.list_summaries().unwrap();
        let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        for pair in summaries.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_equal_dates_order_by_id() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "zebra.md", "2020-05-05", "Zebra", "z");
        write_post(dir.path(), "apple.md", "2020-05-05", "Apple", "a");
        let repo = PostRepository::new(dir.path());

        let summaries = repo.list_summaries().unwrap();
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["apple", "zebra"]);
    }

    #[test]
    fn test_round_trip_ids_to_posts() {
        let dir = fixture();
        let repo = PostRepository::new(dir.path());

        let summaries = repo.list_summaries().unwrap();
        for id in repo.list_ids().unwrap() {
            let post = repo.get_post(&id).unwrap();
            let summary = summaries.iter().find(|s| s.id == id).unwrap();
            assert_eq!(post.summary(), *summary);
        }
    }

    #[test]
    fn test_get_post_renders_markdown() {
        let dir = fixture();
        let repo = PostRepository::new(dir.path());

        let post = repo.get_post("a").unwrap();
        assert!(post.content_html.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let dir = fixture();
        let repo = PostRepository::new(dir.path());

        let err = repo.get_post("nonexistent").unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[test]
    fn test_id_cannot_escape_posts_dir() {
        let dir = fixture();
        let repo = PostRepository::new(dir.path().join("sub"));
        fs::create_dir(dir.path().join("sub")).unwrap();

        let err = repo.get_post("../a").unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[test]
    fn test_malformed_post_is_skipped_in_listing() {
        let dir = fixture();
        fs::write(dir.path().join("broken.md"), "no front-matter here\n").unwrap();
        let repo = PostRepository::new(dir.path());

        // The listing still succeeds and carries the other posts
        let summaries = repo.list_summaries().unwrap();
        assert_eq!(summaries.len(), 3);
        assert!(summaries.iter().all(|s| s.id != "broken"));

        // But the id is enumerated, and a direct fetch reports the parse
        // failure, not a missing post
        assert!(repo.list_ids().unwrap().contains(&"broken".to_string()));
        let err = repo.get_post("broken").unwrap_err();
        assert!(matches!(err, RepositoryError::Parse { .. }));
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("untitled.md"), "---\ndate: 2020-01-01\n---\nbody").unwrap();
        let repo = PostRepository::new(dir.path());

        let err = repo.get_post("untitled").unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Parse {
                source: FrontMatterError::MissingField("title"),
                ..
            }
        ));
    }

    #[test]
    fn test_enumeration_is_non_recursive() {
        let dir = fixture();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        write_post(&dir.path().join("drafts"), "hidden.md", "2022-01-01", "Hidden", "x");
        let repo = PostRepository::new(dir.path());

        assert_eq!(repo.list_ids().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let dir = fixture();
        fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
        fs::write(dir.path().join("image.png"), [0u8; 4]).unwrap();
        let repo = PostRepository::new(dir.path());

        assert_eq!(repo.list_ids().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_markdown_extension_variant() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "long.markdown", "2020-02-02", "Long", "body");
        let repo = PostRepository::new(dir.path());

        assert_eq!(repo.list_ids().unwrap(), vec!["long"]);
        assert_eq!(repo.get_post("long").unwrap().title, "Long");
    }

    #[test]
    fn test_missing_posts_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let repo = PostRepository::new(dir.path().join("does-not-exist"));

        let err = repo.list_summaries().unwrap_err();
        assert!(matches!(err, RepositoryError::Io(_)));
    }

    #[test]
    fn test_rendering_is_pure() {
        let dir = fixture();
        let repo = PostRepository::new(dir.path());

        let first = repo.get_post("a").unwrap();
        let second = repo.get_post("a").unwrap();
        assert_eq!(first.content_html, second.content_html);
    }
}
