use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

use tokio::fs;

use crate::article::Article;
use crate::defaults::default_articles;

/// The error type for persisting the article set.
#[derive(Debug)]
pub enum StoreError {
    /// The article file could not be written.
    Io(io::Error),
    /// The article set could not be serialized.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "io error: {err}"),
            StoreError::Serialize(err) => {
                write!(f, "serialization error: {err}")
            }
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// File-backed article set.
///
/// The whole set is held in memory and the backing file is rewritten
/// wholesale on every mutation; there are no partial updates and no
/// versioned migrations. Loading never fails: absent or malformed data
/// falls back to the bundled default articles.
#[derive(Debug)]
pub struct ArticleStore {
    path: PathBuf,
    articles: Vec<Article>,
}

impl ArticleStore {
    /// Opens the store at `path` and loads the persisted article set.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let articles = match fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<Vec<Article>>(&raw) {
                Ok(articles) => articles,
                Err(err) => {
                    warn!(
                        "failed to parse {}: {err}, falling back to the \
                         bundled articles",
                        path.display()
                    );
                    default_articles()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                default_articles()
            }
            Err(err) => {
                warn!(
                    "failed to read {}: {err}, falling back to the bundled \
                     articles",
                    path.display()
                );
                default_articles()
            }
        };
        Self { path, articles }
    }

    /// Returns the articles, newest first.
    #[inline]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Looks up one article by id.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Replaces the stored article with the same id, or inserts a new
    /// article at the front, then rewrites the file.
    pub async fn upsert(&mut self, article: Article) -> Result<(), StoreError> {
        if let Some(existing) = self
            .articles
            .iter_mut()
            .find(|existing| existing.id == article.id)
        {
            *existing = article;
        } else {
            self.articles.insert(0, article);
        }
        self.save().await
    }

    /// Removes the article with the given id, then rewrites the file.
    ///
    /// Returns `false` (without touching the file) when no such
    /// article exists.
    pub async fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let len_before = self.articles.len();
        self.articles.retain(|article| article.id != id);
        if self.articles.len() == len_before {
            return Ok(false);
        }
        self.save().await?;
        Ok(true)
    }

    /// Returns the article set as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.articles)
            .map_err(StoreError::Serialize)
    }

    async fn save(&self) -> Result<(), StoreError> {
        let content = self.export_json()?;
        // Write to a sibling temp file first so a crash mid-write
        // can't leave a truncated article file behind.
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &content).await?;
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, title: &str) -> Article {
        Article {
            id: id.to_owned(),
            title: title.to_owned(),
            category: "Famille".to_owned(),
            date: "1 Jan 2024".to_owned(),
            summary: None,
            content: "<p>Contenu.</p>".to_owned(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArticleStore::open(dir.path().join("articles.json")).await;
        assert_eq!(store.articles(), default_articles());
    }

    #[tokio::test]
    async fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(&path, "{ not json ]").unwrap();

        let store = ArticleStore::open(&path).await;
        assert_eq!(store.articles(), default_articles());
    }

    #[tokio::test]
    async fn test_upsert_inserts_new_articles_at_the_front() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");

        let mut store = ArticleStore::open(&path).await;
        store.upsert(article("10", "Nouveau")).await.unwrap();
        assert_eq!(store.articles()[0].id, "10");

        // The whole set was rewritten, defaults included.
        let reopened = ArticleStore::open(&path).await;
        assert_eq!(reopened.articles().len(), default_articles().len() + 1);
        assert_eq!(reopened.articles()[0].title, "Nouveau");
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");

        let mut store = ArticleStore::open(&path).await;
        let len = store.articles().len();
        store.upsert(article("1", "Titre révisé")).await.unwrap();
        assert_eq!(store.articles().len(), len);
        assert_eq!(store.get("1").unwrap().title, "Titre révisé");

        let reopened = ArticleStore::open(&path).await;
        assert_eq!(reopened.get("1").unwrap().title, "Titre révisé");
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");

        let mut store = ArticleStore::open(&path).await;
        assert!(store.remove("2").await.unwrap());
        assert!(store.get("2").is_none());
        assert!(!store.remove("2").await.unwrap());

        let reopened = ArticleStore::open(&path).await;
        assert!(reopened.get("2").is_none());
    }

    #[tokio::test]
    async fn test_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArticleStore::open(dir.path().join("articles.json")).await;

        let exported = store.export_json().unwrap();
        let parsed: Vec<Article> = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed, default_articles());
    }
}
