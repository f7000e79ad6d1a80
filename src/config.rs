use std::env;
use std::path::PathBuf;

use crate::error::NewsError;

const DEFAULT_DB_PATH: &str = "database/news.json";
const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Location of the JSON array backing the news store
    pub db_path: PathBuf,
    /// Items per listing page
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    /// Read `NEWS_DB_PATH` and `NEWS_PAGE_SIZE`, falling back to defaults, and validate.
    ///
    /// # Errors
    /// Returns [`NewsError`] when a value cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self, NewsError> {
        let db_path = env::var("NEWS_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));
        let page_size = parse_usize("NEWS_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;

        let settings = Self { db_path, page_size };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), NewsError> {
        validate_db_path(&self.db_path)?;
        validate_page_size(self.page_size)?;
        Ok(())
    }
}

fn validate_db_path(path: &std::path::Path) -> Result<(), NewsError> {
    if path.as_os_str().is_empty() {
        return Err(NewsError::Config("Database path cannot be empty".into()));
    }
    Ok(())
}

fn validate_page_size(page_size: usize) -> Result<(), NewsError> {
    if page_size == 0 {
        return Err(NewsError::Config("Page size cannot be 0".into()));
    }
    Ok(())
}

fn parse_usize(name: &'static str, default: usize) -> Result<usize, NewsError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|e| NewsError::InvalidConfig {
                name,
                source: e.into(),
            }),
        Err(_) => Ok(default),
    }
}
