use crate::domain::NewsRecord;
use crate::query::Page;
use serde::Serialize;

pub const LIST_TITLE: &str = "Todas las Noticias";
pub const DEFAULT_LIST_TITLE: &str = "Noticias";

/// Data handed to the presentation layer for any paginated news listing.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NewsListView {
    pub title: String,
    pub news: Vec<NewsRecord>,
    /// Search term echoed back to the search bar; empty outside searches.
    pub search: String,
    pub page: usize,
    pub total_pages: usize,
}

impl NewsListView {
    pub(crate) fn from_page(title: String, search: String, page: Page<NewsRecord>) -> Self {
        Self {
            title,
            news: page.items,
            search,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

/// Data handed to the presentation layer for a single article.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NewsDetailView {
    pub title: String,
    pub article: NewsRecord,
}

impl From<NewsRecord> for NewsDetailView {
    fn from(article: NewsRecord) -> Self {
        Self {
            title: article.title.clone(),
            article,
        }
    }
}

pub(crate) fn search_title(term: &str) -> String {
    if term.is_empty() {
        DEFAULT_LIST_TITLE.to_string()
    } else {
        format!("Resultados para \"{term}\"")
    }
}
