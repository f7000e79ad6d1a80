pub mod date;
pub mod view;

use crate::config::Settings;
use crate::domain::{NewsDraft, NewsRecord};
use crate::error::NewsError;
use crate::port::NewsStore;
use crate::query::{Jornada, filter_by_date_bucket, filter_by_title_contains, paginate};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

pub use view::{NewsDetailView, NewsListView};

/// Use cases behind the news pages.
///
/// Every call re-reads the full dataset from the injected store and derives
/// the requested view with the query functions.
#[derive(Clone)]
pub struct NewsService {
    store: Arc<dyn NewsStore>,
    page_size: usize,
}

impl NewsService {
    #[must_use]
    pub fn new(store: Arc<dyn NewsStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }

    #[must_use]
    pub fn from_settings(store: Arc<dyn NewsStore>, settings: &Settings) -> Self {
        Self::new(store, settings.page_size)
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// All news, newest last, one page at a time.
    pub async fn list(&self, page: usize) -> NewsListView {
        let all = self.store.read_all().await.into_records();
        debug!(page, total = all.len(), "Listing news");
        NewsListView::from_page(
            view::LIST_TITLE.to_string(),
            String::new(),
            paginate(all, page, self.page_size),
        )
    }

    /// News of one jornada, or `None` when the jornada number is unknown.
    pub async fn jornada(&self, number: i64, page: usize) -> Option<NewsListView> {
        let Some(jornada) = Jornada::from_number(number) else {
            info!(number, "Jornada not found");
            return None;
        };
        let all = self.store.read_all().await.into_records();
        let filtered = filter_by_date_bucket(all, number)?;
        debug!(number, date = jornada.date, matches = filtered.len(), "Listing jornada");

        Some(NewsListView::from_page(
            format!("Jornada {}", jornada.number),
            String::new(),
            paginate(filtered, page, self.page_size),
        ))
    }

    /// News whose title contains `term` (case-insensitive). The lowercased term is echoed back.
    pub async fn search(&self, term: Option<&str>, page: usize) -> NewsListView {
        let term = term.map(str::to_lowercase).unwrap_or_default();
        let all = self.store.read_all().await.into_records();
        let filtered = filter_by_title_contains(all, Some(term.as_str()));
        debug!(term = %term, matches = filtered.len(), "Searching news");

        NewsListView::from_page(
            view::search_title(&term),
            term,
            paginate(filtered, page, self.page_size),
        )
    }

    pub async fn detail(&self, id: u64) -> Option<NewsDetailView> {
        let article = self.store.read_by_id(id).await;
        if article.is_none() {
            info!(id, "News not found");
        }
        article.map(NewsDetailView::from)
    }

    /// Store a submitted article, dating it today when no date was given.
    ///
    /// # Errors
    /// Propagates [`NewsError`] when the store cannot persist the article.
    pub async fn create(&self, draft: NewsDraft) -> Result<NewsRecord, NewsError> {
        self.create_on(draft, date::today()).await
    }

    /// Like [`NewsService::create`] with an explicit "today".
    ///
    /// # Errors
    /// Propagates [`NewsError`] when the store cannot persist the article.
    pub async fn create_on(
        &self,
        mut draft: NewsDraft,
        today: NaiveDate,
    ) -> Result<NewsRecord, NewsError> {
        if draft.date.trim().is_empty() {
            draft.date = date::short_date_label(today);
        }
        self.store.append(draft).await
    }
}
