//! Shared test support utilities
//!
//! Provides `InMemoryNewsStore`, a `NewsStore` double for unit and integration
//! tests that need a store without touching the filesystem.

use crate::domain::{NewsDraft, NewsRecord};
use crate::error::NewsError;
use crate::port::news_store::{NewsStore, StoreSnapshot, next_id};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory store that records appends and can be told to fail writes.
pub struct InMemoryNewsStore {
    records: Arc<Mutex<Vec<NewsRecord>>>,
    reads: AtomicUsize,
    should_fail: AtomicBool,
}

impl InMemoryNewsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    #[must_use]
    pub fn with_records(records: Vec<NewsRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            reads: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Make subsequent appends fail with a persist error.
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn records(&self) -> Vec<NewsRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of full-sequence reads served so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryNewsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsStore for InMemoryNewsStore {
    fn read_all(&self) -> Pin<Box<dyn Future<Output = StoreSnapshot> + Send + '_>> {
        Box::pin(async move {
            self.reads.fetch_add(1, Ordering::SeqCst);
            StoreSnapshot::Parsed(self.records())
        })
    }

    fn read_by_id(&self, id: u64) -> Pin<Box<dyn Future<Output = Option<NewsRecord>> + Send + '_>> {
        Box::pin(async move {
            self.read_all()
                .await
                .into_records()
                .into_iter()
                .find(|record| record.id == id)
        })
    }

    fn append(
        &self,
        draft: NewsDraft,
    ) -> Pin<Box<dyn Future<Output = Result<NewsRecord, NewsError>> + Send + '_>> {
        Box::pin(async move {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(NewsError::Persist {
                    path: "memory".into(),
                    source: std::io::Error::other("simulated write failure"),
                });
            }
            let mut guard = self.records.lock().unwrap_or_else(|e| e.into_inner());
            let created = draft.into_record(next_id(&guard)?);
            guard.push(created.clone());
            Ok(created)
        })
    }
}
