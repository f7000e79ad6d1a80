use crate::domain::{NewsDraft, NewsRecord};
use crate::error::NewsError;
use std::future::Future;
use std::pin::Pin;

/// Outcome of reading the whole record sequence.
///
/// Read problems never surface as errors; they are reported here and
/// collapse to an empty sequence in [`StoreSnapshot::into_records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSnapshot {
    /// The backing content parsed as a record array (possibly empty).
    Parsed(Vec<NewsRecord>),
    /// The backing location does not exist.
    Missing,
    /// The backing content is not a JSON array of records.
    Corrupt { reason: String },
    /// The backing location exists but could not be read.
    Unreadable { reason: String },
}

impl StoreSnapshot {
    #[must_use]
    pub fn into_records(self) -> Vec<NewsRecord> {
        match self {
            Self::Parsed(records) => records,
            Self::Missing | Self::Corrupt { .. } | Self::Unreadable { .. } => Vec::new(),
        }
    }

    /// True when the records came from successfully parsed content.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// Record store for news articles.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`,
/// so consumers hold it as `Arc<dyn NewsStore>`.
pub trait NewsStore: Send + Sync {
    /// Read every record in insertion order.
    fn read_all(&self) -> Pin<Box<dyn Future<Output = StoreSnapshot> + Send + '_>>;

    /// First record whose id equals `id`, if any.
    fn read_by_id(&self, id: u64) -> Pin<Box<dyn Future<Output = Option<NewsRecord>> + Send + '_>>;

    /// Store `draft` under the next id and return the stored record.
    fn append(
        &self,
        draft: NewsDraft,
    ) -> Pin<Box<dyn Future<Output = Result<NewsRecord, NewsError>> + Send + '_>>;
}

/// Next id for a sequence: last record's id + 1, or 1 when empty.
///
/// # Errors
/// Returns [`NewsError::IdsExhausted`] when the last id is `u64::MAX`.
pub fn next_id(records: &[NewsRecord]) -> Result<u64, NewsError> {
    match records.last() {
        None => Ok(1),
        Some(last) => last
            .id
            .checked_add(1)
            .ok_or(NewsError::IdsExhausted { last_id: last.id }),
    }
}
