// News records persisted as one pretty-printed JSON array.
// Every read loads the whole file; every append rewrites it through a
// temporary sibling that is synced and renamed over the target.
//
// Appends through one store instance are serialized by an async mutex.
// Separate processes (or separate instances on the same path) still race on
// id assignment: both may read the same last id and the later rename wins.

use crate::domain::{NewsDraft, NewsRecord};
use crate::error::NewsError;
use crate::port::news_store::{NewsStore, StoreSnapshot, next_id};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::{self, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

static TMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub struct JsonFileNewsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileNewsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreSnapshot {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("News store {:?} does not exist yet", self.path);
                return StoreSnapshot::Missing;
            }
            Err(e) => {
                warn!("Failed to read news store {:?}, serving empty list: {e}", self.path);
                return StoreSnapshot::Unreadable {
                    reason: e.to_string(),
                };
            }
        };

        let snapshot = parse_snapshot(&bytes);
        if let StoreSnapshot::Corrupt { reason } = &snapshot {
            warn!("News store {:?} is corrupt, serving empty list: {reason}", self.path);
        }
        snapshot
    }

    async fn persist(&self, records: &[NewsRecord]) -> Result<(), NewsError> {
        let json = serde_json::to_vec_pretty(records)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)
            .await
            .map_err(|source| persist_error(&parent, source))?;

        let file_name = self
            .path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "news.json".to_string());
        let tmp = parent.join(format!(
            ".{}.tmp.{}.{}",
            file_name,
            std::process::id(),
            TMP_SEQUENCE.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = write_synced(&tmp, &json).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(persist_error(&tmp, e));
        }

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(persist_error(&self.path, e));
        }

        Ok(())
    }
}

/// Parse raw store content. Empty content counts as an empty array.
pub(crate) fn parse_snapshot(bytes: &[u8]) -> StoreSnapshot {
    if bytes.is_empty() {
        return StoreSnapshot::Parsed(Vec::new());
    }
    match serde_json::from_slice::<Vec<NewsRecord>>(bytes) {
        Ok(records) => StoreSnapshot::Parsed(records),
        Err(e) => StoreSnapshot::Corrupt {
            reason: e.to_string(),
        },
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

fn persist_error(path: &Path, source: io::Error) -> NewsError {
    NewsError::Persist {
        path: path.to_path_buf(),
        source,
    }
}

impl NewsStore for JsonFileNewsStore {
    fn read_all(&self) -> Pin<Box<dyn Future<Output = StoreSnapshot> + Send + '_>> {
        Box::pin(self.load())
    }

    fn read_by_id(&self, id: u64) -> Pin<Box<dyn Future<Output = Option<NewsRecord>> + Send + '_>> {
        Box::pin(async move {
            self.load()
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
            let _guard = self.write_lock.lock().await;

            let snapshot = self.load().await;
            match &snapshot {
                StoreSnapshot::Unreadable { reason } => {
                    return Err(NewsError::Unreadable {
                        path: self.path.clone(),
                        reason: reason.clone(),
                    });
                }
                StoreSnapshot::Corrupt { .. } => warn!(
                    "Appending to corrupt news store {:?}; previous content will be replaced",
                    self.path
                ),
                StoreSnapshot::Parsed(_) | StoreSnapshot::Missing => {}
            }
            let mut records = snapshot.into_records();

            let created = draft.into_record(next_id(&records)?);
            records.push(created.clone());
            self.persist(&records).await?;

            info!(id = created.id, "Stored news record in {:?}", self.path);
            Ok(created)
        })
    }
}
