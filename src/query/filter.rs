use crate::domain::NewsRecord;
use crate::query::jornada::Jornada;

/// Records whose title contains `term`, ignoring case. An empty term keeps everything.
#[must_use]
pub fn filter_by_title_contains(items: Vec<NewsRecord>, term: Option<&str>) -> Vec<NewsRecord> {
    let needle = match term {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return items,
    };

    items
        .into_iter()
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .collect()
}

/// Records filed under jornada `bucket_key`.
///
/// Returns `None` when the key names no jornada, so callers can tell an
/// unknown jornada apart from one without news.
#[must_use]
pub fn filter_by_date_bucket(items: Vec<NewsRecord>, bucket_key: i64) -> Option<Vec<NewsRecord>> {
    let jornada = Jornada::from_number(bucket_key)?;
    Some(
        items
            .into_iter()
            .filter(|record| record.date == jornada.date)
            .collect(),
    )
}
