use chrono::NaiveDate;
use news_board::config::Settings;
use news_board::test_support::InMemoryNewsStore;
use news_board::{JsonFileNewsStore, NewsDraft, NewsError, NewsRecord, NewsService, NewsStore};
use std::sync::Arc;
use tempfile::TempDir;

fn news(id: u64, title: &str, date: &str) -> NewsRecord {
    NewsDraft {
        title: title.to_string(),
        summary: format!("{title} (resumen)"),
        content: format!("{title} (contenido)"),
        image: format!("/img/{id}.jpg"),
        date: date.to_string(),
    }
    .into_record(id)
}

fn seeded(count: u64) -> Vec<NewsRecord> {
    (1..=count)
        .map(|id| {
            let date = match id % 3 {
                0 => "2025-10-30",
                1 => "2025-10-28",
                _ => "2025-10-29",
            };
            news(id, &format!("Noticia {id}"), date)
        })
        .collect()
}

fn service_with(records: Vec<NewsRecord>) -> (Arc<InMemoryNewsStore>, NewsService) {
    let store = Arc::new(InMemoryNewsStore::with_records(records));
    let service = NewsService::new(store.clone(), 6);
    (store, service)
}

#[tokio::test]
async fn test_list_paginates_all_news() {
    let (_, service) = service_with(seeded(13));

    let first = service.list(1).await;
    assert_eq!(first.title, "Todas las Noticias");
    assert_eq!(first.news.len(), 6);
    assert_eq!(first.page, 1);
    assert_eq!(first.total_pages, 3);
    assert!(first.search.is_empty());

    assert_eq!(service.list(3).await.news.len(), 1);
    assert!(service.list(4).await.news.is_empty());
}

#[tokio::test]
async fn test_list_on_empty_store_reports_zero_pages() {
    let (_, service) = service_with(Vec::new());

    let view = service.list(1).await;
    assert!(view.news.is_empty());
    assert_eq!(view.total_pages, 0);
}

#[tokio::test]
async fn test_every_call_rereads_the_store() {
    let (store, service) = service_with(seeded(2));

    service.list(1).await;
    service.search(Some("x"), 1).await;
    service.jornada(1, 1).await;
    assert_eq!(store.read_count(), 3);
}

#[tokio::test]
async fn test_jornada_lists_only_its_date() {
    let (_, service) = service_with(seeded(13));

    let view = service.jornada(1, 1).await.unwrap();
    assert_eq!(view.title, "Jornada 1");
    assert!(view.news.iter().all(|n| n.date == "2025-10-28"));
    // ids 1, 4, 7, 10, 13
    assert_eq!(view.news.len(), 5);
    assert_eq!(view.total_pages, 1);
}

#[tokio::test]
async fn test_unknown_jornada_is_none() {
    let (_, service) = service_with(seeded(13));

    assert!(service.jornada(99, 1).await.is_none());
    assert!(service.jornada(0, 1).await.is_none());
}

#[tokio::test]
async fn test_known_jornada_without_news_is_empty_listing() {
    let (_, service) = service_with(vec![news(1, "solo", "2025-10-28")]);

    let view = service.jornada(3, 1).await.unwrap();
    assert!(view.news.is_empty());
    assert_eq!(view.total_pages, 0);
}

#[tokio::test]
async fn test_search_lowercases_and_echoes_term() {
    let (_, service) = service_with(vec![
        news(1, "Alpha", "d"),
        news(2, "Beta", "d"),
        news(3, "Alphabet", "d"),
    ]);

    let view = service.search(Some("ALPHA"), 1).await;
    assert_eq!(view.title, "Resultados para \"alpha\"");
    assert_eq!(view.search, "alpha");
    let ids: Vec<u64> = view.news.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_search_without_term_lists_everything() {
    let (_, service) = service_with(seeded(4));

    let view = service.search(None, 1).await;
    assert_eq!(view.title, "Noticias");
    assert!(view.search.is_empty());
    assert_eq!(view.news.len(), 4);

    let view = service.search(Some(""), 1).await;
    assert_eq!(view.news.len(), 4);
}

#[tokio::test]
async fn test_search_results_are_paginated() {
    let (_, service) = service_with(seeded(13));

    let view = service.search(Some("noticia"), 3).await;
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.news.len(), 1);
    assert_eq!(view.news[0].id, 13);
}

#[tokio::test]
async fn test_detail_found_and_missing() {
    let (_, service) = service_with(seeded(3));

    let view = service.detail(2).await.unwrap();
    assert_eq!(view.title, "Noticia 2");
    assert_eq!(view.article.id, 2);

    assert!(service.detail(42).await.is_none());
}

#[tokio::test]
async fn test_create_fills_missing_date() {
    let (store, service) = service_with(Vec::new());
    let today = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();

    let created = service
        .create_on(
            NewsDraft {
                title: "Sin fecha".into(),
                date: "   ".into(),
                ..NewsDraft::default()
            },
            today,
        )
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.date, "5/11/2025");
    assert_eq!(store.records(), vec![created]);
}

#[tokio::test]
async fn test_create_keeps_given_date() {
    let (_, service) = service_with(seeded(2));
    let today = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();

    let created = service
        .create_on(
            NewsDraft {
                title: "Con fecha".into(),
                date: "2025-10-29".into(),
                ..NewsDraft::default()
            },
            today,
        )
        .await
        .unwrap();

    assert_eq!(created.id, 3);
    assert_eq!(created.date, "2025-10-29");
}

#[tokio::test]
async fn test_create_uses_today_when_undated() {
    let (_, service) = service_with(Vec::new());

    let created = service.create(NewsDraft::default()).await.unwrap();
    assert!(!created.date.is_empty());
    assert_eq!(created.date.matches('/').count(), 2);
}

#[tokio::test]
async fn test_create_propagates_write_failure() {
    let (store, service) = service_with(Vec::new());
    store.set_should_fail(true);

    let err = service.create(NewsDraft::default()).await.unwrap_err();
    assert!(matches!(err, NewsError::Persist { .. }));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_service_over_json_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings {
        db_path: temp_dir.path().join("database").join("news.json"),
        page_size: 2,
    };
    let store: Arc<dyn NewsStore> = Arc::new(JsonFileNewsStore::new(&settings.db_path));
    let service = NewsService::from_settings(store, &settings);
    assert_eq!(service.page_size(), 2);

    for title in ["Previa", "Crónica", "Resumen"] {
        service
            .create(NewsDraft {
                title: title.into(),
                date: "2025-10-29".into(),
                ..NewsDraft::default()
            })
            .await
            .unwrap();
    }

    let view = service.jornada(2, 2).await.unwrap();
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.news.len(), 1);
    assert_eq!(view.news[0].title, "Resumen");

    let found = service.search(Some("CRÓN"), 1).await;
    assert_eq!(found.news.len(), 1);
    assert_eq!(service.detail(2).await.unwrap().title, "Crónica");
}

#[tokio::test]
async fn test_list_view_serializes_for_templates() {
    let (_, service) = service_with(seeded(1));

    let value = serde_json::to_value(service.list(1).await).unwrap();
    assert_eq!(value["title"], "Todas las Noticias");
    assert_eq!(value["page"], 1);
    assert_eq!(value["total_pages"], 1);
    assert_eq!(value["news"][0]["id"], 1);
}
