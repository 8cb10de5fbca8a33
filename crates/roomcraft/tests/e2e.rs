// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the complete transform pipeline.
//!
//! Each test wires the real Supabase adapter to a wiremock server, so the
//! store, orchestrator, history write, and HTTP encoding are exercised
//! together. Tests are independent and order-insensitive.

use std::sync::Arc;

use roomcraft_config::RoomcraftConfig;
use roomcraft_core::{FlowKind, ImageRef, MaskPoint, NotificationKind};
use roomcraft_state::RoomStore;
use roomcraft_supabase::SupabaseBackend;
use roomcraft_test_utils::RecordingNotifier;
use roomcraft_transform::{
    HistoryReader, ProgressSettings, RunOutcome, TransformOrchestrator, run_active_flow,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> RoomcraftConfig {
    let mut config = RoomcraftConfig::default();
    config.supabase.url = server.uri();
    config.supabase.anon_key = Some("anon-e2e".into());
    config
}

fn orchestrator(
    config: &RoomcraftConfig,
    notifier: Arc<RecordingNotifier>,
) -> TransformOrchestrator {
    let backend = Arc::new(SupabaseBackend::new(&config.supabase).unwrap());
    TransformOrchestrator::new(
        backend.clone(),
        backend,
        notifier,
        ProgressSettings::from(&config.progress),
    )
}

// ---- Test 1: object removal end to end ----

#[tokio::test]
async fn object_removal_sends_mask_and_records_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/transform-room"))
        .and(body_partial_json(serde_json::json!({
            "imageBase64": "data:image/jpeg;base64,QUJD",
            "action": "erase",
            "color": "#E86A12",
            "maskData": "[[{\"x\":4.0,\"y\":2.0}]]"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"imageUrl": "https://cdn/clean.jpg"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/room_transformations"))
        .and(body_partial_json(serde_json::json!({
            "original_image_url": "data:image/jpeg;base64,QUJD",
            "transformed_image_url": "https://cdn/clean.jpg",
            "transformation_type": "object_remove",
            "style_name": "Obje Silme"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let notifier = Arc::new(RecordingNotifier::new());
    let orchestrator = orchestrator(&config, notifier.clone());

    let mut store = RoomStore::new(&config.session);
    store.set_active_flow(FlowKind::ObjectRemove);
    store.set_original_image(Some(ImageRef::from("data:image/jpeg;base64,QUJD")));
    store.add_mask_stroke(vec![MaskPoint::new(4.0, 2.0)]);
    let store = store.into_shared();

    let outcome = run_active_flow(&store, &orchestrator).await;

    assert!(outcome.is_success(), "got {outcome:?}");
    let guard = store.lock().await;
    assert_eq!(
        guard.transformed_image(),
        Some(&ImageRef::from("https://cdn/clean.jpg"))
    );
    assert_eq!(guard.credits(), 96);
    assert_eq!(notifier.count(NotificationKind::Success), 1);
}

// ---- Test 2: backend failure ----

#[tokio::test]
async fn backend_error_fails_run_and_skips_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/transform-room"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "AI service unavailable"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/room_transformations"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let notifier = Arc::new(RecordingNotifier::new());
    let orchestrator = orchestrator(&config, notifier.clone());

    let mut store = RoomStore::new(&config.session);
    store.set_original_image(Some(ImageRef::from("data:image/jpeg;base64,QUJD")));
    let store = store.into_shared();

    let outcome = run_active_flow(&store, &orchestrator).await;

    let RunOutcome::Failed(result) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(result.error.as_deref(), Some("AI service unavailable"));
    assert_eq!(orchestrator.progress(), 100.0);
    let last = notifier.last().unwrap();
    assert_eq!(last.title, "Hata");
    assert_eq!(last.message, "AI service unavailable");
}

// ---- Test 3: history listing ----

#[tokio::test]
async fn history_reader_lists_rows_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/room_transformations"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "older",
                "original_image_url": "a",
                "transformed_image_url": "b",
                "transformation_type": "floor_replace",
                "style_name": "Zemin: Modern",
                "created_at": "2026-01-01T00:00:00+00:00"
            },
            {
                "id": "newer",
                "original_image_url": "c",
                "transformed_image_url": "d",
                "transformation_type": "style_change",
                "style_name": "Modern",
                "created_at": "2026-02-01T00:00:00+00:00"
            }
        ])))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = Arc::new(SupabaseBackend::new(&config.supabase).unwrap());
    let reader = HistoryReader::with_limit(backend, 2);

    let ids: Vec<_> = reader
        .fetch_history()
        .await
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["newer", "older"]);
}

#[tokio::test]
async fn history_reader_swallows_backend_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = Arc::new(SupabaseBackend::new(&config.supabase).unwrap());
    let reader = HistoryReader::new(backend);
    assert!(reader.fetch_history().await.is_empty());
}
