// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supabase backend adapter for Roomcraft.
//!
//! This crate implements [`TransformService`] over the transform edge
//! function and [`HistoryStore`] over the history table's REST endpoint.

pub mod client;
pub mod types;

use async_trait::async_trait;
use roomcraft_config::model::SupabaseConfig;
use roomcraft_core::error::RoomcraftError;
use roomcraft_core::traits::{HistoryStore, RemoteAdapter, TransformService};
use roomcraft_core::types::{HistoryRecord, NewHistoryRecord, TransformReply, TransformRequest};
use tracing::{debug, info};

use crate::client::SupabaseClient;

/// One Supabase project serving both the transform function and history.
pub struct SupabaseBackend {
    client: SupabaseClient,
}

impl SupabaseBackend {
    /// Creates a backend from the `[supabase]` configuration section.
    pub fn new(config: &SupabaseConfig) -> Result<Self, RoomcraftError> {
        let client = SupabaseClient::new(config)?;
        info!(
            url = client.base_url(),
            function = config.transform_function,
            table = config.history_table,
            authenticated = config.anon_key.is_some(),
            "Supabase backend initialized"
        );
        Ok(Self { client })
    }
}

impl RemoteAdapter for SupabaseBackend {
    fn name(&self) -> &str {
        "supabase"
    }
}

#[async_trait]
impl TransformService for SupabaseBackend {
    async fn transform(
        &self,
        request: &TransformRequest,
    ) -> Result<TransformReply, RoomcraftError> {
        debug!(action = %request.action, masked = request.mask_data.is_some(), "invoking transform function");
        self.client.invoke_transform(request).await
    }
}

#[async_trait]
impl HistoryStore for SupabaseBackend {
    async fn insert(&self, record: &NewHistoryRecord) -> Result<(), RoomcraftError> {
        self.client.insert_history(record).await
    }

    async fn recent(&self, limit: usize) -> Result<Vec<HistoryRecord>, RoomcraftError> {
        self.client.select_history(limit).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn backend_name() {
        let backend = SupabaseBackend::new(&SupabaseConfig::default()).unwrap();
        assert_eq!(backend.name(), "supabase");
    }

    #[test]
    fn invalid_key_is_config_error() {
        let config = SupabaseConfig {
            anon_key: Some("bad\nkey".into()),
            ..SupabaseConfig::default()
        };
        let err = SupabaseBackend::new(&config).err().unwrap();
        assert!(matches!(err, RoomcraftError::Config(_)), "got: {err}");
    }

    #[tokio::test]
    async fn backend_serves_both_traits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/room_transformations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/functions/v1/transform-room"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"imageUrl": "https://out"})),
            )
            .mount(&server)
            .await;

        let backend = Arc::new(
            SupabaseBackend::new(&SupabaseConfig {
                url: server.uri(),
                ..SupabaseConfig::default()
            })
            .unwrap(),
        );
        let history: Arc<dyn HistoryStore> = backend.clone();
        let service: Arc<dyn TransformService> = backend;

        assert!(history.recent(10).await.unwrap().is_empty());

        let request = TransformRequest {
            image_base64: "data:image/jpeg;base64,AA==".into(),
            room_type: "Mutfak".into(),
            design_style: "Modern".into(),
            action: roomcraft_core::Action::Redesign,
            color: Some("#E86A12".into()),
            mask_data: None,
        };
        let reply = service.transform(&request).await.unwrap();
        assert_eq!(reply.image_url.as_deref(), Some("https://out"));
    }
}
