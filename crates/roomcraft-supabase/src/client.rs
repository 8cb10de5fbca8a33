// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Supabase edge function and REST endpoints.
//!
//! Provides [`SupabaseClient`] which handles URL construction, the `apikey`
//! and bearer headers, and error-body decoding. Calls are made once; there
//! is no retry.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use roomcraft_config::model::SupabaseConfig;
use roomcraft_core::{
    HistoryRecord, NewHistoryRecord, RoomcraftError, TransformReply, TransformRequest,
};
use tracing::debug;

use crate::types::error_message_from_body;

/// HTTP client for one Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    transform_function: String,
    history_table: String,
}

impl SupabaseClient {
    /// Creates a client for the project described by `config`.
    pub fn new(config: &SupabaseConfig) -> Result<Self, RoomcraftError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = config.anon_key.as_deref() {
            headers.insert(
                "apikey",
                HeaderValue::from_str(key).map_err(|e| {
                    RoomcraftError::Config(format!("invalid anon key header value: {e}"))
                })?,
            );
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
                    RoomcraftError::Config(format!("invalid authorization header value: {e}"))
                })?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoomcraftError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            transform_function: config.transform_function.clone(),
            history_table: config.history_table.clone(),
        })
    }

    /// Project base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn function_url(&self) -> String {
        format!("{}/functions/v1/{}", self.base_url, self.transform_function)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.history_table)
    }

    /// Invokes the transform edge function with the full request body.
    ///
    /// A non-2xx status is a transport error carrying the body's `error`
    /// text when present. A 2xx body is decoded as-is, including a body that
    /// only carries `error`.
    pub async fn invoke_transform(
        &self,
        request: &TransformRequest,
    ) -> Result<TransformReply, RoomcraftError> {
        let response = self
            .client
            .post(self.function_url())
            .json(request)
            .send()
            .await
            .map_err(|e| RoomcraftError::Transport {
                message: format!("transform request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "transform response received");

        let body = read_body(response).await?;
        if !status.is_success() {
            return Err(RoomcraftError::transport(failure_message(
                "transform service",
                status,
                &body,
            )));
        }

        serde_json::from_str(&body).map_err(|e| RoomcraftError::Transport {
            message: format!("failed to parse transform response: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Inserts one row into the history table.
    pub async fn insert_history(&self, record: &NewHistoryRecord) -> Result<(), RoomcraftError> {
        let response = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| RoomcraftError::History {
                message: format!("history insert failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "history insert response received");
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RoomcraftError::history(failure_message(
            "history insert",
            status,
            &body,
        )))
    }

    /// Selects up to `limit` history rows, newest first.
    pub async fn select_history(&self, limit: usize) -> Result<Vec<HistoryRecord>, RoomcraftError> {
        let url = format!(
            "{}?select=*&order=created_at.desc&limit={limit}",
            self.table_url()
        );
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RoomcraftError::History {
                message: format!("history query failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, limit, "history query response received");
        let body = response.text().await.map_err(|e| RoomcraftError::History {
            message: format!("failed to read history response: {e}"),
            source: Some(Box::new(e)),
        })?;
        if !status.is_success() {
            return Err(RoomcraftError::history(failure_message(
                "history query",
                status,
                &body,
            )));
        }

        serde_json::from_str(&body).map_err(|e| RoomcraftError::History {
            message: format!("failed to parse history rows: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

async fn read_body(response: Response) -> Result<String, RoomcraftError> {
    response.text().await.map_err(|e| RoomcraftError::Transport {
        message: format!("failed to read response body: {e}"),
        source: Some(Box::new(e)),
    })
}

fn failure_message(what: &str, status: StatusCode, body: &str) -> String {
    error_message_from_body(body).unwrap_or_else(|| format!("{what} returned {status}"))
}
