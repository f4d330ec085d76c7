//! HTTP facade for the Noteboard API
//!
//! One client, one base URL, read once at startup

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde_json::json;

const BASE_URL_VAR: &str = "NOTEBOARD_API_URL";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// A note as the API serves it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Client for all note endpoints
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client from environment configuration
    pub fn from_env() -> Self {
        let base_url = match std::env::var(BASE_URL_VAR) {
            Ok(value) if !value.is_empty() => value,
            _ => DEFAULT_BASE_URL.to_string(),
        };

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let response = self
            .http
            .get(format!("{}/notes", self.base_url))
            .send()
            .await
            .context("could not reach the server")?;

        if !response.status().is_success() {
            bail!(error_message(response).await);
        }

        response.json().await.context("unexpected response body")
    }

    pub async fn get_note(&self, id: &str) -> Result<Note> {
        let response = self
            .http
            .get(format!("{}/notes/{id}", self.base_url))
            .send()
            .await
            .context("could not reach the server")?;

        if !response.status().is_success() {
            bail!(error_message(response).await);
        }

        response.json().await.context("unexpected response body")
    }

    pub async fn create_note(&self, title: &str, content: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/notes", self.base_url))
            .json(&json!({ "title": title, "content": content }))
            .send()
            .await
            .context("could not reach the server")?;

        confirmation(response).await
    }

    pub async fn update_note(&self, id: &str, title: &str, content: &str) -> Result<String> {
        let response = self
            .http
            .put(format!("{}/notes/{id}", self.base_url))
            .json(&json!({ "title": title, "content": content }))
            .send()
            .await
            .context("could not reach the server")?;

        confirmation(response).await
    }

    pub async fn delete_note(&self, id: &str) -> Result<String> {
        let response = self
            .http
            .delete(format!("{}/notes/{id}", self.base_url))
            .send()
            .await
            .context("could not reach the server")?;

        confirmation(response).await
    }
}

/// Extract the `{"message": ...}` of a successful mutation
async fn confirmation(response: reqwest::Response) -> Result<String> {
    if !response.status().is_success() {
        bail!(error_message(response).await);
    }

    let body = response
        .json::<MessageBody>()
        .await
        .context("unexpected response body")?;

    Ok(body.message)
}

/// The server's message for a failed request, or a status line fallback
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();

    match response.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("server responded with {status}"),
    }
}
