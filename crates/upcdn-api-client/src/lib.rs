//! HTTP client for the Upcdn REST API.
//!
//! Provides a minimal client with configurable auth (project key pair or
//! Bearer token), generic GET/POST/PUT/DELETE helpers, and domain methods
//! for files, groups, webhooks, and the project resource. CDN delivery URLs
//! are built locally via `upcdn-core` without touching the network.

pub mod api;
pub mod models;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use upcdn_core::{Config, ImageTransformation, SecureUrlBuilder, UpcdnError};

/// Authentication strategy for the API.
#[derive(Clone, Debug)]
pub enum Auth {
    /// `Authorization: Upcdn.Simple {public_key}:{secret_key}`
    Simple {
        public_key: String,
        secret_key: String,
    },
    /// `Authorization: Bearer {token}`
    Bearer(String),
}

/// API version prefix (e.g. "/v0"). Set UPCDN_API_VERSION to match the server.
pub fn api_prefix() -> String {
    let version = std::env::var("UPCDN_API_VERSION").unwrap_or_else(|_| "v0".to_string());
    format!("/{}", version)
}

/// HTTP client for the Upcdn REST API with configurable auth.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    cdn_base: String,
    auth: Auth,
}

impl ApiClient {
    pub fn new(base_url: String, cdn_base: String, auth: Auth) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cdn_base: cdn_base.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create a client from a loaded [`Config`]. Simple key-pair auth when a
    /// secret key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let secret_key = config
            .secret_key
            .clone()
            .ok_or(UpcdnError::MissingSecretKey)?;
        Self::new(
            config.api_base.clone(),
            config.cdn_base.clone(),
            Auth::Simple {
                public_key: config.public_key.clone(),
                secret_key,
            },
        )
    }

    /// Create a client from `UPCDN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Self::from_config(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cdn_base(&self) -> &str {
        &self.cdn_base
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Delivery URL for a file with an applied transformation (no API call).
    pub fn cdn_url(&self, file_id: &str, transformation: &ImageTransformation) -> String {
        format!("https://{}/{}", self.cdn_base, transformation.path(file_id))
    }

    /// Signed delivery URL for a file with an applied transformation.
    pub fn signed_cdn_url(
        &self,
        file_id: &str,
        transformation: &ImageTransformation,
        signer: &SecureUrlBuilder,
    ) -> String {
        signer.build(&transformation.path(file_id))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::Simple {
                public_key,
                secret_key,
            } => request.header(
                "Authorization",
                format!("Upcdn.Simple {}:{}", public_key, secret_key),
            ),
            Auth::Bearer(token) => request.header("Authorization", format!("Bearer {}", token)),
        }
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(path);
        let mut request = self.client.get(&url);
        request = self.apply_auth(request);

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.context("Failed to send request")?;
        Self::handle_response(response).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.client.post(&url).json(body);
        let request = self.apply_auth(request);

        let response = request.send().await.context("Failed to send request")?;
        Self::handle_response(response).await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.client.put(&url).json(body);
        let request = self.apply_auth(request);

        let response = request.send().await.context("Failed to send request")?;
        Self::handle_response(response).await
    }

    /// PUT without a body and deserialize response.
    pub async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        let request = self.client.put(&url);
        let request = self.apply_auth(request);

        let response = request.send().await.context("Failed to send request")?;
        Self::handle_response(response).await
    }

    /// DELETE request. Returns Ok(()) on success.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        let request = self.client.delete(&url);
        let request = self.apply_auth(request);

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        Ok(())
    }

    /// DELETE with a JSON body (used by batch endpoints) and deserialize
    /// response.
    pub async fn delete_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.client.delete(&url).json(body);
        let request = self.apply_auth(request);

        let response = request.send().await.context("Failed to send request")?;
        Self::handle_response(response).await
    }

    /// Raw client for custom requests. Caller must apply auth via build_url
    /// and headers.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

// Re-export domain response types for convenience.
pub use models::{
    FileInfo, FileList, GroupInfo, GroupList, ProjectInfo, WebhookEvent, WebhookInfo,
};
