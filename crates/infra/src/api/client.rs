//! HTTP client for the BiteRec backend (profile + restaurants).

use async_trait::async_trait;
use biterec_core::{ListQuery, RestaurantApi};
use biterec_domain::utils::ids::restaurant_id;
use biterec_domain::{ApiConfig, RemoteProfile, Result, RestaurantRecord};
use reqwest::Response;
use serde_json::Value;
use tracing::{debug, instrument};

use super::errors::ApiError;
use super::shape;

/// Reqwest-backed implementation of [`RestaurantApi`].
///
/// Requests carry no timeout unless one is configured; the client waits on
/// the transport, matching the backend's own behavior. JSON headers are
/// sent only on PUT.
pub struct BiteRecApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BiteRecApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl RestaurantApi for BiteRecApiClient {
    #[instrument(skip(self))]
    async fn fetch_profile(&self) -> Result<RemoteProfile> {
        let response = self.http.get(self.url("/me")).send().await.map_err(ApiError::from)?;
        let response = check(response).await?;
        let profile = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Bad profile document: {e}")))?;
        Ok(profile)
    }

    #[instrument(skip(self, profile))]
    async fn save_profile(&self, profile: &RemoteProfile) -> Result<()> {
        let response = self
            .http
            .put(self.url("/me"))
            .json(profile)
            .send()
            .await
            .map_err(ApiError::from)?;
        check(response).await?;
        Ok(())
    }

    #[instrument(skip(self, query), fields(profile_id = %profile_id))]
    async fn fetch_restaurants(
        &self,
        profile_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<RestaurantRecord>> {
        let mut params = vec![("profileId", profile_id)];
        if !query.q.is_empty() {
            params.push(("q", &query.q));
        }
        if !query.status.is_empty() {
            params.push(("status", &query.status));
        }
        if !query.tag.is_empty() {
            params.push(("tag", &query.tag));
        }

        let response = self
            .http
            .get(self.url("/restaurants"))
            .query(&params)
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = check(response).await?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Bad restaurant list: {e}")))?;
        let records = shape::restaurant_list(payload);
        debug!(count = records.len(), "fetched restaurants");
        Ok(records)
    }

    #[instrument(skip(self, record), fields(name = %record.name))]
    async fn save_restaurant(&self, record: &RestaurantRecord) -> Result<RestaurantRecord> {
        let mut payload = record.clone();
        if payload.restaurant_id.is_empty() {
            payload.restaurant_id = restaurant_id();
        }

        let response = self
            .http
            .put(self.url(&format!(
                "/restaurants/{}",
                urlencoding::encode(&payload.restaurant_id)
            )))
            .json(&payload)
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = check(response).await?;

        // The backend echoes the saved document; fall back to our payload
        // when the body is empty.
        let body = response.text().await.map_err(ApiError::from)?;
        if body.trim().is_empty() {
            return Ok(payload);
        }
        let saved = serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Bad saved restaurant: {e}")))?;
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn delete_restaurant(&self, restaurant_id: &str, profile_id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!(
                "/restaurants/{}",
                urlencoding::encode(restaurant_id)
            )))
            .query(&[("profileId", profile_id)])
            .send()
            .await
            .map_err(ApiError::from)?;
        // 204/empty bodies are fine on delete.
        check(response).await?;
        Ok(())
    }
}

/// Map non-success statuses to [`ApiError`], passing successes through.
async fn check(response: Response) -> std::result::Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    if status.is_server_error() {
        Err(ApiError::Server { status: status.as_u16(), message })
    } else {
        Err(ApiError::Client { status: status.as_u16(), message })
    }
}
