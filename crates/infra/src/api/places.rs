//! HTTP client for the nearby-place search endpoint.

use async_trait::async_trait;
use biterec_core::PlaceSearch;
use biterec_domain::{ApiConfig, PlaceSearchResponse, Result};
use tracing::{debug, instrument};

use super::errors::ApiError;

/// Reqwest-backed implementation of [`PlaceSearch`].
pub struct PlaceSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlaceSearchClient {
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
}

#[async_trait]
impl PlaceSearch for PlaceSearchClient {
    #[instrument(skip(self))]
    async fn search(&self, zip: &str, query: &str) -> Result<PlaceSearchResponse> {
        let mut params = vec![("zip", zip)];
        if !query.is_empty() {
            params.push(("q", query));
        }

        let response = self
            .http
            .get(format!("{}/places", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let err = if status.is_server_error() {
                ApiError::Server { status: status.as_u16(), message }
            } else {
                ApiError::Client { status: status.as_u16(), message }
            };
            return Err(err.into());
        }

        let body: PlaceSearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Bad place search response: {e}")))?;
        debug!(count = body.count, places = body.places.len(), "place search complete");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use biterec_domain::BiteRecError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> PlaceSearchClient {
        PlaceSearchClient::new(&ApiConfig { base_url: server.uri(), timeout_secs: None })
            .expect("client")
    }

    #[tokio::test]
    async fn search_sends_zip_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places"))
            .and(query_param("zip", "83702"))
            .and(query_param("q", "ramen"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "center": { "lat": 43.6, "lon": -116.2 },
                "count": 1,
                "places": [{
                    "externalId": "osm-1",
                    "name": "Ramen Sho",
                    "lat": 43.61,
                    "lon": -116.21,
                    "cuisine": "ramen",
                    "openingHours": "Mo-Su 11:00-21:00"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).search("83702", "ramen").await.unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.places[0].place_id(), Some("osm-1"));
        assert!(result.center.is_some());
    }

    #[tokio::test]
    async fn empty_query_is_omitted_from_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places"))
            .and(query_param("zip", "83702"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 0, "places": []
            })))
            .mount(&server)
            .await;

        let result = client(&server).search("83702", "").await.unwrap();
        assert!(result.places.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].url.query().unwrap_or("").contains("q="));
    }

    #[tokio::test]
    async fn failures_surface_as_network_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client(&server).search("83702", "").await.unwrap_err();
        assert!(matches!(err, BiteRecError::Network(_)));
    }
}
