//! OSRM route service HTTP client.
//!
//! Issues `GET {base}/route/v1/{profile}/{lng,lat;...}` requests and converts
//! the first route candidate into a [`RouteSummary`].

use std::future::Future;
use std::time::Duration;

use crate::domain::{Coordinate, RouteSummary, format_waypoints};

use super::engine::RoutingEngine;
use super::error::RoutingError;
use super::types::RouteResponse;

/// Default base URL: the public OSRM car instance run by FOSSGIS.
const DEFAULT_BASE_URL: &str = "https://routing.openstreetmap.de/routed-car";

/// Default routing profile path segment.
const DEFAULT_PROFILE: &str = "driving";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed query parameters sent with every route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequestOptions {
    /// Path overview detail: `full`, `simplified` or `false`.
    pub overview: String,
    /// Geometry encoding: `geojson` or `polyline`.
    pub geometries: String,
    /// Whether to request turn-by-turn steps. Steps are not read back yet.
    pub steps: bool,
}

impl RouteRequestOptions {
    fn query(&self) -> [(&'static str, String); 3] {
        [
            ("overview", self.overview.clone()),
            ("geometries", self.geometries.clone()),
            ("steps", self.steps.to_string()),
        ]
    }
}

impl Default for RouteRequestOptions {
    fn default() -> Self {
        Self {
            overview: "full".to_string(),
            geometries: "geojson".to_string(),
            steps: true,
        }
    }
}

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Base URL of the OSRM instance, without the `/route/v1` suffix
    pub base_url: String,
    /// Routing profile, e.g. `driving`
    pub profile: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Query parameters sent with every request
    pub options: RouteRequestOptions,
}

impl RoutingConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            options: RouteRequestOptions::default(),
        }
    }

    /// Set a custom base URL (self-hosted engine, or a mock server in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_options(mut self, options: RouteRequestOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OSRM route service client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
    profile: String,
    options: RouteRequestOptions,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            profile: config.profile,
            options: config.options,
        })
    }

    /// Request URL for the given waypoints, without query parameters.
    pub fn route_url(&self, waypoints: &[Coordinate]) -> String {
        format!(
            "{}/route/v1/{}/{}",
            self.base_url,
            self.profile,
            format_waypoints(waypoints)
        )
    }

    /// Fetch a route through `waypoints`.
    ///
    /// Any non-success HTTP status is returned as [`RoutingError::Api`] with
    /// the response body verbatim as the message.
    pub async fn fetch_route(&self, waypoints: &[Coordinate]) -> Result<RouteSummary, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::TooFewWaypoints(waypoints.len()));
        }

        let response = self
            .http
            .get(self.route_url(waypoints))
            .query(&self.options.query())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: RouteResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        parsed.into_summary()
    }
}

impl RoutingEngine for OsrmClient {
    fn route(
        &self,
        waypoints: &[Coordinate],
    ) -> impl Future<Output = Result<RouteSummary, RoutingError>> + Send {
        self.fetch_route(waypoints)
    }
}
