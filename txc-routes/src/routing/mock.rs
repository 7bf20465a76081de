//! Mock routing engine for running the enricher without a live OSRM instance.
//!
//! Responses are registered per waypoint list and served as if they came
//! from the engine. Unregistered waypoint lists fail like an unknown route.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Coordinate, RouteSummary, format_waypoints};

use super::engine::RoutingEngine;
use super::error::RoutingError;

#[derive(Debug, Clone)]
enum MockResponse {
    Route(RouteSummary),
    Failure { status: u16, message: String },
}

/// Routing engine that serves canned responses keyed by waypoints.
#[derive(Debug, Clone, Default)]
pub struct MockRoutingEngine {
    responses: Arc<HashMap<String, MockResponse>>,
    calls: Arc<AtomicUsize>,
}

impl MockRoutingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `summary` for requests through exactly these waypoints.
    pub fn with_route(self, waypoints: &[Coordinate], summary: RouteSummary) -> Self {
        self.insert(waypoints, MockResponse::Route(summary))
    }

    /// Fail requests through these waypoints with an HTTP status and body.
    pub fn with_failure(
        self,
        waypoints: &[Coordinate],
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.insert(
            waypoints,
            MockResponse::Failure {
                status,
                message: message.into(),
            },
        )
    }

    /// Number of route requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn insert(self, waypoints: &[Coordinate], response: MockResponse) -> Self {
        let mut responses = Arc::unwrap_or_clone(self.responses);
        responses.insert(format_waypoints(waypoints), response);
        Self {
            responses: Arc::new(responses),
            calls: self.calls,
        }
    }

    fn respond(&self, waypoints: &[Coordinate]) -> Result<RouteSummary, RoutingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = format_waypoints(waypoints);
        match self.responses.get(&key) {
            Some(MockResponse::Route(summary)) => Ok(summary.clone()),
            Some(MockResponse::Failure { status, message }) => Err(RoutingError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Err(RoutingError::Api {
                status: 404,
                message: format!("no mock route for {key}"),
            }),
        }
    }
}

impl RoutingEngine for MockRoutingEngine {
    fn route(
        &self,
        waypoints: &[Coordinate],
    ) -> impl Future<Output = Result<RouteSummary, RoutingError>> + Send {
        std::future::ready(self.respond(waypoints))
    }
}
