//! Per-line route enrichment.

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::{RouteResult, ServiceCode};
use crate::routing::{RoutingEngine, RoutingError};
use crate::store::{LineStore, RouteStore, StoreError};

/// A line whose route request failed.
#[derive(Debug)]
pub struct LineFailure {
    pub line: ServiceCode,
    pub error: RoutingError,
}

/// Summary of one enrichment run, in registry order.
#[derive(Debug, Default)]
pub struct EnrichReport {
    pub written: Vec<ServiceCode>,
    pub failed: Vec<LineFailure>,
}

/// What happened to a single line.
#[derive(Debug)]
pub enum LineOutcome {
    Written(ServiceCode),
    Failed(LineFailure),
}

/// Routes every registered line and writes the results.
///
/// Lines are requested one at a time unless `max_concurrent` is raised.
/// With concurrency the registry is still read in full first, each line
/// writes only its own file, and outcomes are reported in registry order.
#[derive(Debug, Clone)]
pub struct RouteEnricher<E> {
    engine: E,
    max_concurrent: usize,
}

impl<E: RoutingEngine> RouteEnricher<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            max_concurrent: 1,
        }
    }

    /// Set how many route requests may be in flight at once (minimum 1).
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n.max(1);
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Enrich every line in the registry of `lines`, writing into `routes`.
    ///
    /// Routing failures are logged and collected; store failures abort the
    /// run.
    pub async fn run(
        &self,
        lines: &LineStore,
        routes: &RouteStore,
    ) -> Result<EnrichReport, StoreError> {
        let registry = lines.load_registry()?;
        routes.ensure_dir()?;

        debug!(lines = registry.len(), concurrency = self.max_concurrent, "enriching lines");

        let mut outcomes = stream::iter(registry.iter())
            .map(|code| self.enrich_line(code, lines, routes))
            .buffered(self.max_concurrent);

        let mut report = EnrichReport::default();
        while let Some(outcome) = outcomes.next().await {
            match outcome? {
                LineOutcome::Written(code) => report.written.push(code),
                LineOutcome::Failed(failure) => report.failed.push(failure),
            }
        }

        info!(
            written = report.written.len(),
            failed = report.failed.len(),
            dir = %routes.dir().display(),
            "enrichment complete"
        );

        Ok(report)
    }

    /// Route a single line and write its record on success.
    pub async fn enrich_line(
        &self,
        code: &ServiceCode,
        lines: &LineStore,
        routes: &RouteStore,
    ) -> Result<LineOutcome, StoreError> {
        let descriptor = lines.load_descriptor(code)?;

        match self.engine.route(&descriptor.stops).await {
            Ok(summary) => {
                let result = RouteResult::new(&descriptor, summary);
                routes.save(&result)?;
                debug!(
                    line = %code,
                    distance = result.route_data.total_distance,
                    duration = result.route_data.total_time,
                    points = result.route_data.coordinates.len(),
                    "wrote route"
                );
                Ok(LineOutcome::Written(code.clone()))
            }
            Err(error) => {
                warn!(
                    line = %code,
                    status = ?error.status(),
                    %error,
                    "failed to fetch route data"
                );
                Ok(LineOutcome::Failed(LineFailure {
                    line: code.clone(),
                    error,
                }))
            }
        }
    }
}
