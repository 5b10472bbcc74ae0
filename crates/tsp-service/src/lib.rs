//! Request/response boundary for the route optimizer.
//!
//! The transport layer hands over a request body; [`RouteOptimizer`] checks it
//! in order (matrix present, matrix valid, matrix within the configured size
//! cap) before any solver work, then solves and shapes the response. Every
//! failure comes back as a [`ServiceError`] with a category, a suggested status
//! and a caller-facing [`ErrorResponse`].

mod config;
mod error;
mod info;

pub use config::{ConfigError, ServiceConfig, DEFAULT_MAX_CITIES, MAX_CITIES_ENV};
pub use error::{ErrorKind, ErrorResponse, ServiceError};
pub use info::{HealthStatus, ServiceInfo, API_VERSION, SERVICE_NAME};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tsp_core::{DistanceMatrix, TspSolver};
use tsp_held_karp::HeldKarp;

/// Incoming payload. `matrix` stays untyped so that a missing field, a `null`
/// and a malformed matrix can be told apart.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub matrix: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptimizeResponse {
    pub route: Vec<usize>,
    pub distance: f64,
    pub cities: usize,
    pub algorithm: String,
}

/// JSON-body notion of "field given": `null`, `false`, `0` and `""` count as
/// absent, as they do for the JavaScript callers.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validates requests against the configured policy and runs the solver.
///
/// The solver is stateless, so one optimizer can be shared across concurrent
/// requests; each call builds its own DP tables.
#[derive(Clone, Debug)]
pub struct RouteOptimizer<S = HeldKarp> {
    config: ServiceConfig,
    solver: S,
}

impl RouteOptimizer<HeldKarp> {
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        Self::with_solver(config, HeldKarp)
    }
}

impl Default for RouteOptimizer<HeldKarp> {
    fn default() -> Self {
        RouteOptimizer {
            config: ServiceConfig::default(),
            solver: HeldKarp,
        }
    }
}

impl<S: TspSolver> RouteOptimizer<S> {
    pub fn with_solver(config: ServiceConfig, solver: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(RouteOptimizer { config, solver })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Matrix check on its own, without the size cap.
    pub fn validate(&self, matrix: &Value) -> bool {
        tsp_core::validate_value(matrix)
    }

    /// Parses a raw JSON body and optimizes it.
    pub fn optimize_json(&self, body: &str) -> Result<OptimizeResponse, ServiceError> {
        let request: OptimizeRequest = serde_json::from_str(body).map_err(|err| {
            tracing::warn!(%err, "rejected unparseable request body");
            ServiceError::MalformedRequest(err)
        })?;
        self.optimize(&request)
    }

    /// Optimizes an already-parsed JSON body.
    pub fn optimize_value(&self, body: Value) -> Result<OptimizeResponse, ServiceError> {
        let request: OptimizeRequest = serde_json::from_value(body).map_err(|err| {
            tracing::warn!(%err, "rejected non-object request body");
            ServiceError::MalformedRequest(err)
        })?;
        self.optimize(&request)
    }

    pub fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError> {
        let raw = request.matrix.as_ref().filter(|v| is_present(v)).ok_or_else(|| {
            tracing::warn!("rejected request without matrix");
            ServiceError::MissingMatrix
        })?;

        let matrix = DistanceMatrix::from_value(raw)
            .and_then(|m| m.check_tour_range().map(|()| m))
            .map_err(|err| {
                tracing::warn!(%err, "rejected invalid matrix");
                ServiceError::InvalidMatrix(err)
            })?;

        let cities = matrix.n();
        if cities > self.config.max_cities {
            tracing::warn!(cities, max = self.config.max_cities, "rejected oversized matrix");
            return Err(ServiceError::SizeExceeded {
                cities,
                max: self.config.max_cities,
            });
        }

        let solution = self.solver.solve(&matrix).map_err(|err| {
            tracing::error!(cities, %err, "solver failed");
            ServiceError::Internal(err)
        })?;

        tracing::info!(
            cities,
            route = ?solution.route.as_slice(),
            distance = solution.distance,
            "tsp solved"
        );

        Ok(OptimizeResponse {
            route: solution.route.into_inner(),
            distance: solution.distance,
            cities,
            algorithm: self.solver.algorithm().to_string(),
        })
    }
}
