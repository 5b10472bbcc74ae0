#![deny(clippy::all)]

//! Node-API surface of the route optimizer. The JavaScript HTTP layer passes
//! the parsed request body straight through and maps thrown errors to HTTP
//! responses.

use std::collections::HashMap;
use std::sync::Once;

use napi::{Error, Result, Status};
use napi_derive::napi;
use serde_json::Value;
use tsp_service::{
    ErrorKind, HealthStatus, RouteOptimizer, ServiceConfig, ServiceError, ServiceInfo,
};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

fn optimizer() -> Result<RouteOptimizer> {
    init_tracing();
    ServiceConfig::from_env()
        .and_then(RouteOptimizer::new)
        .map_err(|err| Error::new(Status::GenericFailure, err.to_string()))
}

fn to_napi_error(err: ServiceError) -> Error {
    let status = match err.kind() {
        ErrorKind::Internal => Status::GenericFailure,
        _ => Status::InvalidArg,
    };
    let body = err.to_response();
    Error::new(status, format!("{}: {}", body.error, body.message))
}

#[napi(object)]
pub struct OptimizedRoute {
    pub route: Vec<u32>,
    pub distance: f64,
    pub cities: u32,
    pub algorithm: String,
}

/// `true` if `matrix` is square with a zero diagonal and non-negative numbers.
#[napi]
pub fn validate_matrix(matrix: Value) -> bool {
    RouteOptimizer::default().validate(&matrix)
}

/// Largest matrix dimension `optimizeRoute` accepts.
#[napi]
pub fn max_cities() -> Result<u32> {
    Ok(optimizer()?.config().max_cities as u32)
}

/// Solves `{ matrix }` exactly. Throws `InvalidArg` for rejected input and
/// `GenericFailure` for internal errors; the message is `"<error>: <message>"`.
#[napi]
pub fn optimize_route(body: Value) -> Result<OptimizedRoute> {
    let response = optimizer()?.optimize_value(body).map_err(to_napi_error)?;
    Ok(OptimizedRoute {
        route: response.route.into_iter().map(|c| c as u32).collect(),
        distance: response.distance,
        cities: response.cities as u32,
        algorithm: response.algorithm,
    })
}

#[napi(object)]
pub struct ApiDescriptor {
    pub message: String,
    pub version: String,
    pub endpoints: HashMap<String, String>,
}

/// Root descriptor; `prefix` is the mount path of the API, e.g. `"/api"`.
#[napi]
pub fn service_info(prefix: String) -> ApiDescriptor {
    let info = ServiceInfo::new(&prefix);
    ApiDescriptor {
        message: info.message,
        version: info.version,
        endpoints: info.endpoints.into_iter().collect(),
    }
}

#[napi(object)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

#[napi]
pub fn health() -> Health {
    let health = HealthStatus::now();
    Health {
        status: health.status.to_string(),
        timestamp: health.timestamp,
    }
}
