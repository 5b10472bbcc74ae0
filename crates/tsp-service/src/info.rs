use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Smart Delivery Route Optimizer API";

/// Published API version, independent of the crate version.
pub const API_VERSION: &str = "1.0.0";

/// Descriptor served at the API root.
#[derive(Clone, Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfo {
    /// `prefix` is prepended to every endpoint path, e.g. `"/api"`.
    pub fn new(prefix: &str) -> Self {
        let endpoints = BTreeMap::from([(
            format!("POST {prefix}/optimize-route"),
            "Optimize delivery route using TSP algorithm".to_string(),
        )]);
        ServiceInfo {
            message: SERVICE_NAME.to_string(),
            version: API_VERSION.to_string(),
            endpoints,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn now() -> Self {
        HealthStatus {
            status: "OK",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_lists_optimize_endpoint() {
        let info = serde_json::to_value(ServiceInfo::new("/api")).unwrap();
        assert_eq!(info["message"], SERVICE_NAME);
        assert_eq!(info["version"], "1.0.0");
        assert_eq!(
            info["endpoints"]["POST /api/optimize-route"],
            "Optimize delivery route using TSP algorithm"
        );
    }

    #[test]
    fn health_timestamp_is_utc() {
        let health = HealthStatus::now();
        assert_eq!(health.status, "OK");
        assert!(health.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }
}
