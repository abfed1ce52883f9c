//! Status handlers.
//!
//! Both responses are derived from the immutable configuration and cannot
//! fail.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub message: String,
    pub targets: Vec<String>,
    pub intervals: Vec<u64>,
}

/// `GET /health`
pub async fn get_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: state.config.service_name.clone(),
    })
}

/// `GET /`
pub async fn get_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    let config = &state.config;
    Json(ServiceInfo {
        service: config.service_name.clone(),
        message: format!("Hello from {}!", config.service_name),
        targets: config.targets.clone(),
        intervals: config.intervals.clone(),
    })
}
