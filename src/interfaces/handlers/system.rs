use actix_web::{get, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::constants::START_TIME;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    version: &'static str,
    uptime: String,
    started_at: String,
    timestamp: String,
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc
        .signed_duration_since(*START_TIME)
        .num_seconds()
        .max(0) as u64;

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        started_at: START_TIME.to_rfc3339(),
        timestamp: now_utc.to_rfc3339(),
    })
}
