//! Liveness and readiness probes

use actix_web::{HttpResponse, get, web};
use serde::Serialize;

use crate::{model::RestResult, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub quality_api: ComponentStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    pub status: String,
    pub server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[get("/liveness")]
pub async fn liveness() -> HttpResponse {
    RestResult::http_success("ok")
}

#[get("/readiness")]
pub async fn readiness(data: web::Data<AppState>) -> HttpResponse {
    let quality_api = match data.client.ping().await {
        Ok(()) => ComponentStatus {
            status: "UP".to_string(),
            server: data.client.current_server(),
            message: None,
        },
        Err(e) => ComponentStatus {
            status: "DOWN".to_string(),
            server: data.client.current_server(),
            message: Some(e.to_string()),
        },
    };

    let up = quality_api.status == "UP";
    let health = HealthStatus {
        status: if up { "UP" } else { "DOWN" }.to_string(),
        quality_api,
    };

    if up {
        HttpResponse::Ok().json(health)
    } else {
        HttpResponse::ServiceUnavailable().json(health)
    }
}
