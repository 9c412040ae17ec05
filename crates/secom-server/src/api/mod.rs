//! HTTP API of the quality agent

pub mod agent;
pub mod health;
pub mod skills;

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};

use crate::model::ErrorResult;

/// Register every route on an actix app
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(agent::agent_card)
        .service(
            web::scope("/api/v1")
                .service(skills::list_skills)
                .service(skills::get_skill)
                .service(skills::invoke_skill)
                .service(skills::stats),
        )
        .service(
            web::scope("/health")
                .service(health::liveness)
                .service(health::readiness),
        );
}

/// Fallback for unknown paths
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResult::new(
        StatusCode::NOT_FOUND,
        "No endpoint matches the request",
        req.path(),
    ))
}
