//! Skill catalogue and invocation API

use actix_web::{HttpRequest, HttpResponse, get, http::StatusCode, post, web};
use secom_agent::model::SkillInvocation;
use tracing::{info, warn};

use crate::{
    error::{SKILL_NOT_FOUND, skill_error_code},
    model::{ErrorResult, RestResult},
    state::AppState,
};

#[get("/skills")]
pub async fn list_skills(data: web::Data<AppState>) -> HttpResponse {
    RestResult::http_success(data.registry.list())
}

#[get("/skills/{id}")]
pub async fn get_skill(data: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();

    match data.registry.get(&id) {
        Some(skill) => RestResult::http_success(skill.descriptor()),
        None => RestResult::<()>::http_error(
            404,
            SKILL_NOT_FOUND,
            &format!("skill '{}' is not registered", id),
        ),
    }
}

#[post("/skills/{id}/invoke")]
pub async fn invoke_skill(
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let id = path.into_inner();

    // An empty body invokes the skill without arguments
    let invocation = if body.iter().all(u8::is_ascii_whitespace) {
        SkillInvocation::default()
    } else {
        match serde_json::from_slice::<SkillInvocation>(&body) {
            Ok(invocation) => invocation,
            Err(e) => {
                return HttpResponse::BadRequest().json(ErrorResult::new(
                    StatusCode::BAD_REQUEST,
                    &format!("Invalid invocation body: {}", e),
                    req.path(),
                ));
            }
        }
    };

    match data.registry.invoke(&id, invocation.arguments).await {
        Ok(result) => {
            info!(skill_id = %id, elapsed_ms = result.elapsed_ms, "Skill invoked");
            RestResult::http_success(result)
        }
        Err(e) => {
            let (status, code) = skill_error_code(&e);
            warn!(skill_id = %id, status, error = %e, "Skill invocation failed");
            RestResult::<()>::http_error(status, code, &e.to_string())
        }
    }
}

#[get("/stats")]
pub async fn stats(data: web::Data<AppState>) -> HttpResponse {
    RestResult::http_success(data.registry.stats())
}
