// Agent card discovery endpoint

use actix_web::{HttpResponse, get, web};

use crate::state::AppState;

#[get("/.well-known/agent.json")]
pub async fn agent_card(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&data.card)
}
