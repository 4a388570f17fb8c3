use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::ChatRequest,
    models::dto::response::ChatResponse};

#[post("/api/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
    http_request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let caller_key = client_ip(&http_request);
    let outcome = state.chat_service.chat(&caller_key, request).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("X-RateLimit-Limit", outcome.rate.limit.to_string()))
        .insert_header(("X-RateLimit-Remaining", outcome.rate.remaining.to_string()))
        .insert_header((
            "X-RateLimit-Reset",
            outcome.rate.reset_epoch_seconds.to_string(),
        ))
        .json(ChatResponse {
            reply: outcome.reply,
        }))
}

/// First `X-Forwarded-For` entry when present (the instance sits behind a
/// proxy in production), else the peer address.
fn client_ip(request: &HttpRequest) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    request
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
