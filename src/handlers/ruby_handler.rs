use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::RubyRequest,
    models::dto::response::RubyResponse,
};

#[post("/api/ruby")]
pub async fn ruby(
    state: web::Data<AppState>,
    request: web::Json<RubyRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let service = state
        .ruby_service
        .as_ref()
        .ok_or_else(|| AppError::TokenizerUnavailable("no segmenter configured".to_string()))?;

    let ruby = service.annotate(&request.text).await?;
    Ok(HttpResponse::Ok().json(RubyResponse { ruby }))
}
