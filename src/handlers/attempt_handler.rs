use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::QuizAttempt,
    models::dto::{request::SubmitAttemptRequest, response::AttemptResponse},
};

#[post("/api/attempts")]
pub async fn submit_attempt(
    state: web::Data<AppState>,
    request: web::Json<SubmitAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let recorded = state.attempt_log.record(QuizAttempt::from(request));
    if recorded {
        Ok(HttpResponse::Created().json(AttemptResponse { recorded: true }))
    } else {
        // Duplicate submission for an answered quiz: no-op.
        Ok(HttpResponse::Ok().json(AttemptResponse { recorded: false }))
    }
}

#[get("/api/attempts/stats")]
pub async fn get_genre_stats(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.attempt_log.genre_stats())
}

#[get("/api/attempts/stats/{genre}")]
pub async fn get_subfield_stats(state: web::Data<AppState>, genre: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(state.attempt_log.subfield_stats(&genre))
}
