use actix_web::{get, HttpResponse};

use crate::constants::personalities;

#[get("/api/personalities")]
pub async fn get_personalities() -> HttpResponse {
    HttpResponse::Ok().json(personalities::catalog())
}
