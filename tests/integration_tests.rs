use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::json;

use tomo_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    handlers,
    services::{AttemptLog, ChatService, ConversationLog, GenerationClient, RateLimiter},
};

/// Canned generator so the tests never touch the network.
struct StubGenerator {
    reply: String,
}

#[async_trait]
impl GenerationClient for StubGenerator {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.reply.clone())
    }
}

fn test_state(reply: &str, limit: u32) -> AppState {
    let rate_limiter = Arc::new(RateLimiter::new(limit));
    let conversations = Arc::new(ConversationLog::new());
    let generator: Arc<dyn GenerationClient> = Arc::new(StubGenerator {
        reply: reply.to_string(),
    });

    AppState {
        chat_service: Arc::new(ChatService::new(
            Some(generator),
            Arc::clone(&rate_limiter),
            Arc::clone(&conversations),
        )),
        rate_limiter,
        conversations,
        attempt_log: Arc::new(AttemptLog::new()),
        ruby_service: None,
        config: Arc::new(Config::test_config()),
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .service(handlers::chat)
                .service(handlers::ruby)
                .service(handlers::submit_attempt)
                .service(handlers::get_genre_stats)
                .service(handlers::get_subfield_stats)
                .service(handlers::get_personalities)
                .service(handlers::health_check),
        )
        .await
    };
}

#[actix_web::test]
async fn test_chat_returns_reply_and_rate_headers() {
    let app = test_app!(test_state("やあ！", 40));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"message": "こんにちは", "personality": {"id": "p1"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let headers = resp.headers();
    assert_eq!(headers.get("X-RateLimit-Limit").unwrap(), "40");
    assert_eq!(headers.get("X-RateLimit-Remaining").unwrap(), "39");
    assert!(headers.contains_key("X-RateLimit-Reset"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["reply"], "やあ！");
}

#[actix_web::test]
async fn test_chat_with_empty_message_is_rejected() {
    let app = test_app!(test_state("unused", 40));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"message": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_exhausted_caller_gets_429_with_headers() {
    let app = test_app!(test_state("やあ！", 1));

    let ok = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"message": "一回目"}))
        .to_request();
    assert_eq!(test::call_service(&app, ok).await.status(), 200);

    let rejected = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"message": "二回目"}))
        .to_request();
    let resp = test::call_service(&app, rejected).await;

    assert_eq!(resp.status(), 429);
    assert_eq!(resp.headers().get("X-RateLimit-Remaining").unwrap(), "0");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("上限"));
}

#[actix_web::test]
async fn test_quiz_block_stays_embedded_in_reply() {
    let reply = "問題！<<QUIZ>>{\"genre\":\"国語\",\"subfield\":\"漢字\",\
        \"type\":\"text\",\"question\":\"q\",\"answer\":\"a\"}<<ENDQUIZ>>";
    let app = test_app!(test_state(reply, 40));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"message": "クイズ出して", "personality": {"id": "p1"}}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["reply"].as_str().unwrap().contains("<<QUIZ>>"));
}

#[actix_web::test]
async fn test_ruby_without_tokenizer_is_a_server_error() {
    let app = test_app!(test_state("unused", 40));

    let req = test::TestRequest::post()
        .uri("/api/ruby")
        .set_json(json!({"text": "漢字"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
}

#[actix_web::test]
async fn test_ruby_with_empty_text_is_rejected() {
    let app = test_app!(test_state("unused", 40));

    let req = test::TestRequest::post()
        .uri("/api/ruby")
        .set_json(json!({"text": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_duplicate_attempt_is_a_no_op() {
    let state = test_state("unused", 40);
    let attempt_log = Arc::clone(&state.attempt_log);
    let app = test_app!(state);

    let attempt = json!({
        "quizId": "quiz-1",
        "personaId": "p1",
        "genre": "国語",
        "subfield": "漢字",
        "question": "q",
        "answer": "a",
        "correct": true
    });

    let first = test::TestRequest::post()
        .uri("/api/attempts")
        .set_json(&attempt)
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), 201);
    assert_eq!(attempt_log.len(), 1);

    let second = test::TestRequest::post()
        .uri("/api/attempts")
        .set_json(&attempt)
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(attempt_log.len(), 1);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["recorded"], false);
}

#[actix_web::test]
async fn test_stats_reflect_recorded_attempts() {
    let app = test_app!(test_state("unused", 40));

    for (quiz_id, correct) in [("q1", true), ("q2", false)] {
        let req = test::TestRequest::post()
            .uri("/api/attempts")
            .set_json(json!({
                "quizId": quiz_id,
                "personaId": "p1",
                "genre": "国語",
                "subfield": "漢字",
                "correct": correct
            }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/attempts/stats").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["byGenre"][0]["genre"], "国語");
    assert_eq!(body["byGenre"][0]["total"], 2);
    assert_eq!(body["byGenre"][0]["accuracy"], 50);

    // 国語, percent-encoded for the request line.
    let req = test::TestRequest::get()
        .uri("/api/attempts/stats/%E5%9B%BD%E8%AA%9E")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["subfield"], "漢字");
    assert_eq!(body[0]["total"], 2);
}

#[actix_web::test]
async fn test_personalities_catalog_is_served() {
    let app = test_app!(test_state("unused", 40));

    let req = test::TestRequest::get().uri("/api/personalities").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().map(Vec::len), Some(5));
}

#[actix_web::test]
async fn test_health() {
    let app = test_app!(test_state("unused", 40));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}
