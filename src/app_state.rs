use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        AttemptLog, ChatService, ConversationLog, GeminiClient, GenerationClient, MorphTokenizer,
        RateLimiter, RubyService, YahooMaTokenizer, DAILY_LIMIT,
    },
};

/// Process-wide services, constructed once at startup and injected into the
/// handlers. Everything stateful (counters, logs) lives behind these Arcs.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub rate_limiter: Arc<RateLimiter>,
    pub conversations: Arc<ConversationLog>,
    pub attempt_log: Arc<AttemptLog>,
    pub ruby_service: Option<Arc<RubyService>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        config.log_startup_warnings();

        let rate_limiter = Arc::new(RateLimiter::new(DAILY_LIMIT));
        let conversations = Arc::new(ConversationLog::new());
        let attempt_log = Arc::new(AttemptLog::new());

        let generator: Option<Arc<dyn GenerationClient>> =
            config.gemini_api_key.clone().map(|key| {
                Arc::new(GeminiClient::new(key, config.gemini_model.clone()))
                    as Arc<dyn GenerationClient>
            });
        let chat_service = Arc::new(ChatService::new(
            generator,
            Arc::clone(&rate_limiter),
            Arc::clone(&conversations),
        ));

        let ruby_service = config.yahoo_client_id.clone().map(|client_id| {
            let tokenizer: Arc<dyn MorphTokenizer> = Arc::new(YahooMaTokenizer::new(client_id));
            Arc::new(RubyService::new(tokenizer))
        });

        Self {
            chat_service,
            rate_limiter,
            conversations,
            attempt_log,
            ruby_service,
            config: Arc::new(config),
        }
    }
}
