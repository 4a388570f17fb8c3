pub mod attempt_service;
pub mod chat_service;
pub mod conversation_log;
pub mod generation_service;
pub mod prompt_builder;
pub mod quiz_extractor;
pub mod rate_limiter;
pub mod ruby_service;
pub mod tokenizer;

pub use attempt_service::AttemptLog;
pub use chat_service::{ChatOutcome, ChatService};
pub use conversation_log::ConversationLog;
pub use generation_service::{GeminiClient, GenerationClient};
pub use prompt_builder::PromptBuilder;
pub use quiz_extractor::{ExtractedQuiz, QuizExtractor};
pub use rate_limiter::{RateDecision, RateLimiter, DAILY_LIMIT};
pub use ruby_service::RubyService;
pub use tokenizer::{MorphToken, MorphTokenizer, YahooMaTokenizer};
