pub mod chat_message;
pub mod personality;
pub mod quiz;
pub mod quiz_attempt;

pub use chat_message::{ChatMessage, Role};
pub use personality::Personality;
pub use quiz::{Quiz, QuizType};
pub use quiz_attempt::QuizAttempt;
