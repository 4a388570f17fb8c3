pub mod attempt_handler;
pub mod chat_handler;
pub mod personality_handler;
pub mod ruby_handler;

pub use attempt_handler::{get_genre_stats, get_subfield_stats, submit_attempt};
pub use chat_handler::{chat, health_check};
pub use personality_handler::get_personalities;
pub use ruby_handler::ruby;
