pub mod personalities;
pub mod prompts;
