use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{QuizAttempt, Role};

/// Body of `POST /api/chat`. The personality is whatever the client is
/// currently displaying; unknown or partial descriptors fall back to the
/// catalog entry (by id) and then to neutral defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "message required"))]
    pub message: String,

    pub personality: Option<PersonalityInput>,

    pub previous: Option<PreviousTurn>,

    pub kanji_level: Option<String>,
}

/// Client-side persona descriptor. Every field is optional so an older
/// client that only sends an id keeps working.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tone: Option<String>,
    pub extra: Option<String>,
    pub genre: Option<String>,
    pub subfields: Option<Vec<String>>,
}

/// The single prior turn the client chooses to replay as context.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviousTurn {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RubyRequest {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptRequest {
    #[validate(length(min = 1, message = "quizId required"))]
    pub quiz_id: String,

    #[validate(length(min = 1, message = "personaId required"))]
    pub persona_id: String,

    pub genre: Option<String>,
    pub subfield: Option<String>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub correct: bool,
}

impl From<SubmitAttemptRequest> for QuizAttempt {
    fn from(request: SubmitAttemptRequest) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: request.quiz_id,
            persona_id: request.persona_id,
            genre: request.genre.unwrap_or_else(|| "未分類".to_string()),
            subfield: request.subfield.unwrap_or_else(|| "未分類".to_string()),
            question: request.question,
            answer: request.answer,
            correct: request.correct,
            submitted_at: Utc::now(),
        }
    }
}
