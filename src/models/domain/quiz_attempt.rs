use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One graded answer to a quiz. Append-only: the attempt log refuses a
/// second attempt for the same quiz id and persona id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub persona_id: String,
    pub genre: String,
    pub subfield: String,
    pub question: String,
    pub answer: String,
    pub correct: bool,
    pub submitted_at: DateTime<Utc>,
}
