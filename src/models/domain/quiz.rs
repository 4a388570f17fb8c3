use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    Mcq,
    Text,
}

/// A quiz parsed out of the delimited block the model appends to its reply.
/// Immutable once created.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub genre: String,
    pub subfield: String,
    #[serde(rename = "type")]
    pub quiz_type: QuizType,
    pub question: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_index: Option<i64>,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_text: Option<String>,
}

impl Quiz {
    /// Names the required fields absent from a raw quiz block. Empty strings
    /// count as missing for the text fields; `answerIndex` only needs to be
    /// present; `answer` must be present and non-null.
    pub fn missing_fields(value: &Value) -> Vec<&'static str> {
        let mut missing = Vec::new();

        for field in ["genre", "subfield", "type", "question"] {
            if is_blank(value.get(field)) {
                missing.push(field);
            }
        }

        let is_mcq = value.get("type").and_then(Value::as_str) == Some("mcq");
        if is_mcq {
            let choice_count = value
                .get("choices")
                .and_then(Value::as_array)
                .map(|choices| choices.len())
                .unwrap_or(0);
            if choice_count < 2 {
                missing.push("choices");
            }
            if value.get("answerIndex").is_none() {
                missing.push("answerIndex");
            }
        }

        if matches!(value.get("answer"), None | Some(Value::Null)) {
            missing.push("answer");
        }

        missing
    }

    /// Parses a validated block into a typed quiz, enforcing the mcq
    /// invariants (at least two choices, answer index within range).
    pub fn from_value(value: &Value) -> Option<Quiz> {
        let quiz: Quiz = serde_json::from_value(value.clone()).ok()?;
        if quiz.quiz_type == QuizType::Mcq {
            let index = quiz.answer_index?;
            if quiz.choices.len() < 2 || index < 0 || index as usize >= quiz.choices.len() {
                return None;
            }
        }
        Some(quiz)
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
