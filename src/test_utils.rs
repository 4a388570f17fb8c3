use crate::models::domain::QuizAttempt;
use crate::models::dto::request::PersonalityInput;

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    /// Persona descriptor as the client would send it for 言葉.
    pub fn kotoha_input() -> PersonalityInput {
        PersonalityInput {
            id: Some("p1".to_string()),
            ..PersonalityInput::default()
        }
    }

    /// A complete text-type quiz block value.
    pub fn valid_text_quiz() -> Value {
        json!({
            "genre": "国語",
            "subfield": "漢字",
            "type": "text",
            "question": "「紫陽花」の読みは？",
            "answer": "あじさい"
        })
    }

    /// An mcq block with the answer index dropped, the shape that forces a
    /// regeneration.
    pub fn mcq_quiz_missing_answer_index() -> Value {
        json!({
            "genre": "数学",
            "subfield": "図形",
            "type": "mcq",
            "question": "正方形の対角線は何本？",
            "choices": ["1", "2", "4"],
            "answer": "2"
        })
    }

    pub fn attempt(quiz_id: &str, persona_id: &str, correct: bool) -> QuizAttempt {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            persona_id: persona_id.to_string(),
            genre: "国語".to_string(),
            subfield: "漢字".to_string(),
            question: "q".to_string(),
            answer: "a".to_string(),
            correct,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Quiz;

    #[test]
    fn test_valid_text_quiz_fixture_is_complete() {
        assert!(Quiz::missing_fields(&valid_text_quiz()).is_empty());
    }

    #[test]
    fn test_mcq_fixture_is_missing_only_the_answer_index() {
        assert_eq!(
            Quiz::missing_fields(&mcq_quiz_missing_answer_index()),
            vec!["answerIndex"]
        );
    }

    #[test]
    fn test_attempt_fixture() {
        let a = attempt("quiz-1", "p1", true);
        assert_eq!(a.persona_id, "p1");
        assert!(a.correct);
    }
}
