use serde_json::Value;

use crate::constants::prompts::{QUIZ_END, QUIZ_START};

#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedQuiz {
    pub quiz: Value,
    /// The reply with the delimited block removed and the ends trimmed.
    pub clean_text: String,
}

/// Scans a generated reply for the first `<<QUIZ>>…<<ENDQUIZ>>` block and
/// parses its body as JSON. Any failure means "no quiz present"; the caller
/// never sees a parse error.
pub struct QuizExtractor;

impl QuizExtractor {
    pub fn extract(raw_text: &str) -> Option<ExtractedQuiz> {
        let start = raw_text.find(QUIZ_START)?;
        let end = raw_text.find(QUIZ_END)?;
        if end <= start {
            return None;
        }

        let body = raw_text[start + QUIZ_START.len()..end].trim();
        let quiz: Value = serde_json::from_str(body).ok()?;

        let clean_text = format!(
            "{}{}",
            &raw_text[..start],
            &raw_text[end + QUIZ_END.len()..]
        )
        .trim()
        .to_string();

        Some(ExtractedQuiz { quiz, clean_text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_quiz_and_clean_text() {
        let raw = "intro <<QUIZ>>{\"genre\":\"g\"}<<ENDQUIZ>> trailing";

        let extracted = QuizExtractor::extract(raw).unwrap();
        assert_eq!(extracted.quiz, json!({"genre": "g"}));
        assert_eq!(extracted.clean_text, "intro  trailing");
    }

    #[test]
    fn test_missing_start_delimiter() {
        assert!(QuizExtractor::extract("{\"genre\":\"g\"}<<ENDQUIZ>>").is_none());
    }

    #[test]
    fn test_missing_end_delimiter() {
        assert!(QuizExtractor::extract("<<QUIZ>>{\"genre\":\"g\"}").is_none());
    }

    #[test]
    fn test_end_before_start() {
        assert!(QuizExtractor::extract("<<ENDQUIZ>>{\"genre\":\"g\"}<<QUIZ>>").is_none());
    }

    #[test]
    fn test_malformed_json_body() {
        assert!(QuizExtractor::extract("<<QUIZ>>not json<<ENDQUIZ>>").is_none());
    }

    #[test]
    fn test_body_whitespace_is_tolerated() {
        let raw = "<<QUIZ>>\n  {\"genre\":\"数学\"}\n<<ENDQUIZ>>";

        let extracted = QuizExtractor::extract(raw).unwrap();
        assert_eq!(extracted.quiz, json!({"genre": "数学"}));
        assert_eq!(extracted.clean_text, "");
    }

    #[test]
    fn test_first_occurrences_win() {
        let raw = "<<QUIZ>>{\"a\":1}<<ENDQUIZ>> and <<QUIZ>>{\"b\":2}<<ENDQUIZ>>";

        let extracted = QuizExtractor::extract(raw).unwrap();
        assert_eq!(extracted.quiz, json!({"a": 1}));
        assert_eq!(extracted.clean_text, "and <<QUIZ>>{\"b\":2}<<ENDQUIZ>>");
    }

    #[test]
    fn test_japanese_text_around_block() {
        let raw = "よし、問題だよ！<<QUIZ>>{\"genre\":\"国語\",\"type\":\"text\"}<<ENDQUIZ>>がんばって！";

        let extracted = QuizExtractor::extract(raw).unwrap();
        assert_eq!(extracted.clean_text, "よし、問題だよ！がんばって！");
    }
}
