use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::AppResult;
use crate::services::tokenizer::MorphTokenizer;

static KANJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[一-龯々〆〤]").expect("kanji character class is a valid regex"));

/// Readings the segmenter gets wrong for the tutor display names. The table
/// always wins over the reported reading.
static SPECIAL_READINGS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("言葉", "ことは"), ("数十", "かずと")]));

/// Wraps kanji-bearing tokens in `<ruby>` markup with their hiragana
/// reading, leaving everything else untouched and in order.
pub struct RubyService {
    tokenizer: Arc<dyn MorphTokenizer>,
}

impl RubyService {
    pub fn new(tokenizer: Arc<dyn MorphTokenizer>) -> Self {
        Self { tokenizer }
    }

    pub async fn annotate(&self, text: &str) -> AppResult<String> {
        let tokens = self.tokenizer.tokenize(text).await?;

        let mut annotated = String::with_capacity(text.len());
        for token in tokens {
            let mut reading = token.reading.as_deref().map(kata_to_hira);
            if let Some(special) = SPECIAL_READINGS.get(token.surface.as_str()) {
                reading = Some((*special).to_string());
            }

            match reading {
                Some(reading) if KANJI_RE.is_match(&token.surface) => {
                    annotated.push_str("<ruby>");
                    annotated.push_str(&token.surface);
                    annotated.push_str("<rt>");
                    annotated.push_str(&reading);
                    annotated.push_str("</rt></ruby>");
                }
                _ => annotated.push_str(&token.surface),
            }
        }

        Ok(annotated)
    }
}

/// Katakana to hiragana, other characters unchanged.
pub fn kata_to_hira(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}
