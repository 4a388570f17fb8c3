use crate::constants::prompts::{
    DEFAULT_EXTRA, DEFAULT_GENRE, DEFAULT_KANJI_LEVEL, DEFAULT_PERSONA_NAME, DEFAULT_TONE,
    QUIZ_END, QUIZ_START,
};
use crate::models::dto::request::{PersonalityInput, PreviousTurn};

/// Composes the single text blob sent to the generation API: persona
/// preamble, quiz-format mandate, optionally one prior turn, then the new
/// user message. No output validation happens here.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(
        personality: Option<&PersonalityInput>,
        user_message: &str,
        previous: Option<&PreviousTurn>,
        kanji_level: Option<&str>,
    ) -> String {
        let name = field(personality, |p| &p.name, DEFAULT_PERSONA_NAME);
        let tone = field(personality, |p| &p.tone, DEFAULT_TONE);
        let extra = field(personality, |p| &p.extra, DEFAULT_EXTRA);
        let genre = field(personality, |p| &p.genre, DEFAULT_GENRE);
        let subfields = personality
            .and_then(|p| p.subfields.as_ref())
            .map(|s| s.join(", "))
            .unwrap_or_else(|| DEFAULT_GENRE.to_string());
        let kanji_level = kanji_level.unwrap_or(DEFAULT_KANJI_LEVEL);

        let system = format!(
            "あなたは「{name}」という友達AIです。\n\
             口調: {tone}。\n\
             常に{extra}を会話に絡めてください。\n\
             友達の口調でユーザーを励まし、短く（目安150文字以内）答えてください。\n\
             ユーザーの漢字、問題のレベルは「{kanji_level}」です。\n\
             subfieldの種類は「{subfields}」です。\n\
             **重要**: もしクイズ（確認問題）を出す場合は、必ず以下のフォーマットで最後に付けてください。\n\
             \n\
             {QUIZ_START}JSON{QUIZ_END}\n\
             \n\
             JSON のスキーマ（必須フィールド）:\n\
             {{\n\
             \x20 \"genre\": \"{genre}\",\n\
             \x20 \"subfield\": \"例えば '漢字' など（1つ選んで入れてください）\",\n\
             \x20 \"type\": \"mcq|text\",\n\
             \x20 \"question\": \"問題文\",\n\
             \x20 \"choices\": [\"A\",\"B\",\"C\"],      // type==='mcq' の場合\n\
             \x20 \"answerIndex\": 1,              // type==='mcq' の場合（0始まり）\n\
             \x20 \"answer\": \"正解の文字列（必ず入れてください）\"\n\
             }}\n\
             \n\
             出力上の注意:\n\
             - JSON は {QUIZ_START} と {QUIZ_END} の中に **厳密に**入れること。JSON の前に短い導入文は1文のみ許可。\n\
             - JSON のフィールドは必ず揃えてください（特に subfield, answer を必須）。\n\
             - subfield はそのジャンルの細かい分野を AI 自身で1つ選んで文字列で入れること。\n\
             - リスニング用に発音する内容を渡す場合は \"audioText\" を入れてください（例: \"audioText\":\"apple\"）。\n\
             \n\
             それでは、以下のユーザーの入力に対して返信してください。\n"
        );

        let context = match previous {
            Some(turn) => format!(
                "前回のやり取り（直前1件）:\n{}: {}\n\n",
                turn.role.prompt_label(),
                turn.text
            ),
            None => String::new(),
        };

        format!("{system}{context}User: {user_message}\nAssistant:")
    }

    /// Regeneration variant: same preamble, but the model is told to emit
    /// only the delimited JSON block. No prior turn, no kanji level.
    pub fn build_quiz_only(personality: Option<&PersonalityInput>, user_message: &str) -> String {
        format!(
            "{}\nただし、**問題形式を含む JSON のみ**を {QUIZ_START}...{QUIZ_END} の中に出力してください。",
            Self::build(personality, user_message, None, None)
        )
    }
}

fn field<'a>(
    personality: Option<&'a PersonalityInput>,
    get: impl Fn(&'a PersonalityInput) -> &'a Option<String>,
    default: &'a str,
) -> &'a str {
    personality
        .and_then(|p| get(p).as_deref())
        .unwrap_or(default)
}
