/// Delimiters the model is instructed to wrap quiz JSON in. They are not
/// escapable inside the payload; the extractor takes first occurrences.
/// A structured-output mode on the generation API would make this protocol
/// unnecessary.
pub const QUIZ_START: &str = "<<QUIZ>>";
pub const QUIZ_END: &str = "<<ENDQUIZ>>";

pub const DEFAULT_PERSONA_NAME: &str = "友達AI";
pub const DEFAULT_TONE: &str = "フレンドリー";
pub const DEFAULT_EXTRA: &str = "その教科や趣味の視点";
pub const DEFAULT_GENRE: &str = "未分類";
pub const DEFAULT_KANJI_LEVEL: &str = "中学生以上";
