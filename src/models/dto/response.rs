use serde::Serialize;

/// The raw model reply. Any `<<QUIZ>>…<<ENDQUIZ>>` block stays embedded;
/// the client does the final extraction and display.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RubyResponse {
    pub ruby: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptResponse {
    pub recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreStat {
    pub genre: String,
    pub total: usize,
    pub correct: usize,
    pub accuracy: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub by_genre: Vec<GenreStat>,
    pub weakest: Option<GenreStat>,
    pub strongest: Option<GenreStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubfieldStat {
    pub subfield: String,
    pub total: usize,
    pub correct: usize,
    pub accuracy: u32,
}
