use serde::{Deserialize, Serialize};

/// A fixed tutor persona bound to one school subject. The catalog in
/// `constants::personalities` is the only place these are created.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub id: String,
    pub name: String,
    pub tone: String,
    pub extra: String,
    pub color: String,
    pub bg_color: String,
    pub light_color: String,
    pub genre: String,
    pub subfields: Vec<String>,
}
