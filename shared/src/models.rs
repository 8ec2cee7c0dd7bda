use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionObject {
    pub id: String,
    pub question: String,
    pub answer_a: String,
    pub answer_b: String,
    #[serde(default)]
    pub answer_a_votes: i32,
    #[serde(default)]
    pub answer_b_votes: i32,
}

/// Incoming body for create and update. Required string fields are optional
/// here so that a missing or null field reaches shape validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub question: Option<String>,
    pub answer_a: Option<String>,
    pub answer_b: Option<String>,
    #[serde(default)]
    pub answer_a_votes: i32,
    #[serde(default)]
    pub answer_b_votes: i32,
}
