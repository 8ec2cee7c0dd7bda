use crate::models::{QuestionObject, QuestionRequest};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Question text is missing or empty")]
    MissingQuestion,
    #[error("Answer A label is missing or empty")]
    MissingAnswerA,
    #[error("Answer B label is missing or empty")]
    MissingAnswerB,
}

/// Checks the required string fields and builds the record that will be
/// stored. The id comes from the request path, not the body; vote counters
/// are opaque payload and pass through unchecked.
pub fn validate_question(
    id: &str,
    request: &QuestionRequest,
) -> Result<QuestionObject, ValidationError> {
    let question = required(&request.question).ok_or(ValidationError::MissingQuestion)?;
    let answer_a = required(&request.answer_a).ok_or(ValidationError::MissingAnswerA)?;
    let answer_b = required(&request.answer_b).ok_or(ValidationError::MissingAnswerB)?;

    Ok(QuestionObject {
        id: id.to_owned(),
        question,
        answer_a,
        answer_b,
        answer_a_votes: request.answer_a_votes,
        answer_b_votes: request.answer_b_votes,
    })
}

fn required(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}
