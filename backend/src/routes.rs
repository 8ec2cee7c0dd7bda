use rocket::{State, delete, get, http::Status, post, put, serde::json::Json};
use std::sync::Mutex;
use tracing::{debug, error, instrument};

use shared::error::ErrorCode;
use shared::models::{QuestionObject, QuestionRequest};
use shared::validation::validate_question;

use crate::error::ApiError;
use crate::repository::{QuestionRepository, QuestionStore};

pub struct AppState {
    pub questions: QuestionStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            questions: Mutex::new(QuestionRepository::seeded()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[get("/questions")]
pub async fn list_questions(
    state: &State<AppState>,
) -> Result<Json<Vec<QuestionObject>>, Status> {
    let questions = state.questions.lock().map_err(|_| {
        error!("Failed to acquire question store lock");
        Status::InternalServerError
    })?;
    Ok(Json(questions.all()))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, request), fields(question_id = %id))]
#[post("/questions/<id>", format = "json", data = "<request>")]
pub async fn create_question(
    state: &State<AppState>,
    id: &str,
    request: Json<QuestionRequest>,
) -> Result<Json<QuestionObject>, ApiError> {
    let question = validate_question(id, &request).map_err(|e| {
        debug!("Rejected create request: {}", e);
        ApiError(ErrorCode::InvalidRecord)
    })?;

    // hold the lock across check-then-insert so concurrent creates cannot
    // both pass the existence check
    let mut questions = state.questions.lock().map_err(|_| {
        error!("Failed to acquire question store lock");
        ApiError(ErrorCode::CreateFailed)
    })?;

    if questions.exists(id) {
        debug!("Create rejected, id already in use");
        return Err(ApiError(ErrorCode::IdentifierInUse));
    }

    questions.insert(question.clone());
    Ok(Json(question))
}

#[instrument(skip(state, request), fields(question_id = %id))]
#[put("/questions/<id>", format = "json", data = "<request>")]
pub async fn update_question(
    state: &State<AppState>,
    id: &str,
    request: Json<QuestionRequest>,
) -> Result<Status, ApiError> {
    let question = validate_question(id, &request).map_err(|e| {
        debug!("Rejected update request: {}", e);
        ApiError(ErrorCode::InvalidRecord)
    })?;

    let mut questions = state.questions.lock().map_err(|_| {
        error!("Failed to acquire question store lock");
        ApiError(ErrorCode::UpdateFailed)
    })?;

    if questions.find(id).is_none() {
        return Err(ApiError(ErrorCode::NotFound));
    }

    questions.update(question);
    Ok(Status::NoContent)
}

#[instrument(skip(state), fields(question_id = %id))]
#[delete("/questions/<id>")]
pub async fn delete_question(state: &State<AppState>, id: &str) -> Result<Status, ApiError> {
    let mut questions = state.questions.lock().map_err(|_| {
        error!("Failed to acquire question store lock");
        ApiError(ErrorCode::DeleteFailed)
    })?;

    if questions.find(id).is_none() {
        return Err(ApiError(ErrorCode::NotFound));
    }

    questions.delete(id);
    Ok(Status::NoContent)
}
