use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::error::{ErrorCode, ErrorResponse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ErrorCode);

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = match self.0 {
            ErrorCode::InvalidRecord => Status::BadRequest,
            ErrorCode::IdentifierInUse => Status::Conflict,
            ErrorCode::NotFound => Status::NotFound,
            ErrorCode::CreateFailed | ErrorCode::UpdateFailed | ErrorCode::DeleteFailed => {
                Status::InternalServerError
            }
        };

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
