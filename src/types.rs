use diesel::result::Error as DieselError;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use tracing::error;

use crate::utils::{error_body, try_respond};

#[derive(Debug)]
pub enum ApiError {
    Diesel(DieselError),
    Unavailable,
    Internal,
}

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> ApiError {
        ApiError::Diesel(err)
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Unavailable => Status::ServiceUnavailable,
            ApiError::Diesel(_) | ApiError::Internal => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        match &self {
            ApiError::Unavailable => {}
            ApiError::Diesel(e) => error!(error = %e, uri = %req.uri(), "database query failed"),
            ApiError::Internal => error!(uri = %req.uri(), "internal error"),
        }
        try_respond(req, &error_body(status), status)
    }
}
