use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use slide300_common::Slide300Error;
use std::fmt;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Slide300Error adapted to actix-web responses
#[derive(Debug)]
pub struct ApiError(pub Slide300Error);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Slide300Error> for ApiError {
    fn from(err: Slide300Error) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.0.error_code().to_string(),
            message: self.0.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError(Slide300Error::AudienceRequired).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError(Slide300Error::not_found("template 0")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(Slide300Error::config("bad origin")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
