//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        // Missing points surface as 400: the original wire contract, which
        // the mobile and web clients rely on.
        ErrorCode::NotFound => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("Point not found."), StatusCode::BAD_REQUEST)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_codes_to_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[tokio::test]
    async fn internal_messages_are_redacted() {
        let response = Error::internal("secret database string").error_response();
        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["message"], "Internal server error");
    }

    #[tokio::test]
    async fn not_found_body_carries_the_message() {
        let response = Error::not_found("Point not found.").error_response();
        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["message"], "Point not found.");
    }
}
