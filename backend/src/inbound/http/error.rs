//! HTTP mapping for domain errors.
//!
//! Keeps [`Error`] transport-agnostic while letting handlers bubble it with
//! `?`; the `ResponseError` impl turns it into the uniform JSON envelope
//! with the matching status code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        // 499: the nginx convention for a client that went away.
        ErrorCode::Cancelled => {
            StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Internal failures keep their detail in the logs, not in the response.
fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self, "internal error surfaced to a client");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationFailure;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, 400)]
    #[case(ErrorCode::ValidationFailed, 400)]
    #[case(ErrorCode::NotFound, 404)]
    #[case(ErrorCode::Cancelled, 499)]
    #[case(ErrorCode::ServiceUnavailable, 503)]
    #[case(ErrorCode::InternalError, 500)]
    fn codes_map_onto_statuses(#[case] code: ErrorCode, #[case] status: u16) {
        assert_eq!(status_for(code).as_u16(), status);
    }

    #[test]
    fn internal_errors_are_redacted() {
        let redacted = redact_if_internal(&Error::internal("connection string leaked"));
        assert_eq!(redacted.message(), "Internal server error");
    }

    #[test]
    fn validation_errors_keep_their_failure_details() {
        let error = Error::validation(vec![ValidationFailure::new("id", "id must be greater than 0")]);
        let kept = redact_if_internal(&error);
        assert_eq!(kept, error);
    }
}
