use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use sskeeper_domain::{DomainError, ErrorSeverity};

/// JSON body of a 5xx / 422 response
///
/// - code: numeric error code (2xxx-6xxx range)
/// - message: human-readable message
/// - severity: how loud an operator should be about it
/// - recoverable: whether simply retrying can succeed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    pub severity: ErrorSeverity,
    pub recoverable: bool,
}

impl From<&DomainError> for ErrorBody {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code().code(),
            message: err.to_string(),
            severity: err.severity(),
            recoverable: err.is_recoverable(),
        }
    }
}

/// DomainError carried out of an HTTP handler
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format_with_code())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.0 {
            // clients only look at the status for these
            DomainError::Conflict(_) | DomainError::NotFound(_) => {
                HttpResponse::build(self.status_code()).json(serde_json::json!({}))
            }
            _ => HttpResponse::build(self.status_code()).json(ErrorBody::from(&self.0)),
        }
    }
}
