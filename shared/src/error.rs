use aws_sdk_dynamodb::{self, types::SdkError};
use http::StatusCode;
use serde_json;
use std::error;
use std::fmt;

#[derive(Debug)]
pub enum ApplicationError {
    InitError(String),
    ValidationError(String),
    NotFound(String),
    InternalError(String),
    SdkError(String),
}

impl ApplicationError {
    /// HTTP status returned to the caller when this error ends an invocation.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::InitError(_)
            | ApplicationError::InternalError(_)
            | ApplicationError::SdkError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::error::Error for ApplicationError {}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApplicationError::InitError(msg) => write!(f, "InitError: {}", msg),
            ApplicationError::ValidationError(msg) => write!(f, "ValidationError: {}", msg),
            ApplicationError::NotFound(msg) => write!(f, "NotFound: {}", msg),
            ApplicationError::InternalError(msg) => write!(f, "InternalError: {}", msg),
            ApplicationError::SdkError(err) => write!(f, "SdkError: {}", err),
        }
    }
}

impl From<serde_json::error::Error> for ApplicationError {
    fn from(value: serde_json::error::Error) -> ApplicationError {
        ApplicationError::InternalError(format!("Cannot convert to string {}", value))
    }
}

impl From<&aws_sdk_dynamodb::model::AttributeValue> for ApplicationError {
    fn from(value: &aws_sdk_dynamodb::model::AttributeValue) -> ApplicationError {
        ApplicationError::InternalError(format!("Unsupported attribute value {:?}", value))
    }
}

impl<E> From<SdkError<E>> for ApplicationError
where
    E: error::Error,
{
    fn from(value: SdkError<E>) -> ApplicationError {
        ApplicationError::SdkError(format!("{}", value))
    }
}

impl From<http::Error> for ApplicationError {
    fn from(value: http::Error) -> ApplicationError {
        ApplicationError::InternalError(format!("Cannot build the response {}", value))
    }
}
