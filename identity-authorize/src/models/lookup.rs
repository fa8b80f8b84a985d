use lambda_http::{http::StatusCode, Request, RequestExt, Response};
use serde::Serialize;
use shared::{error::ApplicationError, utils::api_helper::ApiHelper};

pub const NOT_FOUND_MESSAGE: &str = "Identity not found";
pub const OPERATION_FAILED_MESSAGE: &str = "Operation failed";

/// Normalized lookup input. The key is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    identity_key: String,
}

impl LookupRequest {
    pub fn new(identity_key: impl Into<String>) -> Result<Self, ApplicationError> {
        let identity_key = identity_key.into();
        if identity_key.is_empty() {
            return Err(ApplicationError::ValidationError(
                "identity key is empty".to_string(),
            ));
        }

        Ok(Self { identity_key })
    }

    /// Reads the identity key from the `path_parameter` path parameter.
    pub fn from_request(event: &Request, path_parameter: &str) -> Result<Self, ApplicationError> {
        let parameters = event.path_parameters();
        let identity_key = parameters.first(path_parameter).unwrap_or_default();

        Self::new(identity_key).map_err(|_| {
            ApplicationError::ValidationError(format!(
                "Missing path parameter: {}",
                path_parameter
            ))
        })
    }

    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub status_code: u16,
    pub body: String,
}

impl LookupResponse {
    pub fn respond<T>(data: &T, status: StatusCode) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_string(data) {
            Ok(body) => Self {
                status_code: status.as_u16(),
                body,
            },
            Err(e) => {
                tracing::error!(error = %e, "cannot encode the response body");
                Self::operation_failed()
            }
        }
    }

    pub fn from_error(error: &ApplicationError) -> Self {
        let status = error.status_code();
        match error {
            ApplicationError::ValidationError(message) => Self::respond(message.as_str(), status),
            ApplicationError::NotFound(_) => Self::respond(NOT_FOUND_MESSAGE, status),
            _ => Self {
                status_code: status.as_u16(),
                body: format!("\"{}\"", OPERATION_FAILED_MESSAGE),
            },
        }
    }

    pub fn operation_failed() -> Self {
        Self::from_error(&ApplicationError::InternalError(
            OPERATION_FAILED_MESSAGE.to_string(),
        ))
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn into_response(self) -> Result<Response<String>, ApplicationError> {
        ApiHelper::response(self.status(), self.body, "application/json".to_string())
    }
}
