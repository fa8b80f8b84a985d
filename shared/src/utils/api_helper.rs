use crate::error::ApplicationError;
use lambda_http::{http::StatusCode, Response};
pub struct ApiHelper;

impl ApiHelper {
    pub fn response(
        status_code: StatusCode,
        body: String,
        content_type: String,
    ) -> Result<Response<String>, ApplicationError> {
        let response = Response::builder()
            .status(status_code)
            .header("Content-Type", content_type)
            .header("Access-Control-Allow-Origin", "*".to_string())
            .header("Access-Control-Allow-Headers", "Content-Type".to_string())
            .header("Access-Control-Allow-Methods", "GET, OPTIONS".to_string())
            .header("Access-Control-Allow-Credentials", "true".to_string())
            .body(body)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_status_body_and_headers() -> Result<(), ApplicationError> {
        // ACT
        let response = ApiHelper::response(
            StatusCode::NOT_FOUND,
            "\"Identity not found\"".to_string(),
            "application/json".to_string(),
        )?;

        // ASSERT
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), "\"Identity not found\"");
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");

        Ok(())
    }
}
