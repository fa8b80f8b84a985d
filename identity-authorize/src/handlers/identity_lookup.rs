use crate::{
    models::lookup::{LookupRequest, LookupResponse},
    utils::injections::identity_di::IdentityInitialisation,
};
use lambda_http::{http::StatusCode, Request};
use shared::error::ApplicationError;
use tracing::{debug, error, info, warn};

/// Decodes the proxy event and runs the lookup. Always produces a response.
pub async fn execute(
    app_client: &dyn IdentityInitialisation,
    event: &Request,
    path_parameter: &str,
) -> LookupResponse {
    let request = match LookupRequest::from_request(event, path_parameter) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "rejecting identity lookup");
            return LookupResponse::from_error(&e);
        }
    };

    handle(app_client, &request).await
}

pub async fn handle(
    app_client: &dyn IdentityInitialisation,
    request: &LookupRequest,
) -> LookupResponse {
    let identity_key = request.identity_key();
    debug!(identity_key, "looking up identity");

    match app_client.get_identity(identity_key).await {
        Ok(Some(identity)) => LookupResponse::respond(&identity, StatusCode::OK),
        Ok(None) => {
            info!(identity_key, "identity not found");
            LookupResponse::from_error(&ApplicationError::NotFound(identity_key.to_string()))
        }
        Err(e) => {
            error!(error = %e, identity_key, "identity lookup failed");
            LookupResponse::operation_failed()
        }
    }
}
