//! Request pipeline wrapped around the identity lookup handler.
//!
//! Stages run in a fixed order: log, trace, metrics, handle. Each invocation
//! produces exactly one HTTP response; handler failures are already folded into
//! a status code by the time they reach this layer.

use crate::{
    handlers::identity_lookup,
    models::lookup::LookupResponse,
    utils::{
        injections::identity_di::IdentityInitialisation,
        metrics::{MetricSet, MetricUnit, Metrics, COLD_START_METRIC, SUCCESS_METRIC},
    },
};
use lambda_http::{http::StatusCode, Request, Response};
use shared::error::ApplicationError;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, field, info, info_span, Instrument};
use typed_builder::TypedBuilder as Builder;

#[derive(Builder)]
pub struct Pipeline {
    app_client: Box<dyn IdentityInitialisation>,

    metrics: Metrics,

    #[builder(default = "id".to_string(), setter(into))]
    path_parameter: String,

    #[builder(default)]
    function_name: Option<String>,

    #[builder(setter(skip), default = AtomicBool::new(true))]
    cold_start: AtomicBool,
}

impl Pipeline {
    pub async fn invoke(&self, event: Request) -> Result<Response<String>, ApplicationError> {
        let cold_start = self.cold_start.swap(false, Ordering::SeqCst);

        debug!(event = ?event, "received event");
        info!(
            service = self.metrics.service(),
            cold_start,
            method = %event.method(),
            path = event.uri().path(),
            "identity lookup started"
        );

        let span = info_span!(
            "identity_lookup",
            service = self.metrics.service(),
            cold_start,
            xray_trace_id = field::Empty,
            status_code = field::Empty
        );
        if let Ok(trace_id) = std::env::var("_X_AMZN_TRACE_ID") {
            span.record("xray_trace_id", trace_id.as_str());
        }

        let response = self
            .measured(&event, cold_start)
            .instrument(span.clone())
            .await;
        span.record("status_code", response.status_code);

        response.into_response()
    }

    async fn measured(&self, event: &Request, cold_start: bool) -> LookupResponse {
        if cold_start {
            let mut set = MetricSet::new();
            set.add_metric(COLD_START_METRIC, 1.0, MetricUnit::Count);
            if let Some(function_name) = &self.function_name {
                set.add_dimension("function_name", function_name.as_str());
            }
            self.metrics.publish(&set);
        }

        let response =
            identity_lookup::execute(self.app_client.as_ref(), event, &self.path_parameter).await;

        let mut set = MetricSet::new();
        if response.status() == StatusCode::OK {
            set.add_metric(SUCCESS_METRIC, 1.0, MetricUnit::Count);
        }
        self.metrics.publish(&set);

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{
        injections::identity_di::MockIdentityInitialisation, metrics::MockMetricsSink,
    };
    use lambda_http::RequestExt;
    use serde_json::{json, Value};
    use std::{collections::HashMap, sync::Arc};

    fn get_lambda_request(id: &str) -> Request {
        let mut parameters = HashMap::new();
        parameters.insert("id".to_string(), id.to_string());
        Request::default().with_path_parameters(parameters)
    }

    fn pipeline(app_client: MockIdentityInitialisation, sink: MockMetricsSink) -> Pipeline {
        Pipeline::builder()
            .app_client(Box::new(app_client))
            .metrics(
                Metrics::builder()
                    .namespace("GetService")
                    .service("Get")
                    .sink(Arc::new(sink))
                    .build(),
            )
            .function_name(Some("identity-authorize".to_string()))
            .build()
    }

    #[tokio::test]
    async fn counts_cold_start_once_and_every_success() -> Result<(), ApplicationError> {
        // ARRANGE
        let mut app_client = MockIdentityInitialisation::new();
        app_client.expect_get_identity().times(2).returning(|_| {
            match json!({ "name": "Ada" }) {
                Value::Object(document) => Ok(Some(document)),
                _ => Ok(None),
            }
        });
        let mut sink = MockMetricsSink::new();
        sink.expect_publish()
            .withf(|blob| {
                blob.get(COLD_START_METRIC).is_some()
                    && blob["function_name"] == json!("identity-authorize")
            })
            .times(1)
            .return_const(());
        sink.expect_publish()
            .withf(|blob| blob.get(SUCCESS_METRIC).is_some())
            .times(2)
            .return_const(());
        let pipeline = pipeline(app_client, sink);

        // ACT
        let first = pipeline.invoke(get_lambda_request("user-42")).await?;
        let second = pipeline.invoke(get_lambda_request("user-42")).await?;

        // ASSERT
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(first.body(), "{\"name\":\"Ada\"}");
        assert_eq!(first.headers()["Content-Type"], "application/json");
        assert_eq!(first.body(), second.body());

        Ok(())
    }

    #[tokio::test]
    async fn does_not_count_a_failed_lookup() -> Result<(), ApplicationError> {
        // ARRANGE
        let mut app_client = MockIdentityInitialisation::new();
        app_client
            .expect_get_identity()
            .times(1)
            .returning(|_| Err(ApplicationError::SdkError("timeout".to_string())));
        let mut sink = MockMetricsSink::new();
        sink.expect_publish()
            .withf(|blob| blob.get(COLD_START_METRIC).is_some())
            .times(1)
            .return_const(());
        sink.expect_publish()
            .withf(|blob| blob.get(SUCCESS_METRIC).is_some())
            .times(0);
        let pipeline = pipeline(app_client, sink);

        // ACT
        let response = pipeline.invoke(get_lambda_request("user-42")).await?;

        // ASSERT
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body(), "\"Operation failed\"");

        Ok(())
    }

    #[tokio::test]
    async fn answers_a_bad_request_without_a_lookup() -> Result<(), ApplicationError> {
        // ARRANGE
        let mut app_client = MockIdentityInitialisation::new();
        app_client.expect_get_identity().times(0);
        let mut sink = MockMetricsSink::new();
        sink.expect_publish().times(1).return_const(());
        let pipeline = pipeline(app_client, sink);

        // ACT
        let response = pipeline.invoke(get_lambda_request("")).await?;

        // ASSERT
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
