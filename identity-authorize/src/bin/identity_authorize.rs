use identity_authorize::{
    queries::get_identity::GetIdentity,
    utils::{
        config::Config,
        injections::identity_di::IdentityAppClient,
        metrics::{Metrics, StdoutSink},
        pipeline::Pipeline,
    },
};
use lambda_http::{self, service_fn, Error, Request};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .without_time()
        .with_current_span(true)
        .with_max_level(config.log_level)
        .init();

    let aws_config = aws_config::load_from_env().await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let query = GetIdentity::builder()
        .table_name(config.table_name.clone())
        .key_attribute(config.key_attribute.clone())
        .consistent_read(config.consistent_read)
        .dynamo_db_client(dynamodb_client)
        .build();

    let app_client = IdentityAppClient::builder()
        .get_identity_query(query)
        .build();

    let metrics = Metrics::builder()
        .namespace(config.metrics_namespace.clone())
        .service(config.service_name.clone())
        .sink(Arc::new(StdoutSink))
        .build();

    let pipeline = Pipeline::builder()
        .app_client(Box::new(app_client))
        .metrics(metrics)
        .path_parameter(config.path_parameter.clone())
        .function_name(config.function_name.clone())
        .build();

    let pipeline = &pipeline;
    lambda_http::run(service_fn(move |event: Request| async move {
        pipeline.invoke(event).await.map_err(Error::from)
    }))
    .await?;
    Ok(())
}
