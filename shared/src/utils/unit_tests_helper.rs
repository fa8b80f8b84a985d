use aws_config;
use aws_sdk_dynamodb;
use aws_smithy_client::{erase::DynConnector, test_connection::TestConnection};
use aws_smithy_http::body::SdkBody;
use http::Request;
use lambda_http::Response;

pub struct UnitTestHelper {}

impl UnitTestHelper {
    pub fn build_test_connection(
        request: Request<SdkBody>,
        response: Response<SdkBody>,
    ) -> TestConnection<SdkBody> {
        TestConnection::new(vec![(request, response)])
    }

    async fn dynamo_mock_config() -> aws_sdk_dynamodb::Config {
        let cfg = aws_config::from_env()
            .region(aws_sdk_dynamodb::Region::new("eu-central-1"))
            .credentials_provider(aws_sdk_dynamodb::Credentials::new(
                "accesskey",
                "privatekey",
                None,
                None,
                "dummy",
            ))
            .load()
            .await;

        aws_sdk_dynamodb::Config::new(&cfg)
    }

    pub fn dynamodb_request_builder() -> http::request::Builder {
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.0")
            .uri(http::uri::Uri::from_static(
                "https://dynamodb.eu-central-1.amazonaws.com/",
            ))
    }

    /// GetItem request exactly as the SDK serializes it.
    pub fn get_item_request(
        table_name: &str,
        key_attribute: &str,
        key: &str,
        consistent_read: bool,
    ) -> Request<SdkBody> {
        Self::dynamodb_request_builder()
            .header("x-amz-target", "DynamoDB_20120810.GetItem")
            .body(SdkBody::from(format!(
                r#"{{"TableName":"{}","Key":{{"{}":{{"S":"{}"}}}},"ConsistentRead":{}}}"#,
                table_name, key_attribute, key, consistent_read
            )))
            .unwrap()
    }

    pub fn get_item_response(status: u16, body: &str) -> Response<SdkBody> {
        Response::builder()
            .status(status)
            .body(SdkBody::from(body.to_owned()))
            .unwrap()
    }

    pub async fn dynamo_fake_client(conn: &TestConnection<SdkBody>) -> aws_sdk_dynamodb::Client {
        aws_sdk_dynamodb::Client::from_conf_conn(
            Self::dynamo_mock_config().await,
            DynConnector::new(conn.clone()),
        )
    }
}
