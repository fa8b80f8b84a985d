use async_trait::async_trait;
use aws_sdk_dynamodb::{self, model::AttributeValue};
use shared::{
    error::ApplicationError,
    utils::dynamodb::{AttributeValuesExt, Document},
};
use typed_builder::TypedBuilder as Builder;

#[async_trait]
pub trait GetIdentityQuery {
    async fn execute(&self, identity_key: &str) -> Result<Option<Document>, ApplicationError>;
}

#[derive(Debug, Clone, Builder)]
pub struct GetIdentity {
    #[builder(setter(into))]
    table_name: String,

    #[builder(default = "id".to_string(), setter(into))]
    key_attribute: String,

    #[builder(default)]
    consistent_read: bool,

    pub dynamo_db_client: aws_sdk_dynamodb::Client,
}

#[async_trait]
impl GetIdentityQuery for GetIdentity {
    async fn execute(&self, identity_key: &str) -> Result<Option<Document>, ApplicationError> {
        let result = self
            .dynamo_db_client
            .get_item()
            .table_name(&self.table_name)
            .key(&self.key_attribute, AttributeValue::S(identity_key.to_owned()))
            .consistent_read(self.consistent_read)
            .send()
            .await?;

        result.item.map(|item| item.to_document()).transpose()
    }
}
