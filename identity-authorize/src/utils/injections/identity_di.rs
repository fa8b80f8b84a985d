use crate::queries::get_identity::{GetIdentity, GetIdentityQuery};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use shared::{error::ApplicationError, utils::dynamodb::Document};
use typed_builder::TypedBuilder as Builder;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityInitialisation: Send + Sync {
    async fn get_identity(&self, identity_key: &str)
        -> Result<Option<Document>, ApplicationError>;
}

#[derive(Debug, Clone, Builder)]
pub struct IdentityAppClient {
    #[builder(setter(into))]
    pub get_identity_query: GetIdentity,
}

#[async_trait]
impl IdentityInitialisation for IdentityAppClient {
    async fn get_identity(
        &self,
        identity_key: &str,
    ) -> Result<Option<Document>, ApplicationError> {
        self.get_identity_query.execute(identity_key).await
    }
}
