use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client as DynamoClient;
use tracing::error;

use super::{joke_key, types::JokeItem, JokeProvider};
use crate::ProviderError;

/// DynamoDB provider for jokes.
#[derive(Debug, Default)]
pub struct DynamoDbJokeProvider;

impl DynamoDbJokeProvider {
    pub fn new() -> Self {
        DynamoDbJokeProvider
    }
}

#[async_trait]
impl JokeProvider for DynamoDbJokeProvider {
    type Client = DynamoClient;

    async fn get_joke(
        &self,
        client: &Self::Client,
        table_name: &str,
        joke_id: &str,
    ) -> Result<Option<JokeItem>, ProviderError> {
        let rsp = client
            .get_item()
            .table_name(table_name)
            .set_key(Some(joke_key(joke_id)))
            .send()
            .await
            .map_err(|e| {
                error!("GetItem on {} failed: {}", table_name, DisplayErrorContext(&e));
                ProviderError::DatabaseError(DisplayErrorContext(&e).to_string())
            })?;

        Ok(rsp.item.map(JokeItem::from))
    }
}
