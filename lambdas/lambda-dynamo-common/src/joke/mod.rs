//! Joke module.
//!
pub mod types;
pub use types::*;

mod dynamo_provider;
pub use dynamo_provider::DynamoDbJokeProvider;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;

#[cfg(any(test, feature = "mock"))]
use crate::MockedClient;
use crate::ProviderError;

/// Base name of the jokes table, suffixed per environment.
pub const JOKE_TABLE_BASE_NAME: &str = "jokes";

/// Name of the numeric partition key of the jokes table.
pub const JOKE_KEY_ATTRIBUTE: &str = "ID";

/// Returns the jokes table name for the given environment suffix
/// (`jokes`, `jokes-dev`...).
pub fn table_name(suffix: &str) -> String {
    format!("{}{}", JOKE_TABLE_BASE_NAME, suffix)
}

/// Returns the key of the joke with the given id. The id is sent as a
/// number attribute, its validity is checked by DynamoDB.
pub fn joke_key(joke_id: &str) -> HashMap<String, AttributeValue> {
    let mut key = HashMap::new();
    key.insert(
        JOKE_KEY_ATTRIBUTE.to_string(),
        AttributeValue::N(joke_id.to_string()),
    );
    key
}

/// Trait defining the requests that can be done to dynamoDB for jokes.
/// Mainly done for mocking purposes, as `Client` from the sdk is not a trait.
#[cfg_attr(any(test, feature = "mock"), automock(type Client=MockedClient;))]
#[async_trait]
pub trait JokeProvider {
    type Client;

    /// Point lookup of a joke by id. `Ok(None)` when no item matches.
    async fn get_joke(
        &self,
        client: &Self::Client,
        table_name: &str,
        joke_id: &str,
    ) -> Result<Option<JokeItem>, ProviderError>;
}
