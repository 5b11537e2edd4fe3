//! This crate contains all the common types to work with the DynamoDB
//! backend of the jokester lambdas.
//!
pub mod convert;
pub mod joke;

use aws_config::{meta::region::RegionProviderChain, BehaviorVersion};
pub use aws_sdk_dynamodb::{types::AttributeValue, Client};

/// Generic errors for providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Data value error: {0}")]
    DataValueError(String),
}

/// Returns a newly initialized DynamoClient.
pub async fn init_aws_dynamo_client() -> Client {
    let region_provider = RegionProviderChain::default_provider().or_else("us-east-1");
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    Client::new(&config)
}

/// A default client type, mostly used for mocking.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct MockedClient;
