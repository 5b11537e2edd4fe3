//! A Lambda function to get a joke.
//!
//! The lambda is invoked directly with a payload carrying the id of the
//! joke:
//!
//! `{ "jokeID": "42" }`
//!
//! The joke is read from the `jokes` table, suffixed by `JOKE_TABLE_SUFFIX`
//! when set (`jokes-dev`), and returned as stored, or `null` when there is
//! no such joke.
//!
use dotenv::dotenv;
use lambda_dynamo_common::{
    init_aws_dynamo_client,
    joke::{self, DynamoDbJokeProvider, JokeItem, JokeProvider},
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info, trace};

const MISSING_JOKE_ID: &str = "no jokeID provided";

/// Identifier of a joke, as sent by the caller: a string, a number or a
/// boolean.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum JokeId {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl JokeId {
    /// Returns the textual form of a usable id, None for an empty string,
    /// a numeric zero or `false`.
    fn as_key_value(&self) -> Option<String> {
        match self {
            JokeId::Text(s) if s.is_empty() => None,
            JokeId::Text(s) => Some(s.clone()),
            JokeId::Number(n) if n.as_f64() == Some(0.0) => None,
            JokeId::Number(n) => Some(n.to_string()),
            JokeId::Bool(false) => None,
            JokeId::Bool(true) => Some(true.to_string()),
        }
    }
}

#[derive(Deserialize, Debug)]
struct JokeRequest {
    #[serde(rename = "jokeID", default)]
    joke_id: Option<JokeId>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum JokeResponse {
    Error {
        #[serde(rename = "Error")]
        error: String,
    },
    Item(Option<JokeItem>),
}

struct Config {
    table_suffix: String,
}

fn get_config() -> Config {
    Config {
        table_suffix: env::var("JOKE_TABLE_SUFFIX").unwrap_or_default(),
    }
}

/// A struct to bundle all init required by the lambda.
struct Ctx<P: JokeProvider> {
    client: P::Client,
    provider: P,
}

async fn function_handler<P: JokeProvider>(
    ctx: &Ctx<P>,
    config: &Config,
    request: JokeRequest,
) -> Result<JokeResponse, Error> {
    let joke_id = match request.joke_id.as_ref().and_then(JokeId::as_key_value) {
        Some(id) => id,
        None => {
            info!("Rejecting request without jokeID: {:?}", request);
            return Ok(JokeResponse::Error {
                error: MISSING_JOKE_ID.to_string(),
            });
        }
    };

    let table_name = joke::table_name(&config.table_suffix);
    debug!("Reading joke {} from table {}", joke_id, table_name);

    let item = ctx
        .provider
        .get_joke(&ctx.client, &table_name, &joke_id)
        .await?;

    if item.is_none() {
        debug!("No joke {} in table {}", joke_id, table_name);
    }

    Ok(JokeResponse::Item(item))
}

async fn func<P: JokeProvider>(
    ctx: &Ctx<P>,
    event: LambdaEvent<JokeRequest>,
) -> Result<JokeResponse, Error> {
    trace!("Received request: {:?}", event);

    let config = get_config();
    function_handler(ctx, &config, event.payload).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let ctx: Ctx<DynamoDbJokeProvider> = Ctx {
        client: init_aws_dynamo_client().await,
        provider: DynamoDbJokeProvider::new(),
    };

    lambda_runtime::run(service_fn(|event: LambdaEvent<JokeRequest>| async {
        func(&ctx, event).await
    }))
    .await
}
