//! Rendering of raw DynamoDB items as DynamoDB JSON.
//!
//! Items are forwarded as they are stored, every value keeping its type
//! descriptor (`{"N": "42"}`, `{"S": "text"}`...), the same shape the
//! DynamoDB wire protocol and the AWS CLI use.
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

use crate::ProviderError;

/// Returns the DynamoDB JSON of a whole item, `ProviderError` if one of the
/// attributes has a type unknown to this version of the sdk.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Result<Value, ProviderError> {
    let mut map = Map::with_capacity(item.len());
    for (name, value) in item {
        map.insert(name.clone(), attr_to_json(value)?);
    }

    Ok(Value::Object(map))
}

/// Returns the DynamoDB JSON of a single attribute value.
pub fn attr_to_json(value: &AttributeValue) -> Result<Value, ProviderError> {
    let v = match value {
        AttributeValue::S(s) => json!({ "S": s }),
        AttributeValue::N(n) => json!({ "N": n }),
        AttributeValue::B(b) => json!({ "B": blob_to_base64(b) }),
        AttributeValue::Bool(b) => json!({ "BOOL": b }),
        AttributeValue::Null(n) => json!({ "NULL": n }),
        AttributeValue::Ss(ss) => json!({ "SS": ss }),
        AttributeValue::Ns(ns) => json!({ "NS": ns }),
        AttributeValue::Bs(bs) => {
            let encoded: Vec<String> = bs.iter().map(blob_to_base64).collect();
            json!({ "BS": encoded })
        }
        AttributeValue::L(l) => {
            let values = l.iter().map(attr_to_json).collect::<Result<Vec<_>, _>>()?;
            json!({ "L": values })
        }
        AttributeValue::M(m) => json!({ "M": item_to_json(m)? }),
        other => {
            return Err(ProviderError::DataValueError(format!(
                "Unsupported attribute value {:?}",
                other
            )))
        }
    };

    Ok(v)
}

fn blob_to_base64(blob: &Blob) -> String {
    general_purpose::STANDARD.encode(blob.as_ref())
}
