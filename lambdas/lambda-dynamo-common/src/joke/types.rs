use aws_sdk_dynamodb::types::AttributeValue;
use serde::{ser::Error as _, Serialize, Serializer};
use std::collections::HashMap;

use crate::convert;

/// A joke as stored in DynamoDB.
///
/// The attributes are not interpreted, the item serializes as DynamoDB JSON
/// exactly as it was read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JokeItem(pub HashMap<String, AttributeValue>);

impl From<HashMap<String, AttributeValue>> for JokeItem {
    fn from(item: HashMap<String, AttributeValue>) -> Self {
        JokeItem(item)
    }
}

impl Serialize for JokeItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        convert::item_to_json(&self.0)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_dynamodb_json() {
        let mut item = HashMap::new();
        item.insert("ID".to_string(), AttributeValue::N("42".to_string()));
        item.insert(
            "Text".to_string(),
            AttributeValue::S("why did...".to_string()),
        );

        assert_eq!(
            serde_json::to_value(JokeItem::from(item)).unwrap(),
            json!({"ID": {"N": "42"}, "Text": {"S": "why did..."}})
        );
    }
}
