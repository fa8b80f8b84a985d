use crate::error::ApplicationError;
use aws_sdk_dynamodb::model::AttributeValue;
use aws_smithy_types::base64;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

/// Schema-less item as returned to the caller.
pub type Document = Map<String, Value>;

pub trait AttributeValuesExt {
    fn to_document(&self) -> Result<Document, ApplicationError>;
}

impl AttributeValuesExt for HashMap<String, AttributeValue> {
    fn to_document(&self) -> Result<Document, ApplicationError> {
        let mut document = Map::new();
        for (key, value) in self {
            document.insert(key.clone(), attribute_to_json(value)?);
        }

        Ok(document)
    }
}

pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, ApplicationError> {
    let json = match value {
        AttributeValue::S(value) => Value::String(value.clone()),
        AttributeValue::N(value) => number_to_json(value),
        AttributeValue::Bool(value) => Value::Bool(*value),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(base64::encode(blob.as_ref())),
        AttributeValue::Ss(values) => Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        ),
        AttributeValue::Ns(values) => {
            Value::Array(values.iter().map(|x| number_to_json(x)).collect())
        }
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(base64::encode(blob.as_ref())))
                .collect(),
        ),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        AttributeValue::M(values) => Value::Object(values.to_document()?),
        _ => return Err(value.into()),
    };

    Ok(json)
}

// DynamoDB numbers travel as strings; keep the raw text when it is not a JSON number.
fn number_to_json(value: &str) -> Value {
    if let Ok(number) = value.parse::<i64>() {
        return Value::from(number);
    }
    if let Ok(number) = value.parse::<u64>() {
        return Value::from(number);
    }

    value
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::Blob;
    use serde_json::{json, Result};

    #[test]
    fn dynamodb_string_to_document() -> Result<()> {
        // ARRANGE
        let mut value = HashMap::new();
        value.insert("name".to_string(), AttributeValue::S("Ada".to_string()));

        // ACT
        let result = value.to_document().unwrap();

        // ASSERT
        assert_eq!(Value::Object(result), json!({ "name": "Ada" }));
        Ok(())
    }

    #[test]
    fn dynamodb_numbers_to_document() -> Result<()> {
        // ARRANGE
        let mut value = HashMap::new();
        value.insert("age".to_string(), AttributeValue::N("36".to_string()));
        value.insert("score".to_string(), AttributeValue::N("1.5".to_string()));
        value.insert(
            "huge".to_string(),
            AttributeValue::N("18446744073709551615".to_string()),
        );

        // ACT
        let result = Value::Object(value.to_document().unwrap());

        // ASSERT
        assert_eq!(result["age"], json!(36));
        assert_eq!(result["score"], json!(1.5));
        assert_eq!(result["huge"], json!(18446744073709551615u64));
        Ok(())
    }

    #[test]
    fn dynamodb_nested_to_document() -> Result<()> {
        // ARRANGE
        let mut address = HashMap::new();
        address.insert("city".to_string(), AttributeValue::S("London".to_string()));
        let mut value = HashMap::new();
        value.insert("address".to_string(), AttributeValue::M(address));
        value.insert(
            "roles".to_string(),
            AttributeValue::L(vec![
                AttributeValue::S("admin".to_string()),
                AttributeValue::Bool(true),
                AttributeValue::Null(true),
            ]),
        );
        value.insert(
            "tags".to_string(),
            AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]),
        );

        // ACT
        let result = Value::Object(value.to_document().unwrap());

        // ASSERT
        assert_eq!(
            result,
            json!({
                "address": { "city": "London" },
                "roles": ["admin", true, null],
                "tags": ["a", "b"]
            })
        );
        Ok(())
    }

    #[test]
    fn dynamodb_binary_is_base64() -> Result<()> {
        // ARRANGE
        let value = AttributeValue::B(Blob::new("hello".as_bytes()));

        // ACT
        let result = attribute_to_json(&value).unwrap();

        // ASSERT
        assert_eq!(result, json!("aGVsbG8="));
        Ok(())
    }

    #[test]
    fn dynamodb_number_that_is_not_json_stays_text() -> Result<()> {
        // ACT
        let result = number_to_json("NaN-ish");

        // ASSERT
        assert_eq!(result, json!("NaN-ish"));
        Ok(())
    }
}
