use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::ResponseStoreError;

/// A gateway response as handed over by the gateway client, keyed by the
/// gateway's own (camelCase) field names.
pub type ResponsePayload = Map<String, Value>;

/// `errorCode` value meaning the request itself was accepted.
pub const REQUEST_OK: &str = "OK";

pub const STATUS_KEY: &str = "status";
pub const ERROR_DETAILS_KEY: &str = "errorDetails";

/// Request status and audit data shared by every stored gateway response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseStatus {
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    raw_response: ResponsePayload,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResponseStatus {
    pub fn with_raw_response(raw_response: ResponsePayload) -> Self {
        Self {
            raw_response,
            ..Self::default()
        }
    }

    /// The payload exactly as received. There is no setter.
    ///
    /// Nothing is sanitized: a string holding `\u0000` reaches the JSONB
    /// column as is, and Postgres rejects it, so the insert fails with
    /// `ResponseStoreError::Persistence`.
    pub fn raw_response(&self) -> &ResponsePayload {
        &self.raw_response
    }

    pub fn is_request_ok(&self) -> bool {
        self.error_code == REQUEST_OK
    }

    pub fn is_persisted(&self) -> bool {
        self.created_at.is_some()
    }

    /// Copies the fields of the `status` block onto the record.
    pub fn apply_status_block(&mut self, block: &Value) -> Result<(), ResponseStoreError> {
        let block = sub_mapping(STATUS_KEY, block)?;

        self.error_code = text_value("errorCode", lookup(block, "errorCode"))?;
        self.description = text_value("description", lookup(block, "description"))?;
        self.param_name = text_value("paramName", lookup(block, "paramName"))?;
        self.third_party_error = text_value("thirdPartyError", lookup(block, "thirdPartyError"))?;

        Ok(())
    }

    /// Status fields may also show up at the top level of a payload.
    pub fn assign_field(&mut self, key: &str, value: &Value) -> Result<bool, ResponseStoreError> {
        match key {
            "errorcode" => self.error_code = text_value(key, value)?,
            "description" => self.description = text_value(key, value)?,
            "paramname" => self.param_name = text_value(key, value)?,
            "thirdpartyerror" => self.third_party_error = text_value(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Transaction level error information from the `errorDetails` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    pub transaction_error_code: String,
    pub transaction_error_description: String,
    pub transaction_third_party_error: String,
}

impl ErrorDetails {
    pub fn from_block(block: &Value) -> Result<Self, ResponseStoreError> {
        let block = sub_mapping(ERROR_DETAILS_KEY, block)?;

        Ok(Self {
            transaction_error_code: text_value(
                "transactionErrorCode",
                lookup(block, "transactionErrorCode"),
            )?,
            transaction_error_description: text_value(
                "transactionErrorDescription",
                lookup(block, "transactionErrorDescription"),
            )?,
            transaction_third_party_error: text_value(
                "transactionThirdPartyError",
                lookup(block, "transactionThirdPartyError"),
            )?,
        })
    }

    pub fn assign_field(&mut self, key: &str, value: &Value) -> Result<bool, ResponseStoreError> {
        match key {
            "transactionerrorcode" => self.transaction_error_code = text_value(key, value)?,
            "transactionerrordescription" => {
                self.transaction_error_description = text_value(key, value)?
            }
            "transactionthirdpartyerror" => {
                self.transaction_third_party_error = text_value(key, value)?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Gateway keys are matched case-insensitively against record fields.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Coerces a payload value into a text field. Null becomes the empty string.
pub fn text_value(key: &str, value: &Value) -> Result<String, ResponseStoreError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Array(_) | Value::Object(_) => Err(ResponseStoreError::MalformedResponse(format!(
            "field `{}` must be a scalar value",
            key
        ))),
    }
}

/// Coerces a payload value into a boolean field. Null becomes `false`.
pub fn flag_value(key: &str, value: &Value) -> Result<bool, ResponseStoreError> {
    let malformed = || {
        ResponseStoreError::MalformedResponse(format!("field `{}` must be a boolean", key))
    };

    match value {
        Value::Null => Ok(false),
        Value::Bool(flag) => Ok(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            _ => Err(malformed()),
        },
        Value::Number(number) => match number.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(malformed()),
        },
        Value::Array(_) | Value::Object(_) => Err(malformed()),
    }
}

fn sub_mapping<'a>(name: &str, block: &'a Value) -> Result<&'a ResponsePayload, ResponseStoreError> {
    block.as_object().ok_or_else(|| {
        ResponseStoreError::MalformedResponse(format!("`{}` must be a mapping", name))
    })
}

fn lookup<'a>(block: &'a ResponsePayload, key: &str) -> &'a Value {
    block.get(key).unwrap_or(&Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_block_nulls_become_empty_strings() {
        let mut status = ResponseStatus::default();
        status
            .apply_status_block(&json!({
                "errorCode": "OK",
                "code": "OK",
                "description": "OK",
                "thirdPartyError": null,
                "paramName": null
            }))
            .unwrap();

        assert_eq!(status.error_code, "OK");
        assert_eq!(status.description, "OK");
        assert_eq!(status.param_name, "");
        assert_eq!(status.third_party_error, "");
        assert!(status.is_request_ok());
    }

    #[test]
    fn status_block_must_be_a_mapping() {
        let mut status = ResponseStatus::default();
        let err = status.apply_status_block(&json!("OK")).unwrap_err();
        assert!(matches!(err, ResponseStoreError::MalformedResponse(_)));
    }

    #[test]
    fn error_details_nulls_become_empty_strings() {
        let details = ErrorDetails::from_block(&json!({
            "transactionErrorCode": "CardDeclined",
            "transactionErrorDescription": null
        }))
        .unwrap();

        assert_eq!(details.transaction_error_code, "CardDeclined");
        assert_eq!(details.transaction_error_description, "");
        assert_eq!(details.transaction_third_party_error, "");
    }

    #[test]
    fn text_values_are_coerced() {
        assert_eq!(text_value("amount", &json!(5000)).unwrap(), "5000");
        assert_eq!(text_value("amount", &json!(true)).unwrap(), "true");
        assert!(text_value("amount", &json!({"minor": 5000})).is_err());
    }

    #[test]
    fn flag_values_are_coerced() {
        assert!(flag_value("pending", &json!(true)).unwrap());
        assert!(flag_value("pending", &json!("TRUE")).unwrap());
        assert!(!flag_value("pending", &json!(null)).unwrap());
        assert!(!flag_value("pending", &json!("0")).unwrap());
        assert!(flag_value("pending", &json!("maybe")).is_err());
    }
}
