use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Stored order (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: f64,
}

impl From<models::order::Model> for Order {
    fn from(m: models::order::Model) -> Self {
        Self { id: m.id, amount: m.amount }
    }
}

/// Order as submitted by a caller, after decoding
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id: String,
    pub amount: f64,
}

impl From<NewOrder> for Order {
    fn from(n: NewOrder) -> Self {
        Self { id: n.id, amount: n.amount }
    }
}

/// Rejections produced while decoding a create request.
/// The display strings are the client-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input. 'id' and 'amount' are required fields.")]
    MissingFields,
    #[error("Invalid input. 'id' must be a string and 'amount' must be a number.")]
    InvalidTypes,
}

impl NewOrder {
    /// Presence first, then types: a body lacking either key is always
    /// `MissingFields`, whatever the other key holds.
    pub fn decode(body: &Value) -> Result<Self, ValidationError> {
        let obj = body.as_object().ok_or(ValidationError::MissingFields)?;
        let (Some(id), Some(amount)) = (obj.get("id"), obj.get("amount")) else {
            return Err(ValidationError::MissingFields);
        };
        let id = id.as_str().ok_or(ValidationError::InvalidTypes)?;
        let amount = amount.as_f64().ok_or(ValidationError::InvalidTypes)?;
        Ok(Self { id: id.to_string(), amount })
    }

    /// Decode a raw request body. Empty or unparsable bodies count as missing fields,
    /// and so does a number serde_json refuses at parse time (e.g. `1e400`).
    pub fn decode_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let body: Value =
            serde_json::from_slice(bytes).map_err(|_| ValidationError::MissingFields)?;
        Self::decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_valid_body() {
        let n = NewOrder::decode(&json!({"id": "order1", "amount": 123.45})).unwrap();
        assert_eq!(n, NewOrder { id: "order1".into(), amount: 123.45 });
    }

    #[test]
    fn integer_amount_is_accepted() {
        let n = NewOrder::decode(&json!({"id": "o", "amount": 150})).unwrap();
        assert_eq!(n.amount, 150.0);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let n = NewOrder::decode(&json!({"id": "o", "amount": 1.5, "note": "x"})).unwrap();
        assert_eq!(n.id, "o");
    }

    #[test]
    fn missing_keys() {
        for body in [json!({"amount": 150.0}), json!({"id": "o"}), json!({})] {
            assert_eq!(NewOrder::decode(&body), Err(ValidationError::MissingFields), "{body}");
        }
    }

    #[test]
    fn missing_key_wins_over_bad_type() {
        let r = NewOrder::decode(&json!({"id": 7}));
        assert_eq!(r, Err(ValidationError::MissingFields));
    }

    #[test]
    fn non_object_bodies() {
        for body in [json!(null), json!([]), json!("order"), json!(42)] {
            assert_eq!(NewOrder::decode(&body), Err(ValidationError::MissingFields), "{body}");
        }
    }

    #[test]
    fn wrong_types() {
        for body in [
            json!({"id": "o", "amount": "12.5"}),
            json!({"id": 1, "amount": 12.5}),
            json!({"id": null, "amount": 12.5}),
            json!({"id": "o", "amount": null}),
        ] {
            assert_eq!(NewOrder::decode(&body), Err(ValidationError::InvalidTypes), "{body}");
        }
    }

    #[test]
    fn raw_bodies() {
        assert!(NewOrder::decode_slice(br#"{"id":"a","amount":1}"#).is_ok());
        assert_eq!(NewOrder::decode_slice(b""), Err(ValidationError::MissingFields));
        assert_eq!(NewOrder::decode_slice(b"{not json"), Err(ValidationError::MissingFields));
    }

    #[test]
    fn out_of_range_amount_fails_parsing() {
        let r = NewOrder::decode_slice(br#"{"id":"a","amount":1e400}"#);
        assert_eq!(r, Err(ValidationError::MissingFields));
    }
}
