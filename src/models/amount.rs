use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A numeric field as it was received.
///
/// Values read from JSON stay `Raw` so they can be passed back out verbatim;
/// values built in code or produced by a computation are `Decimal`.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Decimal(Decimal),
    Raw(Value),
}

impl Amount {
    /// Render the amount the way it would appear in output.
    pub fn display(&self) -> String {
        match self {
            Amount::Decimal(value) => value.to_string(),
            Amount::Raw(Value::String(s)) => s.clone(),
            Amount::Raw(value) => value.to_string(),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Raw(Value::Null)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<Value> for Amount {
    fn from(value: Value) -> Self {
        Amount::Raw(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Raw(Value::String(value.to_string()))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Amount::Decimal(value) => Serialize::serialize(value, serializer),
            Amount::Raw(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Amount::Raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_values_serialize_verbatim() {
        let amount = Amount::Raw(json!(1.5));
        assert_eq!(serde_json::to_value(&amount).unwrap(), json!(1.5));

        let amount = Amount::from("a");
        assert_eq!(serde_json::to_value(&amount).unwrap(), json!("a"));
    }

    #[test]
    fn decimals_serialize_as_exact_strings() {
        let amount = Amount::Decimal(Decimal::new(100000002, 8));
        assert_eq!(serde_json::to_value(&amount).unwrap(), json!("1.00000002"));
    }

    #[test]
    fn deserialize_keeps_the_raw_value() {
        let amount: Amount = serde_json::from_str("\"100,000\"").unwrap();
        assert_eq!(amount, Amount::Raw(json!("100,000")));
    }
}
