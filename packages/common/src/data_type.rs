use crate::error::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Runtime kind of a node, as shown to the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
}

impl DataType {
    /// Every type offered by the "new entry" selector, in display order.
    pub const ALL: [DataType; 6] = [
        DataType::String,
        DataType::Number,
        DataType::Boolean,
        DataType::Null,
        DataType::Object,
        DataType::Array,
    ];

    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => DataType::Null,
            Value::Bool(_) => DataType::Boolean,
            Value::Number(_) => DataType::Number,
            Value::String(_) => DataType::String,
            Value::Array(_) => DataType::Array,
            Value::Object(_) => DataType::Object,
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, DataType::Object | DataType::Array)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Null => "null",
            DataType::Object => "object",
            DataType::Array => "array",
        }
    }

    /// A fresh default value of this type.
    pub fn default_value(self) -> Value {
        match self {
            DataType::String => Value::String(String::new()),
            DataType::Number => Value::from(0),
            DataType::Boolean => Value::Bool(false),
            DataType::Null => Value::Null,
            DataType::Object => Value::Object(Map::new()),
            DataType::Array => Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = CommonError;

    fn from_str(s: &str) -> CommonResult<Self> {
        DataType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommonError::UnknownDataType(s.to_string()))
    }
}

/// Default value for a type-selector name such as `"Boolean"`.
///
/// Unrecognized names fall back to an empty string.
pub fn default_for(type_name: &str) -> Value {
    type_name
        .parse::<DataType>()
        .unwrap_or(DataType::String)
        .default_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification() {
        assert_eq!(DataType::of(&json!(null)), DataType::Null);
        assert_eq!(DataType::of(&json!(true)), DataType::Boolean);
        assert_eq!(DataType::of(&json!(1.5)), DataType::Number);
        assert_eq!(DataType::of(&json!("x")), DataType::String);
        assert_eq!(DataType::of(&json!([])), DataType::Array);
        assert_eq!(DataType::of(&json!({})), DataType::Object);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_for("Boolean"), json!(false));
        assert_eq!(default_for("Number"), json!(0));
        assert_eq!(default_for("Null"), json!(null));
        assert_eq!(default_for("String"), json!(""));
        assert_eq!(default_for("Array"), json!([]));
        assert_eq!(default_for("Object"), json!({}));
        assert_eq!(default_for("Widget"), json!(""));
    }

    #[test]
    fn test_object_default_is_fresh() {
        let mut first = default_for("Object");
        let second = default_for("Object");
        first
            .as_object_mut()
            .unwrap()
            .insert("k".to_string(), json!(1));
        assert_eq!(second, json!({}));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Boolean".parse::<DataType>().unwrap(), DataType::Boolean);
        assert_eq!("array".parse::<DataType>().unwrap(), DataType::Array);
        assert_eq!(
            "date".parse::<DataType>(),
            Err(CommonError::UnknownDataType("date".to_string()))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&DataType::Object).unwrap(), "\"object\"");
    }
}
