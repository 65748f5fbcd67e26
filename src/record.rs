//! Input records
//!
//! A record is one `{"a": .., "b": ..}` object from the input array. Records are
//! decoded once and then only read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered pair of integers
///
/// Only JSON objects decode into a record. Keys that are missing or `null`
/// decode as `0` and unknown keys are ignored. Values must be integers that
/// fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Record {
    /// First field
    pub a: i64,

    /// Second field
    pub b: i64,
}

impl Record {
    /// Create a record from its two fields
    pub const fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Contribution of this record to a sum: `a + b`
    #[inline]
    pub const fn value(&self) -> i64 {
        self.a + self.b
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = String;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let field = |name: &str| match object.get(name) {
            None | Some(Value::Null) => Ok(0),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| format!("field `{name}` must be an integer, found {value}")),
        };

        Ok(Self::new(field("a")?, field("b")?))
    }
}

impl From<(i64, i64)> for Record {
    fn from((a, b): (i64, i64)) -> Self {
        Self::new(a, b)
    }
}
