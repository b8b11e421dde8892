//! Serializable snapshot of a finished parse.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::args::{Args, FlagValue};

/// Everything a caller can query from [`Args`], in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    pub usage: String,
    pub valid: bool,
    pub cardinality: usize,
    pub found: Vec<String>,
    /// Every declared flag, defaults included.
    pub values: BTreeMap<String, serde_json::Value>,
    pub error: Option<ErrorReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

impl ParseReport {
    pub fn from_args(args: &Args) -> Self {
        let values = args
            .schema()
            .definitions()
            .iter()
            .filter_map(|def| {
                let value = match args.get(def.id)? {
                    FlagValue::Boolean(b) => serde_json::Value::from(*b),
                    FlagValue::Integer(n) => serde_json::Value::from(*n),
                    FlagValue::Text(s) => serde_json::Value::from(s.as_str()),
                };
                Some((def.id.to_string(), value))
            })
            .collect();

        let error = args.try_error_message().map(|message| ErrorReport {
            code: args.error_code().as_str(),
            message,
        });

        Self {
            usage: args.usage(),
            valid: args.is_valid(),
            cardinality: args.cardinality(),
            found: args.found().iter().map(char::to_string).collect(),
            values,
            error,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
