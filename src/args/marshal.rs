//! Marshaling — raw parameter token → typed flag value.

use std::fmt;

use thiserror::Error;

use crate::args::schema::FlagKind;

/// A parsed flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Boolean(bool),
    Integer(i32),
    Text(String),
}

impl FlagValue {
    /// Value a flag of `kind` holds before it is seen on the command line.
    pub fn default_for(kind: FlagKind) -> Self {
        match kind {
            FlagKind::Boolean => FlagValue::Boolean(false),
            FlagKind::Integer => FlagValue::Integer(0),
            FlagKind::Text => FlagValue::Text(String::new()),
        }
    }

    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Boolean(_) => FlagKind::Boolean,
            FlagValue::Integer(_) => FlagKind::Integer,
            FlagValue::Text(_) => FlagKind::Text,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Boolean(b) => write!(f, "{}", b),
            FlagValue::Integer(n) => write!(f, "{}", n),
            FlagValue::Text(s) => f.write_str(s),
        }
    }
}

/// Why a value-bearing flag could not be marshaled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("missing string parameter")]
    MissingString,

    #[error("missing integer parameter")]
    MissingInteger,

    #[error("expected an integer but was {raw}")]
    InvalidInteger { raw: String },
}

/// Convert `parameter` into a value of `kind`.
///
/// `parameter` is the token following the flag, or `None` when the token
/// list is exhausted. Boolean flags ignore it. Integers may carry
/// surrounding whitespace; the error keeps the untrimmed text.
pub fn marshal(kind: FlagKind, parameter: Option<&str>) -> Result<FlagValue, MarshalError> {
    match kind {
        FlagKind::Boolean => Ok(FlagValue::Boolean(true)),
        FlagKind::Integer => {
            let raw = parameter.ok_or(MarshalError::MissingInteger)?;
            raw.trim()
                .parse::<i32>()
                .map(FlagValue::Integer)
                .map_err(|_| MarshalError::InvalidInteger {
                    raw: raw.to_string(),
                })
        }
        FlagKind::Text => parameter
            .map(|raw| FlagValue::Text(raw.to_string()))
            .ok_or(MarshalError::MissingString),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_ignores_parameter() {
        assert_eq!(marshal(FlagKind::Boolean, None), Ok(FlagValue::Boolean(true)));
    }

    #[test]
    fn integer_accepts_signed_values() {
        assert_eq!(
            marshal(FlagKind::Integer, Some("-17")),
            Ok(FlagValue::Integer(-17))
        );
        assert_eq!(
            marshal(FlagKind::Integer, Some("+8")),
            Ok(FlagValue::Integer(8))
        );
    }

    #[test]
    fn integer_rejects_overflow() {
        assert_eq!(
            marshal(FlagKind::Integer, Some("4294967296")),
            Err(MarshalError::InvalidInteger {
                raw: "4294967296".into()
            })
        );
    }

    #[test]
    fn integer_trims_surrounding_whitespace() {
        assert_eq!(
            marshal(FlagKind::Integer, Some(" 42 ")),
            Ok(FlagValue::Integer(42))
        );
        assert_eq!(
            marshal(FlagKind::Integer, Some("\t-3\n")),
            Ok(FlagValue::Integer(-3))
        );
    }

    #[test]
    fn invalid_integer_keeps_untrimmed_text() {
        assert_eq!(
            marshal(FlagKind::Integer, Some(" 4 2 ")),
            Err(MarshalError::InvalidInteger {
                raw: " 4 2 ".into()
            })
        );
        assert_eq!(
            marshal(FlagKind::Integer, Some("   ")),
            Err(MarshalError::InvalidInteger { raw: "   ".into() })
        );
    }

    #[test]
    fn missing_parameters() {
        assert_eq!(
            marshal(FlagKind::Integer, None),
            Err(MarshalError::MissingInteger)
        );
        assert_eq!(marshal(FlagKind::Text, None), Err(MarshalError::MissingString));
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(
            marshal(FlagKind::Text, Some("  spaced -out ")),
            Ok(FlagValue::Text("  spaced -out ".into()))
        );
    }

    #[test]
    fn defaults_match_kind() {
        for kind in [FlagKind::Boolean, FlagKind::Integer, FlagKind::Text] {
            assert_eq!(FlagValue::default_for(kind).kind(), kind);
        }
    }
}
