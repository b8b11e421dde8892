//! Error state and reporter for scan-time failures.
//!
//! Scan failures are data, not `Err` values: the scanner latches the first
//! failure into an [`ErrorState`] and the facade renders it on request.

use crate::args::marshal::MarshalError;

/// Category of the latched error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCode {
    /// Nothing latched.
    #[default]
    None,
    /// A flag character not present in the schema.
    Unexpected,
    /// Text flag with no following token.
    MissingString,
    /// Integer flag with no following token.
    MissingInteger,
    /// Integer flag whose following token is not a base-10 integer.
    InvalidInteger,
}

impl ErrorCode {
    /// Machine-readable name (used in reports).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::None => "ok",
            ErrorCode::Unexpected => "unexpected_argument",
            ErrorCode::MissingString => "missing_string",
            ErrorCode::MissingInteger => "missing_integer",
            ErrorCode::InvalidInteger => "invalid_integer",
        }
    }
}

impl From<&MarshalError> for ErrorCode {
    fn from(err: &MarshalError) -> Self {
        match err {
            MarshalError::MissingString => ErrorCode::MissingString,
            MarshalError::MissingInteger => ErrorCode::MissingInteger,
            MarshalError::InvalidInteger { .. } => ErrorCode::InvalidInteger,
        }
    }
}

/// At most one outstanding error. First error wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    code: ErrorCode,
    argument_id: Option<char>,
    parameter: Option<String>,
}

impl ErrorState {
    /// Record an error unless one is already latched.
    ///
    /// Returns `true` if this call set the state. Latching `ErrorCode::None`
    /// is a no-op.
    pub fn latch(&mut self, code: ErrorCode, argument_id: char, parameter: Option<String>) -> bool {
        if self.is_set() || code == ErrorCode::None {
            return false;
        }
        self.code = code;
        self.argument_id = Some(argument_id);
        self.parameter = parameter;
        true
    }

    pub fn is_set(&self) -> bool {
        self.code != ErrorCode::None
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn argument_id(&self) -> Option<char> {
        self.argument_id
    }

    /// Raw text that failed to parse (InvalidInteger only).
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }
}

/// Render the latched error, or `None` when nothing is latched.
///
/// `unexpected` is every unschemaed identifier seen, in input order; all of
/// them are listed in the Unexpected message, not only the first.
pub fn try_render(state: &ErrorState, unexpected: &[char]) -> Option<String> {
    let id = state.argument_id.unwrap_or_default();
    let message = match state.code {
        ErrorCode::None => return None,
        ErrorCode::Unexpected => {
            let ids: String = unexpected.iter().collect();
            format!("Argument(s) -{} unexpected.", ids)
        }
        ErrorCode::MissingString => format!("Could not find string parameter for {}", id),
        ErrorCode::MissingInteger => format!("Could not find integer parameter for {}", id),
        ErrorCode::InvalidInteger => format!(
            "Argument {} expects an integer but was {}",
            id,
            state.parameter().unwrap_or_default()
        ),
    };
    Some(message)
}

/// Render the latched error.
///
/// # Panics
///
/// Panics if no error is latched. Asking for the message of a valid parse
/// is a caller bug; check validity first or use [`try_render`].
pub fn render(state: &ErrorState, unexpected: &[char]) -> String {
    match try_render(state, unexpected) {
        Some(message) => message,
        None => panic!("error message requested for a parse with no error"),
    }
}
