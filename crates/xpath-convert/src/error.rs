use crate::consts::ERR_NS;
use core::fmt;

/// Error codes emitted by the conversion core.
///
/// Only the codes this crate can actually raise are listed; the names follow
/// the W3C xqt-errors vocabulary so hosts can map them onto their own tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A function was called with an argument count it does not accept.
    XPST0017,
    /// Document order was requested for nodes of different documents.
    FOER0000,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::XPST0017 => "XPST0017",
            ErrorCode::FOER0000 => "FOER0000",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.strip_prefix("err:").unwrap_or(s) {
            "XPST0017" => Some(ErrorCode::XPST0017),
            "FOER0000" => Some(ErrorCode::FOER0000),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-visible error of the conversion core.
///
/// The message is never empty; constructors fall back to a generic text
/// derived from the code when handed an empty one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error: {message} (err:{code})")]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

impl Error {
    pub fn from_code(code: ErrorCode, msg: impl Into<String>) -> Self {
        let mut message = msg.into();
        if message.is_empty() {
            message = match code {
                ErrorCode::XPST0017 => "function called with wrong number of arguments".to_string(),
                ErrorCode::FOER0000 => "error".to_string(),
            };
        }
        Self { code, message }
    }

    /// Arity violation for `function`, phrased the way users read it:
    /// `function string() cannot be called with two arguments`.
    pub fn wrong_arity(function: &str, argc: usize) -> Self {
        let arg_phrase = match argc {
            0 => "no arguments".to_string(),
            1 => "one argument".to_string(),
            2 => "two arguments".to_string(),
            3 => "three arguments".to_string(),
            n => format!("{n} arguments"),
        };
        Self::from_code(
            ErrorCode::XPST0017,
            format!("function {function}() cannot be called with {arg_phrase}"),
        )
    }

    pub fn code_enum(&self) -> ErrorCode {
        self.code
    }

    /// True for arity violations of a function call.
    pub fn is_function_call(&self) -> bool {
        self.code == ErrorCode::XPST0017
    }

    /// Format the code as `Q{ns}local` (expanded QName notation).
    pub fn format_code(&self) -> String {
        format!("Q{{{}}}{}", ERR_NS, self.code.as_str())
    }
}
