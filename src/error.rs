/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant carries `pos`, the 0-based character offset into the input
/// at which the problem was detected. Any error aborts the whole evaluation;
/// no partial result is ever produced.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A grammar rule encountered a character matching none of its
    /// alternatives.
    UnexpectedCharacter {
        /// The character encountered.
        found: char,
        /// The character offset where the error occurred.
        pos:   usize,
    },
    /// The input ended where a value or operand was required.
    UnexpectedEndOfInput {
        /// The character offset where the error occurred.
        pos: usize,
    },
    /// Characters remained after a complete expression was parsed.
    TrailingInput {
        /// The first leftover character.
        found: char,
        /// The character offset where the leftover input begins.
        pos:   usize,
    },
    /// A scanned numeric literal failed conversion, for example because it
    /// contains more than one decimal point.
    MalformedNumber {
        /// The literal text as scanned.
        literal: String,
        /// The character offset where the literal begins.
        pos:     usize,
    },
    /// The divisor of `/`, `//`, or `%` was (or truncated to) zero.
    DivisionByZero {
        /// The character offset where the divisor begins.
        pos: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, pos } => {
                write!(f, "Error at position {pos}: Unexpected character '{found}'.")
            },

            Self::UnexpectedEndOfInput { pos } => {
                write!(f, "Error at position {pos}: Unexpected end of input.")
            },

            Self::TrailingInput { found, pos } => write!(f,
                                                         "Error at position {pos}: Trailing input starting with '{found}'."),

            Self::MalformedNumber { literal, pos } => {
                write!(f, "Error at position {pos}: Malformed number literal '{literal}'.")
            },

            Self::DivisionByZero { pos } => {
                write!(f, "Error at position {pos}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
