#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit input that is not part of the language.
    UnrecognizedToken {
        /// The offending slice of source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, or a message naming what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token, line } => {
                write!(f, "Error on line {line}: Unrecognized input: {token}.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),
        }
    }
}

impl std::error::Error for ParseError {}
