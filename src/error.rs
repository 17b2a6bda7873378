/// Parsing errors.
///
/// Defines the error types that can occur while lexing and parsing a turtle
/// program: unrecognized input, unexpected tokens, and unbalanced
/// delimiters. All of them carry the source line they were detected on.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating a program:
/// unknown names, arithmetic domain failures, invalid random ranges, and
/// failures while writing either output stream.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
