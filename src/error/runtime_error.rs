#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant latches the context's sticky error flag when it surfaces:
/// the evaluation pass unwinds, exactly one diagnostic line is written, and
/// no further drawing primitives are emitted.
pub enum RuntimeError {
    /// Tried to read a variable that was never set.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a procedure that was never defined.
    UnknownProcedure {
        /// The name of the procedure.
        name: String,
    },
    /// Attempted division by exactly zero.
    DivisionByZero,
    /// The tangent of the operand is not a number.
    TangentUndefined {
        /// The offending operand.
        operand: f64,
    },
    /// Took the square root of a negative number.
    NegativeSquareRoot {
        /// The offending operand.
        operand: f64,
    },
    /// `random` was called with an empty or unusable interval.
    InvalidRandomRange {
        /// The evaluated lower bound.
        lower: f64,
        /// The evaluated upper bound.
        upper: f64,
    },
    /// Writing to one of the output streams failed.
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Error: Unknown variable '{name}'."),
            Self::UnknownProcedure { name } => write!(f, "Error: Unknown procedure '{name}'."),
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::TangentUndefined { operand } => {
                write!(f, "Error: Tangent is undefined for {operand}.")
            },
            Self::NegativeSquareRoot { operand } => {
                write!(f, "Error: Square root of a negative number: {operand}.")
            },
            Self::InvalidRandomRange { lower, upper } => write!(f,
                                                                "Error: Invalid random range: lower bound {lower} is not below upper bound {upper}."),
            Self::Io { source } => write!(f, "Error: Failed to write output: {source}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}
