/// Core evaluation logic and context management.
///
/// Contains the evaluation context (turtle pose, symbol tables, sticky error
/// flag, output sinks), the recursive dispatch over node kinds, and the
/// statement-sequence threading.
pub mod core;

/// Turtle command semantics.
///
/// Implements the side effects of every simple command plus `repeat`,
/// procedure definition and procedure calls: pose updates, pen state, and
/// primitive emission.
pub mod commands;

/// Binary operator evaluation.
///
/// Implements `+ - * / ^` over doubles, guarding division by exactly zero.
/// Operands always evaluate left before right.
pub mod binary;

/// Built-in function evaluation.
///
/// Dispatches `sin`, `cos`, `tan`, `sqrt` and `random` to their
/// implementations after evaluating the arguments in order.
pub mod function;
