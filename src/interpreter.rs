/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw program text and produces a stream of tokens:
/// numbers, names, command and function keywords, operators, and delimiters.
/// Whitespace and `#` comments are skipped; newlines are counted so that
/// parse errors can name their source line.
pub mod lexer;
/// The parser module builds the program tree from tokens.
///
/// The parser consumes the token stream and constructs an arena-backed tree
/// of commands and expressions, chaining each statement to the next in
/// source order.
pub mod parser;
/// The evaluator module walks the program tree and drives the turtle.
///
/// The evaluator dispatches on node kind, mutates the turtle state, emits
/// drawing primitives on the primary stream and `print`/error text on the
/// diagnostic stream, and stops the pass on the first runtime error.
pub mod evaluator;
