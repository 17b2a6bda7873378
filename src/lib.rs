//! # tortue
//!
//! tortue is a tiny turtle-graphics scripting language written in Rust.
//! It parses and evaluates turtle programs — movement, pen control,
//! variables, loops and procedures — and emits a stream of drawing
//! primitives (`MoveTo`, `LineTo`, `Color`) that a renderer can replay.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Ast,
    error::ParseError,
    interpreter::{evaluator::core::Context, parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the arena-backed program tree: node handles, the
/// closed set of node kinds, the command and built-in function inventories,
/// and a pretty-printer that renders a tree back as program source.
///
/// # Responsibilities
/// - Defines command and expression node types for all language constructs.
/// - Owns every node in one arena so the whole tree is freed at once, even
///   while the procedure table still holds handles into it.
/// - Renders parsed programs back as source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a program, split into parse-time and run-time enums with
/// human-readable messages.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation: the logos
/// lexer, the recursive-descent parser that fills the arena, and the
/// evaluator that walks it while driving the turtle.
pub mod interpreter;
/// The symbol table shared by variables and procedures.
///
/// A separate-chaining FNV-1a hash table from names to values, doubling its
/// bucket array as it fills. The interpreter keeps two of them per context:
/// one mapping variable names to numbers, one mapping procedure names to
/// their body nodes.
pub mod symtab;

/// Parses a program into its tree without evaluating it.
///
/// # Errors
/// Returns a [`ParseError`] if the source does not lex or does not match
/// the grammar.
///
/// # Examples
/// ```
/// let ast = tortue::parse_program("repeat 4 { forward 50 right 90 }").unwrap();
/// assert!(ast.root().is_some());
///
/// assert!(tortue::parse_program("forward )").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Ast, ParseError> {
    parser::core::parse(source)
}

/// Parses and evaluates a program, writing drawing primitives to `out` and
/// `print`/error diagnostics to `diag`.
///
/// Returns `Ok(true)` when the pass finished cleanly and `Ok(false)` when a
/// runtime error latched the context's sticky error flag — by then the one
/// diagnostic line describing it has already been written to `diag`, and
/// the caller should map the outcome to a non-zero exit status.
///
/// # Parameters
/// - `source`: The program text.
/// - `out`: Sink for `MoveTo`/`LineTo`/`Color` lines.
/// - `diag`: Sink for `print` output and error messages.
/// - `seed`: Fixed seed for `random`; `None` seeds from entropy.
///
/// # Errors
/// Returns a [`ParseError`] if the program does not parse; nothing is
/// evaluated in that case.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// let mut diag = Vec::new();
///
/// let clean = tortue::run_program("forward 10", &mut out, &mut diag, None).unwrap();
///
/// assert!(clean);
/// assert_eq!(String::from_utf8(out).unwrap(), "LineTo 0.000000 -10.000000\n");
///
/// // A runtime error latches the flag and explains itself on `diag`.
/// let mut out = Vec::new();
/// let mut diag = Vec::new();
///
/// let clean = tortue::run_program("print 1 / 0", &mut out, &mut diag, None).unwrap();
///
/// assert!(!clean);
/// assert!(String::from_utf8(diag).unwrap().contains("Division by zero"));
/// ```
pub fn run_program(source: &str,
                   out: &mut dyn Write,
                   diag: &mut dyn Write,
                   seed: Option<u64>)
                   -> Result<bool, ParseError> {
    let ast = parse_program(source)?;

    let mut context = Context::new(out, diag, seed);
    context.run(&ast);

    Ok(!context.failed())
}
