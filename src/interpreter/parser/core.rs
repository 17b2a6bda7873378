use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::{Ast, NodeId},
    error::ParseError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::{binary::parse_additive, statement::parse_sequence},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into an arena-backed tree.
///
/// The source is tokenized first; the token stream is then consumed command
/// by command until it is exhausted, and the first command becomes the
/// tree's root. An empty (or comment-only) source yields an empty tree.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The parsed [`Ast`].
///
/// # Errors
/// Returns a `ParseError` if the input contains unrecognized characters or
/// does not match the grammar.
///
/// # Example
/// ```
/// use tortue::interpreter::parser::core::parse;
///
/// let ast = parse("repeat 4 { forward 50 right 90 }").unwrap();
/// assert!(ast.root().is_some());
/// ```
pub fn parse(source: &str) -> ParseResult<Ast> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnrecognizedToken { token: lexer.slice().to_string(),
                                                       line:  lexer.extras.line, });
        }
    }

    let mut ast = Ast::new();
    let mut iter = tokens.iter().peekable();

    if let Some(first) = parse_sequence(&mut ast, &mut iter, false)? {
        ast.set_root(first);
    }

    Ok(ast)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `ast`: Arena receiving the parsed nodes.
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The handle of the parsed expression node.
pub fn parse_expression<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(ast, tokens)
}

/// Consumes a `,` token, reporting what was found instead when absent.
pub(in crate::interpreter::parser) fn expect_comma<'a, I>(tokens: &mut Peekable<I>,
                                                          line: usize)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Comma, _)) => Ok(()),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected ',', found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
