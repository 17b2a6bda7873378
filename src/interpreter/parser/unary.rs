use std::iter::Peekable;

use crate::{
    ast::{Ast, Func, NodeId, NodeKind, UnaryOp},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, expect_comma, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Negation is the only prefix operator and is right-associative, so `--x`
/// parses as `-(-x)`. Without a leading `-`, parsing falls through to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `ast`: Arena receiving the parsed nodes.
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The handle of the parsed expression node.
pub(crate) fn parse_unary<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(ast, tokens)?;
        return Ok(ast.push(NodeKind::Unop { op: UnaryOp::Negate,
                                            operand }));
    }

    parse_primary(ast, tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - variable references
/// - parenthesized expressions, kept as explicit group nodes
/// - built-in function calls
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | NAME
///              | "(" expression ")"
///              | ("sin" | "cos" | "tan" | "sqrt") "(" expression ")"
///              | "random" "(" expression "," expression ")"
/// ```
fn parse_primary<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = match tokens.next() {
        Some((token, line)) => (token, *line),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    match token {
        Token::Value(v) => Ok(ast.push(NodeKind::Value(*v))),
        Token::Identifier(name) => Ok(ast.push(NodeKind::Name(name.clone()))),

        Token::LParen => {
            let inner = parse_expression(ast, tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(ast.push(NodeKind::Group(inner))),
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },

        Token::Sin | Token::Cos | Token::Tan | Token::Sqrt => {
            let arg = parse_single_argument(ast, tokens, line)?;
            let func = match token {
                Token::Sin => Func::Sin(arg),
                Token::Cos => Func::Cos(arg),
                Token::Tan => Func::Tan(arg),
                _ => Func::Sqrt(arg),
            };
            Ok(ast.push(NodeKind::Func(func)))
        },
        Token::Random => {
            expect_lparen(tokens, line)?;
            let lower = parse_expression(ast, tokens)?;
            expect_comma(tokens, line)?;
            let upper = parse_expression(ast, tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => {
                    Ok(ast.push(NodeKind::Func(Func::Random(lower, upper))))
                },
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },

        _ => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                               line }),
    }
}

/// Parses the parenthesized single argument of a unary builtin.
fn parse_single_argument<'a, I>(ast: &mut Ast,
                                tokens: &mut Peekable<I>,
                                line: usize)
                                -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_lparen(tokens, line)?;
    let arg = parse_expression(ast, tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(arg),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Consumes the `(` opening a builtin's argument list.
fn expect_lparen<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LParen, _)) => Ok(()),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '(', found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
