use std::iter::Peekable;

use crate::{
    ast::{Ast, BinaryOp, NodeId, NodeKind},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `ast`: Arena receiving the parsed nodes.
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The handle of the parsed expression node.
pub(crate) fn parse_additive<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_multiplicative(ast, tokens)?;

    while let Some((Token::Plus | Token::Minus, _)) = tokens.peek() {
        let op = match tokens.next() {
            Some((Token::Plus, _)) => BinaryOp::Add,
            _ => BinaryOp::Sub,
        };
        let rhs = parse_multiplicative(ast, tokens)?;
        node = ast.push(NodeKind::Binop { op, lhs: node, rhs });
    }

    Ok(node)
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative binary operators `*` and `/`.
///
/// Grammar: `multiplicative := power (("*" | "/") power)*`
fn parse_multiplicative<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_power(ast, tokens)?;

    while let Some((Token::Star | Token::Slash, _)) = tokens.peek() {
        let op = match tokens.next() {
            Some((Token::Star, _)) => BinaryOp::Mul,
            _ => BinaryOp::Div,
        };
        let rhs = parse_power(ast, tokens)?;
        node = ast.push(NodeKind::Binop { op, lhs: node, rhs });
    }

    Ok(node)
}

/// Parses an exponentiation expression.
///
/// `^` binds tighter than `*` and `/` and associates to the right, so
/// `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.
///
/// Grammar: `power := unary ("^" power)?`
fn parse_power<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lhs = parse_unary(ast, tokens)?;

    if let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();
        let rhs = parse_power(ast, tokens)?;
        return Ok(ast.push(NodeKind::Binop { op: BinaryOp::Pow,
                                             lhs,
                                             rhs }));
    }

    Ok(lhs)
}
