use std::iter::Peekable;

use crate::{
    ast::{Ast, Cmd, NodeId, NodeKind},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, expect_comma, parse_expression},
    },
};

/// Parses a command sequence, chaining each statement to the next.
///
/// This drives both the top level of a program and the inside of a block.
/// At the top level (`in_block == false`) parsing stops when the tokens run
/// out; inside a block it stops at the matching `}`, which is consumed.
///
/// # Parameters
/// - `ast`: Arena receiving the parsed nodes.
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `in_block`: Whether a closing `}` terminates the sequence.
///
/// # Returns
/// The handle of the first command, or `None` for an empty sequence.
///
/// # Errors
/// Returns a `ParseError` if a command is malformed, a stray `}` appears at
/// the top level, or the input ends inside a block.
pub fn parse_sequence<'a, I>(ast: &mut Ast,
                             tokens: &mut Peekable<I>,
                             in_block: bool)
                             -> ParseResult<Option<NodeId>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut first = None;
    let mut previous: Option<NodeId> = None;

    loop {
        match tokens.peek() {
            None if in_block => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
            None => break,
            Some((Token::RBrace, _)) if in_block => {
                tokens.next();
                break;
            },
            Some((Token::RBrace, line)) => {
                return Err(ParseError::UnexpectedToken { token: "'}'".to_string(),
                                                         line:  *line, });
            },
            Some(_) => {},
        }

        let command = parse_command(ast, tokens)?;
        if first.is_none() {
            first = Some(command);
        }
        if let Some(prev) = previous {
            ast.set_next(prev, command);
        }
        previous = Some(command);
    }

    Ok(first)
}

/// Parses a single command.
///
/// A command may be one of:
/// - a pen or pose command (`up`, `down`, `home`),
/// - a movement or turn with one argument (`forward`, `backward`, `left`,
///   `right`, `heading`),
/// - `print <expr>`,
/// - `position <x>, <y>` or `color <r>, <g>, <b>`,
/// - `set <name> <expr>`,
/// - `repeat <count> { ... }`,
/// - `proc <name> { ... }` or `call <name>`,
/// - a bare block `{ ... }`.
///
/// # Parameters
/// - `ast`: Arena receiving the parsed nodes.
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The handle of the parsed command node.
pub fn parse_command<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = match tokens.next() {
        Some((token, line)) => (token, *line),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    match token {
        Token::Up => Ok(ast.push(NodeKind::Simple(Cmd::Up))),
        Token::Down => Ok(ast.push(NodeKind::Simple(Cmd::Down))),
        Token::Home => Ok(ast.push(NodeKind::Simple(Cmd::Home))),

        Token::Forward => {
            let distance = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Forward(distance))))
        },
        Token::Backward => {
            let distance = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Backward(distance))))
        },
        Token::Left => {
            let degrees = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Left(degrees))))
        },
        Token::Right => {
            let degrees = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Right(degrees))))
        },
        Token::Heading => {
            let degrees = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Heading(degrees))))
        },
        Token::Print => {
            let value = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Print(value))))
        },

        Token::Position => {
            let x = parse_expression(ast, tokens)?;
            expect_comma(tokens, line)?;
            let y = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Position(x, y))))
        },
        Token::Color => {
            let r = parse_expression(ast, tokens)?;
            expect_comma(tokens, line)?;
            let g = parse_expression(ast, tokens)?;
            expect_comma(tokens, line)?;
            let b = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Simple(Cmd::Color(r, g, b))))
        },

        Token::Set => {
            let name = parse_name(tokens, line)?;
            let value = parse_expression(ast, tokens)?;
            Ok(ast.push(NodeKind::Set { name, value }))
        },
        Token::Repeat => {
            let count = parse_expression(ast, tokens)?;
            let body = parse_block(ast, tokens)?;
            Ok(ast.push(NodeKind::Repeat { count, body }))
        },
        Token::Proc => {
            let name = parse_name(tokens, line)?;
            let body = parse_block(ast, tokens)?;
            Ok(ast.push(NodeKind::Proc { name, body }))
        },
        Token::Call => {
            let name = parse_name(tokens, line)?;
            Ok(ast.push(NodeKind::Call { name }))
        },

        Token::LBrace => parse_block_body(ast, tokens, line),

        _ => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                               line }),
    }
}

/// Parses a braced block, `{` included.
///
/// Used by `repeat` and `proc`, whose bodies must be blocks.
fn parse_block<'a, I>(ast: &mut Ast, tokens: &mut Peekable<I>) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LBrace, line)) => parse_block_body(ast, tokens, *line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '{{', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the inside of a block after its `{` has been consumed.
///
/// A block groups at least one command; the contained sequence is reachable
/// from the block node through its first command's `next` links.
fn parse_block_body<'a, I>(ast: &mut Ast,
                           tokens: &mut Peekable<I>,
                           line: usize)
                           -> ParseResult<NodeId>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match parse_sequence(ast, tokens, true)? {
        Some(first) => Ok(ast.push(NodeKind::Block(first))),
        None => Err(ParseError::UnexpectedToken {
            token: "Expected at least one command in a block, found '}'".to_string(),
            line,
        }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// Command and function keywords are not identifiers, so `set forward 1` is
/// rejected here rather than misparsed.
fn parse_name<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a name, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
