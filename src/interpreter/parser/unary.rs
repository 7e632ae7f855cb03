use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation), which is
/// right-associative. If no unary operator is present, the function
/// delegates to [`parse_primary`] and then applies any postfix call
/// operators via [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A [`Node::UnaryOp`] or a primary expression possibly followed by calls.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_unary(tokens)?;
        Ok(Node::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and
/// include:
/// - numeric and string literals
/// - variable references
/// - parenthesized expressions
///
/// This function does not handle unary operators or postfix calls.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | STRING
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Node`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Node::Number { value: *value,
                                                                line:  *line, }),
        Some((Token::Str(value), line)) => Ok(Node::Str { value: value.clone(),
                                                          line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Node::VarAccess { name: name.clone(),
                                                                      line: *line, }),
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line: *line }),
            }
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses call operators applied to an expression.
///
/// Any primary expression may be called, and calls chain: `f(1)(2)` calls
/// the function returned by `f(1)`. Arguments are full expressions
/// separated by commas.
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "(" (expression ("," expression)*)? ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `node`: The expression the calls apply to.
///
/// # Returns
/// An updated [`Node`] with all call operators folded in.
///
/// # Errors
/// Returns a `ParseError` if an argument list is malformed or unclosed.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Node) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::LParen, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        node = Node::Call { callee: Box::new(node),
                            args,
                            line };
    }
    Ok(node)
}
