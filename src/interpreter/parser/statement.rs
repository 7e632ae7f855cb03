use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_block_end, parse_comma_separated, parse_identifier,
                    skip_optional_colon},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `let` binding,
/// - a function definition,
/// - a `return` statement,
/// - a `say` statement,
/// - an `if`, `while` or `repeat` statement,
/// - an expression used as a statement (including assignments).
///
/// The leading token decides the form; anything unrecognized is parsed as
/// an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Node`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, _)) => parse_let(tokens),
        Some((Token::Define, _)) => parse_function_definition(tokens),
        Some((Token::Return, _)) => parse_return(tokens),
        Some((Token::Say, _)) => parse_say(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Repeat, _)) => parse_repeat(tokens),
        _ => parse_expression(tokens),
    }
}

/// Parses a variable binding statement.
///
/// A binding has the form `let <identifier> = <expression>` and always
/// creates the name in the local scope, shadowing any outer binding.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `let`.
///
/// # Returns
/// A [`Node::Let`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - `=` is missing,
/// - the initializer expression is malformed,
/// - input ends unexpectedly.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '=', found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    }

    let value = parse_expression(tokens)?;
    Ok(Node::Let { name,
                   value: Box::new(value),
                   line })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     define <name>(<param>, ...) [:]
///         <statements>
///     end
/// ```
/// The colon after the parameter list is optional. The body runs until the
/// matching `end`; nested definitions and control flow consume their own
/// `end` keywords, so the body may contain any statements.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `define`.
///
/// # Returns
/// A [`Node::FunctionDef`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or parameter list is malformed,
/// - `(` does not follow the name,
/// - the closing `end` is missing,
/// - input ends unexpectedly.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(' after function name, found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    skip_optional_colon(tokens);

    let body = parse_block(tokens, line)?;
    expect_block_end(tokens, line)?;

    Ok(Node::FunctionDef { name: Some(name),
                           params,
                           body: Box::new(body),
                           line })
}

/// Parses a `return` statement with an optional result expression.
///
/// The expression is absent when the statement ends immediately: at a
/// newline, at the closing `end` or `else` of the enclosing block, or at
/// the end of input. A bare `return` yields null.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `return`.
///
/// # Returns
/// A [`Node::Return`].
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let value = match tokens.peek() {
        Some((Token::NewLine | Token::End | Token::Else, _)) | None => None,
        Some(_) => Some(Box::new(parse_expression(tokens)?)),
    };

    Ok(Node::Return { value, line })
}

/// Parses a `say` statement: `say <expression>`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `say`.
///
/// # Returns
/// A [`Node::Say`].
fn parse_say<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let expr = parse_expression(tokens)?;
    Ok(Node::Say { expr: Box::new(expr),
                   line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition> [:]
///         <statements>
///     [else [:]
///         <statements>]
///     end
/// ```
/// One `end` closes the whole statement regardless of whether an `else`
/// branch is present.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `if`.
///
/// # Returns
/// A [`Node::If`].
///
/// # Errors
/// Returns a `ParseError` if the condition is malformed or the closing
/// `end` is missing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let condition = parse_expression(tokens)?;
    skip_optional_colon(tokens);

    let then_block = parse_block(tokens, line)?;

    let else_block = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        skip_optional_colon(tokens);

        Some(Box::new(parse_block(tokens, line)?))
    } else {
        None
    };

    expect_block_end(tokens, line)?;

    Ok(Node::If { condition: Box::new(condition),
                  then_block: Box::new(then_block),
                  else_block,
                  line })
}

/// Parses a `while` loop.
///
/// Syntax:
/// ```text
///     while <condition> [:]
///         <statements>
///     end
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at `while`.
///
/// # Returns
/// A [`Node::While`].
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let condition = parse_expression(tokens)?;
    skip_optional_colon(tokens);

    let body = parse_block(tokens, line)?;
    expect_block_end(tokens, line)?;

    Ok(Node::While { condition: Box::new(condition),
                     body: Box::new(body),
                     line })
}

/// Parses a `repeat` loop.
///
/// Syntax:
/// ```text
///     repeat <count> times [:]
///         <statements>
///     end
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at `repeat`.
///
/// # Returns
/// A [`Node::Repeat`].
///
/// # Errors
/// Returns a `ParseError` if the `times` keyword is missing or the closing
/// `end` is missing.
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let count = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::Times, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected 'times' after repeat count, found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    skip_optional_colon(tokens);

    let body = parse_block(tokens, line)?;
    expect_block_end(tokens, line)?;

    Ok(Node::Repeat { count: Box::new(count),
                      body: Box::new(body),
                      line })
}
