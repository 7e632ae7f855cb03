use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses the statements of an `end`-delimited block.
///
/// A block consists of zero or more statements separated by newlines.
/// Parsing stops, without consuming the terminator, when `end` or `else`
/// is next, or when the input runs out; the caller decides which terminator
/// it requires. Leading and trailing newlines inside the block are
/// ignored.
///
/// Grammar: `block := statement*`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the block header.
/// - `line`: Line number of the construct that opened the block.
///
/// # Returns
/// A `Node::Block` containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        while let Some((Token::NewLine, _)) = tokens.peek() {
            tokens.next();
        }

        match tokens.peek() {
            Some((Token::End | Token::Else, _)) | None => break,
            Some(_) => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Node::Block { statements, line })
}
