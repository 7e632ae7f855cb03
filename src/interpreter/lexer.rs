use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello"`. Escape sequences are
    /// resolved while lexing; strings do not span lines.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string)]
    Str(String),
    /// `let`
    #[token("let")]
    Let,
    /// `define`
    #[token("define")]
    Define,
    /// `end`
    #[token("end")]
    End,
    /// `return`
    #[token("return")]
    Return,
    /// `say`
    #[token("say")]
    Say,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `times`
    #[token("times")]
    Times,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,

    /// Statement separator. Newlines are passed through as tokens so the
    /// parser can decide their significance.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Resolves the escape sequences of a string literal slice.
///
/// The surrounding quotes are stripped, then `\n`, `\t`, `\"` and `\\` are
/// replaced by the characters they name. Any other escaped character maps
/// to itself.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The literal text with all escapes resolved.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => text.push('\n'),
                Some('t') => text.push('\t'),
                Some(other) => text.push(other),
                None => {},
            }
        } else {
            text.push(c);
        }
    }

    text
}

/// Converts raw source text into an ordered sequence of tokens.
///
/// Scanning is left to right and fails fast: the first character that
/// matches no rule aborts lexing, and no partial token sequence is
/// returned. Each token is paired with the line it was found on.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The token sequence, or the first `LexError` encountered.
///
/// # Errors
/// - `LexError::UnterminatedString` if a string literal is never closed.
/// - `LexError::IllegalCharacter` for any byte that matches no rule.
///
/// # Example
/// ```
/// use lumen::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 10").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Let,
///                 Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Number(10.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let line = lexer.extras.line;
                return Err(match lexer.slice().chars().next() {
                    Some('"') | None => LexError::UnterminatedString { line },
                    Some(character) => LexError::IllegalCharacter { character, line },
                });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(tok, _)| tok)
                        .collect()
    }

    #[test]
    fn it_lexes_keywords_and_identifiers() {
        assert_eq!(kinds("say let letter"),
                   vec![Token::Say,
                        Token::Let,
                        Token::Identifier("letter".to_string())]);
    }

    #[test]
    fn it_lexes_operators_greedily() {
        assert_eq!(kinds("== ="), vec![Token::EqualEqual, Token::Equals]);
    }

    #[test]
    fn it_lexes_strings_with_escapes() {
        assert_eq!(kinds(r#""a\nb\"c""#),
                   vec![Token::Str("a\nb\"c".to_string())]);
    }

    #[test]
    fn it_skips_comments_and_tracks_lines() {
        let tokens = tokenize("1 # one\n2").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Number(1.0), 1),
                        (Token::NewLine, 2),
                        (Token::Number(2.0), 2)]);
    }

    #[test]
    fn it_rejects_illegal_characters() {
        assert_eq!(tokenize("let $x = 1"),
                   Err(LexError::IllegalCharacter { character: '$',
                                                    line:      1, }));
    }

    #[test]
    fn it_rejects_unterminated_strings() {
        assert_eq!(tokenize("\"oops"),
                   Err(LexError::UnterminatedString { line: 1 }));
    }
}
