use crate::span::Span;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid binary number `{0}` at position {1}")]
    InvalidLiteral(String, Span),

    #[error("Unknown token `{0}` at position {1}")]
    UnknownToken(String, Span),

    #[error("Unexpected token `{0}` at position {1}, expected a number, an operator or a bracket")]
    UnexpectedToken(String, Span),

    #[error("Closing bracket at position {0} has no matching `(`")]
    UnmatchedParen(Span),

    #[error("Bracket opened at position {0} is not closed")]
    UnclosedParen(Span),
}

