use log::{debug, trace};

use crate::lex::{LexItem, Lexer};
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{Associativity, OpKind, Token, Unknown};

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(OpKind),
    LeftParen(Span),
}

/// Operator-precedence state: the postfix output, the pending operator
/// stack and whether a `-` at this point would be a sign.
struct ShuntingYard {
    output: Vec<Token>,
    operators: Vec<StackEntry>,
    expect_unary: bool,
}

impl ShuntingYard {
    fn new() -> Self {
        ShuntingYard {
            output: vec![],
            operators: vec![],
            expect_unary: true,
        }
    }

    fn push_item(&mut self, li: LexItem) -> Result<(), ParseError> {
        match li.token {
            Token::Number(_) => {
                self.output.push(li.token);
                self.expect_unary = false;
            }
            Token::LeftParen => {
                self.operators.push(StackEntry::LeftParen(li.span));
                self.expect_unary = true;
            }
            Token::RightParen => {
                self.close_group(li.span)?;
                self.expect_unary = false;
            }
            Token::Operator(op) => {
                let op = if op == OpKind::Sub && self.expect_unary {
                    OpKind::UnaryMinus
                } else {
                    op
                };
                self.push_operator(op);
                self.expect_unary = true;
            }
            Token::Unknown(Unknown::Literal) => {
                return Err(ParseError::InvalidLiteral(li.text, li.span));
            }
            Token::Unknown(Unknown::Word) => {
                return Err(ParseError::UnexpectedToken(li.text, li.span));
            }
            Token::End => return Err(ParseError::UnknownToken(li.text, li.span)),
        }
        Ok(())
    }

    fn push_operator(&mut self, op: OpKind) {
        while let Some(&StackEntry::Operator(top)) = self.operators.last() {
            let pops = top.precedence() > op.precedence()
                || (top.precedence() == op.precedence()
                    && op.associativity() != Associativity::Right);
            if !pops {
                break;
            }
            self.operators.pop();
            self.output.push(Token::Operator(top));
        }
        self.operators.push(StackEntry::Operator(op));
    }

    fn close_group(&mut self, span: Span) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                Some(StackEntry::Operator(op)) => self.output.push(Token::Operator(op)),
                Some(StackEntry::LeftParen(_)) => return Ok(()),
                None => return Err(ParseError::UnmatchedParen(span)),
            }
        }
    }

    fn finish(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Operator(op) => self.output.push(Token::Operator(op)),
                StackEntry::LeftParen(span) => return Err(ParseError::UnclosedParen(span)),
            }
        }
        Ok(self.output)
    }
}

/// Converts an infix expression into postfix order.
pub fn to_postfix(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(input);
    let mut state = ShuntingYard::new();

    loop {
        let li = lexer.next_token();
        debug!("{} - {:?}: {:?}", li.span, li.token, li.text);
        if li.is_end_of_input() {
            break;
        }
        state.push_item(li)?;
    }

    let postfix = state.finish()?;
    trace!("postfix: {}", display_postfix(&postfix));
    Ok(postfix)
}

pub fn display_postfix(postfix: &[Token]) -> String {
    postfix
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
