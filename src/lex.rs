use phf::phf_map;

use crate::number::BinaryNumber;
use crate::span::Span;
use crate::token::{OpKind, Token, Unknown};

static KEYWORDS: phf::Map<&'static str, OpKind> = phf_map! {
    "and" => OpKind::BitAnd,
    "or" => OpKind::BitOr,
    "xor" => OpKind::BitXor,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LexItem {
    pub token: Token,
    pub span: Span,
    // source text of the token, kept for diagnostics
    pub text: String,
}

impl LexItem {
    pub fn new(token: Token, span: Span, text: impl Into<String>) -> Self {
        LexItem {
            token,
            span,
            text: text.into(),
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.token == Token::End && self.text.is_empty()
    }
}

fn is_bit(c: char) -> bool {
    c == '0' || c == '1'
}

pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, offset: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.offset += c.len_utf8();
        }
    }

    /// Produces the next token. Once the input is exhausted every call
    /// returns an `End` item with empty text.
    pub fn next_token(&mut self) -> LexItem {
        self.skip_whitespace();

        let start = self.offset;
        let Some(c) = self.peek_char() else {
            return LexItem::new(Token::End, Span::one(start), "");
        };

        if let Some(op) = OpKind::from_symbol(c) {
            return self.lex_single(Token::Operator(op), c);
        }

        match c {
            '(' => self.lex_single(Token::LeftParen, c),
            ')' => self.lex_single(Token::RightParen, c),
            '0' | '1' | '.' => self.lex_number(),
            c if c.is_alphabetic() => self.lex_word(),
            // unclassifiable character, reported through End with non-empty text
            _ => self.lex_single(Token::End, c),
        }
    }

    fn lex_single(&mut self, token: Token, c: char) -> LexItem {
        let start = self.offset;
        self.offset += c.len_utf8();
        LexItem::new(token, Span::char_at(start, c), c.to_string())
    }

    fn lex_number(&mut self) -> LexItem {
        let start = self.offset;

        let rest = self.rest();
        let has_prefix = (rest.starts_with("0b") || rest.starts_with("0B"))
            && rest[2..].starts_with(|c: char| is_bit(c) || c == '.');
        if has_prefix {
            self.offset += 2;
        }
        let digits_start = self.offset;

        let mut seen_dot = false;
        while let Some(c) = self.peek_char() {
            if c == '.' && !seen_dot {
                seen_dot = true;
            } else if !is_bit(c) {
                break;
            }
            self.offset += 1;
        }

        let text = &self.input[start..self.offset];
        let span = Span::new(start, self.offset - 1);
        match BinaryNumber::parse(&self.input[digits_start..self.offset]) {
            Ok(number) => LexItem::new(Token::Number(number), span, text),
            Err(_) => LexItem::new(Token::Unknown(Unknown::Literal), span, text),
        }
    }

    fn lex_word(&mut self) -> LexItem {
        let start = self.offset;
        while let Some(c) = self.peek_char() {
            if !c.is_alphabetic() {
                break;
            }
            self.offset += c.len_utf8();
        }

        let text = &self.input[start..self.offset];
        let span = Span::new(start, self.offset - 1);
        match KEYWORDS.get(text.to_lowercase().as_str()) {
            Some(op) => LexItem::new(Token::Operator(*op), span, text),
            None => LexItem::new(Token::Unknown(Unknown::Word), span, text),
        }
    }
}

/// Collects every item up to and including the first `End`.
pub fn lex(input: &str) -> Vec<LexItem> {
    let mut lexer = Lexer::new(input);
    let mut result = vec![];
    loop {
        let item = lexer.next_token();
        let is_end = item.token == Token::End;
        result.push(item);
        if is_end {
            return result;
        }
    }
}
