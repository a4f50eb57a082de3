use derive_more::Display;

use crate::number::BinaryNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OpKind {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
    #[display("/")]
    Div,
    #[display("&")]
    BitAnd,
    #[display("|")]
    BitOr,
    #[display("^")]
    BitXor,
    #[display("neg")]
    UnaryMinus,
}

impl OpKind {
    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            OpKind::UnaryMinus => 5,
            OpKind::Mul | OpKind::Div => 4,
            OpKind::Add | OpKind::Sub => 3,
            OpKind::BitAnd => 2,
            OpKind::BitXor => 1,
            OpKind::BitOr => 0,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            OpKind::UnaryMinus => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn is_bitwise(self) -> bool {
        matches!(self, OpKind::BitAnd | OpKind::BitOr | OpKind::BitXor)
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(OpKind::Add),
            '-' => Some(OpKind::Sub),
            '*' => Some(OpKind::Mul),
            '/' => Some(OpKind::Div),
            '&' => Some(OpKind::BitAnd),
            '|' => Some(OpKind::BitOr),
            '^' => Some(OpKind::BitXor),
            _ => None,
        }
    }
}

/// Why the lexer could not classify a piece of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    Word,
    Literal,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum Token {
    #[display("{}", _0)]
    Number(BinaryNumber),
    #[display("{}", _0)]
    Operator(OpKind),
    #[display("(")]
    LeftParen,
    #[display(")")]
    RightParen,
    #[display("<unknown>")]
    Unknown(Unknown),
    // empty text on the item means end of input, anything else is a stray character
    #[display("<end>")]
    End,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OpKind::UnaryMinus, OpKind::Mul)]
    #[case(OpKind::Mul, OpKind::Add)]
    #[case(OpKind::Div, OpKind::Sub)]
    #[case(OpKind::Add, OpKind::BitAnd)]
    #[case(OpKind::BitAnd, OpKind::BitXor)]
    #[case(OpKind::BitXor, OpKind::BitOr)]
    fn test_precedence_order(#[case] tighter: OpKind, #[case] looser: OpKind) {
        assert!(tighter.precedence() > looser.precedence());
    }

    #[test]
    fn test_only_unary_minus_is_right_associative() {
        let ops = [
            OpKind::Add,
            OpKind::Sub,
            OpKind::Mul,
            OpKind::Div,
            OpKind::BitAnd,
            OpKind::BitOr,
            OpKind::BitXor,
        ];
        assert!(ops.iter().all(|op| op.associativity() == Associativity::Left));
        assert_eq!(OpKind::UnaryMinus.associativity(), Associativity::Right);
    }

    #[rstest]
    #[case('&', Some(OpKind::BitAnd))]
    #[case('|', Some(OpKind::BitOr))]
    #[case('^', Some(OpKind::BitXor))]
    #[case('-', Some(OpKind::Sub))]
    #[case('%', None)]
    fn test_from_symbol(#[case] c: char, #[case] expected: Option<OpKind>) {
        assert_eq!(OpKind::from_symbol(c), expected);
    }
}
