use derive_more::Display;
use thiserror::Error;

use crate::number::BinaryNumber;
use crate::token::{OpKind, Token};

mod runner;

#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("Operator `{0}` is missing its operand")]
    MissingOperand(OpKind),

    #[error("Operator `{0}` needs two operands")]
    MissingOperands(OpKind),

    #[error("Malformed expression, {0} values left on the stack instead of 1")]
    MalformedExpression(usize),

    #[error("Unexpected `{0}` in postfix sequence")]
    UnexpectedToken(Token),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Operator `{0}` requires integer operands, got `{1}`")]
    NonIntegralOperand(OpKind, f64),
}

/// Decides how a result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ResultKind {
    #[default]
    #[display("arithmetic")]
    Arithmetic,
    #[display("bitwise")]
    Bitwise,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: BinaryNumber,
    // kind of the last operator applied, not an aggregate
    pub kind: ResultKind,
}

impl Evaluation {
    pub fn is_bitwise(&self) -> bool {
        self.kind == ResultKind::Bitwise
    }
}

#[derive(Debug, Default)]
struct Stack(Vec<BinaryNumber>);

impl Stack {
    fn new() -> Self {
        Stack(vec![])
    }

    fn push(&mut self, v: BinaryNumber) {
        self.0.push(v)
    }

    fn pop(&mut self) -> Option<BinaryNumber> {
        self.0.pop()
    }

    /// Pops `(left, right)`, where right is the top of the stack.
    fn pop_pair(&mut self) -> Option<(BinaryNumber, BinaryNumber)> {
        if self.0.len() < 2 {
            return None;
        }
        let r = self.0.pop()?;
        let l = self.0.pop()?;
        Some((l, r))
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn evaluate(postfix: &[Token]) -> Result<Evaluation, EvalError> {
    let mut stack = Stack::new();
    let kind = runner::run_postfix(&mut stack, postfix)?;

    if stack.len() != 1 {
        return Err(EvalError::MalformedExpression(stack.len()));
    }
    match stack.pop() {
        Some(value) => Ok(Evaluation { value, kind }),
        None => Err(EvalError::MalformedExpression(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn num(v: f64) -> Token {
        Token::Number(BinaryNumber::new(v))
    }

    fn op(op: OpKind) -> Token {
        Token::Operator(op)
    }

    #[rstest]
    #[case(vec![num(1.0)], 1.0, ResultKind::Arithmetic)]
    #[case(vec![num(1.0), num(1.0), op(OpKind::Add)], 2.0, ResultKind::Arithmetic)]
    #[case(vec![num(5.0), num(3.0), op(OpKind::Mul)], 15.0, ResultKind::Arithmetic)]
    #[case(vec![num(2.0), num(1.0), op(OpKind::Sub)], 1.0, ResultKind::Arithmetic)]
    #[case(vec![num(1.0), num(2.0), op(OpKind::Div)], 0.5, ResultKind::Arithmetic)]
    #[case(vec![num(5.0), num(3.0), op(OpKind::BitAnd)], 1.0, ResultKind::Bitwise)]
    #[case(vec![num(5.0), num(3.0), op(OpKind::BitOr)], 7.0, ResultKind::Bitwise)]
    #[case(vec![num(5.0), num(3.0), op(OpKind::BitXor)], 6.0, ResultKind::Bitwise)]
    #[case(vec![num(-1.0), num(6.0), op(OpKind::BitAnd)], 6.0, ResultKind::Bitwise)]
    #[case(vec![num(5.0), num(3.0), op(OpKind::BitAnd), op(OpKind::UnaryMinus)], -1.0, ResultKind::Arithmetic)]
    #[case(vec![num(2.0), num(1.0), op(OpKind::BitOr), num(1.0), op(OpKind::Add)], 4.0, ResultKind::Arithmetic)]
    fn test_evaluate(
        #[case] postfix: Vec<Token>,
        #[case] expected: f64,
        #[case] kind: ResultKind,
    ) {
        assert_eq!(
            evaluate(&postfix),
            Ok(Evaluation {
                value: BinaryNumber::new(expected),
                kind
            })
        );
    }

    #[rstest]
    #[case(vec![], EvalError::MalformedExpression(0))]
    #[case(vec![num(1.0), num(1.0)], EvalError::MalformedExpression(2))]
    #[case(vec![op(OpKind::UnaryMinus)], EvalError::MissingOperand(OpKind::UnaryMinus))]
    #[case(vec![num(1.0), op(OpKind::Add)], EvalError::MissingOperands(OpKind::Add))]
    #[case(vec![num(1.0), op(OpKind::BitXor)], EvalError::MissingOperands(OpKind::BitXor))]
    #[case(vec![num(1.0), num(0.0), op(OpKind::Div)], EvalError::DivisionByZero)]
    #[case(vec![num(1.0), num(1e-13), op(OpKind::Div)], EvalError::DivisionByZero)]
    #[case(vec![num(1.5), num(1.0), op(OpKind::BitAnd)], EvalError::NonIntegralOperand(OpKind::BitAnd, 1.5))]
    #[case(vec![num(1.0), num(0.25), op(OpKind::BitOr)], EvalError::NonIntegralOperand(OpKind::BitOr, 0.25))]
    #[case(vec![num(18_446_744_073_709_551_616.0), num(1.0), op(OpKind::BitAnd)], EvalError::NonIntegralOperand(OpKind::BitAnd, 18_446_744_073_709_551_616.0))]
    #[case(vec![Token::LeftParen], EvalError::UnexpectedToken(Token::LeftParen))]
    fn test_evaluate_error(#[case] postfix: Vec<Token>, #[case] expected: EvalError) {
        assert_eq!(evaluate(&postfix), Err(expected));
    }
}
