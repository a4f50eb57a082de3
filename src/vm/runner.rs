use log::trace;

use super::{EvalError, ResultKind, Stack};
use crate::number::BinaryNumber;
use crate::token::{OpKind, Token};

pub(super) fn run_postfix(stack: &mut Stack, postfix: &[Token]) -> Result<ResultKind, EvalError> {
    let mut kind = ResultKind::Arithmetic;

    for (ip, token) in postfix.iter().enumerate() {
        trace!("INS: {} - {} - {:?}", ip, token, stack);

        let op = match token {
            Token::Number(n) => {
                stack.push(*n);
                continue;
            }
            Token::Operator(op) => *op,
            other => return Err(EvalError::UnexpectedToken(other.clone())),
        };

        let v = match op {
            OpKind::UnaryMinus => -stack.pop().ok_or(EvalError::MissingOperand(op))?,
            OpKind::Add => binary(stack, op, |l, r| Ok(l + r))?,
            OpKind::Sub => binary(stack, op, |l, r| Ok(l - r))?,
            OpKind::Mul => binary(stack, op, |l, r| Ok(l * r))?,
            OpKind::Div => binary(stack, op, op_divide)?,
            OpKind::BitAnd => binary(stack, op, |l, r| op_bitwise(op, l, r, |a, b| a & b))?,
            OpKind::BitOr => binary(stack, op, |l, r| op_bitwise(op, l, r, |a, b| a | b))?,
            OpKind::BitXor => binary(stack, op, |l, r| op_bitwise(op, l, r, |a, b| a ^ b))?,
        };
        kind = if op.is_bitwise() {
            ResultKind::Bitwise
        } else {
            ResultKind::Arithmetic
        };
        stack.push(v);
    }

    Ok(kind)
}

fn binary<F>(stack: &mut Stack, op: OpKind, f: F) -> Result<BinaryNumber, EvalError>
where
    F: FnOnce(BinaryNumber, BinaryNumber) -> Result<BinaryNumber, EvalError>,
{
    let (l, r) = stack.pop_pair().ok_or(EvalError::MissingOperands(op))?;
    f(l, r)
}

fn op_divide(l: BinaryNumber, r: BinaryNumber) -> Result<BinaryNumber, EvalError> {
    if r.is_near_zero() {
        return Err(EvalError::DivisionByZero);
    }
    Ok(l / r)
}

fn op_bitwise<F>(
    op: OpKind,
    l: BinaryNumber,
    r: BinaryNumber,
    f: F,
) -> Result<BinaryNumber, EvalError>
where
    F: Fn(i64, i64) -> i64,
{
    let integer = |v: BinaryNumber| {
        v.to_integer_checked()
            .map_err(|_| EvalError::NonIntegralOperand(op, v.to_f64()))
    };
    Ok(BinaryNumber::from(f(integer(l)?, integer(r)?)))
}
