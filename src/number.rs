use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};
use thiserror::Error;

/// Tolerance used to decide whether a value can be viewed as a whole number.
pub const INTEGER_EPSILON: f64 = 1e-12;

/// Fractional bits used by the `Display` impl.
pub const DEFAULT_FRAC_BITS: usize = 12;

#[derive(Debug, Error, PartialEq)]
pub enum NumberError {
    #[error("`{0}` is not a valid binary number, only `0`, `1`, one leading `-` and one inner `.` are allowed")]
    InvalidLiteral(String),

    #[error("Value `{0}` is not an integer")]
    NotIntegral(f64),
}

/// A base-2 number backed by a double.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct BinaryNumber(f64);

fn is_literal_char(c: char) -> bool {
    matches!(c, '0' | '1' | '.' | '-')
}

fn bit_value(b: u8) -> f64 {
    f64::from(b - b'0')
}

// works on the float directly so magnitudes past u64 keep their bits
fn format_integer_part(int_part: f64) -> String {
    let mut bits = vec![];
    let mut rest = int_part;
    while rest >= 1.0 {
        bits.push(if rest % 2.0 == 1.0 { '1' } else { '0' });
        rest = (rest / 2.0).trunc();
    }
    if bits.is_empty() {
        return "0".to_string();
    }
    bits.iter().rev().collect()
}

impl BinaryNumber {
    pub fn new(value: f64) -> Self {
        BinaryNumber(value)
    }

    pub fn to_f64(self) -> f64 {
        self.0
    }

    /// Parses a literal such as `101`, `-10.01` or `0.1`.
    pub fn parse(text: &str) -> Result<Self, NumberError> {
        let invalid = || NumberError::InvalidLiteral(text.to_string());

        if text.is_empty() || !text.chars().all(is_literal_char) {
            return Err(invalid());
        }
        if text.match_indices('-').any(|(i, _)| i != 0) || text.matches('.').count() > 1 {
            return Err(invalid());
        }

        let negative = text.starts_with('-');
        let digits = &text[usize::from(negative)..];
        if digits.is_empty() || digits.starts_with('.') || digits.ends_with('.') {
            return Err(invalid());
        }

        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        let int_value = int_part
            .bytes()
            .fold(0.0, |acc, b| acc * 2.0 + bit_value(b));
        let frac_value: f64 = frac_part
            .bytes()
            .enumerate()
            .map(|(i, b)| bit_value(b) * 0.5f64.powi(i as i32 + 1))
            .sum();

        let value = int_value + frac_value;
        Ok(BinaryNumber(if negative { -value } else { value }))
    }

    /// Renders the value in base 2 with at most `frac_bits` fractional digits.
    /// Emission stops as soon as the remaining fraction is exactly zero.
    pub fn format(self, frac_bits: usize) -> String {
        if self.0 == 0.0 {
            return "0".to_string();
        }
        if !self.0.is_finite() {
            return self.0.to_string();
        }

        let magnitude = self.0.abs();
        let int_part = magnitude.trunc();
        let mut frac = magnitude - int_part;

        let mut result = String::new();
        if self.0 < 0.0 {
            result.push('-');
        }
        result.push_str(&format_integer_part(int_part));

        let mut frac_digits = String::new();
        while frac_digits.len() < frac_bits && frac != 0.0 {
            frac *= 2.0;
            if frac >= 1.0 {
                frac_digits.push('1');
                frac -= 1.0;
            } else {
                frac_digits.push('0');
            }
        }

        if !frac_digits.is_empty() {
            result.push('.');
            result.push_str(&frac_digits);
        }
        result
    }

    pub fn is_integer(self, epsilon: f64) -> bool {
        (self.0 - self.0.round()).abs() < epsilon
    }

    pub fn to_integer_checked(self) -> Result<i64, NumberError> {
        let rounded = self.0.round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        let in_range = rounded >= i64::MIN as f64 && rounded < i64::MAX as f64;
        if self.is_integer(INTEGER_EPSILON) && in_range {
            Ok(rounded as i64)
        } else {
            Err(NumberError::NotIntegral(self.0))
        }
    }

    pub fn is_near_zero(self) -> bool {
        self.0.abs() < INTEGER_EPSILON
    }
}

impl From<f64> for BinaryNumber {
    fn from(value: f64) -> Self {
        BinaryNumber(value)
    }
}

impl From<i64> for BinaryNumber {
    fn from(value: i64) -> Self {
        BinaryNumber(value as f64)
    }
}

impl fmt::Display for BinaryNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_FRAC_BITS))
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl $trait for BinaryNumber {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self::Output {
                BinaryNumber(self.0.$method(rhs.0))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);

impl Neg for BinaryNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        BinaryNumber(-self.0)
    }
}
