use std::fmt;

use thiserror::Error;

use crate::config::Config;
use crate::parse::to_postfix;
use crate::parse_error::ParseError;
use crate::vm::{evaluate, EvalError, Evaluation};

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Result of one `;`-separated expression.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub expression: String,
    pub result: Result<Evaluation, Error>,
    frac_bits: usize,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(evaluation) => write!(f, "{}", format_evaluation(evaluation, self.frac_bits)),
            Err(e) => write!(f, "{}", e),
        }
    }
}

pub fn format_evaluation(evaluation: &Evaluation, frac_bits: usize) -> String {
    let bits = if evaluation.is_bitwise() { 0 } else { frac_bits };
    format!(
        "{}   (dec: {})",
        evaluation.value.format(bits),
        evaluation.value.to_f64()
    )
}

pub fn evaluate_expression(expression: &str) -> Result<Evaluation, Error> {
    let postfix = to_postfix(expression)?;
    Ok(evaluate(&postfix)?)
}

/// Evaluates every non-empty `;`-separated expression of `line`
/// independently of the others.
pub fn evaluate_line(line: &str, config: &Config) -> Vec<Outcome> {
    line.split(';')
        .map(str::trim)
        .filter(|expression| !expression.is_empty())
        .map(|expression| Outcome {
            expression: expression.to_string(),
            result: evaluate_expression(expression),
            frac_bits: config.frac_bits,
        })
        .collect()
}

pub fn is_quit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}
