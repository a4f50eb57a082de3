//! Evaluator for infix expressions over base-2 literals.
//!
//! Text is lexed, reordered into postfix with the shunting-yard method and
//! run on a value stack:
//!
//! ```
//! use bincalc::{evaluate_expression, ResultKind};
//!
//! let evaluation = evaluate_expression("101*11").unwrap();
//! assert_eq!(evaluation.value.format(12), "1111");
//! assert_eq!(evaluation.kind, ResultKind::Arithmetic);
//! ```

pub mod config;
pub mod driver;
pub mod lex;
pub mod number;
pub mod parse;
pub mod parse_error;
pub mod span;
pub mod token;
pub mod vm;

pub use config::{Config, ConfigError};
pub use driver::{evaluate_expression, evaluate_line, is_quit_command, Error, Outcome};
pub use number::{BinaryNumber, NumberError};
pub use parse::to_postfix;
pub use parse_error::ParseError;
pub use vm::{evaluate, EvalError, Evaluation, ResultKind};
