mod engine;
mod error;
mod format;
mod lexer;
mod options;
mod parser;
mod trend;

pub use engine::{evaluate_expression, Calculator};
pub use error::EvalError;
pub use format::{format_number, render, round_to};
pub use options::{DivisionPolicy, EvalOptions, Precision, DEFAULT_PRECISION};
pub use parser::MAX_NESTING;
pub use trend::{trend_line, DataPoint, TrendLine};
