use crate::error::EvalError;
use crate::format::render;
use crate::options::{DivisionPolicy, EvalOptions, Precision};
use crate::parser::Parser;
use log::{debug, trace};

/// Evaluates arithmetic expressions with a fixed set of [`EvalOptions`].
///
/// A `Calculator` holds no per-call state, so one instance can be shared
/// freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Calculator {
    options: EvalOptions,
}

impl Calculator {
    /// Calculator with default options: precision 6, IEEE division.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    pub fn precision(&self) -> Precision {
        self.options.precision
    }

    pub fn division_policy(&self) -> DivisionPolicy {
        self.options.division
    }

    /// Evaluates `expr` and returns the unformatted value.
    ///
    /// Errors:
    /// - [`EvalError::EmptyExpression`] if `expr` is blank.
    /// - [`EvalError::Syntax`] if the input cannot be read as one expression.
    /// - [`EvalError::DivisionByZero`] under [`DivisionPolicy::Error`] only.
    pub fn value(&self, expr: &str) -> Result<f64, EvalError> {
        if expr.trim().is_empty() {
            return Err(EvalError::EmptyExpression);
        }
        let value = Parser::new(expr, self.options.division)?.parse()?;
        trace!("raw value of {:?}: {:?}", expr, value);
        Ok(value)
    }

    /// Evaluates `expr` and renders the result with the configured precision.
    pub fn evaluate(&self, expr: &str) -> Result<String, EvalError> {
        self.evaluate_with_precision(expr, self.options.precision)
    }

    /// Like [`evaluate`](Self::evaluate) but overrides the precision for this call.
    pub fn evaluate_with_precision(
        &self,
        expr: &str,
        precision: impl Into<Precision>,
    ) -> Result<String, EvalError> {
        let precision = precision.into();
        match self.value(expr) {
            Ok(v) => {
                let out = render(v, precision);
                debug!("evaluated {:?} at precision {} -> {}", expr, precision.0, out);
                Ok(out)
            }
            Err(e) => {
                debug!("failed to evaluate {:?}: {}", expr, e);
                Err(e)
            }
        }
    }
}

/// Evaluates `expression` with the default options and the given precision.
///
/// ```
/// assert_eq!(notecalc::evaluate_expression("2+3*5", 6).unwrap(), "17");
/// assert_eq!(notecalc::evaluate_expression("1/3", 2).unwrap(), "0.33");
/// assert_eq!(notecalc::evaluate_expression("5/0", 6).unwrap(), "Infinity");
/// ```
pub fn evaluate_expression(expression: &str, precision: i32) -> Result<String, EvalError> {
    Calculator::new().evaluate_with_precision(expression, precision)
}
