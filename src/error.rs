use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("syntax error at {position}: {message}")]
    Syntax { position: usize, message: String },
    #[error("division by zero at {position}")]
    DivisionByZero { position: usize },
}

impl EvalError {
    pub(crate) fn syntax(position: usize, message: impl Into<String>) -> Self {
        EvalError::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Byte offset into the input the error points at, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::EmptyExpression => None,
            EvalError::Syntax { position, .. } | EvalError::DivisionByZero { position } => {
                Some(*position)
            }
        }
    }
}
