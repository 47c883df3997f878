use crate::lexer::prelude::Token;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuntimeErrorType {
    OperandMustBeNumber,
    OperandsMustBeNumbers,
    OperandsMustBeNumbersOrStrings,
}

/// Evaluation failure carrying the offending operator token for line and
/// lexeme context.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub token: Token,
}

impl RuntimeError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            RuntimeErrorType::OperandMustBeNumber => {
                ("Operand must be a number.", vec![])
            },
            RuntimeErrorType::OperandsMustBeNumbers => {
                ("Operands must be numbers.", vec![])
            },
            RuntimeErrorType::OperandsMustBeNumbersOrStrings => {
                ("Operands must be two numbers or two strings.", vec![])
            },
        }
    }

    pub fn report(&self) -> String {
        let (message, _) = self.details();
        format!("{}\n[line {}]", message, self.token.line)
    }
}

pub fn runtime_error<T>(error: RuntimeErrorType, token: Token) -> Result<T, RuntimeError> {
    Err(RuntimeError { error, token })
}
