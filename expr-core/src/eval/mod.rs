
pub mod error;
pub mod value;

pub mod prelude {
    pub use super::{
        error::*,
        value::*,
        eval
    };
}

use crate::lexer::prelude::{Token, TokenKind};
use crate::parser::prelude::{Expr, LiteralValue};
use error::{runtime_error, RuntimeError, RuntimeErrorType};
use value::{Value, FALSE, TRUE};

/// Tree-walking evaluation. Stateless and side-effect free: the same tree
/// always reduces to the same value or the same failure.
pub fn eval(expr: &Expr) -> Result<Value, RuntimeError> {
    match expr {
        Expr::Literal { value } => Ok(eval_literal(value)),
        Expr::Grouping { expression } => eval(expression),
        Expr::Unary { operator, right } => eval_unary(operator, right),
        Expr::Binary { left, operator, right } => eval_binary(left, operator, right),
    }
}

fn eval_literal(value: &LiteralValue) -> Value {
    match value {
        LiteralValue::Number(number) => Value::Number(*number),
        LiteralValue::Text(text) => Value::Text(text.clone()),
        LiteralValue::Bool(value) => Value::Boolean(*value),
        LiteralValue::Nil => Value::Nil,
    }
}

fn eval_unary(operator: &Token, right: &Expr) -> Result<Value, RuntimeError> {
    let value = eval(right)?;

    match operator.kind {
        TokenKind::Minus => match value {
            Value::Number(number) => Ok(Value::Number(-number)),
            _ => runtime_error(RuntimeErrorType::OperandMustBeNumber, operator.clone()),
        },
        TokenKind::Bang => Ok(if value.is_truthy() { FALSE } else { TRUE }),
        _ => unreachable!("parser only builds unary nodes for `!` and `-`"),
    }
}

fn eval_binary(left: &Expr, operator: &Token, right: &Expr) -> Result<Value, RuntimeError> {
    let left = eval(left)?;
    let right = eval(right)?;

    match operator.kind {
        // `+` is the one dynamic overload: numeric sum or text
        // concatenation, nothing in between
        TokenKind::Plus => match (left, right) {
            (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
            (Value::Text(left), Value::Text(right)) => {
                Ok(Value::Text(format!("{left}{right}")))
            },
            _ => runtime_error(
                RuntimeErrorType::OperandsMustBeNumbersOrStrings,
                operator.clone()
            ),
        },
        TokenKind::Minus
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Less
        | TokenKind::LessEqual => match (left, right) {
            (Value::Number(left), Value::Number(right)) => {
                Ok(match operator.kind {
                    TokenKind::Minus => Value::Number(left - right),
                    // IEEE 754 division: division by zero yields an infinity
                    // or NaN rather than a failure
                    TokenKind::Slash => Value::Number(left / right),
                    TokenKind::Star => Value::Number(left * right),
                    TokenKind::Greater => Value::Boolean(left > right),
                    TokenKind::GreaterEqual => Value::Boolean(left >= right),
                    TokenKind::Less => Value::Boolean(left < right),
                    TokenKind::LessEqual => Value::Boolean(left <= right),
                    _ => unreachable!(),
                })
            },
            _ => runtime_error(RuntimeErrorType::OperandsMustBeNumbers, operator.clone()),
        },
        // equality is total over the value union and never fails
        TokenKind::EqualEqual => Ok(Value::Boolean(left == right)),
        TokenKind::BangEqual => Ok(Value::Boolean(left != right)),
        _ => unreachable!("parser only builds binary nodes for operator tokens"),
    }
}
