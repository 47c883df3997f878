use std::fmt::Display;

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);

/// Runtime result of evaluating an expression. Equality is structural and
/// total: values of different variants are never equal and `Nil` equals
/// only `Nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    Nil,
}

impl Value {
    /// Only `nil` and `false` are falsy; every other value, including
    /// `0` and the empty string, is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    write!(f, "{value:.0}")
                } else {
                    write!(f, "{value}")
                }
            },
            Value::Text(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Nil => write!(f, "nil"),
        }
    }
}
