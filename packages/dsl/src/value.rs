use crate::ast::Expression;
use crate::error::{RfwError, RfwResult};

/// Coercion wrapper that lets primitives stand in for expressions.
///
/// Numbers format with invariant decimal notation (no grouping separators,
/// `.` as the decimal point, shortest round-trip representation), strings
/// become quoted string literals, booleans become `true`/`false` tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    expression: Option<Expression>,
}

impl Value {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression: Some(expression),
        }
    }

    /// Unwraps the underlying expression. A default-constructed `Value`
    /// carries no expression and fails here.
    pub fn into_expression(self) -> RfwResult<Expression> {
        self.expression
            .ok_or_else(|| RfwError::invalid_operation("Value requires a valid expression"))
    }
}

impl From<Expression> for Value {
    fn from(expression: Expression) -> Self {
        Self::new(expression)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::new(Expression::StringLiteral {
            value: value.to_string(),
        })
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::new(Expression::StringLiteral { value })
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::new(Expression::Literal {
            raw: if value { "true" } else { "false" }.to_string(),
        })
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::new(Expression::Literal {
            raw: value.to_string(),
        })
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::new(Expression::Literal {
            raw: value.to_string(),
        })
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::new(Expression::Literal {
            raw: value.to_string(),
        })
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::new(Expression::Literal {
            raw: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_value_fails() {
        let value = Value::default();
        assert!(matches!(
            value.into_expression(),
            Err(RfwError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_primitive_coercion() {
        assert_eq!(
            Value::from(16.0f64).into_expression().unwrap(),
            Expression::Literal {
                raw: "16".to_string()
            }
        );
        assert_eq!(
            Value::from(1.4f64).into_expression().unwrap(),
            Expression::Literal {
                raw: "1.4".to_string()
            }
        );
        assert_eq!(
            Value::from(true).into_expression().unwrap(),
            Expression::Literal {
                raw: "true".to_string()
            }
        );
        assert_eq!(
            Value::from("hello").into_expression().unwrap(),
            Expression::StringLiteral {
                value: "hello".to_string()
            }
        );
    }
}
