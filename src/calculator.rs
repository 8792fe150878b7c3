// src/calculator.rs
use crate::errors::{CalcError, ServiceError};
use std::str::FromStr;

/// One of the four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// Division by exactly zero (either sign) is a domain error, as is any
    /// result that cannot be represented as a JSON number.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                left / right
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFiniteResult)
        }
    }
}

impl FromStr for Operator {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(ServiceError::InvalidOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
