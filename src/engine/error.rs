use crate::engine::primitive::Arity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    #[error("Undefined symbol: '{0}' is not a known primitive")]
    NameNotFound(String),
    #[error("value '{0}' is not a list")]
    NotAList(String),
    #[error("Empty list: '{0}' needs a non-empty list")]
    EmptyList(String),
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
    #[error("Type error in '{operator}': expected {expected}, found {found}")]
    TypeError {
        operator: String,
        expected: String,
        found: String,
    },
    #[error("Arity mismatch: '{primitive}' expects {expected}, got {found}")]
    ArityMismatch {
        primitive: String,
        expected: Arity,
        found: usize,
    },
    #[error("Alias '{alias}' is declared by both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
    #[error("Primitive declared without any alias")]
    EmptyAliases,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_list_message_names_the_value() {
        let err = PrimitiveError::NotAList("2".to_string());
        assert_eq!(err.to_string(), "value '2' is not a list");
    }

    #[test]
    fn arity_mismatch_message() {
        let err = PrimitiveError::ArityMismatch {
            primitive: "cons".to_string(),
            expected: Arity::Exactly(2),
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "Arity mismatch: 'cons' expects exactly 2 arguments, got 3"
        );
    }
}
