use crate::engine::error::PrimitiveError;
use crate::engine::primitive::{Arity, Primitive, take_args};
use crate::engine::value::Value;
use std::cmp::Ordering;
use tracing::{error, trace};

/// Orders two values of the same kind. `Ok(None)` means the pair is
/// comparable in type but unordered (NaN).
fn compare_values(lhs: &Value, rhs: &Value, op_name: &str) -> Result<Option<Ordering>, PrimitiveError> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
        (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                match compare_values(x, y, op_name)? {
                    Some(Ordering::Equal) => continue,
                    other => return Ok(other),
                }
            }
            Ok(Some(a.len().cmp(&b.len())))
        }
        _ => {
            let type_error = PrimitiveError::TypeError {
                operator: op_name.to_string(),
                expected: format!("a value ordered against {}", lhs.type_name()),
                found: rhs.to_lisp_string(),
            };
            error!(operator = %op_name, error = %type_error, "Type error in native comparison");
            Err(type_error)
        }
    }
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_equals(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native 'equal?' function for structural equality");
    let [lhs, rhs] = take_args::<2>("equal?", args)?;
    Ok(Value::Bool(lhs == rhs))
}

// Helper macro to generate ordering functions
macro_rules! define_ordering_fn {
    ($fn_name:ident, $op_str:expr, $($ordering:pat_param)|+) => {
        #[tracing::instrument(skip(args), ret, err)]
        pub fn $fn_name(args: Vec<Value>) -> Result<Value, PrimitiveError> {
            trace!("Executing native '{}' function", $op_str);
            let [lhs, rhs] = take_args::<2>($op_str, args)?;
            let ordering = compare_values(&lhs, &rhs, $op_str)?;
            Ok(Value::Bool(matches!(ordering, $(Some($ordering))|+)))
        }
    };
}

define_ordering_fn!(native_less_than, "<", Ordering::Less);
define_ordering_fn!(native_greater_than, ">", Ordering::Greater);
define_ordering_fn!(native_less_than_or_equal, "<=", Ordering::Less | Ordering::Equal);
define_ordering_fn!(native_greater_than_or_equal, ">=", Ordering::Greater | Ordering::Equal);

pub(crate) const PRIMITIVES: &[Primitive] = &[
    Primitive {
        aliases: &["equal?", "="],
        arity: Arity::Exactly(2),
        summary: "true when both values are structurally equal",
        func: native_equals,
    },
    Primitive {
        aliases: &["<"],
        arity: Arity::Exactly(2),
        summary: "true when the first value orders before the second",
        func: native_less_than,
    },
    Primitive {
        aliases: &["<="],
        arity: Arity::Exactly(2),
        summary: "true when the first value orders before or equal to the second",
        func: native_less_than_or_equal,
    },
    Primitive {
        aliases: &[">"],
        arity: Arity::Exactly(2),
        summary: "true when the first value orders after the second",
        func: native_greater_than,
    },
    Primitive {
        aliases: &[">="],
        arity: Arity::Exactly(2),
        summary: "true when the first value orders after or equal to the second",
        func: native_greater_than_or_equal,
    },
];
