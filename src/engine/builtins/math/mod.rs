use crate::engine::error::PrimitiveError;
use crate::engine::primitive::{Arity, Primitive};
use crate::engine::value::Value;
use tracing::{error, trace};

// Helper function, not public
fn extract_number(value: &Value, op_name: &str) -> Result<f64, PrimitiveError> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => {
            let type_error = PrimitiveError::TypeError {
                operator: op_name.to_string(),
                expected: "Number".to_string(),
                found: value.to_lisp_string(),
            };
            error!(operator = %op_name, error = %type_error, "Type error in native function");
            Err(type_error)
        }
    }
}

/// Left-folds the numeric arguments with `step`, seeding the accumulator with
/// the first argument. `step` receives the 1-based position of the right operand.
fn fold_numbers<F>(op_name: &str, args: &[Value], step: F) -> Result<Value, PrimitiveError>
where
    F: Fn(f64, f64, usize) -> Result<f64, PrimitiveError>,
{
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| Arity::AtLeast(1).mismatch(op_name, 0))?;
    let seed = extract_number(first, op_name)?;
    rest.iter()
        .enumerate()
        .try_fold(seed, |acc, (i, arg)| {
            step(acc, extract_number(arg, op_name)?, i + 2)
        })
        .map(Value::Number)
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_add(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native 'add' function");
    fold_numbers("add", &args, |acc, n, _| Ok(acc + n))
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_subtract(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native 'subtract' function");
    fold_numbers("subtract", &args, |acc, n, _| Ok(acc - n))
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_multiply(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native 'multiply' function");
    fold_numbers("multiply", &args, |acc, n, _| Ok(acc * n))
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_divide(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native 'divide' function");
    fold_numbers("divide", &args, |acc, divisor, position| {
        if divisor == 0.0 {
            let div_zero_error = PrimitiveError::DivisionByZero(format!(
                "Division by zero in native 'divide' (argument {})",
                position
            ));
            error!(error = %div_zero_error, "Division by zero error in native 'divide'");
            return Err(div_zero_error);
        }
        Ok(acc / divisor)
    })
}

pub(crate) const PRIMITIVES: &[Primitive] = &[
    Primitive {
        aliases: &["add", "+"],
        arity: Arity::AtLeast(1),
        summary: "sum of the arguments, folded left to right",
        func: native_add,
    },
    Primitive {
        aliases: &["subtract", "-"],
        arity: Arity::AtLeast(1),
        summary: "first argument minus each following argument in turn",
        func: native_subtract,
    },
    Primitive {
        aliases: &["multiply", "*"],
        arity: Arity::AtLeast(1),
        summary: "product of the arguments, folded left to right",
        func: native_multiply,
    },
    Primitive {
        aliases: &["divide", "/"],
        arity: Arity::AtLeast(1),
        summary: "first argument divided by each following argument in turn",
        func: native_divide,
    },
];
