use crate::engine::error::PrimitiveError;
use crate::engine::primitive::{Arity, Primitive, take_args};
use crate::engine::value::Value;
use tracing::{error, trace};

fn expect_list(value: Value, op_name: &str) -> Result<Vec<Value>, PrimitiveError> {
    match value {
        Value::List(items) => Ok(items),
        other => {
            let not_a_list = PrimitiveError::NotAList(other.to_lisp_string());
            error!(operator = %op_name, error = %not_a_list, "Non-list argument to list primitive");
            Err(not_a_list)
        }
    }
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_car(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native list function: car");
    let [list] = take_args::<1>("car", args)?;
    let items = expect_list(list, "car")?;
    items.into_iter().next().ok_or_else(|| {
        let empty = PrimitiveError::EmptyList("car".to_string());
        error!(error = %empty, "car of an empty list");
        empty
    })
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_cdr(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native list function: cdr");
    let [list] = take_args::<1>("cdr", args)?;
    let items = expect_list(list, "cdr")?;
    // Dropping the head of () is a no-op.
    Ok(Value::List(items.into_iter().skip(1).collect()))
}

#[tracing::instrument(skip(args), ret, err)]
pub fn native_cons(args: Vec<Value>) -> Result<Value, PrimitiveError> {
    trace!("Executing native list function: cons");
    let [head, tail] = take_args::<2>("cons", args)?;
    let tail = expect_list(tail, "cons")?;
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(head);
    items.extend(tail);
    Ok(Value::List(items))
}

pub(crate) const PRIMITIVES: &[Primitive] = &[
    Primitive {
        aliases: &["car", "head"],
        arity: Arity::Exactly(1),
        summary: "first element of a non-empty list",
        func: native_car,
    },
    Primitive {
        aliases: &["cdr", "tail"],
        arity: Arity::Exactly(1),
        summary: "every element of a list except the first",
        func: native_cdr,
    },
    Primitive {
        aliases: &["cons"],
        arity: Arity::Exactly(2),
        summary: "new list with the value prepended to the list",
        func: native_cons,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{invoke, resolve};
    use crate::logging::init_test_logging;

    fn list(ns: &[f64]) -> Value {
        Value::List(ns.iter().copied().map(Value::Number).collect())
    }

    #[test]
    fn test_cons_prepends() {
        init_test_logging();
        let result = invoke("cons", vec![Value::Number(1.0), list(&[2.0, 3.0])]);
        assert_eq!(result, Ok(list(&[1.0, 2.0, 3.0])));
    }

    #[test]
    fn test_cons_onto_empty_list() {
        init_test_logging();
        let result = native_cons(vec![Value::from("x"), Value::List(vec![])]);
        assert_eq!(result, Ok(Value::List(vec![Value::from("x")])));
    }

    #[test]
    fn test_cons_non_list_names_the_value() {
        init_test_logging();
        let result = invoke("cons", vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(result, Err(PrimitiveError::NotAList("2".to_string())));
        assert_eq!(
            result.unwrap_err().to_string(),
            "value '2' is not a list"
        );
    }

    #[test]
    fn test_cons_rejects_every_non_list() {
        init_test_logging();
        for tail in [Value::Number(0.0), Value::from("abc"), Value::Bool(false)] {
            let printed = tail.to_lisp_string();
            assert_eq!(
                native_cons(vec![Value::Number(1.0), tail]),
                Err(PrimitiveError::NotAList(printed))
            );
        }
    }

    #[test]
    fn test_car_and_cdr_undo_cons() {
        init_test_logging();
        let tails = [list(&[]), list(&[2.0]), list(&[4.0, 5.0, 6.0])];
        for xs in tails {
            for x in [Value::Number(9.0), Value::from("s"), list(&[1.0])] {
                let consed = native_cons(vec![x.clone(), xs.clone()]).unwrap();
                assert_eq!(native_car(vec![consed.clone()]), Ok(x));
                assert_eq!(native_cdr(vec![consed]), Ok(xs.clone()));
            }
        }
    }

    #[test]
    fn test_car_and_head_are_the_same_primitive() {
        init_test_logging();
        assert_eq!(resolve("car").unwrap(), resolve("head").unwrap());
        assert_eq!(invoke("head", vec![list(&[7.0, 8.0])]), Ok(Value::Number(7.0)));
    }

    #[test]
    fn test_car_of_empty_list_error() {
        init_test_logging();
        assert_eq!(
            invoke("car", vec![list(&[])]),
            Err(PrimitiveError::EmptyList("car".to_string()))
        );
        assert_eq!(invoke("head", vec![list(&[])]), native_car(vec![list(&[])]));
    }

    #[test]
    fn test_cdr_of_empty_list_is_empty() {
        init_test_logging();
        assert_eq!(invoke("tail", vec![list(&[])]), Ok(list(&[])));
    }

    #[test]
    fn test_cdr_of_singleton_is_empty() {
        init_test_logging();
        assert_eq!(invoke("cdr", vec![list(&[1.0])]), Ok(list(&[])));
    }

    #[test]
    fn test_car_cdr_of_non_list() {
        init_test_logging();
        assert_eq!(
            invoke("car", vec![Value::Number(3.0)]),
            Err(PrimitiveError::NotAList("3".to_string()))
        );
        assert_eq!(
            invoke("cdr", vec![Value::Bool(true)]),
            Err(PrimitiveError::NotAList("true".to_string()))
        );
    }

    #[test]
    fn test_list_arity_errors() {
        init_test_logging();
        assert!(matches!(
            invoke("car", vec![]),
            Err(PrimitiveError::ArityMismatch { .. })
        ));
        assert!(matches!(
            invoke("cons", vec![Value::Number(1.0)]),
            Err(PrimitiveError::ArityMismatch { .. })
        ));
        assert!(matches!(
            native_cdr(vec![list(&[]), list(&[])]),
            Err(PrimitiveError::ArityMismatch { found: 2, .. })
        ));
    }
}
