//! Reader for literal argument values: numbers, booleans, strings and
//! parenthesised lists. Symbols are never read as values; the only symbol a
//! line may carry is the leading primitive alias in [`read_call`].

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till1},
    character::complete::{char, multispace0, multispace1, none_of, one_of},
    combinator::{all_consuming, eof, peek, value},
    multi::{fold_many0, many0},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
};
use thiserror::Error;
use tracing::{debug, trace};

use crate::engine::value::Value;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadError {
    #[error("Empty input: expected a value")]
    Empty,
    #[error("Could not read '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

// `double` reads an unsigned inf/infinity but not a signed one.
fn signed_infinity(input: &str) -> IResult<&str, f64> {
    pair(one_of("+-"), alt((tag_no_case("infinity"), tag_no_case("inf"))))
        .map(|(sign, _)| if sign == '-' { f64::NEG_INFINITY } else { f64::INFINITY })
        .parse(input)
}

// Parses a number (f64) into a Value::Number - raw token, no surrounding whitespace handling.
fn number_raw(input: &str) -> IResult<&str, Value> {
    alt((signed_infinity, double)).map(Value::Number).parse(input)
}

fn boolean_raw(input: &str) -> IResult<&str, Value> {
    alt((
        value(Value::Bool(true), tag("true")),
        value(Value::Bool(false), tag("false")),
    ))
    .parse(input)
}

fn escaped_char(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        alt((
            value('"', char('"')),
            value('\\', char('\\')),
            value('\n', char('n')),
            value('\t', char('t')),
        )),
    )
    .parse(input)
}

// Parses a double-quoted string with \" \\ \n \t escapes.
fn string_raw(input: &str) -> IResult<&str, Value> {
    delimited(
        char('"'),
        fold_many0(
            alt((escaped_char, none_of("\\\""))),
            String::new,
            |mut acc, c| {
                acc.push(c);
                acc
            },
        ),
        char('"'),
    )
    .map(Value::String)
    .parse(input)
}

// Parses a list of values e.g. (1 2 3) or (1 (2 "x") true).
// Recursive with datum.
fn list_raw(input: &str) -> IResult<&str, Value> {
    delimited(
        char('('),
        terminated(many0(preceded(multispace0, datum)), multispace0),
        char(')'),
    )
    .map(Value::List)
    .parse(input)
}

// A value must be followed by whitespace, a paren or the end of input.
fn delimiter(input: &str) -> IResult<&str, ()> {
    value((), peek(alt((multispace1, tag("("), tag(")"), eof)))).parse(input)
}

// Core recursive parser for any single value, without surrounding whitespace.
fn datum(input: &str) -> IResult<&str, Value> {
    trace!(input, "Reading datum");
    terminated(alt((boolean_raw, string_raw, list_raw, number_raw)), delimiter).parse(input)
}

fn malformed(input: &str, err: nom::Err<nom::error::Error<&str>>) -> ReadError {
    let error = ReadError::Malformed {
        input: input.to_string(),
        reason: err.to_string(),
    };
    debug!(error = %error, "Reader rejected input");
    error
}

/// Reads exactly one value, allowing surrounding whitespace.
#[tracing::instrument(level = "debug", ret, err)]
pub fn read_value(input: &str) -> Result<Value, ReadError> {
    if input.trim().is_empty() {
        return Err(ReadError::Empty);
    }
    all_consuming(delimited(multispace0, datum, multispace0))
        .parse(input)
        .map(|(_, parsed)| parsed)
        .map_err(|e| malformed(input, e))
}

/// Reads an invocation line: a primitive alias followed by literal values,
/// e.g. `cons 1 (2 3)`.
#[tracing::instrument(level = "debug", ret, err)]
pub fn read_call(input: &str) -> Result<(String, Vec<Value>), ReadError> {
    if input.trim().is_empty() {
        return Err(ReadError::Empty);
    }
    let alias = take_till1(|c: char| c.is_whitespace());
    all_consuming(delimited(
        multispace0,
        pair(alias, many0(preceded(multispace0, datum))),
        multispace0,
    ))
    .parse(input)
    .map(|(_, (name, args))| (name.to_string(), args))
    .map_err(|e| malformed(input, e))
}
