use crate::engine::error::PrimitiveError;
use crate::engine::value::Value;
use std::fmt;
use tracing::{error, trace};

/// Type alias for a native Rust function backing a primitive.
/// It takes a Vec of already-evaluated arguments and returns a single value.
pub type NativeFn = fn(Vec<Value>) -> Result<Value, PrimitiveError>;

/// How many arguments a primitive accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }

    /// Returns an `ArityMismatch` for `primitive` unless `count` is acceptable.
    pub fn check(self, primitive: &str, count: usize) -> Result<(), PrimitiveError> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(self.mismatch(primitive, count))
        }
    }

    /// Builds (and logs) the error for `primitive` receiving `count` arguments.
    pub fn mismatch(self, primitive: &str, count: usize) -> PrimitiveError {
        let arity_error = PrimitiveError::ArityMismatch {
            primitive: primitive.to_string(),
            expected: self,
            found: count,
        };
        error!(error = %arity_error, "Arity error in primitive '{}'", primitive);
        arity_error
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (qualifier, n) = match self {
            Arity::Exactly(n) => ("exactly", *n),
            Arity::AtLeast(n) => ("at least", *n),
        };
        let noun = if n == 1 { "argument" } else { "arguments" };
        write!(f, "{} {} {}", qualifier, n, noun)
    }
}

/// Moves exactly `N` arguments out of `args`, or reports an arity mismatch.
pub(crate) fn take_args<const N: usize>(
    primitive: &str,
    args: Vec<Value>,
) -> Result<[Value; N], PrimitiveError> {
    Arity::Exactly(N).check(primitive, args.len())?;
    args.try_into()
        .map_err(|rest: Vec<Value>| Arity::Exactly(N).mismatch(primitive, rest.len()))
}

/// A named, callable operation over evaluated values.
///
/// Every alias in `aliases` resolves to this primitive; the first one is its
/// canonical name, and the one its errors report whichever alias was used.
#[derive(Clone, Copy)]
pub struct Primitive {
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub summary: &'static str,
    pub func: NativeFn,
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or("<anonymous>")
    }

    #[tracing::instrument(skip(self, args), fields(primitive = self.name(), argc = args.len()), ret, err)]
    pub fn call(&self, args: Vec<Value>) -> Result<Value, PrimitiveError> {
        trace!("Calling primitive");
        self.arity.check(self.name(), args.len())?;
        (self.func)(args)
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("aliases", &self.aliases)
            .field("arity", &self.arity)
            .field("func", &"<native_fn_ptr>")
            .finish()
    }
}

// Aliases are unique across a registry, so the canonical name identifies a primitive.
impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}
