//! Named Lisp primitives (arithmetic, comparison and list operations)
//! resolved by alias and invoked over already-evaluated values.

pub mod cli;
pub mod engine;
pub mod logging;
pub mod repl;

pub use engine::error::PrimitiveError;
pub use engine::primitive::{Arity, Primitive};
pub use engine::registry::{builtins, invoke, resolve};
pub use engine::value::Value;
