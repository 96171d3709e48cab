//! The primitive engine: values, primitive definitions, the builtin tables,
//! the alias registry and the literal value reader.

pub mod builtins;
pub mod error;
pub mod primitive;
pub mod reader;
pub mod registry;
pub mod value;
