use crate::engine::builtins::ALL_TABLES;
use crate::engine::error::PrimitiveError;
use crate::engine::primitive::Primitive;
use crate::engine::value::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, error, trace};

/// Immutable alias-to-primitive lookup table.
#[derive(Debug)]
pub struct Registry {
    primitives: Vec<&'static Primitive>,
    by_alias: HashMap<&'static str, &'static Primitive>,
}

static BUILTINS: Lazy<Registry> = Lazy::new(|| {
    Registry::from_tables(ALL_TABLES).expect("builtin primitive tables declare unique aliases")
});

impl Registry {
    /// Indexes every primitive in `tables` under each alias it declares.
    pub fn from_tables(tables: &[&'static [Primitive]]) -> Result<Self, PrimitiveError> {
        debug!("Building primitive registry");
        let mut registry = Registry {
            primitives: Vec::new(),
            by_alias: HashMap::new(),
        };

        for &table in tables {
            for primitive in table {
                registry.register(primitive)?;
            }
        }

        debug!(
            primitives = registry.primitives.len(),
            aliases = registry.by_alias.len(),
            "Primitive registry built"
        );
        Ok(registry)
    }

    fn register(&mut self, primitive: &'static Primitive) -> Result<(), PrimitiveError> {
        if primitive.aliases.is_empty() {
            error!("Primitive declared without aliases");
            return Err(PrimitiveError::EmptyAliases);
        }
        for &alias in primitive.aliases {
            if let Some(existing) = self.by_alias.insert(alias, primitive) {
                let duplicate = PrimitiveError::DuplicateAlias {
                    alias: alias.to_string(),
                    first: existing.name().to_string(),
                    second: primitive.name().to_string(),
                };
                error!(error = %duplicate, "Conflicting primitive alias");
                return Err(duplicate);
            }
            trace!(alias, primitive = primitive.name(), "Registered alias");
        }
        self.primitives.push(primitive);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&'static Primitive> {
        self.by_alias.get(name).copied()
    }

    /// Looks up `name`, failing with `NameNotFound` when no alias matches.
    pub fn resolve(&self, name: &str) -> Result<&'static Primitive, PrimitiveError> {
        self.get(name).ok_or_else(|| {
            error!(symbol_name = %name, "Undefined primitive requested");
            PrimitiveError::NameNotFound(name.to_string())
        })
    }

    /// Primitives in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Primitive> + '_ {
        self.primitives.iter().copied()
    }

    /// Every registered alias, sorted.
    pub fn aliases(&self) -> Vec<&'static str> {
        let mut aliases: Vec<&'static str> = self.by_alias.keys().copied().collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// The process-wide registry of builtin primitives, built on first use.
pub fn builtins() -> &'static Registry {
    &BUILTINS
}

#[tracing::instrument(ret, err)]
pub fn resolve(name: &str) -> Result<&'static Primitive, PrimitiveError> {
    builtins().resolve(name)
}

/// Resolves `name` and calls the primitive with `args`.
pub fn invoke(name: &str, args: Vec<Value>) -> Result<Value, PrimitiveError> {
    resolve(name)?.call(args)
}
