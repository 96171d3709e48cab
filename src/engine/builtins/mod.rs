//! Native primitives, grouped by concern. Each submodule exports a
//! `PRIMITIVES` table; `ALL_TABLES` is the single place that enumerates them.

pub mod compare;
pub mod list;
pub mod math;

use crate::engine::primitive::Primitive;

pub(crate) static ALL_TABLES: &[&[Primitive]] = &[
    math::PRIMITIVES,
    compare::PRIMITIVES,
    list::PRIMITIVES,
];
