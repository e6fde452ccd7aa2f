//! Primitive Predicates
//!
//! Type and value checks that take no parameters. Each primitive is
//! registered once in a lookup table, and a negated counterpart is derived
//! for every registered entry when the table is first touched.

use std::sync::LazyLock;

use super::Condition;
use crate::value::Value;

/// A parameterless predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Null,
    Undefined,
    String,
    Number,
    Boolean,
    Function,
    Object,
    Array,
    Integer,
    Empty,
}

/// Registered primitives, indexed by `Primitive as usize`
static REGISTERED: LazyLock<[Condition; Primitive::ALL.len()]> = LazyLock::new(|| {
    Primitive::ALL.map(|p| Condition::new(format!("is.{}", p.name()), move |v| p.test(v)))
});

/// One negation per registered primitive
static NEGATED: LazyLock<[Condition; Primitive::ALL.len()]> = LazyLock::new(|| {
    let registered = &*REGISTERED;
    Primitive::ALL.map(|p| registered[p as usize].negate(format!("is.not.{}", p.name())))
});

impl Primitive {
    /// Every primitive, in declaration order
    pub const ALL: [Primitive; 10] = [
        Primitive::Null,
        Primitive::Undefined,
        Primitive::String,
        Primitive::Number,
        Primitive::Boolean,
        Primitive::Function,
        Primitive::Object,
        Primitive::Array,
        Primitive::Integer,
        Primitive::Empty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Undefined => "undefined",
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Function => "function",
            Primitive::Object => "object",
            Primitive::Array => "array",
            Primitive::Integer => "integer",
            Primitive::Empty => "empty",
        }
    }

    pub fn test(self, value: &Value) -> bool {
        match self {
            Primitive::Null => value.is_null(),
            Primitive::Undefined => value.is_undefined(),
            Primitive::String => matches!(value, Value::String(_)),
            Primitive::Number => matches!(value, Value::Number(_)),
            Primitive::Boolean => matches!(value, Value::Bool(_)),
            Primitive::Function => matches!(value, Value::Function(_)),
            // Null and arrays are not objects here.
            Primitive::Object => matches!(value, Value::Object(_)),
            Primitive::Array => matches!(value, Value::Array(_)),
            Primitive::Integer => matches!(value, Value::Number(n) if n.fract() == 0.0),
            Primitive::Empty => matches!(value, Value::String(s) if s.is_empty()),
        }
    }

    /// The registered condition for this primitive
    pub fn condition(self) -> Condition {
        REGISTERED[self as usize].clone()
    }

    /// The derived negation of this primitive
    pub fn negated(self) -> Condition {
        NEGATED[self as usize].clone()
    }
}
