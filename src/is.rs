//! Condition namespace
//!
//! Reads the way specifications are spoken:
//!
//! ```
//! use schema_spec::{is, Specification, Value};
//!
//! let mut spec = Specification::new();
//! spec.property("id", is::undefined())
//!     .property("name", [is::not::undefined(), is::not::null()])
//!     .property("n", [is::integer(), is::greater::than(10)]);
//!
//! let object = Value::object([("name", Value::from("x")), ("n", Value::from(15))]);
//! assert_eq!(spec.validate(&object), Ok(true));
//! ```

use crate::condition::Condition;
use crate::condition::primitive::Primitive;

pub use crate::condition::comparator::length;
pub use crate::condition::composite::{Either, array_of, either, schema};

pub fn null() -> Condition {
    Primitive::Null.condition()
}

pub fn undefined() -> Condition {
    Primitive::Undefined.condition()
}

pub fn string() -> Condition {
    Primitive::String.condition()
}

pub fn number() -> Condition {
    Primitive::Number.condition()
}

pub fn boolean() -> Condition {
    Primitive::Boolean.condition()
}

pub fn function() -> Condition {
    Primitive::Function.condition()
}

/// Objects only: null and arrays do not count
pub fn object() -> Condition {
    Primitive::Object.condition()
}

pub fn array() -> Condition {
    Primitive::Array.condition()
}

/// A number without fractional part
pub fn integer() -> Condition {
    Primitive::Integer.condition()
}

/// The empty string
pub fn empty() -> Condition {
    Primitive::Empty.condition()
}

/// Negated primitives and comparators
pub mod not {
    use crate::condition::Condition;
    use crate::condition::primitive::Primitive;

    pub use crate::condition::comparator::not_length as length;

    pub fn null() -> Condition {
        Primitive::Null.negated()
    }

    pub fn undefined() -> Condition {
        Primitive::Undefined.negated()
    }

    pub fn string() -> Condition {
        Primitive::String.negated()
    }

    pub fn number() -> Condition {
        Primitive::Number.negated()
    }

    pub fn boolean() -> Condition {
        Primitive::Boolean.negated()
    }

    pub fn function() -> Condition {
        Primitive::Function.negated()
    }

    pub fn object() -> Condition {
        Primitive::Object.negated()
    }

    pub fn array() -> Condition {
        Primitive::Array.negated()
    }

    pub fn integer() -> Condition {
        Primitive::Integer.negated()
    }

    pub fn empty() -> Condition {
        Primitive::Empty.negated()
    }

    pub mod equal {
        pub use crate::condition::comparator::not_equal_to as to;
    }
}

pub mod equal {
    pub use crate::condition::comparator::equal_to as to;
}

pub mod min {
    pub use crate::condition::comparator::min_length as length;
}

pub mod max {
    pub use crate::condition::comparator::max_length as length;
}

pub mod greater {
    pub use crate::condition::comparator::greater_than as than;
}

pub mod less {
    pub use crate::condition::comparator::less_than as than;
}
