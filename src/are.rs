//! Plural spelling of [`is`](crate::is), for conditions applied to many values
//! at once:
//!
//! ```
//! use schema_spec::{are, is, Specification, Value};
//!
//! let mut spec = Specification::new();
//! spec.all(are::not::null()).property("a", ()).property("b", ());
//!
//! assert!(are::integers().holds(&Value::from(3)));
//! assert_eq!(spec.validate(&Value::object([("a", 1)])), Ok(true));
//! assert!(is::not::null().holds(&Value::Undefined));
//! ```

use crate::condition::Condition;
use crate::condition::primitive::Primitive;

pub use crate::is::*;

pub fn strings() -> Condition {
    Primitive::String.condition()
}

pub fn numbers() -> Condition {
    Primitive::Number.condition()
}

pub fn booleans() -> Condition {
    Primitive::Boolean.condition()
}

pub fn functions() -> Condition {
    Primitive::Function.condition()
}

pub fn objects() -> Condition {
    Primitive::Object.condition()
}

pub fn arrays() -> Condition {
    Primitive::Array.condition()
}

pub fn integers() -> Condition {
    Primitive::Integer.condition()
}

pub mod not {
    use crate::condition::Condition;
    use crate::condition::primitive::Primitive;

    pub use crate::is::not::*;

    pub fn strings() -> Condition {
        Primitive::String.negated()
    }

    pub fn numbers() -> Condition {
        Primitive::Number.negated()
    }

    pub fn booleans() -> Condition {
        Primitive::Boolean.negated()
    }

    pub fn functions() -> Condition {
        Primitive::Function.negated()
    }

    pub fn objects() -> Condition {
        Primitive::Object.negated()
    }

    pub fn arrays() -> Condition {
        Primitive::Array.negated()
    }

    pub fn integers() -> Condition {
        Primitive::Integer.negated()
    }
}
