//! Usage errors raised by `Specification::validate`.
//!
//! A non-conforming value is never an error: it is reported as `Ok(false)`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The value handed to `validate` is not object-shaped.
    #[error("value to validate is not an object (got {kind})")]
    InvalidInput { kind: &'static str },

    /// `validate` was called before any property was declared.
    #[error("no object properties specified{}", describe_name(.name))]
    EmptySpecification { name: Option<String> },
}

fn describe_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" in '{}'", name),
        None => String::new(),
    }
}
