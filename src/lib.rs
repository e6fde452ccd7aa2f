//! Schema Spec
//!
//! Structural validation of loosely-typed data against declarative,
//! per-property specifications.
//!
//! This library provides:
//! - A dynamic [`Value`] model loadable from JSON or TOML
//! - Composable conditions under the [`is`] and [`are`] namespaces
//! - The [`Specification`] builder and its `validate` evaluator
//! - A catalog of named specifications and a document checker
//!
//! ```
//! use schema_spec::{is, Specification, Value};
//!
//! let mut child = Specification::new();
//! child.property("x", is::number());
//!
//! let mut parent = Specification::new();
//! parent.property("obj", is::schema(child));
//!
//! let good = Value::object([("obj", Value::object([("x", 1)]))]);
//! let bad = Value::object([("obj", Value::object([("x", "s")]))]);
//! assert_eq!(parent.validate(&good), Ok(true));
//! assert_eq!(parent.validate(&bad), Ok(false));
//! ```

pub mod are;
pub mod catalog;
pub mod check;
pub mod condition;
pub mod config;
pub mod error;
pub mod is;
pub mod specification;
pub mod value;

// Re-exports for clean public API
pub use catalog::Catalog;
pub use condition::{Condition, ConditionSet, IntoConditions};
pub use config::Config;
pub use error::SpecError;
pub use specification::Specification;
pub use value::{Function, Value};
