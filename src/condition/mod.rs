//! Condition Library
//!
//! A [`Condition`] is a shared predicate over a [`Value`]. Conditions are
//! combined with AND semantics into a [`ConditionSet`]. The factories live in
//! the submodules and are reached through the [`is`](crate::is) and
//! [`are`](crate::are) namespaces.

pub mod comparator;
pub mod composite;
pub mod primitive;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::SpecError;
use crate::value::Value;

type Check = dyn Fn(&Value) -> Result<bool, SpecError> + Send + Sync;

/// A labelled predicate over a value
///
/// Only conditions that delegate to a nested specification can fail with an
/// error; every other condition answers `Ok(true)` or `Ok(false)`.
#[derive(Clone)]
pub struct Condition {
    label: Cow<'static, str>,
    check: Arc<Check>,
}

impl Condition {
    /// Wrap an infallible predicate
    pub fn new<F>(label: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            check: Arc::new(move |value| Ok(predicate(value))),
        }
    }

    /// Wrap a predicate that may surface a usage error
    pub fn fallible<F>(label: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, SpecError> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            check: Arc::new(check),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn check(&self, value: &Value) -> Result<bool, SpecError> {
        (self.check)(value)
    }

    /// Like [`check`](Self::check), counting a usage error as unmet
    pub fn holds(&self, value: &Value) -> bool {
        self.check(value).unwrap_or(false)
    }

    /// Logical negation, relabelled
    pub(crate) fn negate(&self, label: impl Into<Cow<'static, str>>) -> Self {
        let inner = Arc::clone(&self.check);
        Self::fallible(label, move |value| inner(value).map(|met| !met))
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.label).finish()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Ordered conditions that must all hold
#[derive(Debug, Clone, Default)]
pub struct ConditionSet(Vec<Condition>);

impl ConditionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn of(conditions: impl IntoConditions) -> Self {
        Self(conditions.into_conditions())
    }

    /// Append conditions after the existing ones
    pub fn extend(&mut self, conditions: impl IntoConditions) {
        self.0.extend(conditions.into_conditions());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.0.iter()
    }

    /// AND-fold in order, stopping at the first unmet condition
    pub fn check(&self, value: &Value) -> Result<bool, SpecError> {
        Ok(self.first_failure(value)?.is_none())
    }

    /// The first condition that does not hold, if any
    pub fn first_failure(&self, value: &Value) -> Result<Option<&Condition>, SpecError> {
        for condition in &self.0 {
            if !condition.check(value)? {
                return Ok(Some(condition));
            }
        }
        Ok(None)
    }
}

impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{}", single),
            conditions => {
                f.write_str("[")?;
                for (i, condition) in conditions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", condition)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Anything accepted where a condition set is expected: one condition, a
/// sequence of them, or nothing at all (`()` / `None`).
pub trait IntoConditions {
    fn into_conditions(self) -> Vec<Condition>;
}

impl IntoConditions for Condition {
    fn into_conditions(self) -> Vec<Condition> {
        vec![self]
    }
}

impl IntoConditions for Vec<Condition> {
    fn into_conditions(self) -> Vec<Condition> {
        self
    }
}

impl<const N: usize> IntoConditions for [Condition; N] {
    fn into_conditions(self) -> Vec<Condition> {
        Vec::from(self)
    }
}

impl IntoConditions for &[Condition] {
    fn into_conditions(self) -> Vec<Condition> {
        self.to_vec()
    }
}

impl IntoConditions for ConditionSet {
    fn into_conditions(self) -> Vec<Condition> {
        self.0
    }
}

impl IntoConditions for &ConditionSet {
    fn into_conditions(self) -> Vec<Condition> {
        self.0.clone()
    }
}

impl<T: IntoConditions> IntoConditions for Option<T> {
    fn into_conditions(self) -> Vec<Condition> {
        self.map(IntoConditions::into_conditions).unwrap_or_default()
    }
}

impl IntoConditions for () {
    fn into_conditions(self) -> Vec<Condition> {
        Vec::new()
    }
}
