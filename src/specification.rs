//! Specification Builder
//!
//! Accumulates per-property and universal conditions and evaluates objects
//! against them.

use crate::condition::primitive::Primitive;
use crate::condition::{ConditionSet, IntoConditions};
use crate::error::SpecError;
use crate::value::Value;

/// Declared properties with their conditions, plus conditions shared by all
/// of them
///
/// Builder calls append and return `&mut Self`; nothing is ever removed.
/// Validation only reads, so a finished specification can be shared and
/// evaluated from several threads.
#[derive(Debug, Clone, Default)]
pub struct Specification {
    name: Option<String>,
    property_conditions: Vec<(String, ConditionSet)>,
    universal_conditions: ConditionSet,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a specification labelled with the type it describes
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Add conditions applied to the value of every declared property
    pub fn all(&mut self, conditions: impl IntoConditions) -> &mut Self {
        self.universal_conditions.extend(conditions);
        self
    }

    /// Declare a property and append conditions to it
    ///
    /// Passing `()` or `None` only declares the property, which still has to
    /// satisfy the universal conditions.
    pub fn property(
        &mut self,
        name: impl Into<String>,
        conditions: impl IntoConditions,
    ) -> &mut Self {
        let name = name.into();
        let index = match self.property_conditions.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.property_conditions.push((name, ConditionSet::new()));
                self.property_conditions.len() - 1
            }
        };
        self.property_conditions[index].1.extend(conditions);
        self
    }

    /// Declared property names, in registration order
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.property_conditions.iter().map(|(name, _)| name.as_str())
    }

    pub fn conditions_for(&self, name: &str) -> Option<&ConditionSet> {
        self.property_conditions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, conditions)| conditions)
    }

    pub fn universal_conditions(&self) -> &ConditionSet {
        &self.universal_conditions
    }

    /// True when no property has been declared yet
    pub fn is_empty(&self) -> bool {
        self.property_conditions.is_empty()
    }

    /// Decide whether `object` conforms.
    ///
    /// Properties are visited in registration order; for each, the universal
    /// conditions run before the property's own. The first unmet condition
    /// ends the evaluation with `Ok(false)`.
    pub fn validate(&self, object: &Value) -> Result<bool, SpecError> {
        if !Primitive::Object.test(object) {
            return Err(SpecError::InvalidInput {
                kind: object.kind(),
            });
        }

        if self.property_conditions.is_empty() {
            return Err(SpecError::EmptySpecification {
                name: self.name.clone(),
            });
        }

        for (property, conditions) in &self.property_conditions {
            let value = object.get(property);
            log::trace!("{}: checking '{}' = {}", self.display_name(), property, value);

            for set in [&self.universal_conditions, conditions] {
                if let Some(failed) = set.first_failure(value)? {
                    log::debug!(
                        "{}: property '{}' failed {}",
                        self.display_name(),
                        property,
                        failed
                    );
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("specification")
    }
}
