//! Specification Catalog
//!
//! Simple in-memory registry of named specifications, with a few built-in
//! ones used by the command-line checker and the demos.

use std::collections::HashMap;
use std::sync::Arc;

use crate::specification::Specification;
use crate::{are, is};

/// Named specifications
#[derive(Debug, Clone)]
pub struct Catalog {
    specs: HashMap<String, Arc<Specification>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// A catalog holding every built-in specification
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        for spec in [person(), tags(), range()] {
            catalog.add(spec);
        }
        catalog
    }

    /// Register a specification under its name. Unnamed specifications
    /// cannot be looked up and are rejected.
    pub fn add(&mut self, spec: Specification) -> bool {
        let Some(name) = spec.name().map(str::to_string) else {
            log::warn!("ignoring unnamed specification");
            return false;
        };
        if self.specs.insert(name.clone(), Arc::new(spec)).is_some() {
            log::debug!("replaced specification '{}'", name);
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<Arc<Specification>> {
        let spec = self.specs.get(name).cloned();
        log::debug!(
            "catalog lookup '{}': {}",
            name,
            if spec.is_some() { "found" } else { "missing" }
        );
        spec
    }

    /// Names of all registered specifications, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.specs.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Person record: every declared property non-null, with a nested account
pub fn person() -> Specification {
    let mut account = Specification::named("account");
    account.property("number", [is::integer(), is::greater::than(0)]);

    let mut person = Specification::named("person");
    person
        .all(are::not::null())
        .property("id", is::number())
        .property("name", [is::string(), is::not::empty()])
        .property("account", is::schema(account));
    person
}

/// A non-empty list of string tags
pub fn tags() -> Specification {
    let mut spec = Specification::named("tags");
    spec.property("tags", [is::array_of(is::string()), is::min::length(1)]);
    spec
}

/// Numeric bounds with an optional positive integer step
pub fn range() -> Specification {
    let mut spec = Specification::named("range");
    spec.property("min", is::number())
        .property("max", is::number())
        .property(
            "step",
            is::either([is::integer(), is::greater::than(0)]).or(is::undefined()),
        );
    spec
}
