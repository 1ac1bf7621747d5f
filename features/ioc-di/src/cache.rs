use std::{cell::RefCell, collections::HashMap};

use crate::types::Instance;

/// Singleton instances keyed by component name
///
/// Written at most once per name and never evicted.
#[derive(Default)]
pub struct LifetimeCache {
    instances: RefCell<HashMap<String, Instance>>,
}

impl LifetimeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Instance> {
        self.instances.borrow().get(name).cloned()
    }

    /// Stores the instance unless the name already holds one, returns the cached value
    pub fn store(&self, name: &str, instance: Instance) -> Instance {
        self.instances
            .borrow_mut()
            .entry(name.to_string())
            .or_insert(instance)
            .clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instances.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.instances.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
