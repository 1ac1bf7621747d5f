use std::rc::Rc;

use crate::model::{ComponentModel, DependencyKey};

/// Insertion ordered collection of component models
///
/// Lookups return the first match, later duplicates are kept but never resolved.
#[derive(Default, Debug)]
pub struct Registry {
    models: Vec<Rc<ComponentModel>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a model, returns its index and whether its name or type shadows an earlier entry
    pub fn push(&mut self, model: ComponentModel) -> (usize, bool) {
        let shadowed = self.models.iter().any(|existing| {
            existing.name == model.name
                || matches!((existing.type_info(), model.type_info()), (Some(a), Some(b)) if a == b)
        });
        self.models.push(Rc::new(model));
        (self.models.len() - 1, shadowed)
    }

    pub fn find(&self, key: &DependencyKey) -> Option<&Rc<ComponentModel>> {
        self.models.iter().find(|model| model.matches(key))
    }

    pub fn get(&self, index: usize) -> Option<&Rc<ComponentModel>> {
        self.models.get(index)
    }

    /// Mutable access for registration modifiers, clones the model if a resolution still holds it
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut ComponentModel> {
        self.models.get_mut(index).map(Rc::make_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<ComponentModel>> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<ComponentModel> for Registry {
    fn from_iter<I: IntoIterator<Item = ComponentModel>>(iter: I) -> Self {
        Registry {
            models: iter.into_iter().map(Rc::new).collect(),
        }
    }
}
