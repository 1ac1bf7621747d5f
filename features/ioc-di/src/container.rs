use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    fmt::Debug,
    rc::Rc,
};

use crate::{
    builder::ContainerBuilder,
    cache::LifetimeCache,
    config::ContainerConfig,
    dependency_graph::{
        DependencyGraphAnalyzer, DependencyGraphError, DependencyGraphErrors, DependencyPath,
    },
    errors::ResolveError,
    factories::Constructible,
    kernel::{Kernel, KernelHandle},
    model::{ComponentModel, ComponentSource, DependencyKey, TYPE_KIND},
    registrar::{ComponentModelModifier, ComponentRegistrar, Registered, Registration},
    registry::Registry,
    resolver::Resolver,
    types::Instance,
};

/// Dependency injection container
///
/// Cloning yields another handle to the same registrations and singletons.
#[derive(Clone)]
pub struct Container(pub(crate) Rc<ContainerInner>);
pub(crate) struct ContainerInner {
    pub(crate) registry: RefCell<Registry>,
    pub(crate) resolvers: HashMap<String, Box<dyn Resolver>>,
    pub(crate) cache: Rc<LifetimeCache>,
    pub(crate) config: ContainerConfig,
    /// Resolutions currently in progress, zero outside of any resolve
    pub(crate) depth: Cell<usize>,
}
impl Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.0.registry.borrow();
        let mut map = f.debug_struct("Container");
        for model in registry.iter() {
            let val = if self.0.cache.contains(&model.name) {
                "cached"
            } else {
                model.kind.as_str()
            };
            map.field(&model.name, &val);
        }
        map.finish()
    }
}
impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Container with the built-in resolver kinds and default config
    pub fn new() -> Self {
        ContainerBuilder::new().build()
    }

    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Adds one registration
    ///
    /// * `ByName` yields a [ComponentRegistrar] to pick what the name is bound to
    /// * `ByType` registers immediately and yields the model's modifier
    /// * `ByModel` stores the model verbatim
    pub fn register(&self, registration: Registration) -> Registered<'_> {
        match registration {
            Registration::ByName(name) => Registered::Named(ComponentRegistrar::new(self, name)),
            Registration::ByType(component) => {
                let name = component.info.short_name();
                let model = ComponentModel::new(TYPE_KIND, name, ComponentSource::Type(component));
                Registered::Modifier(ComponentModelModifier::new(self, self.push_model(model)))
            }
            Registration::ByModel(model) => {
                self.push_model(model);
                Registered::Stored
            }
        }
    }

    /// Registers `T` under its short type name
    pub fn register_type<T: Constructible>(&self) -> ComponentModelModifier<'_> {
        ComponentModelModifier::new(self, self.push_model(ComponentModel::of_type::<T>()))
    }

    /// Starts a registration bound to `name`
    pub fn register_name(&self, name: impl Into<String>) -> ComponentRegistrar<'_> {
        ComponentRegistrar::new(self, name.into())
    }

    /// Stores a prebuilt model, used for kinds added with [ContainerBuilder::with_resolver]
    pub fn register_model(&self, model: ComponentModel) {
        self.push_model(model);
    }

    /// Validates the dependency graph rooted at `root` without constructing anything
    pub fn analyze(&self, root: impl Into<DependencyKey>) -> Result<(), DependencyGraphError> {
        let registry = self.0.registry.borrow();
        DependencyGraphAnalyzer::new(&registry).analyze(&root.into())
    }

    /// Validates the dependency graph of every registered component
    pub fn validate(&self) -> Result<(), DependencyGraphErrors> {
        let registry = self.0.registry.borrow();
        DependencyGraphAnalyzer::new(&registry).analyze_all()
    }

    /// Weak handle for resolving later on
    pub fn kernel(&self) -> KernelHandle {
        KernelHandle {
            inner: Rc::downgrade(&self.0),
        }
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.0.config
    }

    /// Number of registered models, duplicates included
    pub fn len(&self) -> usize {
        self.0.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn push_model(&self, model: ComponentModel) -> usize {
        let name = model.name.clone();
        let kind = model.kind.clone();
        let (index, shadowed) = self.0.registry.borrow_mut().push(model);

        if shadowed && self.0.config.warn_on_duplicates {
            tracing::warn!(
                "'{name}' is registered more than once, only the first registration is resolved"
            );
        }
        tracing::debug!("Registered '{name}' as {kind}");

        index
    }

    pub(crate) fn modify_model(&self, index: usize, modify: impl FnOnce(&mut ComponentModel)) {
        if let Some(model) = self.0.registry.borrow_mut().get_mut(index) {
            modify(model);
        }
    }
}

impl Kernel for Container {
    fn resolve_key(&self, key: &DependencyKey) -> Result<Instance, ResolveError> {
        self.0.resolve_key(key)
    }
}

impl ContainerInner {
    pub(crate) fn resolve_key(&self, key: &DependencyKey) -> Result<Instance, ResolveError> {
        // Release the registry before resolving, factories may register or resolve further components
        let model = self.registry.borrow().find(key).cloned();
        let Some(model) = model else {
            tracing::error!("Tried to resolve an unregistered component: {key}");
            // A missing root is reported the way the analyzer reports it
            if self.config.analyze_on_resolve && self.depth.get() == 0 {
                let missing = key.to_string();
                return Err(DependencyGraphError::UnresolvedDependency {
                    path: DependencyPath(vec![missing.clone()]),
                    missing,
                }
                .into());
            }
            return Err(ResolveError::Unregistered(key.clone()));
        };

        if self.config.analyze_on_resolve && !model.is_analyzed() {
            let registry = self.registry.borrow();
            DependencyGraphAnalyzer::new(&registry).analyze_model(&model)?;
        }

        self.depth.set(self.depth.get() + 1);
        let resolved = self.resolve_model(&model);
        self.depth.set(self.depth.get() - 1);

        resolved
    }

    fn resolve_model(&self, model: &ComponentModel) -> Result<Instance, ResolveError> {
        let resolver =
            self.resolvers
                .get(&model.kind)
                .ok_or_else(|| ResolveError::MissingResolverKind {
                    kind: model.kind.clone(),
                })?;

        tracing::debug!("Resolving '{}' as {}", model.name, model.kind);
        resolver.resolve(model)
    }
}
