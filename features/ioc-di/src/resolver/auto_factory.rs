use std::fmt::Debug;

use crate::{
    errors::ResolveError,
    kernel::{Kernel, KernelHandle},
    model::{ComponentModel, ComponentSource, DependencyKey},
    resolver::{Resolver, ResolverContext},
    types::{Injectable, Instance, Svc},
};

/// Deferred handle to another component
///
/// Each call to [AutoFactory::get] resolves the target again, so the target's
/// own scope decides whether the same instance comes back.
///
/// ### Errors
///
/// Resolving after the owning container was dropped fails with [ResolveError::KernelDropped]
#[derive(Clone)]
pub struct AutoFactory {
    kernel: KernelHandle,
    component: DependencyKey,
}
impl Debug for AutoFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AutoFactory").field(&self.component).finish()
    }
}

impl AutoFactory {
    /// Resolves the target as `T`
    pub fn get<T: Injectable>(&self) -> Result<Svc<T>, ResolveError> {
        self.get_instance()?.downcast()
    }

    /// Resolves the target without downcasting it
    pub fn get_instance(&self) -> Result<Instance, ResolveError> {
        self.kernel.resolve_key(&self.component)
    }

    /// The component this factory resolves
    pub fn component(&self) -> &DependencyKey {
        &self.component
    }
}

/// Produces [AutoFactory] handles for auto factory components
pub struct AutoFactoryResolver {
    context: ResolverContext,
}

impl AutoFactoryResolver {
    pub fn new(context: ResolverContext) -> Self {
        Self { context }
    }
}

impl Resolver for AutoFactoryResolver {
    fn context(&self) -> &ResolverContext {
        &self.context
    }

    fn instantiate(&self, model: &ComponentModel) -> Result<Instance, ResolveError> {
        let ComponentSource::AutoFactory(component) = &model.source else {
            return Err(ResolveError::MismatchedSource {
                name: model.name.clone(),
                kind: model.kind.clone(),
            });
        };

        Ok(Instance::new(AutoFactory {
            kernel: self.context.kernel.clone(),
            component: component.component.clone(),
        }))
    }
}
