use std::rc::Rc;

use crate::{
    cache::LifetimeCache,
    errors::ResolveError,
    kernel::KernelHandle,
    model::{ComponentModel, Scope, AUTO_FACTORY_KIND, INSTANCE_KIND, TYPE_KIND},
    types::Instance,
};

pub mod auto_factory;
pub mod instance;
pub mod type_resolver;

pub use auto_factory::{AutoFactory, AutoFactoryResolver};
pub use instance::InstanceResolver;
pub use type_resolver::TypeResolver;

/// What every resolver of a container shares
#[derive(Clone)]
pub struct ResolverContext {
    pub kernel: KernelHandle,
    pub cache: Rc<LifetimeCache>,
}

/// Builds the resolver of one kind for a new container
pub type ResolverFactory = Box<dyn Fn(ResolverContext) -> Box<dyn Resolver>>;

/// Materializes one kind of [ComponentModel]
pub trait Resolver {
    fn context(&self) -> &ResolverContext;

    /// Builds a raw instance, scope and hooks are applied by [Resolver::resolve]
    fn instantiate(&self, model: &ComponentModel) -> Result<Instance, ResolveError>;

    /// Applies the model's scope around [Resolver::instantiate]
    ///
    /// The `on_created` hook runs once per raw construction, a singleton caches the hooked instance.
    fn resolve(&self, model: &ComponentModel) -> Result<Instance, ResolveError> {
        let context = self.context();

        if model.scope == Scope::Singleton {
            if let Some(cached) = context.cache.get(&model.name) {
                tracing::debug!("Resolved '{}' from singleton cache", model.name);
                return Ok(cached);
            }
        }

        let mut instance = self.instantiate(model)?;
        if let Some(hook) = &model.on_created {
            instance = hook.apply(instance, &context.kernel)?;
        }

        match model.scope {
            Scope::Singleton => {
                tracing::debug!("Caching singleton '{}'", model.name);
                Ok(context.cache.store(&model.name, instance))
            }
            Scope::Transient => Ok(instance),
        }
    }
}

/// The kinds every container knows
pub(crate) fn default_resolvers() -> Vec<(String, ResolverFactory)> {
    let type_resolver: ResolverFactory = Box::new(new_type_resolver);
    let instance_resolver: ResolverFactory = Box::new(new_instance_resolver);
    let auto_factory_resolver: ResolverFactory = Box::new(new_auto_factory_resolver);

    vec![
        (TYPE_KIND.to_string(), type_resolver),
        (INSTANCE_KIND.to_string(), instance_resolver),
        (AUTO_FACTORY_KIND.to_string(), auto_factory_resolver),
    ]
}

fn new_type_resolver(context: ResolverContext) -> Box<dyn Resolver> {
    Box::new(TypeResolver::new(context))
}

fn new_instance_resolver(context: ResolverContext) -> Box<dyn Resolver> {
    Box::new(InstanceResolver::new(context))
}

fn new_auto_factory_resolver(context: ResolverContext) -> Box<dyn Resolver> {
    Box::new(AutoFactoryResolver::new(context))
}
