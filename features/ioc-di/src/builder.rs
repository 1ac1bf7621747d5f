use std::{cell::Cell, collections::HashMap, rc::Rc};

use crate::{
    cache::LifetimeCache,
    config::ContainerConfig,
    container::{Container, ContainerInner},
    kernel::KernelHandle,
    resolver::{default_resolvers, Resolver, ResolverContext, ResolverFactory},
};

/// Sets up the resolver table of a [Container]
///
/// The table starts with the `Type`, `Instance` and `AutoFactory` kinds and is
/// closed once [ContainerBuilder::build] ran.
pub struct ContainerBuilder {
    /// Resolver factories by kind, later entries replace earlier ones
    resolvers: Vec<(String, ResolverFactory)>,
    config: ContainerConfig,
}
impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerBuilder {
    pub fn new() -> Self {
        ContainerBuilder {
            resolvers: default_resolvers(),
            config: ContainerConfig::default(),
        }
    }

    /// Adds a resolver for a new kind, or replaces the resolver of a known one
    pub fn with_resolver<F>(mut self, kind: impl Into<String>, factory: F) -> Self
    where
        F: Fn(ResolverContext) -> Box<dyn Resolver> + 'static,
    {
        self.resolvers.push((kind.into(), Box::new(factory)));
        self
    }

    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Container {
        let ContainerBuilder { resolvers, config } = self;

        tracing::debug!("Building container with {} resolver kinds", resolvers.len());

        let inner = Rc::new_cyclic(|weak| {
            let cache = Rc::new(LifetimeCache::new());
            let context = ResolverContext {
                kernel: KernelHandle {
                    inner: weak.clone(),
                },
                cache: cache.clone(),
            };

            let resolvers: HashMap<String, Box<dyn Resolver>> = resolvers
                .into_iter()
                .map(|(kind, factory)| (kind, factory(context.clone())))
                .collect();

            ContainerInner {
                registry: Default::default(),
                resolvers,
                cache,
                config,
                depth: Cell::new(0),
            }
        });

        Container(inner)
    }
}
