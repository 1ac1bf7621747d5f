use crate::{
    errors::ResolveError,
    kernel::Kernel,
    model::{ComponentModel, ComponentSource, InstanceValue},
    resolver::{Resolver, ResolverContext},
    types::Instance,
};

/// Hands out pre built instances or runs instance factories
pub struct InstanceResolver {
    context: ResolverContext,
}

impl InstanceResolver {
    pub fn new(context: ResolverContext) -> Self {
        Self { context }
    }
}

impl Resolver for InstanceResolver {
    fn context(&self) -> &ResolverContext {
        &self.context
    }

    fn instantiate(&self, model: &ComponentModel) -> Result<Instance, ResolveError> {
        let ComponentSource::Instance(component) = &model.source else {
            return Err(ResolveError::MismatchedSource {
                name: model.name.clone(),
                kind: model.kind.clone(),
            });
        };

        match &component.value {
            InstanceValue::Fixed(instance) => Ok(instance.clone()),
            InstanceValue::Factory(factory) => {
                let kernel: &dyn Kernel = &self.context.kernel;
                factory(kernel)
            }
        }
    }
}
