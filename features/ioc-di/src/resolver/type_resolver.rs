use crate::{
    errors::ResolveError,
    factories::Arguments,
    kernel::Kernel,
    model::{ComponentModel, ComponentSource},
    resolver::{Resolver, ResolverContext},
    types::Instance,
};

/// Constructs type components, resolving each declared dependency through the kernel
pub struct TypeResolver {
    context: ResolverContext,
}

impl TypeResolver {
    pub fn new(context: ResolverContext) -> Self {
        Self { context }
    }
}

impl Resolver for TypeResolver {
    fn context(&self) -> &ResolverContext {
        &self.context
    }

    fn instantiate(&self, model: &ComponentModel) -> Result<Instance, ResolveError> {
        let ComponentSource::Type(component) = &model.source else {
            return Err(ResolveError::MismatchedSource {
                name: model.name.clone(),
                kind: model.kind.clone(),
            });
        };

        if component.dependencies.len() != component.arity {
            return Err(ResolveError::MissingInjectionMetadata {
                component: model.name.clone(),
                arity: component.arity,
                declared: component.dependencies.len(),
            });
        }

        // Left to right, in declared order
        let values = component
            .dependencies
            .iter()
            .map(|dependency| self.context.kernel.resolve_key(dependency))
            .collect::<Result<Vec<_>, _>>()?;

        let mut args = Arguments::new(model.name.clone(), values);
        let instance = component.construct(&mut args)?;
        tracing::debug!("Constructed instance of {}", component.info.type_name);

        Ok(instance)
    }
}
