//! Registration façade
//!
//! Turns declarative registration calls into [ComponentModel]s and hands out
//! fluent modifiers for the model that was just added.

use crate::{
    container::Container,
    errors::ResolveError,
    factories::Constructible,
    kernel::Kernel,
    model::{
        AutoFactoryComponent, ComponentModel, ComponentSource, DependencyKey, InstanceComponent,
        OnCreated, Scope, TypeComponent, AUTO_FACTORY_KIND, INSTANCE_KIND, TYPE_KIND,
    },
    types::{Injectable, Svc},
};

/// The three ways to register a component
pub enum Registration {
    /// Bind a name, the registrar decides what it resolves to
    ByName(String),
    /// Register a constructible type under its short name
    ByType(TypeComponent),
    /// Store a model as is
    ByModel(ComponentModel),
}
impl Registration {
    pub fn of_type<T: Constructible>() -> Self {
        Self::ByType(TypeComponent::of::<T>())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }
}

/// Result of [Container::register]
pub enum Registered<'c> {
    Named(ComponentRegistrar<'c>),
    Modifier(ComponentModelModifier<'c>),
    Stored,
}
impl<'c> Registered<'c> {
    pub fn into_registrar(self) -> Option<ComponentRegistrar<'c>> {
        match self {
            Registered::Named(registrar) => Some(registrar),
            _ => None,
        }
    }

    pub fn into_modifier(self) -> Option<ComponentModelModifier<'c>> {
        match self {
            Registered::Modifier(modifier) => Some(modifier),
            _ => None,
        }
    }
}

/// Binds a name to a type, an instance or an auto factory
pub struct ComponentRegistrar<'c> {
    container: &'c Container,
    name: String,
}

impl<'c> ComponentRegistrar<'c> {
    pub(crate) fn new(container: &'c Container, name: String) -> Self {
        Self { container, name }
    }

    fn register(self, kind: &str, source: ComponentSource) -> ComponentModelModifier<'c> {
        let index = self
            .container
            .push_model(ComponentModel::new(kind, self.name, source));
        ComponentModelModifier::new(self.container, index)
    }

    /// Name resolves to a new `T`
    pub fn as_type<T: Constructible>(self) -> ComponentModelModifier<'c> {
        self.register(TYPE_KIND, ComponentSource::Type(TypeComponent::of::<T>()))
    }

    /// Name resolves to this very instance
    pub fn as_instance<T: Injectable>(self, instance: T) -> ComponentModelModifier<'c> {
        self.register(
            INSTANCE_KIND,
            ComponentSource::Instance(InstanceComponent::fixed(instance)),
        )
    }

    /// Name resolves to whatever the factory builds, the factory may resolve other components
    pub fn as_factory<T, F>(self, factory: F) -> ComponentModelModifier<'c>
    where
        T: Injectable,
        F: Fn(&dyn Kernel) -> Result<T, ResolveError> + 'static,
    {
        self.register(
            INSTANCE_KIND,
            ComponentSource::Instance(InstanceComponent::factory(factory)),
        )
    }

    /// Name resolves to an [crate::AutoFactory] for `component`
    pub fn as_auto_factory(self, component: impl Into<DependencyKey>) -> ComponentModelModifier<'c> {
        self.register(
            AUTO_FACTORY_KIND,
            ComponentSource::AutoFactory(AutoFactoryComponent {
                component: component.into(),
            }),
        )
    }
}

/// Adjusts a just registered model before it is first resolved
pub struct ComponentModelModifier<'c> {
    container: &'c Container,
    index: usize,
}

impl<'c> ComponentModelModifier<'c> {
    pub(crate) fn new(container: &'c Container, index: usize) -> Self {
        Self { container, index }
    }

    /// One shared instance for the container
    pub fn singleton(self) -> Self {
        self.scope(Scope::Singleton)
    }

    /// A fresh instance per resolve, the default
    pub fn transient(self) -> Self {
        self.scope(Scope::Transient)
    }

    pub fn scope(self, scope: Scope) -> Self {
        self.container.modify_model(self.index, |model| model.scope = scope);
        self
    }

    /// Transforms each newly created instance, singletons cache the transformed one
    pub fn on_created<T, F>(self, hook: F) -> Self
    where
        T: Injectable,
        F: Fn(Svc<T>, &dyn Kernel) -> Svc<T> + 'static,
    {
        self.container.modify_model(self.index, |model| {
            model.on_created = Some(OnCreated::typed::<T, F>(hook));
        });
        self
    }

    /// Uses `Base`'s constructor signature for a type that declares none of its own
    pub fn inherit<Base: Constructible>(self) -> Self {
        self.container.modify_model(self.index, |model| {
            let ComponentSource::Type(component) = &mut model.source else {
                tracing::warn!("'{}' is not a type component, inherit has no effect", model.name);
                return;
            };

            if component.inherit::<Base>() {
                model.set_analyzed(false);
            } else {
                tracing::warn!(
                    "'{}' declares its own constructor parameters, inherit has no effect",
                    model.name
                );
            }
        });
        self
    }

    /// Name the model is bound to
    pub fn name(&self) -> Option<String> {
        let registry = self.container.0.registry.borrow();
        registry.get(self.index).map(|model| model.name.clone())
    }
}
