use std::{any::Any, cell::Cell, fmt, rc::Rc};

use crate::{
    errors::ResolveError,
    factories::{Arguments, Constructible},
    kernel::Kernel,
    types::{Injectable, Instance, Svc, TypeInfo},
};

pub const TYPE_KIND: &str = "Type";
pub const INSTANCE_KIND: &str = "Instance";
pub const AUTO_FACTORY_KIND: &str = "AutoFactory";

/// Token identifying a component, either by its type or by the name it was bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyKey {
    Type(TypeInfo),
    Name(String),
}
impl DependencyKey {
    pub fn of<T: Injectable>() -> Self {
        Self::Type(TypeInfo::of::<T>())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}
impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKey::Type(info) => info.fmt(f),
            DependencyKey::Name(name) => f.write_str(name),
        }
    }
}
impl From<&str> for DependencyKey {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}
impl From<String> for DependencyKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
impl From<TypeInfo> for DependencyKey {
    fn from(info: TypeInfo) -> Self {
        Self::Type(info)
    }
}

/// Lifetime of resolved instances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// One shared instance per container
    Singleton,
    /// A fresh instance per resolve
    #[default]
    Transient,
}

type ConstructFn = dyn Fn(&mut Arguments) -> Result<Instance, ResolveError>;
type InstanceFactoryFn = dyn Fn(&dyn Kernel) -> Result<Instance, ResolveError>;
type OnCreatedFn = dyn Fn(Instance, &dyn Kernel) -> Result<Instance, ResolveError>;

/// Post construction transform, applied before a singleton is cached
#[derive(Clone)]
pub struct OnCreated(Rc<OnCreatedFn>);
impl OnCreated {
    /// Hook working on the resolved service type
    ///
    /// Fails with [ResolveError::DowncastFailed] if the component produces something other than `T`
    pub fn typed<T, F>(hook: F) -> Self
    where
        T: Injectable,
        F: Fn(Svc<T>, &dyn Kernel) -> Svc<T> + 'static,
    {
        Self(Rc::new(move |instance: Instance, kernel: &dyn Kernel| -> Result<Instance, ResolveError> {
            let service = instance.downcast::<T>()?;
            Ok(Instance::from_svc(hook(service, kernel)))
        }))
    }

    /// Hook working on the type erased instance
    pub fn erased<F>(hook: F) -> Self
    where
        F: Fn(Instance, &dyn Kernel) -> Result<Instance, ResolveError> + 'static,
    {
        Self(Rc::new(hook))
    }

    pub fn apply(&self, instance: Instance, kernel: &dyn Kernel) -> Result<Instance, ResolveError> {
        (self.0)(instance, kernel)
    }
}

/// A type constructed by resolving its declared dependencies
#[derive(Clone)]
pub struct TypeComponent {
    pub info: TypeInfo,
    /// Number of constructor parameters
    pub arity: usize,
    /// One token per constructor parameter, in declared order
    pub dependencies: Vec<DependencyKey>,
    constructor: Rc<ConstructFn>,
}
impl TypeComponent {
    pub fn of<T: Constructible>() -> Self {
        TypeComponent {
            info: TypeInfo::of::<T>(),
            arity: T::ARITY,
            dependencies: T::dependencies(),
            constructor: Rc::new(|args: &mut Arguments| T::construct(args).map(Instance::new)),
        }
    }

    /// Adopts the base type's constructor signature if this type declares none
    ///
    /// Returns false if the type already had its own metadata
    pub fn inherit<Base: Constructible>(&mut self) -> bool {
        if self.arity != 0 || !self.dependencies.is_empty() {
            return false;
        }
        self.arity = Base::ARITY;
        self.dependencies = Base::dependencies();
        true
    }

    pub fn construct(&self, args: &mut Arguments) -> Result<Instance, ResolveError> {
        (self.constructor)(args)
    }
}

/// Value of an instance component
#[derive(Clone)]
pub enum InstanceValue {
    /// Pre built instance, shared by every resolve
    Fixed(Instance),
    /// Invoked with the kernel on each instantiation
    Factory(Rc<InstanceFactoryFn>),
}

#[derive(Clone)]
pub struct InstanceComponent {
    pub value: InstanceValue,
}
impl InstanceComponent {
    pub fn fixed<T: Injectable>(value: T) -> Self {
        Self {
            value: InstanceValue::Fixed(Instance::new(value)),
        }
    }

    pub fn factory<T, F>(factory: F) -> Self
    where
        T: Injectable,
        F: Fn(&dyn Kernel) -> Result<T, ResolveError> + 'static,
    {
        Self {
            value: InstanceValue::Factory(Rc::new(move |kernel: &dyn Kernel| {
                factory(kernel).map(Instance::new)
            })),
        }
    }
}

/// Deferred factory re-resolving `component` on every call
#[derive(Clone)]
pub struct AutoFactoryComponent {
    pub component: DependencyKey,
}

/// Kind specific part of a [ComponentModel]
#[derive(Clone)]
pub enum ComponentSource {
    Type(TypeComponent),
    Instance(InstanceComponent),
    AutoFactory(AutoFactoryComponent),
    /// Payload for kinds added through [crate::builder::ContainerBuilder::with_resolver]
    Custom(Rc<dyn Any>),
}

/// The registered description of a component
#[derive(Clone)]
pub struct ComponentModel {
    /// Selects the resolver
    pub kind: String,
    /// Binding key for lookups by name
    pub name: String,
    pub scope: Scope,
    pub on_created: Option<OnCreated>,
    pub source: ComponentSource,
    analyzed: Cell<bool>,
}

impl ComponentModel {
    /// Model for a type, bound under the type's short name
    pub fn of_type<T: Constructible>() -> Self {
        let component = TypeComponent::of::<T>();
        let name = component.info.short_name();
        Self::new(TYPE_KIND, name, ComponentSource::Type(component))
    }

    pub fn new(kind: impl Into<String>, name: impl Into<String>, source: ComponentSource) -> Self {
        ComponentModel {
            kind: kind.into(),
            name: name.into(),
            scope: Scope::default(),
            on_created: None,
            source,
            analyzed: Cell::new(false),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Declared dependencies, only type components have any
    pub fn dependencies(&self) -> Option<&[DependencyKey]> {
        match &self.source {
            ComponentSource::Type(component) => Some(&component.dependencies),
            _ => None,
        }
    }

    /// The constructed type if this is a type component
    pub fn type_info(&self) -> Option<TypeInfo> {
        match &self.source {
            ComponentSource::Type(component) => Some(component.info),
            _ => None,
        }
    }

    pub fn matches(&self, key: &DependencyKey) -> bool {
        match key {
            DependencyKey::Name(name) => self.name == *name,
            DependencyKey::Type(info) => {
                self.kind == TYPE_KIND && self.type_info().is_some_and(|own| own.type_id == info.type_id)
            }
        }
    }

    pub fn is_analyzed(&self) -> bool {
        self.analyzed.get()
    }

    /// Marks the subgraph rooted here as validated
    pub fn set_analyzed(&self, analyzed: bool) {
        self.analyzed.set(analyzed);
    }
}

impl AsRef<ComponentModel> for ComponentModel {
    fn as_ref(&self) -> &ComponentModel {
        self
    }
}

impl fmt::Debug for ComponentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentModel")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("on_created", &self.on_created.is_some())
            .field("dependencies", &self.dependencies())
            .field("analyzed", &self.is_analyzed())
            .finish()
    }
}
