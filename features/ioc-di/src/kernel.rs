use std::rc::Weak;

use crate::{
    container::ContainerInner,
    errors::ResolveError,
    model::DependencyKey,
    types::{Injectable, Instance, Svc},
};

/// Resolve only view of a container, handed to resolvers, factories and hooks
pub trait Kernel {
    /// Resolves the first component matching `key`
    fn resolve_key(&self, key: &DependencyKey) -> Result<Instance, ResolveError>;
}

/// Typed helpers for every [Kernel]
pub trait KernelExt: Kernel {
    /// Resolves the first type component registered for `T`
    fn resolve<T: Injectable>(&self) -> Result<Svc<T>, ResolveError> {
        self.resolve_key(&DependencyKey::of::<T>())?.downcast()
    }

    /// Resolves the first component bound to `name`
    fn resolve_named<T: Injectable>(&self, name: &str) -> Result<Svc<T>, ResolveError> {
        self.resolve_key(&DependencyKey::named(name))?.downcast()
    }
}
impl<K: Kernel + ?Sized> KernelExt for K {}

/// Weak handle back to a container
///
/// Held by resolvers and auto factories, so resolved instances never keep their container alive.
#[derive(Clone)]
pub struct KernelHandle {
    pub(crate) inner: Weak<ContainerInner>,
}

impl Kernel for KernelHandle {
    fn resolve_key(&self, key: &DependencyKey) -> Result<Instance, ResolveError> {
        let inner = self.inner.upgrade().ok_or(ResolveError::KernelDropped)?;
        inner.resolve_key(key)
    }
}
