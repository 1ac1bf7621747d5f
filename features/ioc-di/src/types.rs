use std::{
    any::{Any, TypeId},
    fmt,
    rc::Rc,
};

use crate::errors::ResolveError;

/// Errors raised by user constructors and factories
pub type DynError = Box<dyn std::error::Error>;

/// Shared pointer to a resolved service
pub type Svc<T> = Rc<T>;

/// Resolution is single threaded, so anything with a static lifetime can be injected
pub trait Injectable: 'static {}
impl<T: 'static> Injectable for T {}

/// Type erased instance produced by a resolver
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    pub instance: Rc<dyn Any>,
}

impl Instance {
    pub fn new<T: Injectable>(instance: T) -> Self {
        Self::from_svc(Rc::new(instance))
    }

    pub fn from_svc<T: Injectable>(instance: Svc<T>) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            instance,
        }
    }

    pub fn downcast<T: Injectable>(&self) -> Result<Svc<T>, ResolveError> {
        Rc::downcast::<T>(self.instance.clone()).map_err(|_| ResolveError::DowncastFailed {
            required_type: std::any::type_name::<T>(),
            actual_type: self.info.type_name,
        })
    }

    /// True if both handles point at the same allocation
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Rc::ptr_eq(&self.instance, &other.instance)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Instance").field(&self.info.type_name).finish()
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Type name without module paths, `app::hw::Factory<app::hw::Cpu>` becomes `Factory<Cpu>`
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.type_name.len());
        let mut segment_start = 0;
        let mut chars = self.type_name.chars().peekable();

        while let Some(c) = chars.next() {
            if c == ':' && chars.peek() == Some(&':') {
                chars.next();
                short.truncate(segment_start);
                continue;
            }

            short.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = short.len();
            }
        }

        short
    }
}
