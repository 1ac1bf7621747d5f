use std::vec;

use crate::{
    errors::ResolveError,
    model::DependencyKey,
    types::{Injectable, Instance, Svc},
};

/// A type the container can construct by injecting its constructor parameters
///
/// Rust has no runtime view of constructor signatures, so each type states
/// them itself: `ARITY` is the number of parameters `construct` consumes and
/// `dependencies` names the component to inject for each of them, in order.
///
/// ```rust
/// use ioc_di::{Arguments, Constructible, DependencyKey, ResolveError, Svc};
///
/// struct Screen;
/// impl Constructible for Screen {
///     fn construct(_: &mut Arguments) -> Result<Self, ResolveError> {
///         Ok(Screen)
///     }
/// }
///
/// struct Monitor {
///     screen: Svc<Screen>,
/// }
/// impl Constructible for Monitor {
///     const ARITY: usize = 1;
///
///     fn dependencies() -> Vec<DependencyKey> {
///         vec![DependencyKey::of::<Screen>()]
///     }
///
///     fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
///         Ok(Monitor { screen: args.take()? })
///     }
/// }
/// ```
pub trait Constructible: Injectable + Sized {
    /// Number of constructor parameters
    const ARITY: usize = 0;

    /// Returns one dependency token per constructor parameter
    fn dependencies() -> Vec<DependencyKey> {
        Vec::new()
    }

    /// Builds the type from its resolved dependencies
    fn construct(args: &mut Arguments) -> Result<Self, ResolveError>;
}

/// Resolved constructor arguments, handed out in declared order
pub struct Arguments {
    component: String,
    position: usize,
    values: vec::IntoIter<Instance>,
}

impl Arguments {
    pub(crate) fn new(component: impl Into<String>, values: Vec<Instance>) -> Self {
        Arguments {
            component: component.into(),
            position: 0,
            values: values.into_iter(),
        }
    }

    /// Takes the next argument as a typed service
    pub fn take<T: Injectable>(&mut self) -> Result<Svc<T>, ResolveError> {
        self.take_instance()?.downcast()
    }

    /// Takes the next argument without downcasting it
    pub fn take_instance(&mut self) -> Result<Instance, ResolveError> {
        let position = self.position;
        self.position += 1;
        self.values.next().ok_or_else(|| ResolveError::MissingArgument {
            component: self.component.clone(),
            position,
        })
    }

    /// Number of arguments not taken yet
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}
