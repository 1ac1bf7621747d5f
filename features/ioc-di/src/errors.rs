use thiserror::Error;

use crate::{dependency_graph::DependencyGraphError, model::DependencyKey, types::DynError};

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Nothing is registered under the requested name or type
    #[error("Trying to resolve {}, but its not registered in the container", describe(.0))]
    Unregistered(DependencyKey),
    /// The model's kind has no resolver in the container's dispatch table
    #[error("No resolver registered for component model kind of {kind}")]
    MissingResolverKind { kind: String },
    /// The model's source does not belong to its kind
    #[error("Component '{name}' of kind {kind} does not carry a {kind} source")]
    MismatchedSource { name: String, kind: String },
    /// Constructor parameters and declared dependencies disagree, construction is refused
    #[error("'{component}' takes {arity} constructor parameter(s) but {declared} dependencies were declared, declare them with `Constructible::dependencies` or `inherit`")]
    MissingInjectionMetadata {
        component: String,
        arity: usize,
        declared: usize,
    },
    /// A constructor asked for more arguments than were resolved for it
    #[error("'{component}' requested argument #{position} but it was not resolved")]
    MissingArgument { component: String, position: usize },
    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
    /// Kernel handle outlived its container
    #[error("Container was dropped, did you keep an auto factory around after dropping it?")]
    KernelDropped,
    #[error(transparent)]
    DependencyGraph(#[from] DependencyGraphError),
    /// Failure raised by a constructor, factory or hook
    #[error("Error during resolution: {0}")]
    Other(DynError),
}

impl ResolveError {
    /// Wraps an error raised by user code
    pub fn other(error: impl Into<DynError>) -> Self {
        Self::Other(error.into())
    }
}

fn describe(key: &DependencyKey) -> String {
    match key {
        DependencyKey::Type(info) => format!("type of {info}"),
        DependencyKey::Name(name) => name.clone(),
    }
}
