//! Dependency injection kernel
//!
//! Components are registered as models in a [Container] and built on demand:
//!
//! 1. [Container::register_type], [Container::register_name] or [Container::register_model] add
//!    a [ComponentModel] to the container's registry
//! 2. [KernelExt::resolve] looks the model up, dispatches it to the resolver of its kind and
//!    applies its scope and `on_created` hook
//! 3. [Container::analyze] validates a component's dependency graph up front, reporting
//!    missing components and cycles with the path that leads to them
//!
//! ```rust
//! use ioc_di::{Arguments, Constructible, Container, DependencyKey, KernelExt, ResolveError, Svc};
//!
//! struct Screen;
//! impl Constructible for Screen {
//!     fn construct(_: &mut Arguments) -> Result<Self, ResolveError> {
//!         Ok(Screen)
//!     }
//! }
//!
//! struct Monitor {
//!     screen: Svc<Screen>,
//! }
//! impl Constructible for Monitor {
//!     const ARITY: usize = 1;
//!
//!     fn dependencies() -> Vec<DependencyKey> {
//!         vec![DependencyKey::named("Screen")]
//!     }
//!
//!     fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
//!         Ok(Monitor { screen: args.take()? })
//!     }
//! }
//!
//! let container = Container::new();
//! container.register_name("Screen").as_type::<Screen>().singleton();
//! container.register_type::<Monitor>();
//!
//! container.analyze(DependencyKey::of::<Monitor>()).unwrap();
//! let monitor = container.resolve::<Monitor>().unwrap();
//! let screen = container.resolve_named::<Screen>("Screen").unwrap();
//! assert!(Svc::ptr_eq(&monitor.screen, &screen));
//! ```

pub mod builder;
pub mod cache;
pub mod config;
pub mod container;
pub mod dependency_graph;
pub mod errors;
pub mod factories;
pub mod kernel;
pub mod model;
pub mod registrar;
pub mod registry;
pub mod resolver;
pub mod types;

pub use builder::ContainerBuilder;
pub use cache::LifetimeCache;
pub use config::ContainerConfig;
pub use container::Container;
pub use dependency_graph::{
    DependencyGraphAnalyzer, DependencyGraphError, DependencyGraphErrors, DependencyPath,
};
pub use errors::ResolveError;
pub use factories::{Arguments, Constructible};
pub use kernel::{Kernel, KernelExt, KernelHandle};
pub use model::{
    AutoFactoryComponent, ComponentModel, ComponentSource, DependencyKey, InstanceComponent,
    InstanceValue, OnCreated, Scope, TypeComponent, AUTO_FACTORY_KIND, INSTANCE_KIND, TYPE_KIND,
};
pub use registrar::{ComponentModelModifier, ComponentRegistrar, Registered, Registration};
pub use registry::Registry;
pub use resolver::{AutoFactory, Resolver, ResolverContext, ResolverFactory};
pub use types::{DynError, Injectable, Instance, Svc, TypeInfo};
