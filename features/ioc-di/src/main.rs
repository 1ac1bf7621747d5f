use std::error::Error;

use ioc_di::{
    Arguments, AutoFactory, Constructible, Container, DependencyKey, KernelExt, ResolveError, Svc,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let container = Container::new();
    container.register_type::<Processor>().singleton();
    container.register_name("Monitor").as_factory(|kernel| {
        Ok(Monitor {
            inches: 27,
            processor: kernel.resolve::<Processor>()?,
        })
    });
    container.register_type::<Computer>();
    container
        .register_name("ComputerFactory")
        .as_auto_factory(DependencyKey::of::<Computer>());

    container.validate()?;

    let factory = container.resolve_named::<AutoFactory>("ComputerFactory")?;
    let first = factory.get::<Computer>()?;
    let second = factory.get::<Computer>()?;

    println!("{:?}", container);
    println!(
        "computer with {} cores and a {}\" monitor",
        first.processor.cores, first.monitor.inches
    );
    println!(
        "monitor and computer share their processor: {}",
        Svc::ptr_eq(&first.processor, &first.monitor.processor)
    );
    println!(
        "computers share their processor: {}",
        Svc::ptr_eq(&first.processor, &second.processor)
    );

    Ok(())
}

#[derive(Debug)]
struct Processor {
    cores: u8,
}
impl Constructible for Processor {
    fn construct(_: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(Processor { cores: 8 })
    }
}

#[derive(Debug)]
struct Monitor {
    inches: u8,
    processor: Svc<Processor>,
}

#[derive(Debug)]
struct Computer {
    processor: Svc<Processor>,
    monitor: Svc<Monitor>,
}
impl Constructible for Computer {
    const ARITY: usize = 2;

    fn dependencies() -> Vec<DependencyKey> {
        vec![DependencyKey::of::<Processor>(), DependencyKey::named("Monitor")]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(Computer {
            processor: args.take()?,
            monitor: args.take()?,
        })
    }
}
