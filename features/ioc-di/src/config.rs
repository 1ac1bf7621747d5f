/// Behaviour switches of a [crate::Container]
///
/// ```rust
/// use ioc_di::{Container, ContainerConfig};
///
/// let container = Container::builder()
///     .with_config(ContainerConfig::default().analyze_on_resolve(false))
///     .build();
/// assert!(!container.config().analyze_on_resolve);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Run the dependency graph analyzer before a component is first resolved
    ///
    /// Turns cycles and missing transitive dependencies into descriptive
    /// errors instead of a stack overflow or a failure deep inside the graph.
    pub analyze_on_resolve: bool,
    /// Log a warning when a registration shadows an earlier name or type
    pub warn_on_duplicates: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            analyze_on_resolve: true,
            warn_on_duplicates: true,
        }
    }
}

impl ContainerConfig {
    pub fn analyze_on_resolve(mut self, enabled: bool) -> Self {
        self.analyze_on_resolve = enabled;
        self
    }

    pub fn warn_on_duplicates(mut self, enabled: bool) -> Self {
        self.warn_on_duplicates = enabled;
        self
    }
}
