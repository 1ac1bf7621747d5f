use std::fmt;

use thiserror::Error;

use crate::{
    model::{ComponentModel, DependencyKey},
    registry::Registry,
};

/// Pre-flight validation of the dependency graph reachable from a component
///
/// Walks declared dependencies without constructing anything. A model whose
/// subgraph was proven valid is flagged as analyzed and never walked again,
/// whichever root reaches it.
pub struct DependencyGraphAnalyzer<'a> {
    registry: &'a Registry,
}

impl<'a> DependencyGraphAnalyzer<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Validate the graph rooted at `root`
    ///
    /// Fails on the first unregistered dependency or cycle, reporting the path from the root.
    pub fn analyze(&self, root: &DependencyKey) -> Result<(), DependencyGraphError> {
        let mut path = Vec::new();
        self.analyze_key(root, &mut path)
    }

    /// Validate the graph rooted at an already looked up model
    pub fn analyze_model(&self, model: &ComponentModel) -> Result<(), DependencyGraphError> {
        let mut path = Vec::new();
        self.analyze_recurse(model, &mut path)
    }

    /// Validate every registered model
    ///
    /// Returns a list of all issues
    pub fn analyze_all(&self) -> Result<(), DependencyGraphErrors> {
        let errors: Vec<_> = self
            .registry
            .iter()
            .filter_map(|model| self.analyze_model(model).err())
            .collect();

        if !errors.is_empty() {
            return Err(DependencyGraphErrors { errors });
        }

        Ok(())
    }

    fn analyze_key(
        &self,
        key: &DependencyKey,
        path: &mut Vec<String>,
    ) -> Result<(), DependencyGraphError> {
        let Some(model) = self.registry.find(key) else {
            let missing = key.to_string();
            path.push(missing.clone());
            return Err(DependencyGraphError::UnresolvedDependency {
                path: DependencyPath(path.clone()),
                missing,
            });
        };

        self.analyze_recurse(model, path)
    }

    fn analyze_recurse(
        &self,
        model: &ComponentModel,
        path: &mut Vec<String>,
    ) -> Result<(), DependencyGraphError> {
        // Subgraph already proven valid
        if model.is_analyzed() {
            return Ok(());
        }

        // Circular Dependency Check - only ancestors on the current path count
        if path.contains(&model.name) {
            path.push(model.name.clone());
            return Err(DependencyGraphError::CircularDependency {
                chain: DependencyPath(path.clone()),
            });
        }

        path.push(model.name.clone());

        // Only type components declare dependencies, everything else is a leaf
        for dependency in model.dependencies().unwrap_or_default() {
            self.analyze_key(dependency, path)?;
        }

        path.pop();
        model.set_analyzed(true);
        tracing::debug!("Dependency graph of '{}' is valid", model.name);

        Ok(())
    }
}

/// Component names from the analyzed root to the failing node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPath(pub Vec<String>);
impl fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyGraphError {
    #[error("Trying to resolve {path} but {missing} is not registered in container")]
    UnresolvedDependency {
        path: DependencyPath,
        missing: String,
    },
    #[error("Circular dependency detected on: {chain}")]
    CircularDependency { chain: DependencyPath },
}

#[derive(Error, Debug, Clone)]
pub struct DependencyGraphErrors {
    pub errors: Vec<DependencyGraphError>,
}
impl fmt::Display for DependencyGraphErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut display = Vec::new();
        display.push("The dependency graph had one or more errors:".to_string());
        for error in &self.errors {
            display.push(format!("- {}", error));
        }
        f.write_str(&display.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentSource, InstanceComponent, TYPE_KIND};
    use crate::{factories::Arguments, model::TypeComponent, ResolveError};

    fn type_model(name: &str, dependencies: &[&str]) -> ComponentModel {
        let mut component = TypeComponent::of::<Leaf>();
        component.arity = dependencies.len();
        component.dependencies = dependencies.iter().map(|d| DependencyKey::named(*d)).collect();
        ComponentModel::new(TYPE_KIND, name, ComponentSource::Type(component))
    }

    struct Leaf;
    impl crate::Constructible for Leaf {
        fn construct(_: &mut Arguments) -> Result<Self, ResolveError> {
            Ok(Leaf)
        }
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let registry: Registry = [
            type_model("App", &["Left", "Right"]),
            type_model("Left", &["Shared"]),
            type_model("Right", &["Shared"]),
            type_model("Shared", &[]),
        ]
        .into_iter()
        .collect();

        DependencyGraphAnalyzer::new(&registry)
            .analyze(&"App".into())
            .unwrap();
        assert!(registry.iter().all(|model| model.is_analyzed()));
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let registry: Registry = [type_model("Loop", &["Loop"])].into_iter().collect();

        let err = DependencyGraphAnalyzer::new(&registry)
            .analyze(&"Loop".into())
            .unwrap_err();
        assert_eq!(err.to_string(), "Circular dependency detected on: Loop -> Loop");
    }

    #[test]
    fn failed_subgraph_is_not_marked() {
        let registry: Registry = [type_model("Monitor", &["Screen"]), type_model("Desk", &[])]
            .into_iter()
            .collect();

        let analyzer = DependencyGraphAnalyzer::new(&registry);
        assert!(analyzer.analyze(&"Monitor".into()).is_err());
        assert!(!registry.find(&"Monitor".into()).unwrap().is_analyzed());
        // Retrying still reports the failure
        assert!(analyzer.analyze(&"Monitor".into()).is_err());
    }

    #[test]
    fn non_type_components_are_leaves() {
        let registry: Registry = [
            ComponentModel::new(
                crate::model::INSTANCE_KIND,
                "Config",
                ComponentSource::Instance(InstanceComponent::fixed(3_u8)),
            ),
            type_model("Service", &["Config"]),
        ]
        .into_iter()
        .collect();

        DependencyGraphAnalyzer::new(&registry)
            .analyze(&"Service".into())
            .unwrap();
    }

    #[test]
    fn analyze_all_collects_every_issue() {
        let registry: Registry = [
            type_model("A", &["B"]),
            type_model("B", &["A"]),
            type_model("C", &["Missing"]),
            type_model("D", &[]),
        ]
        .into_iter()
        .collect();

        let errors = DependencyGraphAnalyzer::new(&registry)
            .analyze_all()
            .unwrap_err();
        assert_eq!(
            errors.to_string(),
            "The dependency graph had one or more errors:\n\
             - Circular dependency detected on: A -> B -> A\n\
             - Circular dependency detected on: B -> A -> B\n\
             - Trying to resolve C -> Missing but Missing is not registered in container"
        );
        assert!(registry.find(&"D".into()).unwrap().is_analyzed());
    }
}
