use serde::Serialize;

use crate::utils::OrderedSet;

/// One source's observation of a module.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleInstance {
    pub source: String,
    pub id: u64,
    /// Upstream status, possibly a comma-joined list of sub-statuses.
    pub status: String,
    pub platform: String,
    /// Size as reported upstream, e.g. `"12MB"`.
    pub size: String,
    pub size_bytes: u64,
    pub md5: String,
    pub has_fatal_errors: bool,
    pub is_dependency: bool,
    pub is_selected: bool,
    pub issues: OrderedSet<String>,
}

/// A logical unit of uploaded code, reconciled across every source that
/// reported it.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    name: String,
    pub is_javascript_module: bool,
    pub is_node_module: bool,
    pub is_ignored: bool,
    pub is_third_party: bool,
    pub is_selected: bool,
    has_fatal_errors: bool,
    instances: Vec<ModuleInstance>,
}

impl Module {
    /// Creates an empty module, deriving technology flags from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let lower = name.to_lowercase();
        Self {
            is_javascript_module: lower.starts_with("js files within ") || lower.ends_with(".js"),
            is_node_module: lower.contains("node_modules"),
            is_ignored: false,
            is_third_party: false,
            is_selected: false,
            has_fatal_errors: false,
            instances: Vec::new(),
            name,
        }
    }

    pub(crate) fn push_instance(&mut self, instance: ModuleInstance) {
        self.has_fatal_errors |= instance.has_fatal_errors;
        self.is_selected |= instance.is_selected;
        self.instances.push(instance);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn instances(&self) -> &[ModuleInstance] {
        &self.instances
    }

    /// True if any source reported fatal errors for this module.
    #[must_use]
    pub fn has_fatal_errors(&self) -> bool {
        self.has_fatal_errors
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    #[must_use]
    pub fn is_dependency(&self) -> bool {
        self.instances.iter().any(|i| i.is_dependency)
    }

    #[must_use]
    pub fn total_size_bytes(&self) -> u64 {
        self.instances
            .iter()
            .fold(0u64, |total, i| total.saturating_add(i.size_bytes))
    }

    /// Distinct issue details across all instances, first-seen order.
    #[must_use]
    pub fn issue_details(&self) -> OrderedSet<&str> {
        self.instances
            .iter()
            .flat_map(|i| i.issues.iter().map(String::as_str))
            .collect()
    }

    /// Distinct non-empty platforms across all instances.
    #[must_use]
    pub fn platforms(&self) -> OrderedSet<&str> {
        self.instances
            .iter()
            .map(|i| i.platform.as_str())
            .filter(|p| !p.is_empty())
            .collect()
    }
}
