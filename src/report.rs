// src/report.rs
//! The report aggregate: everything known about one scan, plus the issues and
//! recommendations the checks attach to it.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::types::{Issue, Module, ModuleInstance, ScanMetadata, Severity};
use crate::utils::OrderedSet;

/// Compiled name patterns used to classify modules after ingestion.
#[derive(Debug, Clone, Default)]
pub struct ModuleRules {
    pub ignored: Vec<Regex>,
    pub third_party: Vec<Regex>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    #[serde(rename = "scan")]
    metadata: ScanMetadata,
    modules: Vec<Module>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    issues: Vec<Issue>,
    recommendations: OrderedSet<String>,
}

impl Report {
    #[must_use]
    pub fn new(metadata: ScanMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scan(&self) -> &ScanMetadata {
        &self.metadata
    }

    pub fn scan_mut(&mut self) -> &mut ScanMetadata {
        &mut self.metadata
    }

    /// Records one source's observation of a module, creating the module on
    /// first sight. Existing instances are never replaced.
    pub fn add_module_instance(&mut self, name: &str, instance: ModuleInstance) {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                let slot = self.modules.len();
                self.modules.push(Module::new(name));
                self.index.insert(name.to_string(), slot);
                slot
            }
        };
        debug!(module = name, source = %instance.source, "module instance added");
        self.modules[slot].push_instance(instance);
    }

    /// Appends an issue. Issues are never deduplicated and the module names are
    /// not validated against the catalog.
    pub fn report_module_issue(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        modules: &[String],
    ) {
        self.issues.push(Issue {
            message: message.into(),
            severity,
            modules: modules.to_vec(),
        });
    }

    /// Adds a recommendation unless the exact same text is already present.
    pub fn make_recommendation(&mut self, text: impl Into<String>) {
        self.recommendations.insert(text.into());
    }

    /// Marks modules matching the configured name patterns as ignored or
    /// third-party. Flags already set by ingestion are kept.
    pub fn apply_classification(&mut self, rules: &ModuleRules) {
        for module in &mut self.modules {
            if rules.ignored.iter().any(|re| re.is_match(module.name())) {
                module.is_ignored = true;
            }
            if rules.third_party.iter().any(|re| re.is_match(module.name())) {
                module.is_third_party = true;
            }
        }
    }

    /// Modules in first-seen order.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.index.get(name).map(|&slot| &self.modules[slot])
    }

    pub fn module_mut(&mut self, name: &str) -> Option<&mut Module> {
        self.index.get(name).map(|&slot| &mut self.modules[slot])
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        self.recommendations.as_slice()
    }

    pub fn issues_at_or_above(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity >= severity)
    }

    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_follows_insertion() {
        let mut report = Report::default();
        report.add_module_instance("b.jar", ModuleInstance::default());
        report.add_module_instance("a.jar", ModuleInstance::default());
        report.add_module_instance("b.jar", ModuleInstance::default());

        let names: Vec<&str> = report.modules().iter().map(Module::name).collect();
        assert_eq!(names, ["b.jar", "a.jar"]);
        assert_eq!(report.module("b.jar").map(|m| m.instances().len()), Some(2));
        assert!(report.module("B.jar").is_none());
    }

    #[test]
    fn classification_sets_flags() {
        let mut report = Report::default();
        report.add_module_instance("jquery.min.js", ModuleInstance::default());
        report.add_module_instance("Ignored app.js", ModuleInstance::default());
        report.add_module_instance("app.js", ModuleInstance::default());

        let rules = ModuleRules {
            ignored: vec![Regex::new("^Ignored ").unwrap()],
            third_party: vec![Regex::new("jquery").unwrap()],
        };
        report.apply_classification(&rules);

        assert!(report.module("jquery.min.js").unwrap().is_third_party);
        assert!(report.module("Ignored app.js").unwrap().is_ignored);
        let app = report.module("app.js").unwrap();
        assert!(!app.is_ignored && !app.is_third_party);
    }
}
