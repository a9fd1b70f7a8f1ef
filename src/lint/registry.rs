//! Rule registry for managing checks.
//!
//! The [`RuleRegistry`] stores the checks for one input type and runs them
//! in registration order, so reports are deterministic.

use super::diagnostic::LintDiagnostic;
use super::rule::{LintRule, RuleId};

/// Ordered collection of checks over input `I`.
pub struct RuleRegistry<I: ?Sized> {
    rules: Vec<Box<dyn LintRule<I>>>,
}

impl<I: ?Sized> RuleRegistry<I> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule. A rule with the same ID replaces the earlier one
    /// in place.
    pub fn register(&mut self, rule: Box<dyn LintRule<I>>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule<I>> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule<I>> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Run every rule against `input`, concatenating diagnostics.
    pub fn run(&self, input: &I) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            let found = rule.check(input);
            tracing::debug!(rule = %rule.id(), count = found.len(), "rule finished");
            diagnostics.extend(found);
        }
        diagnostics
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<I: ?Sized> Default for RuleRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;

    struct MockRule {
        id: RuleId,
        emit: usize,
    }

    impl LintRule<str> for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, input: &str) -> Vec<LintDiagnostic> {
            (0..self.emit)
                .map(|_| LintDiagnostic::new(self.id(), Severity::Warning, input))
                .collect()
        }
    }

    fn mock(id: &str, emit: usize) -> Box<MockRule> {
        Box::new(MockRule {
            id: RuleId::new(id),
            emit,
        })
    }

    #[test]
    fn registry_new_is_empty() {
        let registry: RuleRegistry<str> = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry: RuleRegistry<str> = RuleRegistry::new();
        registry.register(mock("mock", 0));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registering_same_id_replaces() {
        let mut registry: RuleRegistry<str> = RuleRegistry::new();
        registry.register(mock("a", 1));
        registry.register(mock("b", 1));
        registry.register(mock("a", 3));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.run("x").len(), 4);
    }

    #[test]
    fn run_preserves_registration_order() {
        let mut registry: RuleRegistry<str> = RuleRegistry::new();
        registry.register(mock("second", 1));
        registry.register(mock("first", 1));

        let ids: Vec<_> = registry
            .run("input")
            .into_iter()
            .map(|d| d.rule_id.0)
            .collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry: RuleRegistry<str> = RuleRegistry::default();
        assert!(registry.is_empty());
    }
}
