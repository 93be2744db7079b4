//! Composite component: an ordered, shared list of child nodes.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::{debug, instrument, trace};

use crate::domain::component::Component;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;
use crate::domain::policy::ValidationPolicy;
use crate::domain::report::{ValidationIssue, ValidationReport};

#[derive(Debug)]
struct AssemblyInner {
    name: String,
    children: RefCell<Vec<Node>>,
    mandatory: RefCell<Vec<Node>>,
}

/// Shared handle to a composite node.
///
/// Cloning the handle does not copy the assembly: every clone observes the
/// same children. A node may be a child of several assemblies (DAG), but an
/// assembly never reaches itself; [`Assembly::add_child`] rejects cycles.
#[derive(Debug, Clone)]
pub struct Assembly {
    inner: Rc<AssemblyInner>,
}

impl Assembly {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(AssemblyInner {
                name: name.into(),
                children: RefCell::new(Vec::new()),
                mandatory: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Identity comparison: true if both handles point at the same assembly.
    pub fn ptr_eq(&self, other: &Assembly) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Append `child` to the end of the child list. Duplicates are allowed.
    pub fn add_child(&self, child: impl Into<Node>) -> DomainResult<()> {
        let child = child.into();
        if let Node::Assembly(candidate) = &child {
            if candidate.ptr_eq(self) || candidate.reaches(self, &mut HashSet::new()) {
                return Err(DomainError::CyclicStructure {
                    parent: self.inner.name.clone(),
                    child: candidate.inner.name.clone(),
                });
            }
        }
        debug!(assembly = %self.inner.name, child = %child.name(), "add child");
        self.inner.children.borrow_mut().push(child);
        Ok(())
    }

    /// Remove the first occurrence of `child` (by identity).
    ///
    /// Returns whether anything was removed; an absent child is not an error.
    pub fn remove_child(&self, child: &Node) -> bool {
        let mut children = self.inner.children.borrow_mut();
        match children.iter().position(|c| c.ptr_eq(child)) {
            Some(pos) => {
                children.remove(pos);
                debug!(assembly = %self.inner.name, child = %child.name(), "removed child");
                true
            }
            None => false,
        }
    }

    /// Declare `node` mandatory. Matching is by name, anywhere below this assembly.
    pub fn add_mandatory(&self, node: impl Into<Node>) {
        self.inner.mandatory.borrow_mut().push(node.into());
    }

    /// Snapshot of the current children, in insertion order.
    pub fn children(&self) -> Vec<Node> {
        self.inner.children.borrow().clone()
    }

    pub fn mandatory_names(&self) -> Vec<String> {
        self.inner
            .mandatory
            .borrow()
            .iter()
            .map(|m| m.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.children.borrow().is_empty()
    }

    /// Whether `node` is a direct child (by identity).
    pub fn contains(&self, node: &Node) -> bool {
        self.inner.children.borrow().iter().any(|c| c.ptr_eq(node))
    }

    /// Shared sub-assemblies are searched once.
    fn reaches(&self, target: &Assembly, visited: &mut HashSet<*const AssemblyInner>) -> bool {
        if !visited.insert(Rc::as_ptr(&self.inner)) {
            return false;
        }
        self.inner.children.borrow().iter().any(|c| match c {
            Node::Assembly(a) => a.ptr_eq(target) || a.reaches(target, visited),
            Node::Part(_) => false,
        })
    }
}

impl Component for Assembly {
    fn name(&self) -> &str {
        &self.inner.name
    }

    /// Sum of the children's prices, saturating at `Decimal::MAX` / `Decimal::MIN`.
    fn calculate_price(&self) -> Decimal {
        self.inner
            .children
            .borrow()
            .iter()
            .map(Component::calculate_price)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    #[instrument(level = "trace", skip(self, policy), fields(assembly = %self.inner.name))]
    fn validate(&self, policy: &dyn ValidationPolicy) -> ValidationReport {
        let children = self.children();
        let mut report = ValidationReport::valid();

        if !policy.is_price_acceptable(self) {
            report.push(ValidationIssue::AssemblyPrice {
                name: self.inner.name.clone(),
            });
        }

        // Every declared name is reported, not only the missing ones.
        if !policy.has_required_children(self, &children) {
            report.fail();
            for name in self.mandatory_names() {
                report.push(ValidationIssue::MissingMandatory {
                    assembly: self.inner.name.clone(),
                    component: name,
                });
            }
        }

        for child in &children {
            let child_report = child.validate(policy);
            if !child_report.is_valid() {
                trace!(child = %child.name(), issues = child_report.issues().len(), "child failed");
                report.merge(child_report);
            }
        }

        report
    }

    fn as_assembly(&self) -> Option<&Assembly> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::DefaultPolicy;

    #[test]
    fn given_empty_assembly_when_calculating_price_then_zero() {
        let assembly = Assembly::new("C");

        assert_eq!(assembly.calculate_price(), Decimal::ZERO);
        assert!(assembly.is_empty());
    }

    #[test]
    fn given_assembly_when_adding_itself_then_cycle_rejected() {
        let assembly = Assembly::new("C");

        let result = assembly.add_child(assembly.clone());

        assert_eq!(
            result,
            Err(DomainError::CyclicStructure {
                parent: "C".into(),
                child: "C".into(),
            })
        );
        assert!(assembly.is_empty());
    }

    #[test]
    fn given_nested_assemblies_when_adding_ancestor_then_cycle_rejected() {
        let outer = Assembly::new("Outer");
        let middle = Assembly::new("Middle");
        let inner = Assembly::new("Inner");
        outer.add_child(middle.clone()).unwrap();
        middle.add_child(inner.clone()).unwrap();

        let result = inner.add_child(outer.clone());

        assert!(matches!(result, Err(DomainError::CyclicStructure { .. })));
        assert!(inner.is_empty());
    }

    #[test]
    fn given_shared_child_when_added_twice_then_allowed() {
        let a = Assembly::new("A");
        let shared = Assembly::new("Shared");
        shared
            .add_child(Node::part("P", Decimal::from(5)))
            .unwrap();

        a.add_child(shared.clone()).unwrap();
        a.add_child(shared.clone()).unwrap();

        assert_eq!(a.len(), 2);
        assert_eq!(a.calculate_price(), Decimal::from(10));
    }

    #[test]
    fn given_custom_policy_rejecting_requirements_when_no_mandatory_then_invalid_without_issues() {
        struct Strict;
        impl ValidationPolicy for Strict {
            fn is_price_acceptable(&self, _: &dyn Component) -> bool {
                true
            }
            fn has_required_children(&self, _: &dyn Component, _: &[Node]) -> bool {
                false
            }
        }
        let assembly = Assembly::new("C");

        let report = assembly.validate(&Strict);

        assert!(!report.is_valid());
        assert!(report.issues().is_empty());
    }

    #[test]
    fn given_valid_tree_when_validating_then_default_policy_accepts() {
        let assembly = Assembly::new("C");
        assembly
            .add_child(Node::part("A", Decimal::from(1)))
            .unwrap();

        assert!(assembly.validate(&DefaultPolicy::default()).is_valid());
    }

    #[test]
    fn given_prices_past_decimal_max_when_calculating_then_saturates() {
        let assembly = Assembly::new("Huge");
        assembly.add_child(Node::part("A", Decimal::MAX)).unwrap();
        assembly.add_child(Node::part("B", Decimal::MAX)).unwrap();

        assert_eq!(assembly.calculate_price(), Decimal::MAX);
        assert!(assembly.validate(&DefaultPolicy::default()).is_valid());
    }

    #[test]
    fn given_deeply_shared_dag_when_adding_unrelated_assembly_then_completes() {
        // Each level holds the previous one twice: 2^40 paths, 40 distinct assemblies.
        let bottom = Assembly::new("L0");
        bottom.add_child(Node::part("Leaf", Decimal::ONE)).unwrap();
        let mut level = bottom.clone();
        for depth in 1..=40 {
            let next = Assembly::new(format!("L{depth}"));
            next.add_child(level.clone()).unwrap();
            next.add_child(level.clone()).unwrap();
            level = next;
        }
        let outsider = Assembly::new("Outsider");

        assert!(outsider.add_child(level.clone()).is_ok());
        assert!(matches!(
            bottom.add_child(level.clone()),
            Err(DomainError::CyclicStructure { .. })
        ));
    }
}
