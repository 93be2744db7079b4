//! Tagged node type: either a leaf part or a composite assembly.

use std::rc::Rc;

use rust_decimal::Decimal;

use crate::domain::assembly::Assembly;
use crate::domain::component::Component;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::part::Part;
use crate::domain::policy::ValidationPolicy;
use crate::domain::report::ValidationReport;

/// A node in a product tree. Clones share the underlying component.
#[derive(Debug, Clone)]
pub enum Node {
    Part(Rc<Part>),
    Assembly(Assembly),
}

impl Node {
    pub fn part(name: impl Into<String>, price: Decimal) -> Self {
        Node::Part(Rc::new(Part::new(name, price)))
    }

    pub fn assembly(name: impl Into<String>) -> Self {
        Node::Assembly(Assembly::new(name))
    }

    /// Identity comparison; two separately built nodes with equal names differ.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Part(a), Node::Part(b)) => Rc::ptr_eq(a, b),
            (Node::Assembly(a), Node::Assembly(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Add a child through the untyped node interface.
    ///
    /// Parts are leaves: this fails with [`DomainError::UnsupportedOperation`].
    pub fn add_child(&self, child: impl Into<Node>) -> DomainResult<()> {
        match self {
            Node::Assembly(assembly) => assembly.add_child(child),
            Node::Part(part) => Err(DomainError::UnsupportedOperation {
                operation: "add a component to",
                component: part.name().to_string(),
            }),
        }
    }

    /// Remove a child through the untyped node interface.
    ///
    /// Parts are leaves: this fails with [`DomainError::UnsupportedOperation`].
    pub fn remove_child(&self, child: &Node) -> DomainResult<bool> {
        match self {
            Node::Assembly(assembly) => Ok(assembly.remove_child(child)),
            Node::Part(part) => Err(DomainError::UnsupportedOperation {
                operation: "remove a component from",
                component: part.name().to_string(),
            }),
        }
    }
}

impl Component for Node {
    fn name(&self) -> &str {
        match self {
            Node::Part(part) => part.name(),
            Node::Assembly(assembly) => assembly.name(),
        }
    }

    fn calculate_price(&self) -> Decimal {
        match self {
            Node::Part(part) => part.calculate_price(),
            Node::Assembly(assembly) => assembly.calculate_price(),
        }
    }

    fn validate(&self, policy: &dyn ValidationPolicy) -> ValidationReport {
        match self {
            Node::Part(part) => part.validate(policy),
            Node::Assembly(assembly) => assembly.validate(policy),
        }
    }

    fn as_assembly(&self) -> Option<&Assembly> {
        match self {
            Node::Assembly(assembly) => Some(assembly),
            Node::Part(_) => None,
        }
    }
}

impl From<Part> for Node {
    fn from(part: Part) -> Self {
        Node::Part(Rc::new(part))
    }
}

impl From<Rc<Part>> for Node {
    fn from(part: Rc<Part>) -> Self {
        Node::Part(part)
    }
}

impl From<Assembly> for Node {
    fn from(assembly: Assembly) -> Self {
        Node::Assembly(assembly)
    }
}

impl From<&Assembly> for Node {
    fn from(assembly: &Assembly) -> Self {
        Node::Assembly(assembly.clone())
    }
}
