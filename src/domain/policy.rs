//! Pluggable validation rules.
//!
//! A policy answers two questions about a node: is its price acceptable, and
//! are the mandatory components of an assembly present somewhere below it.
//! Policies are passed into every validation call; nothing here is global.

use rust_decimal::Decimal;
use tracing::trace;

use crate::domain::component::Component;
use crate::domain::node::Node;

pub trait ValidationPolicy {
    fn is_price_acceptable(&self, component: &dyn Component) -> bool;

    /// `candidates` are the children to search, normally the assembly's own.
    fn has_required_children(&self, component: &dyn Component, candidates: &[Node]) -> bool;
}

/// Price must exceed `minimum_price` (or reach it, with `allow_minimum`);
/// mandatory names must be found among the candidates' subtrees.
///
/// The default value is the classic rule: price strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultPolicy {
    pub minimum_price: Decimal,
    pub allow_minimum: bool,
}

impl DefaultPolicy {
    pub fn new(minimum_price: Decimal, allow_minimum: bool) -> Self {
        Self {
            minimum_price,
            allow_minimum,
        }
    }

    /// Accept prices equal to zero as well.
    pub fn allowing_zero() -> Self {
        Self::new(Decimal::ZERO, true)
    }
}

impl ValidationPolicy for DefaultPolicy {
    fn is_price_acceptable(&self, component: &dyn Component) -> bool {
        let price = component.calculate_price();
        if self.allow_minimum {
            price >= self.minimum_price
        } else {
            price > self.minimum_price
        }
    }

    fn has_required_children(&self, component: &dyn Component, candidates: &[Node]) -> bool {
        mandatory_names_present(component, candidates)
    }
}

/// Mandatory-presence rule shared by [`DefaultPolicy`] and [`FnPolicy::with_default_requirements`].
///
/// Vacuously true for parts and for assemblies without mandatory entries.
pub fn mandatory_names_present(component: &dyn Component, candidates: &[Node]) -> bool {
    let Some(assembly) = component.as_assembly() else {
        return true;
    };
    assembly.mandatory_names().iter().all(|name| {
        let found = contains_name(candidates, name);
        trace!(assembly = %assembly.name(), mandatory = %name, found, "mandatory lookup");
        found
    })
}

/// Depth-first, pre-order search for `name` among `candidates` and their
/// assembly descendants. Stops at the first match.
pub fn contains_name(candidates: &[Node], name: &str) -> bool {
    candidates.iter().any(|candidate| {
        candidate.name() == name
            || candidate
                .as_assembly()
                .is_some_and(|assembly| contains_name(&assembly.children(), name))
    })
}

/// Signature of the stock mandatory-presence rule.
pub type RequirementFn = fn(&dyn Component, &[Node]) -> bool;

/// Policy assembled from two closures.
pub struct FnPolicy<P, R> {
    price: P,
    required: R,
}

impl<P, R> FnPolicy<P, R>
where
    P: Fn(&dyn Component) -> bool,
    R: Fn(&dyn Component, &[Node]) -> bool,
{
    pub fn new(price: P, required: R) -> Self {
        Self { price, required }
    }
}

impl<P> FnPolicy<P, RequirementFn>
where
    P: Fn(&dyn Component) -> bool,
{
    /// Custom price rule, stock mandatory-presence rule.
    pub fn with_default_requirements(price: P) -> Self {
        Self {
            price,
            required: mandatory_names_present,
        }
    }
}

impl<P, R> ValidationPolicy for FnPolicy<P, R>
where
    P: Fn(&dyn Component) -> bool,
    R: Fn(&dyn Component, &[Node]) -> bool,
{
    fn is_price_acceptable(&self, component: &dyn Component) -> bool {
        (self.price)(component)
    }

    fn has_required_children(&self, component: &dyn Component, candidates: &[Node]) -> bool {
        (self.required)(component, candidates)
    }
}
