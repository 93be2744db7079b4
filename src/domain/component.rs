//! Shared capabilities of every node in a product tree.

use std::fmt;

use rust_decimal::Decimal;

use crate::domain::assembly::Assembly;
use crate::domain::policy::ValidationPolicy;
use crate::domain::report::ValidationReport;

/// Priced, named and validatable.
///
/// Composition is deliberately absent: only [`Assembly`] can hold children.
pub trait Component: fmt::Debug {
    fn name(&self) -> &str;

    /// Current price; recomputed on every call for composites.
    ///
    /// Composite sums saturate at the `Decimal` bounds instead of overflowing.
    fn calculate_price(&self) -> Decimal;

    /// Validate this node and everything below it against `policy`.
    fn validate(&self, policy: &dyn ValidationPolicy) -> ValidationReport;

    /// Composite view of this node, if it is one.
    fn as_assembly(&self) -> Option<&Assembly> {
        None
    }
}
