//! Leaf component with a fixed price.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::component::Component;
use crate::domain::policy::ValidationPolicy;
use crate::domain::report::{ValidationIssue, ValidationReport};

/// Atomic priced item. Name and price are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    price: Decimal,
}

impl Part {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl Component for Part {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate_price(&self) -> Decimal {
        self.price
    }

    #[instrument(level = "trace", skip(self, policy), fields(part = %self.name))]
    fn validate(&self, policy: &dyn ValidationPolicy) -> ValidationReport {
        if policy.is_price_acceptable(self) {
            return ValidationReport::valid();
        }
        debug!(price = %self.price, "part rejected by price policy");
        ValidationReport::invalid(vec![ValidationIssue::PartPrice {
            name: self.name.clone(),
        }])
    }
}
