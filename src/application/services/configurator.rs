//! Configurator service: validates and prices product trees under the
//! policy described by the loaded settings.

use rust_decimal::Decimal;
use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::domain::{Component, DefaultPolicy, Node, ValidationIssue, ValidationPolicy};
use crate::tree_traits::TreeNodeConvert;

/// Outcome of checking a product: validity, total price and all issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub total: Decimal,
    pub issues: Vec<ValidationIssue>,
}

impl Verdict {
    /// Human-readable summary, one line per entry.
    pub fn lines(&self) -> Vec<String> {
        if self.valid {
            vec![
                "Configuration is valid.".to_string(),
                format!("Total Price: ${}", self.total),
            ]
        } else {
            std::iter::once("Configuration is invalid:".to_string())
                .chain(self.issues.iter().map(|issue| format!("- {}", issue)))
                .collect()
        }
    }
}

pub struct ConfiguratorService {
    settings: Settings,
}

impl ConfiguratorService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Policy built from the current settings.
    pub fn policy(&self) -> DefaultPolicy {
        self.settings.policy.to_policy()
    }

    /// Validate `product` under the configured policy.
    pub fn check(&self, product: &Node) -> Verdict {
        self.check_with(product, &self.policy())
    }

    /// Validate `product` under an explicitly supplied policy.
    #[instrument(level = "debug", skip(self, product, policy), fields(product = %product.name()))]
    pub fn check_with(&self, product: &Node, policy: &dyn ValidationPolicy) -> Verdict {
        let report = product.validate(policy);
        let total = product.calculate_price();
        let valid = report.is_valid();
        if valid {
            info!(%total, "configuration valid");
        } else {
            debug!(issues = report.issues().len(), "configuration invalid");
        }
        Verdict {
            valid,
            total,
            issues: report.into_issues(),
        }
    }

    pub fn render(&self, product: &Node) -> Tree<String> {
        product.to_tree_string()
    }
}
