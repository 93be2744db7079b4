//! Validation outcome: a verdict plus the ordered list of issues found.

use thiserror::Error;

/// A single validation finding. The `Display` text is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Component '{name}' is invalid due to price constraints.")]
    PartPrice { name: String },

    #[error("Composite '{name}' is invalid due to price constraints.")]
    AssemblyPrice { name: String },

    #[error("Composite '{assembly}' is missing mandatory component '{component}'.")]
    MissingMandatory { assembly: String, component: String },
}

/// Result of validating a node and its subtree.
///
/// `valid` is tracked separately from `issues`: a custom policy may reject an
/// assembly's required children without any mandatory entry to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    valid: bool,
    issues: Vec<ValidationIssue>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn invalid(issues: Vec<ValidationIssue>) -> Self {
        Self {
            valid: false,
            issues,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Issue messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Record an issue; any issue makes the report invalid.
    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        self.valid = false;
        self.issues.push(issue);
    }

    pub(crate) fn fail(&mut self) {
        self.valid = false;
    }

    /// Append a child's outcome after this report's own findings.
    pub(crate) fn merge(&mut self, other: ValidationReport) {
        self.valid &= other.valid;
        self.issues.extend(other.issues);
    }
}
