//! Domain layer: the product tree and its validation rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod assembly;
pub mod component;
pub mod error;
pub mod node;
pub mod part;
pub mod policy;
pub mod report;

pub use assembly::Assembly;
pub use component::Component;
pub use error::{DomainError, DomainResult};
pub use node::Node;
pub use part::Part;
pub use policy::{
    contains_name, mandatory_names_present, DefaultPolicy, FnPolicy, RequirementFn,
    ValidationPolicy,
};
pub use report::{ValidationIssue, ValidationReport};
