//! Composite product configurator.
//!
//! A product is a tree of [`domain::Part`]s (priced leaves) and
//! [`domain::Assembly`]s (composites whose price is the sum of their
//! children). Trees are validated against a caller-supplied
//! [`domain::ValidationPolicy`], collecting every issue in a fixed order.
//!
//! ```
//! use prodconf::domain::{Assembly, Component, DefaultPolicy, Node};
//! use rust_decimal::Decimal;
//!
//! let computer = Assembly::new("Computer");
//! computer.add_child(Node::part("CPU", Decimal::from(500))).unwrap();
//! computer.add_child(Node::part("SSD", Decimal::from(200))).unwrap();
//!
//! assert_eq!(computer.calculate_price(), Decimal::from(700));
//! assert!(computer.validate(&DefaultPolicy::default()).is_valid());
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
