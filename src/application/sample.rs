//! Built-in sample product used by the CLI.

use rust_decimal::Decimal;

use crate::domain::{Assembly, DomainResult, Node};

/// A gaming computer: a motherboard (CPU, RAM) plus an SSD; the CPU is
/// mandatory for the computer and lives one level down, on the motherboard.
pub fn gaming_computer() -> DomainResult<Assembly> {
    let cpu = Node::part("Intel i9 CPU", Decimal::from(500));
    let ram = Node::part("16GB RAM", Decimal::from(150));
    let ssd = Node::part("1TB SSD", Decimal::from(200));

    let motherboard = Assembly::new("Motherboard");
    motherboard.add_child(cpu.clone())?;
    motherboard.add_child(ram)?;

    let computer = Assembly::new("Gaming Computer");
    computer.add_child(&motherboard)?;
    computer.add_child(ssd)?;
    computer.add_mandatory(cpu);

    Ok(computer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Component, DefaultPolicy};

    #[test]
    fn given_sample_when_validating_then_valid_with_total() {
        let computer = gaming_computer().unwrap();

        let report = computer.validate(&DefaultPolicy::default());

        assert!(report.is_valid());
        assert_eq!(computer.calculate_price(), Decimal::from(850));
    }
}
