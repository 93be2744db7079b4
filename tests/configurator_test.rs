//! Tests for ConfiguratorService against the built-in sample product

use rust_decimal::Decimal;

use prodconf::application::sample::gaming_computer;
use prodconf::application::ConfiguratorService;
use prodconf::config::Settings;
use prodconf::domain::{Component, Node};
use prodconf::util::testing::init_test_setup;

fn sample() -> Node {
    Node::Assembly(gaming_computer().expect("sample builds"))
}

#[test]
fn given_default_settings_when_checking_sample_then_valid_with_total() {
    // Arrange
    init_test_setup();
    let service = ConfiguratorService::new(Settings::default());

    // Act
    let verdict = service.check(&sample());

    // Assert
    assert!(verdict.valid);
    assert_eq!(verdict.total, Decimal::from(850));
    assert_eq!(
        verdict.lines(),
        vec!["Configuration is valid.", "Total Price: $850"]
    );
}

#[test]
fn given_high_minimum_when_checking_sample_then_every_node_reported_in_order() {
    // Arrange
    let mut settings = Settings::default();
    settings.policy.minimum_price = Decimal::from(1000);
    let service = ConfiguratorService::new(settings);

    // Act
    let verdict = service.check(&sample());

    // Assert
    assert!(!verdict.valid);
    assert_eq!(
        verdict.lines(),
        vec![
            "Configuration is invalid:",
            "- Composite 'Gaming Computer' is invalid due to price constraints.",
            "- Composite 'Motherboard' is invalid due to price constraints.",
            "- Component 'Intel i9 CPU' is invalid due to price constraints.",
            "- Component '16GB RAM' is invalid due to price constraints.",
            "- Component '1TB SSD' is invalid due to price constraints.",
        ]
    );
}

#[test]
fn given_sample_with_cpu_removed_when_checking_then_mandatory_missing() {
    // Arrange
    let computer = gaming_computer().unwrap();
    let motherboard = computer.children()[0].clone();
    let cpu = motherboard.as_assembly().unwrap().children()[0].clone();
    motherboard.remove_child(&cpu).unwrap();
    let service = ConfiguratorService::new(Settings::default());

    // Act
    let verdict = service.check(&Node::Assembly(computer));

    // Assert
    assert!(!verdict.valid);
    assert_eq!(verdict.total, Decimal::from(350));
    assert_eq!(
        verdict.lines()[1],
        "- Composite 'Gaming Computer' is missing mandatory component 'Intel i9 CPU'."
    );
}

#[test]
fn given_sample_when_rendering_then_tree_lists_all_parts() {
    // Arrange
    let service = ConfiguratorService::new(Settings::default());

    // Act
    let rendered = service.render(&sample()).to_string();

    // Assert
    assert!(rendered.starts_with("Gaming Computer ($850)\n"));
    assert!(rendered.contains("Motherboard ($650)"));
    assert!(rendered.contains("Intel i9 CPU ($500)"));
    assert!(rendered.contains("1TB SSD ($200)"));
}
