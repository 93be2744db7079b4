/*
Rendering of product trees as `termtree::Tree<String>` for display.

Labels read `<name> ($<price>)`; a trailing `*` marks children whose name the
parent declares mandatory.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Assembly, Component, Node};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(component: &dyn Component, mandatory: bool) -> String {
    let marker = if mandatory { " *" } else { "" };
    format!(
        "{} (${}){}",
        component.name(),
        component.calculate_price(),
        marker
    )
}

fn build_tree(node: &Node, mandatory: bool) -> Tree<String> {
    match node {
        Node::Part(part) => Tree::new(label(&**part, mandatory)),
        Node::Assembly(assembly) => build_assembly(assembly, mandatory),
    }
}

fn build_assembly(assembly: &Assembly, mandatory: bool) -> Tree<String> {
    let required = assembly.mandatory_names();
    let leaves: Vec<_> = assembly
        .children()
        .iter()
        .map(|child| build_tree(child, required.iter().any(|n| n == child.name())))
        .collect();

    Tree::new(label(assembly, mandatory)).with_leaves(leaves)
}

impl TreeNodeConvert for Node {
    #[instrument(level = "debug", skip(self), fields(root = %self.name()))]
    fn to_tree_string(&self) -> Tree<String> {
        build_tree(self, false)
    }
}

impl TreeNodeConvert for Assembly {
    #[instrument(level = "debug", skip(self), fields(root = %self.name()))]
    fn to_tree_string(&self) -> Tree<String> {
        build_assembly(self, false)
    }
}
