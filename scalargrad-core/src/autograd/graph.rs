use crate::ops::traits::Scalar;
use crate::value::{Value, ValueData};
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a graph node: the address of its shared payload.
/// `Value` handles are cheap clones, so the handle address is meaningless;
/// the payload address is unique per node and survives cloning.
pub(crate) type NodeId<T> = *const RefCell<ValueData<T>>;

/// Post-order topological sort of the operand DAG reachable from `root`.
///
/// Operands are appended before their consumers, and a node reachable via
/// multiple paths (diamond dependencies) is appended exactly once. The
/// reversed order is therefore safe for gradient propagation: every consumer
/// of a node is processed before the node itself.
pub(crate) fn topological_sort<T: Scalar>(root: &Value<T>) -> Vec<Value<T>> {
    let mut visited = HashSet::new();
    let mut sorted = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    log::trace!("topological_sort: {} reachable nodes", sorted.len());
    sorted
}

fn build_topo<T: Scalar>(
    node: &Value<T>,
    visited: &mut HashSet<NodeId<T>>,
    sorted: &mut Vec<Value<T>>,
) {
    if !visited.insert(node.node_id()) {
        return;
    }
    if let Some(grad_fn) = node.grad_fn() {
        for input in grad_fn.inputs() {
            build_topo(&input, visited, sorted);
        }
    }
    sorted.push(node.clone());
}
