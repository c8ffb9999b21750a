use std::hash::Hash;

/// Minimal search interface — provides neighbor enumeration.
pub trait Graph {
    /// Node identifier. Nodes are compared and hashed by value.
    type Node: Clone + Eq + Hash;

    /// Append neighbors of `node` into `buf`, in a deterministic order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);
}

/// Graph whose edges carry a movement cost.
///
/// The default implementation gives every edge unit cost, so unweighted
/// graphs opt in with an empty `impl`.
pub trait WeightedGraph: Graph {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, _from: &Self::Node, _to: &Self::Node) -> i32 {
        1
    }
}
