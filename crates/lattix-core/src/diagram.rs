//! Node/edge extraction for lattice renderers.
//!
//! A renderer (plotting frontend, terminal diagram, web view) consumes the
//! lattice as a set of nodes and the recombination edges between them. This
//! module performs that walk once, backend-free, so every renderer applies
//! the same reachability rule instead of re-deriving it.

use serde::{Deserialize, Serialize};

use crate::lattice::PriceLattice;

/// A reachable node of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeNode {
    /// Time step of the node.
    pub step: usize,
    /// Number of down moves taken to reach the node.
    pub down_moves: usize,
    /// Asset price at the node.
    pub price: f64,
}

/// A directed edge from a node to one of its two successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeEdge {
    /// Source node as `(down_moves, step)`.
    pub from: (usize, usize),
    /// Target node as `(down_moves, step)`.
    pub to: (usize, usize),
}

/// The node and edge sets of a price lattice, ready for rendering.
///
/// Reachability is positional: node `(i, t)` exists iff `i <= t`. A price of
/// exactly zero (legitimate when the initial price is zero) does not remove
/// a node, and grid placeholders never become nodes. Every non-terminal node
/// `(i, t)` connects to its up successor `(i, t + 1)` and its down successor
/// `(i + 1, t + 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeDiagram {
    /// All reachable nodes, ordered by step, then by down-move count.
    pub nodes: Vec<LatticeNode>,
    /// All recombination edges, in node order.
    pub edges: Vec<LatticeEdge>,
}

impl LatticeDiagram {
    /// Walks the lattice and collects its nodes and edges.
    ///
    /// A lattice with `n` steps yields `(n + 1)(n + 2) / 2` nodes and
    /// `n(n + 1)` edges.
    #[must_use]
    pub fn from_lattice(lattice: &PriceLattice) -> Self {
        let n = lattice.step_count();
        let mut nodes = Vec::with_capacity((n + 1) * (n + 2) / 2);
        let mut edges = Vec::with_capacity(n * (n + 1));

        for t in 0..=n {
            for i in 0..=t {
                nodes.push(LatticeNode {
                    step: t,
                    down_moves: i,
                    price: lattice.price_at(i, t),
                });

                if t < n {
                    edges.push(LatticeEdge {
                        from: (i, t),
                        to: (i, t + 1),
                    });
                    edges.push(LatticeEdge {
                        from: (i, t),
                        to: (i + 1, t + 1),
                    });
                }
            }
        }

        Self { nodes, edges }
    }

    /// Number of reachable nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of recombination edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ModelParameters;
    use approx::assert_relative_eq;

    fn diagram(steps: i64) -> LatticeDiagram {
        let params = ModelParameters::new(4.0, 2.0, 0.5, 0.25, steps).unwrap();
        LatticeDiagram::from_lattice(&PriceLattice::generate(&params))
    }

    #[test]
    fn test_node_and_edge_counts() {
        let d = diagram(2);
        assert_eq!(d.node_count(), 6); // 1 + 2 + 3
        assert_eq!(d.edge_count(), 6); // 2 * (1 + 2)

        let d = diagram(5);
        assert_eq!(d.node_count(), 21);
        assert_eq!(d.edge_count(), 30);
    }

    #[test]
    fn test_edges_target_valid_successors() {
        let d = diagram(4);
        for edge in &d.edges {
            let (i, t) = edge.from;
            let (j, s) = edge.to;
            assert_eq!(s, t + 1);
            assert!(j == i || j == i + 1);
            assert!(i <= t && j <= s);
        }
    }

    #[test]
    fn test_terminal_nodes_emit_no_edges() {
        let d = diagram(3);
        assert!(d.edges.iter().all(|e| e.from.1 < 3));
    }

    #[test]
    fn test_root_node_price() {
        let d = diagram(2);
        let root = d.nodes[0];
        assert_eq!(root.step, 0);
        assert_eq!(root.down_moves, 0);
        assert_relative_eq!(root.price, 4.0);
    }

    #[test]
    fn test_zero_initial_price_keeps_all_nodes() {
        let params = ModelParameters::new(0.0, 2.0, 0.5, 0.25, 3).unwrap();
        let d = LatticeDiagram::from_lattice(&PriceLattice::generate(&params));

        // Zero prices are real nodes, not dropped placeholders.
        assert_eq!(d.node_count(), 10);
        assert!(d.nodes.iter().all(|node| node.price == 0.0));
        assert_eq!(d.edge_count(), 12);
    }

    #[test]
    fn test_single_node_lattice_has_no_edges() {
        let d = diagram(0);
        assert_eq!(d.node_count(), 1);
        assert_eq!(d.edge_count(), 0);
    }
}
