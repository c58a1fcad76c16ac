use crate::{Edge, GraphSpecs, Node};
use nohash::IntMap;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

mod creation;
mod degree;
mod query;

/**
An undirected, optionally weighted, optionally multi-edge graph with self-loop support.

A `Graph` has two generic arguments:
* `T`: the type used for node names (vertex labels). Must be hashable, orderable, cloneable and
  displayable, matching the bounds the community-detection algorithms require.
* `A`: the type used for node and edge attributes. Attributes are *optional* extra data
  associated with a node or an edge.

Internally every node is assigned a dense `usize` index; adjacency is cached as an index-keyed
weight map so that neighbor-weight lookups during a local-move sweep are O(1) rather than O(log n).

# Example

```
use commstatus::{Edge, Graph, GraphSpecs, Node};

let nodes = vec![
    Node::from_name("n1"),
    Node::from_name("n2"),
    Node::from_name("n3"),
];

let edges = vec![
    Edge::with_weight("n1", "n2", 1.0),
    Edge::with_weight("n2", "n3", 2.0),
];

let graph = Graph::<&str, ()>::new_from_nodes_and_edges(nodes, edges, GraphSpecs::undirected()).unwrap();
assert_eq!(graph.number_of_nodes(), 3);
```
*/
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph<T, A>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    pub(crate) nodes_map: HashMap<T, usize>,
    pub(crate) nodes_vec: Vec<Node<T, A>>,
    /// All edges as added, in insertion order; may contain parallel edges when `specs.multi_edges`.
    pub(crate) edges_vec: Vec<Edge<T, A>>,
    /// Per-node-index aggregated neighbor weight (sum over all parallel edges), excluding self-loops.
    pub(crate) adjacency: Vec<IntMap<usize, f64>>,
    /// Per-node-index self-loop weight (0.0 if none).
    pub(crate) self_loop_weight: Vec<f64>,
    pub specs: GraphSpecs,
}
