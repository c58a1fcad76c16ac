/*!
Small, deterministic graph fixtures used throughout this crate's tests and
useful as worked examples for callers exploring the community-detection
algorithms.
*/
use crate::{Edge, Graph, GraphSpecs};

/**
Generates two disjoint triangles: nodes `0, 1, 2` form a complete triangle,
as do nodes `3, 4, 5`, with no edges between the two groups. Every edge has
weight `1.0`.

The ideal partition is unambiguous — `{0, 1, 2}` and `{3, 4, 5}` — which
makes this fixture useful for sanity-checking that a detection run recovers
the planted structure.

```
use commstatus::generators::two_disjoint_triangles;
let graph = two_disjoint_triangles();
assert_eq!(graph.number_of_nodes(), 6);
assert_eq!(graph.number_of_edges(), 6);
```
*/
pub fn two_disjoint_triangles() -> Graph<i32, ()> {
    let edges = vec![
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(0, 2),
        Edge::new(3, 4),
        Edge::new(4, 5),
        Edge::new(3, 5),
    ];
    Graph::new_from_nodes_and_edges(vec![], edges, GraphSpecs::undirected()).unwrap()
}

/**
Generates a ring of `num_nodes` nodes (each connected to its two immediate
neighbors on the ring) plus `num_chords` additional "chord" edges connecting
node `i` to node `i + num_nodes / 2` (mod `num_nodes`), for `i` in
`0..num_chords`. Every edge has weight `1.0`.

Unlike [`two_disjoint_triangles`], this fixture has no single obviously
correct partition, which makes it useful for exercising the multi-level
driver across several contraction rounds.

```
use commstatus::generators::ring_with_chords;
let graph = ring_with_chords(12, 3);
assert_eq!(graph.number_of_nodes(), 12);
assert_eq!(graph.number_of_edges(), 15);
```
*/
pub fn ring_with_chords(num_nodes: i32, num_chords: i32) -> Graph<i32, ()> {
    let mut edges = Vec::new();
    for i in 0..num_nodes {
        edges.push(Edge::new(i, (i + 1) % num_nodes));
    }
    for i in 0..num_chords.min(num_nodes) {
        let j = (i + num_nodes / 2) % num_nodes;
        if i != j {
            edges.push(Edge::new(i, j));
        }
    }
    Graph::new_from_nodes_and_edges(vec![], edges, GraphSpecs::undirected()).unwrap()
}
