/**
Specifications for the type of [Graph](./struct.Graph.html) being created
and how various situations involving the addition of edges are handled.

Unlike the teacher crate this is adapted from, `GraphSpecs` has no `directed`
flag: this crate's graphs are always undirected, since directed graphs are
explicitly out of scope for the community-detection algorithms built on top
of it.

# Example

```
use commstatus::GraphSpecs;
let specs = GraphSpecs::undirected();
```
*/
#[derive(Clone)]
pub struct GraphSpecs {
    /// Determines what happens if duplicate or redundant edges are added to a [Graph](./struct.Graph.html).
    pub edge_dedupe_strategy: EdgeDedupeStrategy,
    /// Determines if a [Graph](./struct.Graph.html) supports multiple edges between the same pair of nodes.
    pub multi_edges: bool,
    /// Determines if a [Graph](./struct.Graph.html) allows an [Edge](./struct.Edge.html) that starts and ends on the
    /// same [Node](./struct.Node.html).
    pub self_loops: bool,
    /// Determines what happens if a self-loop is added to a [Graph](./struct.Graph.html) that doesn't support them.
    pub self_loops_false_strategy: SelfLoopsFalseStrategy,
}

/**
Specifies options for a situation where a duplicate edge is being added to a [Graph](./struct.Graph.html).

`Error`: return an `Error`.

`KeepFirst`: keep the first (original) [Edge](./struct.Edge.html) and discard the one being added.

`KeepLast`: discard the first (original) [Edge](./struct.Edge.html) and keep the one being added.

`Sum`: sum the weights of the duplicate edges into a single edge.
*/
#[derive(Clone, PartialEq)]
pub enum EdgeDedupeStrategy {
    Error,
    KeepFirst,
    KeepLast,
    Sum,
}

/**
Specifies options for a situation where an [Edge](./struct.Edge.html) that starts and ends on the same [Node](./struct.Node.html) is
being added to a [Graph](./struct.Graph.html) but the [Graph](./struct.Graph.html) doesn't support self-loops.

`Error`: return an `Error`.

`Drop`: drop the self-loop edge.
*/
#[derive(Clone, PartialEq)]
pub enum SelfLoopsFalseStrategy {
    Error,
    Drop,
}

const DEFAULT_GRAPH_SPECS: GraphSpecs = GraphSpecs {
    edge_dedupe_strategy: EdgeDedupeStrategy::Sum,
    multi_edges: false,
    self_loops: true,
    self_loops_false_strategy: SelfLoopsFalseStrategy::Error,
};

impl GraphSpecs {
    /**
    Returns the default `GraphSpecs` for an undirected, simple (no multi-edges) graph
    that allows self-loops, summing the weights of any duplicate edges.

    # Examples

    ```
    use commstatus::GraphSpecs;
    let specs = GraphSpecs::undirected();
    ```
    */
    pub fn undirected() -> GraphSpecs {
        DEFAULT_GRAPH_SPECS
    }

    /**
    Returns the specifications for an undirected multigraph: multiple edges between the
    same pair of nodes are kept distinct rather than summed.

    # Examples

    ```
    use commstatus::GraphSpecs;
    let specs = GraphSpecs::multi_undirected();
    ```
    */
    pub fn multi_undirected() -> GraphSpecs {
        GraphSpecs {
            multi_edges: true,
            ..DEFAULT_GRAPH_SPECS
        }
    }
}
