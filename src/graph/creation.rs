use super::Graph;
use crate::{Edge, EdgeDedupeStrategy, Error, ErrorKind, GraphSpecs, Node, SelfLoopsFalseStrategy};
use nohash::IntMap;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

impl<T, A> Graph<T, A>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    /**
    Creates an empty graph, according to `specs`.

    ```
    use commstatus::{Graph, GraphSpecs};
    let graph: Graph<&str, ()> = Graph::new(GraphSpecs::undirected());
    ```
    */
    pub fn new(specs: GraphSpecs) -> Graph<T, A> {
        Graph {
            nodes_map: HashMap::new(),
            nodes_vec: Vec::new(),
            edges_vec: Vec::new(),
            adjacency: Vec::new(),
            self_loop_weight: Vec::new(),
            specs,
        }
    }

    /**
    Creates a new `Graph` from the given `nodes` and `edges`. Edges that reference a node not
    present in `nodes` cause that node to be created implicitly.

    ```
    use commstatus::{Edge, Graph, GraphSpecs, Node};
    let nodes = vec![Node::from_name("n1"), Node::from_name("n2")];
    let edges = vec![Edge::with_weight("n1", "n2", 2.0)];
    let graph = Graph::<&str, ()>::new_from_nodes_and_edges(nodes, edges, GraphSpecs::undirected()).unwrap();
    assert_eq!(graph.number_of_edges(), 1);
    ```
    */
    pub fn new_from_nodes_and_edges(
        nodes: Vec<Node<T, A>>,
        edges: Vec<Edge<T, A>>,
        specs: GraphSpecs,
    ) -> Result<Graph<T, A>, Error> {
        let mut graph = Graph::new(specs);
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Adds a node to the graph, or replaces its attributes if it already exists.
    pub fn add_node(&mut self, node: Node<T, A>) {
        match self.nodes_map.get(&node.name) {
            Some(&idx) => self.nodes_vec[idx] = node,
            None => {
                let idx = self.nodes_vec.len();
                self.nodes_map.insert(node.name.clone(), idx);
                self.nodes_vec.push(node);
                self.adjacency.push(IntMap::default());
                self.self_loop_weight.push(0.0);
            }
        }
    }

    /// Adds an edge to the graph, creating any missing endpoint nodes.
    pub fn add_edge(&mut self, edge: Edge<T, A>) -> Result<(), Error> {
        if edge.weight <= 0.0 {
            return Err(Error {
                kind: ErrorKind::InvalidWeight,
                message: format!(
                    "edge ({}, {}) has a nonpositive weight ({})",
                    edge.u, edge.v, edge.weight
                ),
            });
        }

        let is_self_loop = edge.u == edge.v;
        if is_self_loop && !self.specs.self_loops {
            match self.specs.self_loops_false_strategy {
                SelfLoopsFalseStrategy::Error => {
                    return Err(Error {
                        kind: ErrorKind::SelfLoopsFound,
                        message: format!(
                            "edge ({}, {}) is a self-loop and specs.self_loops is false",
                            edge.u, edge.v
                        ),
                    });
                }
                SelfLoopsFalseStrategy::Drop => return Ok(()),
            }
        }

        if !self.nodes_map.contains_key(&edge.u) {
            self.add_node(Node::from_name(edge.u.clone()));
        }
        if !self.nodes_map.contains_key(&edge.v) {
            self.add_node(Node::from_name(edge.v.clone()));
        }
        let u_idx = self.nodes_map[&edge.u];
        let v_idx = self.nodes_map[&edge.v];

        if !self.specs.multi_edges && !is_self_loop && self.adjacency[u_idx].contains_key(&v_idx) {
            match self.specs.edge_dedupe_strategy {
                EdgeDedupeStrategy::Error => {
                    return Err(Error {
                        kind: ErrorKind::DuplicateEdge,
                        message: format!("a duplicate edge was found: {}", edge),
                    });
                }
                EdgeDedupeStrategy::KeepFirst => return Ok(()),
                EdgeDedupeStrategy::KeepLast => {
                    let old_weight = self.adjacency[u_idx][&v_idx];
                    self.adjust_adjacency(u_idx, v_idx, edge.weight - old_weight);
                }
                EdgeDedupeStrategy::Sum => self.adjust_adjacency(u_idx, v_idx, edge.weight),
            }
        } else if !self.specs.multi_edges
            && is_self_loop
            && self.self_loop_weight[u_idx] > 0.0
        {
            match self.specs.edge_dedupe_strategy {
                EdgeDedupeStrategy::Error => {
                    return Err(Error {
                        kind: ErrorKind::DuplicateEdge,
                        message: format!("a duplicate edge was found: {}", edge),
                    });
                }
                EdgeDedupeStrategy::KeepFirst => return Ok(()),
                EdgeDedupeStrategy::KeepLast => {
                    self.self_loop_weight[u_idx] = edge.weight;
                }
                EdgeDedupeStrategy::Sum => self.self_loop_weight[u_idx] += edge.weight,
            }
        } else if is_self_loop {
            self.self_loop_weight[u_idx] += edge.weight;
        } else {
            self.adjust_adjacency(u_idx, v_idx, edge.weight);
        }

        self.edges_vec.push(edge);
        Ok(())
    }

    /// Adds several edges in order; stops at the first error.
    pub fn add_edges(&mut self, edges: Vec<Edge<T, A>>) -> Result<(), Error> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    fn adjust_adjacency(&mut self, u_idx: usize, v_idx: usize, delta: f64) {
        *self.adjacency[u_idx].entry(v_idx).or_insert(0.0) += delta;
        if u_idx != v_idx {
            *self.adjacency[v_idx].entry(u_idx).or_insert(0.0) += delta;
        }
    }
}
