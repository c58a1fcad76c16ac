use super::Graph;
use crate::{Edge, Error, ErrorKind, Node};
use std::fmt::Display;
use std::hash::Hash;

impl<T, A> Graph<T, A>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    /// Returns all nodes, in index order.
    pub fn get_all_nodes(&self) -> Vec<&Node<T, A>> {
        self.nodes_vec.iter().collect()
    }

    /// Returns all edges, in insertion order. May contain parallel edges for multigraphs.
    pub fn get_all_edges(&self) -> Vec<&Edge<T, A>> {
        self.edges_vec.iter().collect()
    }

    /// Returns the number of nodes in the graph.
    pub fn number_of_nodes(&self) -> usize {
        self.nodes_vec.len()
    }

    /// Returns the number of edges as added (counts parallel edges separately).
    pub fn number_of_edges(&self) -> usize {
        self.edges_vec.len()
    }

    /// Looks up a node by name.
    pub fn get_node(&self, name: &T) -> Option<&Node<T, A>> {
        self.nodes_map.get(name).map(|&idx| &self.nodes_vec[idx])
    }

    /// Looks up a node by its dense internal index.
    pub fn get_node_by_index(&self, index: usize) -> Option<&Node<T, A>> {
        self.nodes_vec.get(index)
    }

    /// Returns the dense internal index assigned to a node name, if it exists.
    pub fn get_node_index(&self, name: &T) -> Result<usize, Error> {
        self.nodes_map.get(name).copied().ok_or_else(|| Error {
            kind: ErrorKind::NodeNotFound,
            message: format!("node {} not found", name),
        })
    }

    /// Returns the aggregated weight between two node names, summing parallel edges,
    /// or `None` if they are not adjacent. A self-loop query returns its stored weight.
    pub fn get_edge_weight(&self, u: &T, v: &T) -> Result<Option<f64>, Error> {
        let u_idx = self.get_node_index(u)?;
        let v_idx = self.get_node_index(v)?;
        if u_idx == v_idx {
            return Ok(match self.self_loop_weight[u_idx] {
                w if w > 0.0 => Some(w),
                _ => None,
            });
        }
        Ok(self.adjacency[u_idx].get(&v_idx).copied())
    }

    /// Returns `(neighbor_index, aggregated_weight)` pairs for node index `index`, excluding
    /// the node's own self-loop.
    pub fn neighbor_weights_by_index(&self, index: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency[index].iter().map(|(&k, &v)| (k, v))
    }

    /// Returns the self-loop weight attached to node index `index` (`0.0` if none).
    pub fn self_loop_weight_by_index(&self, index: usize) -> f64 {
        self.self_loop_weight[index]
    }

    fn edge_between<'a>(&'a self, u: &'a T, v: &'a T) -> impl Iterator<Item = &'a Edge<T, A>> {
        self.edges_vec
            .iter()
            .filter(move |e| (&e.u == u && &e.v == v) || (&e.u == v && &e.v == u))
    }

    /**
    Returns the single edge between `u` and `v`, for a non-multigraph.

    Use [`Graph::get_edges`] instead when `specs.multi_edges` is `true`.
    */
    pub fn get_edge(&self, u: &T, v: &T) -> Result<&Edge<T, A>, Error> {
        if self.specs.multi_edges {
            return Err(Error {
                kind: ErrorKind::WrongMethod,
                message: "use get_edges when specs.multi_edges is true".to_string(),
            });
        }
        self.get_node_index(u)?;
        self.get_node_index(v)?;
        self.edge_between(u, v).next().ok_or_else(|| Error {
            kind: ErrorKind::NoEdge,
            message: format!("no edge between {} and {}", u, v),
        })
    }

    /**
    Returns every parallel edge between `u` and `v`, for a multigraph.

    Use [`Graph::get_edge`] instead when `specs.multi_edges` is `false`.
    */
    pub fn get_edges(&self, u: &T, v: &T) -> Result<Vec<&Edge<T, A>>, Error> {
        if !self.specs.multi_edges {
            return Err(Error {
                kind: ErrorKind::WrongMethod,
                message: "use get_edge when specs.multi_edges is false".to_string(),
            });
        }
        self.get_node_index(u)?;
        self.get_node_index(v)?;
        let edges: Vec<&Edge<T, A>> = self.edge_between(u, v).collect();
        if edges.is_empty() {
            return Err(Error {
                kind: ErrorKind::NoEdge,
                message: format!("no edge between {} and {}", u, v),
            });
        }
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EdgeDedupeStrategy, GraphSpecs};

    #[test]
    fn get_edge_rejects_multigraphs() {
        let graph = Graph::<i32, ()>::new_from_nodes_and_edges(
            vec![],
            vec![Edge::new(0, 1)],
            GraphSpecs::multi_undirected(),
        )
        .unwrap();
        let err = graph.get_edge(&0, &1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::WrongMethod);
    }

    #[test]
    fn get_edges_returns_all_parallel_edges() {
        let mut specs = GraphSpecs::multi_undirected();
        specs.edge_dedupe_strategy = EdgeDedupeStrategy::Sum;
        let graph = Graph::<i32, ()>::new_from_nodes_and_edges(
            vec![],
            vec![Edge::new(0, 1), Edge::new(0, 1)],
            specs,
        )
        .unwrap();
        let edges = graph.get_edges(&0, &1).unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn get_edges_rejects_non_multigraphs() {
        let graph = Graph::<i32, ()>::new_from_nodes_and_edges(
            vec![],
            vec![Edge::new(0, 1)],
            GraphSpecs::undirected(),
        )
        .unwrap();
        let err = graph.get_edges(&0, &1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::WrongMethod);
    }

    #[test]
    fn no_edge_between_unconnected_nodes() {
        let graph = Graph::<i32, ()>::new_from_nodes_and_edges(
            vec![crate::Node::from_name(0), crate::Node::from_name(1)],
            vec![],
            GraphSpecs::undirected(),
        )
        .unwrap();
        let err = graph.get_edge(&0, &1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NoEdge);
    }
}
