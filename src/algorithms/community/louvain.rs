use super::objective::{full_value, Model};
use super::one_level::one_level;
use super::partitions::renumber;
use super::status::{Provenance, Status, EPSILON};
use crate::{Edge, Error, ErrorKind, Graph, GraphSpecs, Node};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/**
Builds the induced (contracted) graph for `partition`: one node per distinct community label in
`partition`, with an edge `(a, b)` carrying the sum of weights of all edges `(u, v)` of `graph`
such that `partition[u] == a` and `partition[v] == b`. Self-loops arise from intra-community
edges and are preserved.

`partition` must already be dense, i.e. its values span `0..k` with no gaps (see [`renumber`]).
*/
pub fn induced_graph<T, A>(partition: &[usize], graph: &Graph<T, A>) -> Graph<usize, ()>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let k = partition.iter().copied().max().map(|m| m + 1).unwrap_or(0);
    let mut new_graph = Graph::new(GraphSpecs::undirected());
    for j in 0..k {
        new_graph.add_node(Node::from_name(j));
    }
    for v in 0..graph.number_of_nodes() {
        let a = partition[v];
        let loop_weight = graph.self_loop_weight_by_index(v);
        if loop_weight > 0.0 {
            new_graph
                .add_edge(Edge::with_weight(a, a, loop_weight))
                .expect("positive self-loop weight cannot be rejected");
        }
        for (nb, w) in graph.neighbor_weights_by_index(v) {
            if nb > v {
                let b = partition[nb];
                new_graph
                    .add_edge(Edge::with_weight(a, b, w))
                    .expect("positive edge weight cannot be rejected");
            }
        }
    }
    new_graph
}

fn compose_provenance(previous: &Provenance, renumbered: &[usize]) -> Provenance {
    let rawnode2node: Vec<usize> = previous
        .rawnode2node
        .iter()
        .map(|&old_node| renumbered[old_node])
        .collect();
    let k = renumbered.iter().copied().max().map(|m| m + 1).unwrap_or(0);
    let mut node2size = vec![0usize; k];
    for &j in &rawnode2node {
        node2size[j] += 1;
    }
    Provenance {
        rawnode2node,
        rawnode2degree: previous.rawnode2degree.clone(),
        node2size,
    }
}

/**
Builds the full dendrogram for `graph` under `model`: a sequence of partitions `[P0, P1, …]`
where the domain of `P0` is `graph`'s own vertex set (in dense node-index order) and the domain
of `Pi+1` is the codomain of `Pi`, per the multi-level driver in the design notes.

An edgeless graph short-circuits to the trivial one-node-per-community partition.
*/
pub fn generate_dendrogram<T, A>(
    graph: &Graph<T, A>,
    model: Model,
    randomize: bool,
    seed: Option<u64>,
) -> Vec<Vec<usize>>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    if graph.number_of_nodes() == 0 || graph.size() <= 0.0 {
        return vec![(0..graph.number_of_nodes()).collect()];
    }

    let mut status = Status::new(graph, Provenance::identity(graph));
    one_level(graph, &mut status, model, randomize, seed);
    let mut cur_mod = full_value(&status, model);

    let renumbered0 = renumber(&status.node2com);
    let mut levels = vec![renumbered0.clone()];
    let mut provenance = compose_provenance(&Provenance::identity(graph), &renumbered0);
    let mut cur_graph = induced_graph(&renumbered0, graph);

    loop {
        let mut next_status = Status::new(&cur_graph, provenance.clone());
        one_level(&cur_graph, &mut next_status, model, randomize, seed);
        let new_mod = full_value(&next_status, model);
        if new_mod - cur_mod < EPSILON {
            break;
        }
        cur_mod = new_mod;

        let renumbered = renumber(&next_status.node2com);
        let next_graph = induced_graph(&renumbered, &cur_graph);
        provenance = compose_provenance(&provenance, &renumbered);
        levels.push(renumbered);
        cur_graph = next_graph;
    }

    levels
}

/// Returns the partition at `level` of `dendrogram`, composing `dendrogram[0..=level]` per the
/// definition of lifting through a dendrogram.
pub fn partition_at_level(dendrogram: &[Vec<usize>], level: usize) -> Vec<usize> {
    let mut partition = dendrogram[0].clone();
    for level_map in &dendrogram[1..=level] {
        partition = partition.iter().map(|&node| level_map[node]).collect();
    }
    partition
}

/**
Runs the full multi-level heuristic and returns the best partition found, as a mapping from
vertex name to community id, renumbered to a dense `0..k` range.
*/
pub fn best_partition<T, A>(
    graph: &Graph<T, A>,
    model: Model,
    randomize: bool,
    seed: Option<u64>,
) -> Result<HashMap<T, usize>, Error>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let dendrogram = generate_dendrogram(graph, model, randomize, seed);
    if dendrogram.is_empty() {
        return Err(Error {
            kind: ErrorKind::NoPartitions,
            message: "no partitions were produced".to_string(),
        });
    }
    let final_partition = partition_at_level(&dendrogram, dendrogram.len() - 1);
    let renumbered = renumber(&final_partition);

    let mut result = HashMap::with_capacity(graph.number_of_nodes());
    for node in graph.get_all_nodes() {
        let index = graph.get_node_index(&node.name)?;
        result.insert(node.name.clone(), renumbered[index]);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use crate::generators::two_disjoint_triangles;

    #[test]
    fn two_triangles_converge_to_two_communities() {
        let graph = two_disjoint_triangles();
        let partition = best_partition(&graph, Model::Dcppm { gamma: 1.0 }, false, None).unwrap();
        assert_eq!(partition[&0], partition[&1]);
        assert_eq!(partition[&1], partition[&2]);
        assert_eq!(partition[&3], partition[&4]);
        assert_eq!(partition[&4], partition[&5]);
        assert_ne!(partition[&0], partition[&3]);
    }

    #[test]
    fn induced_graph_preserves_total_weight() {
        let graph = two_disjoint_triangles();
        let partition: Vec<usize> = (0..graph.number_of_nodes())
            .map(|v| if v < 3 { 0 } else { 1 })
            .collect();
        let contracted = induced_graph(&partition, &graph);
        assert_approx_eq!(contracted.size(), graph.size());
    }

    #[test]
    fn edgeless_graph_yields_one_trivial_level() {
        let graph = Graph::<i32, ()>::new_from_nodes_and_edges(
            vec![Node::from_name(0), Node::from_name(1)],
            vec![],
            GraphSpecs::undirected(),
        )
        .unwrap();
        let dendrogram = generate_dendrogram(&graph, Model::Dcppm { gamma: 1.0 }, false, None);
        assert_eq!(dendrogram.len(), 1);
        assert_eq!(dendrogram[0], vec![0, 1]);
    }
}
