use crate::{Error, ErrorKind, Graph};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Canonicalizes community labels in `partition` to a dense `0..k` range, assigning new ids in
/// first-seen order.
pub fn renumber(partition: &[usize]) -> Vec<usize> {
    let mut mapping: HashMap<usize, usize> = HashMap::new();
    let mut next = 0usize;
    partition
        .iter()
        .map(|&c| {
            *mapping.entry(c).or_insert_with(|| {
                let id = next;
                next += 1;
                id
            })
        })
        .collect()
}

/// Returns `true` if `partition` assigns a community to every vertex of `graph`.
pub fn is_partition<T, A>(graph: &Graph<T, A>, partition: &HashMap<T, usize>) -> bool
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    graph.get_all_nodes().iter().all(|n| partition.contains_key(&n.name))
}

/**
Computes the classical (degree-corrected planted-partition-style) modularity of `partition` over
`graph`, at `resolution` (the `γ` in `Σ_c (I_c/E − γ (D_c/2E)²)`).

Returns `ErrorKind::NoLinks` for an edgeless graph and `ErrorKind::NotAPartition` if any vertex of
`graph` is missing from `partition`.
*/
pub fn modularity<T, A>(graph: &Graph<T, A>, partition: &HashMap<T, usize>, resolution: f64) -> Result<f64, Error>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let total_weight = graph.size();
    if total_weight <= 0.0 {
        return Err(Error {
            kind: ErrorKind::NoLinks,
            message: "modularity is undefined for a graph with no edges".to_string(),
        });
    }

    let n = graph.number_of_nodes();
    let mut labels = Vec::with_capacity(n);
    for node in graph.get_all_nodes() {
        let label = partition.get(&node.name).ok_or_else(|| Error {
            kind: ErrorKind::NotAPartition,
            message: format!("vertex {} is missing from the partition", node.name),
        })?;
        labels.push(*label);
    }
    let renumbered = renumber(&labels);
    let k = renumbered.iter().copied().max().map(|m| m + 1).unwrap_or(0);

    let mut degrees = vec![0.0; k];
    let mut internals = vec![0.0; k];
    for v in 0..n {
        let com = renumbered[v];
        degrees[com] += graph.weighted_degree_by_index(v);
        internals[com] += graph.self_loop_weight_by_index(v);
        for (nb, w) in graph.neighbor_weights_by_index(v) {
            if nb > v && renumbered[nb] == com {
                internals[com] += w;
            }
        }
    }

    let two_e = 2.0 * total_weight;
    let mut result = 0.0;
    for c in 0..k {
        let d = degrees[c] / two_e;
        result += internals[c] / total_weight - resolution * d * d;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use crate::generators::two_disjoint_triangles;

    #[test]
    fn renumber_assigns_dense_first_seen_ids() {
        assert_eq!(renumber(&[5, 5, 2, 2, 9]), vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn two_triangles_partition_has_modularity_one_half() {
        let graph = two_disjoint_triangles();
        let mut partition = HashMap::new();
        for v in 0..3 {
            partition.insert(v, 0);
        }
        for v in 3..6 {
            partition.insert(v, 1);
        }
        let m = modularity(&graph, &partition, 1.0).unwrap();
        assert_approx_eq!(m, 0.5);
    }

    #[test]
    fn missing_vertex_is_rejected() {
        let graph = two_disjoint_triangles();
        let mut partition = HashMap::new();
        partition.insert(0, 0);
        let err = modularity(&graph, &partition, 1.0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotAPartition);
    }
}
