use crate::Graph;
use std::fmt::Display;
use std::hash::Hash;

/// Numerical floor applied to every log argument and to every clamped parameter.
pub const EPSILON: f64 = 1e-7;

/**
Provenance and size bookkeeping carried from one level of the dendrogram into the next, so a
freshly contracted graph's [`Status`] can still answer questions about the *original* vertex set
(its raw unweighted degrees, and how many original vertices ended up in each current-graph node).
*/
#[derive(Clone)]
pub struct Provenance {
    /// For each original-graph vertex, the current-graph node index it maps to.
    pub rawnode2node: Vec<usize>,
    /// Unweighted degree of each original-graph vertex (constant across all levels).
    pub rawnode2degree: Vec<f64>,
    /// Number of original-graph vertices contracted into each current-graph node.
    pub node2size: Vec<usize>,
}

impl Provenance {
    /// Builds the level-0 provenance for `graph`: every node maps to itself, `node2size` is all
    /// `1`s, and raw degrees are the graph's own unweighted degrees.
    pub fn identity<T, A>(graph: &Graph<T, A>) -> Provenance
    where
        T: Hash + Eq + Clone + Ord + Display,
        A: Clone,
    {
        let n = graph.number_of_nodes();
        let rawnode2degree = (0..n)
            .map(|idx| {
                let base = graph.neighbor_weights_by_index(idx).count() as f64;
                let loop_bonus = if graph.self_loop_weight_by_index(idx) > 0.0 { 2.0 } else { 0.0 };
                base + loop_bonus
            })
            .collect();
        Provenance {
            rawnode2node: (0..n).collect(),
            rawnode2degree,
            node2size: vec![1; n],
        }
    }
}

/**
Bookkeeping over a (graph, partition) pair: every per-community and per-node aggregate the
objective functions need to evaluate a move without rescanning the whole graph.

Community identifiers are dense node indices of the *current* graph: the initial partition puts
every node in its own community (`node2com[v] == v`), and a local-move sweep only ever reassigns
nodes to a community that already exists as some node's initial label, so every `Vec` here is
sized to the current graph's node count and "absent" never arises.
*/
pub struct Status {
    pub total_weight: f64,
    pub node2com: Vec<usize>,
    pub degrees: Vec<f64>,
    pub gdegrees: Vec<f64>,
    pub internals: Vec<f64>,
    pub loops: Vec<f64>,
    pub rawnode2node: Vec<usize>,
    pub rawnode2degree: Vec<f64>,
    pub com2size: Vec<usize>,
    pub node2size: Vec<usize>,
}

impl Status {
    /// Builds a fresh `Status` for `graph`, with every node in its own singleton community, using
    /// `provenance` to carry raw-degree/size bookkeeping through from an earlier level (or
    /// [`Provenance::identity`] for the original, level-0 graph).
    pub fn new<T, A>(graph: &Graph<T, A>, provenance: Provenance) -> Status
    where
        T: Hash + Eq + Clone + Ord + Display,
        A: Clone,
    {
        let n = graph.number_of_nodes();
        let gdegrees = graph.get_weighted_degree_for_all_node_indexes();
        let loops: Vec<f64> = (0..n).map(|idx| graph.self_loop_weight_by_index(idx)).collect();
        let node2size = provenance.node2size.clone();
        Status {
            total_weight: graph.size(),
            node2com: (0..n).collect(),
            degrees: gdegrees.clone(),
            internals: loops.clone(),
            gdegrees,
            loops,
            rawnode2node: provenance.rawnode2node,
            rawnode2degree: provenance.rawnode2degree,
            com2size: node2size.clone(),
            node2size,
        }
    }

    /// Removes `v` from community `com`, where `k_v_to_com` is the sum of edge weights from `v`
    /// to other members of `com` (excluding `v`'s own self-loop). Leaves `v` unassigned: the
    /// caller must follow with [`Status::insert`] before relying on any invariant.
    pub fn remove(&mut self, v: usize, com: usize, k_v_to_com: f64) {
        self.degrees[com] -= self.gdegrees[v];
        self.internals[com] -= k_v_to_com + self.loops[v];
        self.com2size[com] -= self.node2size[v];
    }

    /// Inserts `v` into community `com`, the exact inverse of [`Status::remove`].
    pub fn insert(&mut self, v: usize, com: usize, k_v_to_com: f64) {
        self.node2com[v] = com;
        self.degrees[com] += self.gdegrees[v];
        self.internals[com] += k_v_to_com + self.loops[v];
        self.com2size[com] += self.node2size[v];
    }

    /// Returns `(total_weight, internal_weight, degree_sum_of_squares)` aggregated over the
    /// distinct communities currently in use.
    pub fn aggregate(&self) -> (f64, f64, f64) {
        let mut seen = vec![false; self.degrees.len()];
        let mut e_in = 0.0;
        let mut degrees_squared = 0.0;
        for &com in &self.node2com {
            if !seen[com] {
                seen[com] = true;
                e_in += self.internals[com];
                degrees_squared += self.degrees[com] * self.degrees[com];
            }
        }
        (self.total_weight, e_in, degrees_squared)
    }

    /// Returns `(sum_of_raw_degrees_squared, P2_in)` where `P2_in = Σ_c size_c (size_c − 1) / 2`
    /// over communities of the *original* vertex set (via `rawnode2node`/`node2com`).
    pub fn sumdc2_p2in(&self) -> (f64, f64) {
        let mut degree_by_com: Vec<f64> = vec![0.0; self.degrees.len()];
        let mut size_by_com: Vec<usize> = vec![0; self.degrees.len()];
        for (raw, &mapped) in self.rawnode2node.iter().enumerate() {
            let com = self.node2com[mapped];
            degree_by_com[com] += self.rawnode2degree[raw];
            size_by_com[com] += 1;
        }
        let mut sumdc2 = 0.0;
        let mut p2_in = 0.0;
        for (&d, &s) in degree_by_com.iter().zip(size_by_com.iter()) {
            sumdc2 += d * d;
            p2_in += (s * s.saturating_sub(1)) as f64 / 2.0;
        }
        (sumdc2, p2_in)
    }

    /// Sum of `d log d` over raw (original-graph) vertex degrees, for `d > 0`; constant across
    /// all levels of a single run.
    pub fn degree_log_degree(&self) -> f64 {
        self.rawnode2degree
            .iter()
            .filter(|&&d| d > 0.0)
            .map(|&d| d * d.ln())
            .sum()
    }
}

/// Clamps `x` to be at least [`EPSILON`], guarding a subsequent `ln()` call.
pub fn safe_log_arg(x: f64) -> f64 {
    x.max(EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use crate::generators::two_disjoint_triangles;

    #[test]
    fn new_status_is_all_singletons() {
        let graph = two_disjoint_triangles();
        let status = Status::new(&graph, Provenance::identity(&graph));
        assert_eq!(status.node2com, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(status.com2size, vec![1, 1, 1, 1, 1, 1]);
        let sum_degrees: f64 = status.degrees.iter().sum();
        assert_approx_eq!(sum_degrees, 2.0 * status.total_weight);
    }

    #[test]
    fn remove_insert_round_trip_preserves_degree_sum() {
        let graph = two_disjoint_triangles();
        let mut status = Status::new(&graph, Provenance::identity(&graph));
        let k_v_to_com = 1.0;
        status.remove(0, 0, k_v_to_com);
        status.insert(0, 1, k_v_to_com);
        let sum_degrees: f64 = status.degrees.iter().sum();
        assert_approx_eq!(sum_degrees, 2.0 * status.total_weight);
    }
}
