use super::Graph;
use std::fmt::Display;
use std::hash::Hash;

impl<T, A> Graph<T, A>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    /// Returns the weighted degree of node index `index`: the sum of incident edge weights,
    /// with a self-loop counted *twice* (matching the convention used throughout the
    /// community-detection bookkeeping, where a self-loop contributes to both endpoints
    /// of its own "edge").
    pub fn weighted_degree_by_index(&self, index: usize) -> f64 {
        let neighbor_sum: f64 = self.adjacency[index].values().sum();
        neighbor_sum + 2.0 * self.self_loop_weight[index]
    }

    /// Returns the weighted degree of every node index, in index order.
    pub fn get_weighted_degree_for_all_node_indexes(&self) -> Vec<f64> {
        (0..self.nodes_vec.len())
            .map(|idx| self.weighted_degree_by_index(idx))
            .collect()
    }

    /// Returns the total edge weight of the graph (`m`): each non-loop edge counted once,
    /// each self-loop counted once. This is half of the sum of all weighted degrees.
    pub fn size(&self) -> f64 {
        let mut total = 0.0;
        for idx in 0..self.nodes_vec.len() {
            total += self.adjacency[idx].values().sum::<f64>() / 2.0;
            total += self.self_loop_weight[idx];
        }
        total
    }
}
