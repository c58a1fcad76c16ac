use super::objective::{add_cost, full_value, remove_cost, Model};
use super::status::{Status, EPSILON};
use crate::Graph;
use nohash::IntMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt::Display;
use std::hash::Hash;

/// Returns a seeded PRNG when `seed` is given, or a default-seeded one when `randomize` is set
/// without a seed, mirroring the teacher's `get_rng` helper in `louvain.rs`.
fn get_rng(randomize: bool, seed: Option<u64>) -> Option<StdRng> {
    if !randomize {
        return None;
    }
    Some(match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    })
}

/**
Sweeps every node of `graph` (optionally in a shuffled order, per `randomize`/`seed`), relocating
each to whichever neighboring community yields the largest positive gain in `model`'s objective,
until a full pass makes no move or the objective's improvement falls below [`EPSILON`].

Mutates `status` in place; returns nothing, per the contract in the design notes this module
implements.
*/
pub fn one_level<T, A>(graph: &Graph<T, A>, status: &mut Status, model: Model, randomize: bool, seed: Option<u64>)
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let n = graph.number_of_nodes();
    let mut rng = get_rng(randomize, seed);

    let mut cur_value = full_value(status, model);
    let mut modified = true;
    while modified {
        modified = false;
        let mut order: Vec<usize> = (0..n).collect();
        if let Some(rng) = rng.as_mut() {
            order.shuffle(rng);
        }
        for v in order {
            let com_old = status.node2com[v];

            let mut neighbor_weights: IntMap<usize, f64> = IntMap::default();
            for (nb, w) in graph.neighbor_weights_by_index(v) {
                if nb != v {
                    *neighbor_weights.entry(status.node2com[nb]).or_insert(0.0) += w;
                }
            }
            let k_v_old = *neighbor_weights.get(&com_old).unwrap_or(&0.0);

            let remove_gain = remove_cost(status, model, v, com_old, k_v_old);
            status.remove(v, com_old, k_v_old);

            let mut candidates: Vec<(usize, f64)> =
                neighbor_weights.iter().map(|(&c, &w)| (c, w)).collect();
            if let Some(rng) = rng.as_mut() {
                candidates.shuffle(rng);
            }

            let mut best_com = com_old;
            let mut best_gain = 0.0;
            for (c, k_v_c) in candidates {
                let gain = add_cost(status, model, v, c, k_v_c) + remove_gain;
                if gain > best_gain {
                    best_gain = gain;
                    best_com = c;
                }
            }

            let k_v_best = *neighbor_weights.get(&best_com).unwrap_or(&0.0);
            status.insert(v, best_com, k_v_best);

            if best_com != com_old {
                modified = true;
            }
        }

        if modified {
            let new_value = full_value(status, model);
            if new_value - cur_value < EPSILON {
                break;
            }
            cur_value = new_value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::community::status::Provenance;
    use crate::generators::two_disjoint_triangles;

    #[test]
    fn sweeps_two_triangles_into_two_communities() {
        let graph = two_disjoint_triangles();
        let mut status = Status::new(&graph, Provenance::identity(&graph));
        one_level(&graph, &mut status, Model::Dcppm { gamma: 1.0 }, false, None);

        assert_eq!(status.node2com[0], status.node2com[1]);
        assert_eq!(status.node2com[1], status.node2com[2]);
        assert_eq!(status.node2com[3], status.node2com[4]);
        assert_eq!(status.node2com[4], status.node2com[5]);
        assert_ne!(status.node2com[0], status.node2com[3]);
    }

    #[test]
    fn sweep_never_decreases_the_objective() {
        let graph = two_disjoint_triangles();
        let mut status = Status::new(&graph, Provenance::identity(&graph));
        let before = full_value(&status, Model::Dcppm { gamma: 1.0 });
        one_level(&graph, &mut status, Model::Dcppm { gamma: 1.0 }, false, None);
        let after = full_value(&status, Model::Dcppm { gamma: 1.0 });
        assert!(after >= before - EPSILON);
    }
}
