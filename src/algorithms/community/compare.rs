use crate::{Error, ErrorKind};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Rand index, Jaccard index and normalized mutual information between two partitions of the
/// same vertex set, as returned by [`compare_partitions`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartitionComparison {
    pub rand: f64,
    pub jaccard: f64,
    pub nmi: f64,
}

fn blocks<T: Hash + Eq + Clone>(partition: &HashMap<T, usize>) -> Vec<HashSet<T>> {
    let mut grouped: HashMap<usize, HashSet<T>> = HashMap::new();
    for (node, &com) in partition {
        grouped.entry(com).or_default().insert(node.clone());
    }
    grouped.into_values().collect()
}

/**
Compares two partitions `p1` and `p2` of the same vertex set, returning the Rand index, the
Jaccard index, and the normalized mutual information (natural log, computed from the exact
contingency table rather than a sampling approximation — see the design notes on this
deliberate deviation from the historical reference).

Rejects with `ErrorKind::NotAPartition` if the two partitions do not share the same vertex set.
*/
pub fn compare_partitions<T: Hash + Eq + Clone>(
    p1: &HashMap<T, usize>,
    p2: &HashMap<T, usize>,
) -> Result<PartitionComparison, Error> {
    if p1.len() != p2.len() || p1.keys().any(|k| !p2.contains_key(k)) {
        return Err(Error {
            kind: ErrorKind::NotAPartition,
            message: "the two partitions do not share the same vertex set".to_string(),
        });
    }

    let n = p1.len() as f64;
    let p1_blocks = blocks(p1);
    let p2_blocks = blocks(p2);

    // Pair counts follow the standard cluster-agreement convention: a00/a11 count *vertex
    // pairs* that agree/disagree in both partitions, via C(n, 2) over block intersections —
    // not a sum of squared intersection sizes, which double-counts ordered (and self-) pairs
    // and yields a different ratio.
    let choose2 = |x: f64| x * (x - 1.0) / 2.0;

    let mut same_in_both = 0.0;
    let mut mutual_information = 0.0;
    for s1 in &p1_blocks {
        for s2 in &p2_blocks {
            let common = s1.intersection(s2).count() as f64;
            same_in_both += choose2(common);

            if common > 0.0 {
                let p_xy = common / n;
                let p_x = s1.len() as f64 / n;
                let p_y = s2.len() as f64 / n;
                mutual_information += p_xy * (p_xy / (p_x * p_y)).ln();
            }
        }
    }

    let same_in_p1: f64 = p1_blocks.iter().map(|s| choose2(s.len() as f64)).sum();
    let same_in_p2: f64 = p2_blocks.iter().map(|s| choose2(s.len() as f64)).sum();
    let total_pairs = choose2(n);

    let a00 = same_in_both;
    let a01 = same_in_p1 - same_in_both;
    let a10 = same_in_p2 - same_in_both;
    let a11 = total_pairs - a00 - a01 - a10;

    let entropy = |blocks: &[HashSet<T>]| -> f64 {
        -blocks
            .iter()
            .map(|s| s.len() as f64 / n)
            .filter(|&p| p > 0.0)
            .map(|p| p * p.ln())
            .sum::<f64>()
    };
    let h1 = entropy(&p1_blocks);
    let h2 = entropy(&p2_blocks);

    let nmi = if h1 == 0.0 || h2 == 0.0 {
        -1.0
    } else {
        mutual_information / (h1 * h2).sqrt()
    };

    let rand = (a00 + a11) / (a00 + a01 + a10 + a11);
    let jaccard = a00 / (a00 + a01 + a10);

    Ok(PartitionComparison { rand, jaccard, nmi })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn identical_partitions_are_perfectly_similar() {
        let mut p = HashMap::new();
        p.insert("a", 0);
        p.insert("b", 0);
        p.insert("c", 1);
        p.insert("d", 1);
        let result = compare_partitions(&p, &p).unwrap();
        assert_approx_eq!(result.rand, 1.0);
        assert_approx_eq!(result.jaccard, 1.0);
        assert_approx_eq!(result.nmi, 1.0);
    }

    #[test]
    fn worked_example_from_the_design_notes() {
        let mut p1 = HashMap::new();
        p1.insert("a", 0);
        p1.insert("b", 0);
        p1.insert("c", 1);
        p1.insert("d", 1);
        let mut p2 = HashMap::new();
        p2.insert("a", 0);
        p2.insert("b", 1);
        p2.insert("c", 0);
        p2.insert("d", 1);

        let result = compare_partitions(&p1, &p2).unwrap();
        assert_approx_eq!(result.rand, 1.0 / 3.0);
        assert_approx_eq!(result.jaccard, 0.0);
        assert_approx_eq!(result.nmi, 0.0);
    }

    #[test]
    fn mismatched_vertex_sets_are_rejected() {
        let mut p1 = HashMap::new();
        p1.insert("a", 0);
        let mut p2 = HashMap::new();
        p2.insert("b", 0);
        assert_eq!(compare_partitions(&p1, &p2).unwrap_err().kind, ErrorKind::NotAPartition);
    }
}
