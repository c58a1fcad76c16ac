use super::objective::{full_value, Model};
use super::status::{safe_log_arg, Provenance, Status, EPSILON};
use crate::{Error, ErrorKind, Graph};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Optional overrides for the empirically-estimated within/between-community edge
/// probabilities used by [`estimate_gamma`] and [`model_log_likelihood`] for the PPM and DCPPM
/// objectives.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParameterOverrides {
    pub fixed_p_in: Option<f64>,
    pub fixed_p_out: Option<f64>,
}

fn status_from_partition<T, A>(graph: &Graph<T, A>, partition: &HashMap<T, usize>) -> Result<Status, Error>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let n = graph.number_of_nodes();
    let mut node2com = Vec::with_capacity(n);
    for node in graph.get_all_nodes() {
        let com = partition.get(&node.name).ok_or_else(|| Error {
            kind: ErrorKind::NotAPartition,
            message: format!("vertex {} is missing from the partition", node.name),
        })?;
        node2com.push(*com);
    }
    let renumbered = super::partitions::renumber(&node2com);
    let k = renumbered.iter().copied().max().map(|m| m + 1).unwrap_or(0);

    let mut status = Status::new(graph, Provenance::identity(graph));
    // Build degrees/internals/com2size directly from the target partition (same
    // intra-community-edge-counted-once pattern as partitions::modularity), rather than
    // replaying singleton->target moves: replaying visits each endpoint of an intra-community
    // edge independently and would add that edge's weight to `internals` twice.
    let mut degrees = vec![0.0; k];
    let mut internals = vec![0.0; k];
    let mut com2size = vec![0usize; k];
    for v in 0..n {
        let com = renumbered[v];
        degrees[com] += status.gdegrees[v];
        internals[com] += status.loops[v];
        com2size[com] += status.node2size[v];
        for (nb, w) in graph.neighbor_weights_by_index(v) {
            if nb > v && renumbered[nb] == com {
                internals[com] += w;
            }
        }
    }
    status.node2com = renumbered;
    status.degrees = degrees;
    status.internals = internals;
    status.com2size = com2size;
    Ok(status)
}

/// Sums of raw (empirical) within/between-community edge weight, for `dcppm`/`ppm` estimators.
fn es(status: &Status) -> (f64, f64, f64, f64) {
    let (e, e_in, degrees_squared) = status.aggregate();
    let e_out = e - e_in;
    (e, e_in, e_out, degrees_squared)
}

fn pin_pout(status: &Status) -> (f64, f64, f64, f64, f64) {
    let (e, e_in, e_out, degrees_squared) = es(status);
    let (sumdc2, _) = status.sumdc2_p2in();
    let p_in = 4.0 * e_in * e / sumdc2.max(EPSILON);
    let p_out = if e_out == 0.0 {
        EPSILON
    } else {
        4.0 * e_out * e / (4.0 * e * e - sumdc2).max(EPSILON)
    };
    (p_in, p_out, e, e_in, degrees_squared)
}

/// Closed-form `γ` estimate for `model` (`ppm` or `dcppm`) from `graph`/`partition`, per the
/// estimators in the design notes. `overrides` lets a caller pin `p_in`/`p_out` instead of
/// estimating them empirically.
pub fn estimate_gamma<T, A>(
    graph: &Graph<T, A>,
    partition: &HashMap<T, usize>,
    model: Model,
    overrides: ParameterOverrides,
) -> Result<f64, Error>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let status = status_from_partition(graph, partition)?;
    match model {
        Model::Dcppm { .. } => {
            let (mut p_in, mut p_out, ..) = pin_pout(&status);
            p_in = overrides.fixed_p_in.unwrap_or(p_in).max(EPSILON);
            p_out = overrides.fixed_p_out.unwrap_or(p_out).max(EPSILON);
            Ok((p_in - p_out) / (p_in.ln() - p_out.ln()))
        }
        _ => {
            let (e, e_in, e_out, _) = es(&status);
            let (_, p2_in) = status.sumdc2_p2in();
            let n = status.rawnode2node.len() as f64;
            let p2 = n * (n - 1.0) / 2.0;
            let p2_out = (p2 - p2_in).max(EPSILON);
            let p2_in = p2_in.max(EPSILON);
            let mut p_in = e_in / p2_in;
            let mut p_out = e_out / p2_out;
            if let Some(fixed) = overrides.fixed_p_in {
                p_in = fixed;
            }
            if let Some(fixed) = overrides.fixed_p_out {
                p_out = fixed;
            }
            p_in = if p_in == 0.0 { EPSILON } else { p_in };
            p_out = if p_out == 0.0 { EPSILON } else { p_out };
            Ok(p2 * (p_in - p_out) / (e * (p_in.ln() - p_out.ln())))
        }
    }
}

/// Closed-form `μ` estimate: the fraction of cross-community edge weight, `(E − E_in) / E`. For
/// `model == Ilfr`, additionally folds in a log-likelihood refinement term evaluated at
/// `current_mu` (or at this estimate, when no current value is supplied), mirroring the
/// historical `ilfr`-specific branch.
pub fn estimate_mu<T, A>(
    graph: &Graph<T, A>,
    partition: &HashMap<T, usize>,
    current_mu: Option<f64>,
    model: Option<Model>,
) -> Result<f64, Error>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let status = status_from_partition(graph, partition)?;
    let (e, _, e_out, _) = es(&status);

    if let Some(Model::Ilfr { .. }) = model {
        let mu = current_mu.unwrap_or(e_out / e.max(EPSILON)).max(EPSILON).min(1.0 - EPSILON);
        let two_e = 2.0 * e;
        let mut result = e_out * safe_log_arg(mu).ln();
        let mut seen = vec![false; status.degrees.len()];
        for &com in &status.node2com {
            if !seen[com] {
                seen[com] = true;
                let d = status.degrees[com];
                let in_degree = 2.0 * status.internals[com];
                if d > 0.0 {
                    result += in_degree * safe_log_arg((1.0 - mu) / d + mu / two_e).ln() / 2.0;
                }
            }
        }
        return Ok(result);
    }

    Ok(e_out / e.max(EPSILON))
}

/// The scalar log-likelihood-at-`mu` function an outer numerical search over `mu` would
/// maximize for the ILFR objective.
pub fn ilfr_mu_loglikelihood<T, A>(
    graph: &Graph<T, A>,
    partition: &HashMap<T, usize>,
    current_mu: f64,
) -> Result<f64, Error>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let status = status_from_partition(graph, partition)?;
    Ok(full_value(&status, Model::Ilfr { mu: current_mu }))
}

/// Evaluates the log-likelihood of `partition` under `model`, using empirically-estimated
/// parameters unless `overrides`/`fixed_mu` pin them.
pub fn model_log_likelihood<T, A>(
    graph: &Graph<T, A>,
    partition: &HashMap<T, usize>,
    model: Model,
    overrides: ParameterOverrides,
) -> Result<f64, Error>
where
    T: Hash + Eq + Clone + Ord + Display,
    A: Clone,
{
    let status = status_from_partition(graph, partition)?;
    match model {
        Model::Dcppm { .. } => {
            let (mut p_in, mut p_out, e, e_in, degrees_squared) = pin_pout(&status);
            p_in = overrides.fixed_p_in.unwrap_or(p_in).max(EPSILON);
            p_out = overrides.fixed_p_out.unwrap_or(p_out).max(EPSILON);
            let dld = status.degree_log_degree();
            let mut result = e_in * (p_in.ln() - p_out.ln());
            result -= (p_in - p_out) * degrees_squared / (4.0 * e);
            result += dld;
            result += e * p_out.ln();
            result -= e * p_out;
            result -= e * safe_log_arg(2.0 * e).ln();
            Ok(result)
        }
        Model::Ppm { gamma } => {
            let (e, e_in, e_out, _) = es(&status);
            let (_, p2_in) = status.sumdc2_p2in();
            let n = status.rawnode2node.len() as f64;
            let p2 = n * (n - 1.0) / 2.0;
            let p2_out = (p2 - p2_in).max(EPSILON);
            let p2_in = p2_in.max(EPSILON);
            let mut p_in = e_in / p2_in;
            let mut p_out = e_out / p2_out;
            let mut ext_mod = -e_out - e_in;
            if let Some(fixed) = overrides.fixed_p_in {
                p_in = fixed;
                ext_mod += e_in - p2_in * fixed;
            }
            if let Some(fixed) = overrides.fixed_p_out {
                p_out = fixed;
                ext_mod += e_out - p2_out * fixed;
            }
            if e_in > 0.0 {
                ext_mod += e_in * safe_log_arg(p_in).ln();
            }
            if e_out > 0.0 {
                ext_mod += e_out * safe_log_arg(p_out).ln();
            }
            let _ = gamma;
            Ok(ext_mod)
        }
        // `model` already carries the μ the caller wants evaluated at (the Powell-search use
        // case this function exists for); only fall back to the empirical estimate when the
        // caller has no opinion, signalled by a non-finite placeholder.
        Model::Ilfr { mu } | Model::Ilfrs { mu } if mu.is_finite() => Ok(full_value(&status, model)),
        Model::Ilfr { .. } | Model::Ilfrs { .. } => {
            let mu = estimate_mu(graph, partition, None, Some(model))?;
            let resolved = match model {
                Model::Ilfr { .. } => Model::Ilfr { mu },
                _ => Model::Ilfrs { mu },
            };
            Ok(full_value(&status, resolved))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use crate::generators::two_disjoint_triangles;

    #[test]
    fn estimate_gamma_for_two_perfect_triangles_is_large() {
        let graph = two_disjoint_triangles();
        let mut partition = HashMap::new();
        for v in 0..3 {
            partition.insert(v, 0);
        }
        for v in 3..6 {
            partition.insert(v, 1);
        }
        let gamma = estimate_gamma(&graph, &partition, Model::Dcppm { gamma: 1.0 }, ParameterOverrides::default()).unwrap();
        assert!(gamma.is_finite());
    }

    #[test]
    fn estimate_mu_is_zero_for_a_perfect_partition() {
        let graph = two_disjoint_triangles();
        let mut partition = HashMap::new();
        for v in 0..3 {
            partition.insert(v, 0);
        }
        for v in 3..6 {
            partition.insert(v, 1);
        }
        let mu = estimate_mu(&graph, &partition, None, None).unwrap();
        assert_approx_eq!(mu, 0.0);
    }
}
