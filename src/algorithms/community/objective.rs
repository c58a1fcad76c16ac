use super::status::{safe_log_arg, Status, EPSILON};

/**
The objective function a community-detection run optimizes, tagged with its free parameter.

Matches the teacher's `QualityFunction` enum + `match`-dispatched `get_delta` pattern: rather than
a trait object, every hot-loop call site matches on this enum directly, keeping the per-node,
per-candidate inner loop of [`super::one_level::one_level`] monomorphic.
*/
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Model {
    /// Planted Partition Model: vertex-count nulls, resolution `gamma`.
    Ppm { gamma: f64 },
    /// Degree-Corrected Planted Partition Model (classical modularity), resolution `gamma`.
    Dcppm { gamma: f64 },
    /// Independent-LFR model (full), mixing parameter `mu`.
    Ilfr { mu: f64 },
    /// Independent-LFR model (symmetric/simplified), mixing parameter `mu`.
    Ilfrs { mu: f64 },
}

impl Model {
    /// Clamps this model's free parameter to its valid range: `[EPSILON, +inf)` for `gamma`,
    /// `[EPSILON, 1 - EPSILON]` for `mu`.
    pub fn clamped(self) -> Model {
        match self {
            Model::Ppm { gamma } => Model::Ppm { gamma: gamma.max(EPSILON) },
            Model::Dcppm { gamma } => Model::Dcppm { gamma: gamma.max(EPSILON) },
            Model::Ilfr { mu } => Model::Ilfr { mu: mu.max(EPSILON).min(1.0 - EPSILON) },
            Model::Ilfrs { mu } => Model::Ilfrs { mu: mu.max(EPSILON).min(1.0 - EPSILON) },
        }
    }
}

/// The full value of `model` over the communities currently recorded in `status`.
pub fn full_value(status: &Status, model: Model) -> f64 {
    let model = model.clamped();
    let (e, e_in, degrees_squared) = status.aggregate();
    match model {
        Model::Dcppm { gamma } => {
            if e <= 0.0 {
                return 0.0;
            }
            let two_e = 2.0 * e;
            let mut seen = vec![false; status.degrees.len()];
            let mut result = 0.0;
            for &com in &status.node2com {
                if !seen[com] {
                    seen[com] = true;
                    let d = status.degrees[com] / two_e;
                    result += status.internals[com] / e - gamma * d * d;
                }
            }
            result
        }
        Model::Ppm { gamma } => {
            let n = status.rawnode2node.len() as f64;
            let p2 = n * (n - 1.0) / 2.0;
            let (_, p2_in) = status.sumdc2_p2in();
            (e_in - gamma * p2_in * e / p2.max(EPSILON)) / e.max(EPSILON)
        }
        Model::Ilfrs { mu } => {
            let e_out = e - e_in;
            let two_e = 2.0 * e;
            let mut seen = vec![false; status.degrees.len()];
            let mut result = e_out * safe_log_arg(mu).ln() + e_in * safe_log_arg(1.0 - mu).ln()
                - e_out * safe_log_arg(two_e).ln();
            for &com in &status.node2com {
                if !seen[com] {
                    seen[com] = true;
                    let d = status.degrees[com];
                    if d > 0.0 {
                        result -= status.internals[com] * d.ln();
                    }
                }
            }
            result - e + status.degree_log_degree()
        }
        Model::Ilfr { mu } => {
            let e_out = e - e_in;
            let two_e = 2.0 * e;
            let mut seen = vec![false; status.degrees.len()];
            let mut result =
                e_out * safe_log_arg(mu).ln() - e_out * safe_log_arg(two_e).ln() + status.degree_log_degree() - e;
            for &com in &status.node2com {
                if !seen[com] {
                    seen[com] = true;
                    let d = status.degrees[com];
                    if d > 0.0 {
                        result += status.internals[com] * safe_log_arg((1.0 - mu) / d + mu / two_e).ln();
                    }
                }
            }
            result
        }
    }
}

/// Cost of removing `v` (currently in community `com`, with `k_v_to_com` weight to its members)
/// from `com`, computed from `status` *before* the removal takes place.
pub fn remove_cost(status: &Status, model: Model, v: usize, com: usize, k_v_to_com: f64) -> f64 {
    let model = model.clamped();
    let e = status.total_weight;
    let two_e = 2.0 * e;
    let d_v = status.gdegrees[v];
    let d_old = status.degrees[com];
    match model {
        Model::Dcppm { gamma } => gamma * d_v * (d_old - d_v) / two_e - k_v_to_com,
        Model::Ppm { gamma } => {
            let n = status.rawnode2node.len() as f64;
            let p2 = n * (n - 1.0) / 2.0;
            let s_v = status.node2size[v] as f64;
            let s_old = status.com2size[com] as f64;
            gamma * s_v * (s_old - s_v) / p2.max(EPSILON) - k_v_to_com / e.max(EPSILON)
        }
        Model::Ilfrs { mu } => {
            let beta = safe_log_arg(mu / (1.0 - mu).max(EPSILON)).ln() - safe_log_arg(two_e).ln();
            let i_old = status.internals[com];
            let loops_v = status.loops[v];
            let mut cost = k_v_to_com * beta + i_old * safe_log_arg(d_old).ln();
            if d_old > d_v {
                cost -= (i_old - loops_v - k_v_to_com) * safe_log_arg(d_old - d_v).ln();
            }
            cost
        }
        Model::Ilfr { mu } => {
            let gamma1 = safe_log_arg(mu).ln() - safe_log_arg(two_e).ln();
            let mpar = 1.0 - mu;
            let par2e = mu / two_e;
            let i_old = status.internals[com];
            let loops_v = status.loops[v];
            let mut cost = k_v_to_com * gamma1;
            if d_old > 0.0 {
                cost -= i_old * safe_log_arg(mpar / d_old + par2e).ln();
            }
            if d_old - d_v > 0.0 {
                cost += (i_old - k_v_to_com - loops_v) * safe_log_arg(mpar / (d_old - d_v) + par2e).ln();
            }
            cost
        }
    }
}

/// Gain of adding an isolated `v` to candidate community `com` (with `k_v_to_com` weight to its
/// members), computed from `status` *after* `v` has been removed from its previous community.
pub fn add_cost(status: &Status, model: Model, v: usize, com: usize, k_v_to_com: f64) -> f64 {
    let model = model.clamped();
    let e = status.total_weight;
    let two_e = 2.0 * e;
    let d_v = status.gdegrees[v];
    let d_c = status.degrees[com];
    match model {
        Model::Dcppm { gamma } => k_v_to_com - gamma * d_v * d_c / two_e,
        Model::Ppm { gamma } => {
            let n = status.rawnode2node.len() as f64;
            let p2 = n * (n - 1.0) / 2.0;
            let s_v = status.node2size[v] as f64;
            let s_c = status.com2size[com] as f64;
            k_v_to_com / e.max(EPSILON) - gamma * s_v * s_c / p2.max(EPSILON)
        }
        Model::Ilfrs { mu } => {
            let alpha = safe_log_arg(two_e * (1.0 - mu) / mu).ln();
            let i_c = status.internals[com];
            let loops_v = status.loops[v];
            k_v_to_com * alpha + i_c * safe_log_arg(d_c).ln()
                - (i_c + loops_v + k_v_to_com) * safe_log_arg(d_c + d_v).ln()
        }
        Model::Ilfr { mu } => {
            let gamma2 = safe_log_arg(two_e).ln() - safe_log_arg(mu).ln();
            let mpar = 1.0 - mu;
            let par2e = mu / two_e;
            let i_c = status.internals[com];
            let loops_v = status.loops[v];
            let mut cost = k_v_to_com * gamma2;
            if d_c > 0.0 {
                cost -= i_c * safe_log_arg(mpar / d_c + par2e).ln();
            }
            if d_c + d_v > 0.0 {
                cost += (i_c + k_v_to_com + loops_v) * safe_log_arg(mpar / (d_c + d_v) + par2e).ln();
            }
            cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::community::status::Provenance;
    use crate::generators::two_disjoint_triangles;

    #[test]
    fn dcppm_full_value_matches_modularity_of_singletons() {
        let graph = two_disjoint_triangles();
        let status = Status::new(&graph, Provenance::identity(&graph));
        let value = full_value(&status, Model::Dcppm { gamma: 1.0 });
        // every vertex in its own community: no internal edges, so modularity is negative.
        assert!(value < 0.0);
    }
}
