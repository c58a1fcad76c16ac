/// Community detection: the Louvain multi-level heuristic, partition utilities,
/// partition comparison, and maximum-likelihood parameter estimation.
pub mod community;
