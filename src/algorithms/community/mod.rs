/// Rand index, Jaccard index and normalized mutual information between two partitions.
pub mod compare;
/// Parameter estimation (`γ`/`μ`) and log-likelihood evaluation for each objective.
pub mod likelihood;
/// The multi-level driver: `generate_dendrogram`, `partition_at_level`, `best_partition`,
/// `induced_graph`.
pub mod louvain;
/// The `Model` enum and its four objectives' value/delta functions.
pub mod objective;
/// The local-move engine that drives a single level's optimization sweep.
pub mod one_level;
/// Renumbering and classical modularity over an arbitrary partition.
pub mod partitions;
/// The `Status`/`Provenance` bookkeeping shared by every objective and the local-move engine.
pub mod status;

pub use compare::{compare_partitions, PartitionComparison};
pub use likelihood::{estimate_gamma, estimate_mu, ilfr_mu_loglikelihood, model_log_likelihood, ParameterOverrides};
pub use louvain::{best_partition, generate_dendrogram, induced_graph, partition_at_level};
pub use objective::Model;
pub use partitions::{is_partition, modularity, renumber};
