/// Reader and writer for the legacy little-endian binary adjacency-list graph format.
pub mod binary;
