// Fit scoring: the deterministic core. Nothing in here performs I/O.

pub mod explain;
pub mod matcher;
