// Resume ↔ job description analysis: the request-facing side of the scorer.
// Extraction lives in `extraction`, the deterministic core in `scoring`.

pub mod handlers;
pub mod pipeline;
