use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyBucket {
    /// Upper bound in milliseconds; `None` is the `+Inf` bucket.
    pub le_ms: Option<u64>,
    /// Cumulative number of observations at or below `le_ms`.
    pub count: u64,
}
