use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::graph::NodeId;

/// Why a run stopped before the frontier was exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    ExpansionLimit,
    Timeout,
    Cancelled,
}

impl AbortReason {
    pub fn as_str(self) -> &'static str {
        match self {
            AbortReason::ExpansionLimit => "expansion-limit",
            AbortReason::Timeout => "timeout",
            AbortReason::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Found { path: Vec<NodeId>, cost: f64 },
    NotFound,
    Aborted { reason: AbortReason },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub nodes_expanded: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_ms")]
    pub elapsed: Duration,
}

fn serialize_ms<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_nanos() as f64 / 1e6)
}

impl SearchResult {
    pub fn found(path: Vec<NodeId>, cost: f64, nodes_expanded: u64, elapsed: Duration) -> Self {
        Self { outcome: Outcome::Found { path, cost }, nodes_expanded, elapsed }
    }

    pub fn not_found(nodes_expanded: u64, elapsed: Duration) -> Self {
        Self { outcome: Outcome::NotFound, nodes_expanded, elapsed }
    }

    pub fn aborted(reason: AbortReason, nodes_expanded: u64, elapsed: Duration) -> Self {
        Self { outcome: Outcome::Aborted { reason }, nodes_expanded, elapsed }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        match &self.outcome {
            Outcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Path cost, `+inf` unless a path was found.
    pub fn cost(&self) -> f64 {
        match self.outcome {
            Outcome::Found { cost, .. } => cost,
            _ => f64::INFINITY,
        }
    }

    pub fn abort_reason(&self) -> Option<AbortReason> {
        match self.outcome {
            Outcome::Aborted { reason } => Some(reason),
            _ => None,
        }
    }

    /// Same outcome and expansion count; `elapsed` is ignored.
    pub fn same_as(&self, other: &SearchResult) -> bool {
        self.outcome == other.outcome && self.nodes_expanded == other.nodes_expanded
    }
}
