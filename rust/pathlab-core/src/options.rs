use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::CancelToken;
use crate::error::{Result, SearchError};
use crate::frontier::FrontierKind;
use crate::heuristic::MissingHeuristic;

pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;
pub const DEFAULT_WEIGHT: f64 = 1.5;
pub const DEFAULT_MEMORY_LIMIT: usize = 8;
pub const DEFAULT_BEAM_WIDTH: usize = 2;

/// Strategy selection plus its own parameters.
///
/// Deserializes from `{"kind": "weighted_a_star", "weight": 1.5}`; missing
/// parameters take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    Greedy,
    AStar,
    WeightedAStar {
        #[serde(default = "default_weight")]
        weight: f64,
    },
    IdaStar,
    SmaStar {
        #[serde(default = "default_memory_limit")]
        memory_limit: usize,
    },
    Bidirectional,
    UniformCost,
    Beam {
        #[serde(default = "default_beam_width")]
        width: usize,
    },
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}
fn default_memory_limit() -> usize {
    DEFAULT_MEMORY_LIMIT
}
fn default_beam_width() -> usize {
    DEFAULT_BEAM_WIDTH
}

pub(crate) fn check_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 1.0 {
        return Err(SearchError::InvalidConfig(format!("weight must be a finite value >= 1, got {weight}")));
    }
    Ok(())
}

pub(crate) fn check_memory_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(SearchError::InvalidConfig("memory_limit must be at least 1".into()));
    }
    Ok(())
}

pub(crate) fn check_beam_width(width: usize) -> Result<()> {
    if width == 0 {
        return Err(SearchError::InvalidConfig("beam width must be at least 1".into()));
    }
    Ok(())
}

impl Algorithm {
    /// The six informed strategies with default parameters, in report order.
    pub fn informed() -> Vec<Algorithm> {
        vec![
            Algorithm::Greedy,
            Algorithm::AStar,
            Algorithm::WeightedAStar { weight: DEFAULT_WEIGHT },
            Algorithm::IdaStar,
            Algorithm::SmaStar { memory_limit: DEFAULT_MEMORY_LIMIT },
            Algorithm::Bidirectional,
        ]
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Algorithm::WeightedAStar { weight } => check_weight(weight),
            Algorithm::SmaStar { memory_limit } => check_memory_limit(memory_limit),
            Algorithm::Beam { width } => check_beam_width(width),
            _ => Ok(()),
        }
    }

    /// Short machine name, as accepted by [`Algorithm::from_kind`].
    pub fn kind(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "a_star",
            Algorithm::WeightedAStar { .. } => "weighted_a_star",
            Algorithm::IdaStar => "ida_star",
            Algorithm::SmaStar { .. } => "sma_star",
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::UniformCost => "uniform_cost",
            Algorithm::Beam { .. } => "beam",
        }
    }

    /// Builds an algorithm from its kind name with default parameters.
    pub fn from_kind(kind: &str) -> Option<Algorithm> {
        let alg = match kind {
            "greedy" => Algorithm::Greedy,
            "a_star" | "astar" => Algorithm::AStar,
            "weighted_a_star" | "weighted" => Algorithm::WeightedAStar { weight: DEFAULT_WEIGHT },
            "ida_star" | "ida" => Algorithm::IdaStar,
            "sma_star" | "sma" => Algorithm::SmaStar { memory_limit: DEFAULT_MEMORY_LIMIT },
            "bidirectional" | "bidirectional_a_star" => Algorithm::Bidirectional,
            "uniform_cost" | "ucs" | "dijkstra" => Algorithm::UniformCost,
            "beam" => Algorithm::Beam { width: DEFAULT_BEAM_WIDTH },
            _ => return None,
        };
        Some(alg)
    }

    /// Human-readable report label, e.g. `Weighted A* (w=1.5)`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Greedy => f.write_str("Greedy Best-First"),
            Algorithm::AStar => f.write_str("A*"),
            Algorithm::WeightedAStar { weight } => write!(f, "Weighted A* (w={weight})"),
            Algorithm::IdaStar => f.write_str("IDA*"),
            Algorithm::SmaStar { memory_limit } => write!(f, "SMA* (mem={memory_limit})"),
            Algorithm::Bidirectional => f.write_str("Bidirectional A*"),
            Algorithm::UniformCost => f.write_str("Uniform-Cost"),
            Algorithm::Beam { width } => write!(f, "Beam (width={width})"),
        }
    }
}

/// Limits and policies shared by every strategy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Abort with `ExpansionLimit` instead of expanding more than this many nodes.
    pub max_expansions: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub missing_heuristic: MissingHeuristic,
    pub frontier: FrontierKind,
    #[serde(skip)]
    pub cancel: Option<CancelToken>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            timeout_ms: None,
            missing_heuristic: MissingHeuristic::default(),
            frontier: FrontierKind::default(),
            cancel: None,
        }
    }
}

impl SearchOptions {
    /// No expansion limit, no timeout.
    pub fn unbounded() -> Self {
        Self { max_expansions: None, ..Self::default() }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let FrontierKind::Bucket { width } = self.frontier {
            if !width.is_finite() || width <= 0.0 {
                return Err(SearchError::InvalidConfig(format!("bucket width must be positive, got {width}")));
            }
        }
        Ok(())
    }
}
