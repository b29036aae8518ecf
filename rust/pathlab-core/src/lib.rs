pub mod engine;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod observer;
pub mod options;
pub mod path;
pub mod report;
pub mod result;
pub mod romania;

pub use engine::{
    a_star, beam_search, bidirectional_a_star, greedy_best_first, ida_star, run, search, sma_star, uniform_cost,
    weighted_a_star, CancelToken, SearchProblem,
};
pub use error::{GraphError, SearchError};
pub use frontier::FrontierKind;
pub use graph::{Graph, GraphBuilder, MapFile, NodeId};
pub use heuristic::{Heuristic, HeuristicTable, MissingHeuristic, ZeroHeuristic};
pub use observer::{NoopObserver, Observer, RecordingObserver, SearchEvent, Side, TracingObserver};
pub use options::{
    Algorithm, SearchOptions, DEFAULT_BEAM_WIDTH, DEFAULT_MAX_EXPANSIONS, DEFAULT_MEMORY_LIMIT, DEFAULT_WEIGHT,
};
pub use report::{Report, ReportRow};
pub use result::{AbortReason, Outcome, SearchResult};
