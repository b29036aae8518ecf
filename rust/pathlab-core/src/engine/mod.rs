//! Search strategies and the per-run state they share.

pub mod beam;
pub mod best_first;
pub mod bidirectional;
pub mod budget;
pub mod ida;
pub mod sma;

use std::time::Instant;

use bitvec::prelude::*;
use tracing::{debug, warn};

use crate::error::{Result, SearchError};
use crate::frontier::Entry;
use crate::graph::{Graph, NodeId};
use crate::heuristic::{Heuristic, MissingHeuristic};
use crate::observer::{NoopObserver, Observer, SearchEvent, Side};
use crate::options::{Algorithm, SearchOptions};
use crate::result::{AbortReason, Outcome, SearchResult};

pub use beam::beam_search;
pub use best_first::{a_star, greedy_best_first, uniform_cost, weighted_a_star};
pub use bidirectional::bidirectional_a_star;
pub use budget::CancelToken;
pub use ida::ida_star;
pub use sma::sma_star;

use budget::Budget;

/// Everything a strategy needs to know about one query.
#[derive(Clone, Copy)]
pub struct SearchProblem<'a> {
    pub graph: &'a Graph,
    pub heuristic: &'a dyn Heuristic,
    pub start: NodeId,
    pub goal: NodeId,
}

impl<'a> SearchProblem<'a> {
    /// Resolves `start` and `goal` labels; fails with `NodeNotFound`.
    pub fn new(graph: &'a Graph, heuristic: &'a dyn Heuristic, start: &str, goal: &str) -> Result<Self> {
        Ok(Self { graph, heuristic, start: graph.require(start)?, goal: graph.require(goal)? })
    }

    pub fn from_ids(graph: &'a Graph, heuristic: &'a dyn Heuristic, start: NodeId, goal: NodeId) -> Result<Self> {
        for n in [start, goal] {
            if !graph.contains(n) {
                return Err(SearchError::NodeNotFound(format!("#{}", n.0)));
            }
        }
        Ok(Self { graph, heuristic, start, goal })
    }
}

impl std::fmt::Debug for SearchProblem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchProblem")
            .field("nodes", &self.graph.len())
            .field("start", &self.graph.label(self.start))
            .field("goal", &self.graph.label(self.goal))
            .finish()
    }
}

/// Dense per-run node state, indexed by [`NodeId::index`].
pub(crate) struct SearchContext {
    pub(crate) g: Vec<f64>,
    pub(crate) parent: Vec<Option<NodeId>>,
    discovered: BitVec,
    closed: BitVec,
    seq: u64,
}

impl SearchContext {
    pub(crate) fn new(nodes: usize) -> Self {
        Self {
            g: vec![f64::INFINITY; nodes],
            parent: vec![None; nodes],
            discovered: bitvec![0; nodes],
            closed: bitvec![0; nodes],
            seq: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn g(&self, n: NodeId) -> f64 {
        self.g[n.index()]
    }

    #[inline(always)]
    pub(crate) fn is_closed(&self, n: NodeId) -> bool {
        self.closed[n.index()]
    }

    #[inline(always)]
    pub(crate) fn close(&mut self, n: NodeId) {
        self.closed.set(n.index(), true);
    }

    #[inline(always)]
    pub(crate) fn is_discovered(&self, n: NodeId) -> bool {
        self.discovered[n.index()]
    }

    /// Records `parent` the first time `n` is seen; later calls are no-ops.
    pub(crate) fn discover(&mut self, n: NodeId, parent: Option<NodeId>) -> bool {
        if self.discovered[n.index()] {
            return false;
        }
        self.discovered.set(n.index(), true);
        self.parent[n.index()] = parent;
        true
    }

    /// Unconditionally sets `g` and `parent`.
    pub(crate) fn relax(&mut self, n: NodeId, g: f64, parent: Option<NodeId>) {
        let i = n.index();
        self.g[i] = g;
        self.parent[i] = parent;
        self.discovered.set(i, true);
    }

    /// Frontier entry stamped with the next insertion sequence number.
    pub(crate) fn entry(&mut self, priority: f64, g: f64, node: NodeId) -> Entry {
        let seq = self.seq;
        self.seq += 1;
        Entry::new(priority, g, seq, node)
    }
}

/// Bookkeeping shared by every strategy for one invocation: expansion count,
/// budget, heuristic policy, observer and the closing summary log.
pub(crate) struct Run<'r> {
    problem: &'r SearchProblem<'r>,
    observer: &'r mut dyn Observer,
    policy: MissingHeuristic,
    budget: Budget,
    algorithm: &'static str,
    started: Instant,
    expanded: u64,
    warned_missing: bool,
}

impl<'r> Run<'r> {
    pub(crate) fn new(
        algorithm: &'static str,
        problem: &'r SearchProblem<'r>,
        options: &SearchOptions,
        observer: &'r mut dyn Observer,
    ) -> Self {
        let started = Instant::now();
        Self {
            problem,
            observer,
            policy: options.missing_heuristic,
            budget: Budget::new(options, started),
            algorithm,
            started,
            expanded: 0,
            warned_missing: false,
        }
    }

    pub(crate) fn graph(&self) -> &'r Graph {
        self.problem.graph
    }

    pub(crate) fn start(&self) -> NodeId {
        self.problem.start
    }

    pub(crate) fn goal(&self) -> NodeId {
        self.problem.goal
    }

    /// Budget check; call before every expansion.
    pub(crate) fn poll(&self) -> Option<AbortReason> {
        self.budget.check(self.expanded)
    }

    /// Heuristic estimate with the missing-entry policy applied.
    pub(crate) fn h(&mut self, node: NodeId) -> Result<f64> {
        if let Some(v) = self.problem.heuristic.estimate(node) {
            return Ok(v);
        }
        let label = self.problem.graph.label(node);
        match self.policy {
            MissingHeuristic::Error => Err(SearchError::MissingHeuristic(label.to_string())),
            MissingHeuristic::Zero => {
                if !self.warned_missing {
                    self.warned_missing = true;
                    warn!(algorithm = self.algorithm, node = label, "no heuristic estimate; using h = 0");
                }
                Ok(0.0)
            }
        }
    }

    #[inline]
    pub(crate) fn emit(&mut self, event: SearchEvent) {
        self.observer.on_event(&event);
    }

    pub(crate) fn expand(&mut self, node: NodeId, g: f64, f: f64, side: Side) {
        self.expanded += 1;
        self.emit(SearchEvent::Expand { node, g, f, side });
    }

    pub(crate) fn enqueue(&mut self, node: NodeId, g: f64, f: f64, side: Side) {
        self.emit(SearchEvent::Enqueue { node, g, f, side });
    }

    pub(crate) fn found(mut self, path: Vec<NodeId>, cost: f64) -> SearchResult {
        if let Some(&last) = path.last() {
            self.emit(SearchEvent::Goal { node: last, cost });
        }
        self.finish(Outcome::Found { path, cost })
    }

    pub(crate) fn not_found(self) -> SearchResult {
        self.finish(Outcome::NotFound)
    }

    pub(crate) fn aborted(self, reason: AbortReason) -> SearchResult {
        self.finish(Outcome::Aborted { reason })
    }

    fn finish(self, outcome: Outcome) -> SearchResult {
        let elapsed = self.started.elapsed();
        let graph = self.problem.graph;
        let status = match &outcome {
            Outcome::Found { .. } => "found",
            Outcome::NotFound => "not-found",
            Outcome::Aborted { reason } => reason.as_str(),
        };
        debug!(
            algorithm = self.algorithm,
            start = graph.label(self.problem.start),
            goal = graph.label(self.problem.goal),
            status,
            expanded = self.expanded,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "search finished"
        );
        SearchResult { outcome, nodes_expanded: self.expanded, elapsed }
    }
}

/// Runs one strategy against a resolved problem.
pub fn run(
    problem: &SearchProblem<'_>,
    algorithm: &Algorithm,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    algorithm.validate()?;
    options.validate()?;
    match *algorithm {
        Algorithm::Greedy => greedy_best_first(problem, options, observer),
        Algorithm::AStar => a_star(problem, options, observer),
        Algorithm::WeightedAStar { weight } => weighted_a_star(problem, weight, options, observer),
        Algorithm::IdaStar => ida_star(problem, options, observer),
        Algorithm::SmaStar { memory_limit } => sma_star(problem, memory_limit, options, observer),
        Algorithm::Bidirectional => bidirectional_a_star(problem, options, observer),
        Algorithm::UniformCost => uniform_cost(problem, options, observer),
        Algorithm::Beam { width } => beam_search(problem, width, options, observer),
    }
}

/// Label-level entry point: validates the configuration, resolves `start`
/// and `goal`, and runs `algorithm` without an observer.
pub fn search(
    graph: &Graph,
    heuristic: &dyn Heuristic,
    start: &str,
    goal: &str,
    algorithm: &Algorithm,
    options: &SearchOptions,
) -> Result<SearchResult> {
    algorithm.validate()?;
    options.validate()?;
    let problem = SearchProblem::new(graph, heuristic, start, goal)?;
    run(&problem, algorithm, options, &mut NoopObserver)
}
