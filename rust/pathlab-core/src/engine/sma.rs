use crate::error::Result;
use crate::frontier::{BoundedFrontier, Candidate};
use crate::observer::{Observer, SearchEvent, Side};
use crate::options::{check_memory_limit, SearchOptions};
use crate::result::SearchResult;

use super::{Run, SearchProblem};

/// Simplified memory-bounded A*.
///
/// Each candidate carries its own path, which is the only cycle check. After
/// a node's successors are queued, the frontier is cut back to
/// `memory_limit` entries by dropping the highest f. Dropped candidates are
/// forgotten rather than backed up into their parents, so this can miss a
/// path that exists and is not monotonic in `memory_limit`.
pub fn sma_star(
    problem: &SearchProblem<'_>,
    memory_limit: usize,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    check_memory_limit(memory_limit)?;
    let mut run = Run::new("sma_star", problem, options, observer);
    let graph = run.graph();
    let (start, goal) = (run.start(), run.goal());
    let mut open = BoundedFrontier::new(memory_limit);

    let h0 = run.h(start)?;
    open.push(Candidate { f: h0, g: 0.0, node: start, path: vec![start] });
    run.enqueue(start, 0.0, h0, Side::Forward);

    while let Some(cand) = open.pop() {
        if let Some(reason) = run.poll() {
            return Ok(run.aborted(reason));
        }
        run.expand(cand.node, cand.g, cand.f, Side::Forward);
        if cand.node == goal {
            return Ok(run.found(cand.path, cand.g));
        }

        for (nbr, w) in graph.neighbors(cand.node) {
            if cand.on_path(nbr) {
                continue;
            }
            let g = cand.g + w;
            let f = g + run.h(nbr)?;
            let mut path = Vec::with_capacity(cand.path.len() + 1);
            path.extend_from_slice(&cand.path);
            path.push(nbr);
            open.push(Candidate { f, g, node: nbr, path });
            run.enqueue(nbr, g, f, Side::Forward);
        }
        for dropped in open.evict_overflow() {
            run.emit(SearchEvent::Evict { node: dropped.node, f: dropped.f });
        }
    }
    Ok(run.not_found())
}
