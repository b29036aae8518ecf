use crate::error::Result;
use crate::graph::NodeId;
use crate::observer::{Observer, SearchEvent, Side};
use crate::options::{check_beam_width, SearchOptions};
use crate::path::reconstruct;
use crate::result::SearchResult;

use super::{Run, SearchContext, SearchProblem};

/// Level-by-level search keeping only the `width` best nodes by `h`.
///
/// A node is claimed by the first level that reaches it and never revisited,
/// so pruning can make the goal unreachable. Incomplete and not optimal.
pub fn beam_search(
    problem: &SearchProblem<'_>,
    width: usize,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    check_beam_width(width)?;
    let mut run = Run::new("beam", problem, options, observer);
    let graph = run.graph();
    let (start, goal) = (run.start(), run.goal());
    let mut ctx = SearchContext::new(graph.len());

    ctx.relax(start, 0.0, None);
    let mut beam: Vec<(f64, NodeId)> = vec![(run.h(start)?, start)];

    while !beam.is_empty() {
        let mut next = Vec::new();
        for &(h, node) in &beam {
            if let Some(reason) = run.poll() {
                return Ok(run.aborted(reason));
            }
            let g_node = ctx.g(node);
            run.expand(node, g_node, h, Side::Forward);
            if node == goal {
                let path = reconstruct(&ctx.parent, goal);
                let cost = graph.path_cost(&path)?;
                return Ok(run.found(path, cost));
            }
            for (nbr, w) in graph.neighbors(node) {
                if ctx.is_discovered(nbr) {
                    continue;
                }
                ctx.relax(nbr, g_node + w, Some(node));
                let h = run.h(nbr)?;
                next.push((h, nbr));
                run.enqueue(nbr, g_node + w, h, Side::Forward);
            }
        }
        // Stable: equal estimates keep discovery order.
        next.sort_by(|a, b| a.0.total_cmp(&b.0));
        let keep = width.min(next.len());
        for (f, node) in next.split_off(keep) {
            run.emit(SearchEvent::Evict { node, f });
        }
        beam = next;
    }
    Ok(run.not_found())
}
