//! Priority-queue strategies over a single closed set: greedy best-first,
//! A*, weighted A* and uniform-cost search.

use crate::error::Result;
use crate::frontier::Entry;
use crate::observer::{Observer, Side};
use crate::options::{check_weight, SearchOptions};
use crate::path::reconstruct;
use crate::result::SearchResult;

use super::{Run, SearchContext, SearchProblem};

/// Greedy best-first search ordered by `h` alone.
///
/// Every unclosed neighbour is queued again on each sighting, but its parent
/// is the node that discovered it first. The reported cost is the cost of
/// the reconstructed path, which need not be optimal.
pub fn greedy_best_first(
    problem: &SearchProblem<'_>,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    options.validate()?;
    let mut run = Run::new("greedy", problem, options, observer);
    let graph = run.graph();
    let (start, goal) = (run.start(), run.goal());
    let mut ctx = SearchContext::new(graph.len());
    let mut open = options.frontier.build();

    let h0 = run.h(start)?;
    ctx.relax(start, 0.0, None);
    open.push(ctx.entry(h0, 0.0, start));
    run.enqueue(start, 0.0, h0, Side::Forward);

    while let Some(Entry { node, priority, .. }) = open.pop() {
        if ctx.is_closed(node) {
            continue;
        }
        if let Some(reason) = run.poll() {
            return Ok(run.aborted(reason));
        }
        ctx.close(node);
        let g_node = ctx.g(node);
        run.expand(node, g_node, priority, Side::Forward);

        if node == goal {
            let path = reconstruct(&ctx.parent, goal);
            let cost = graph.path_cost(&path)?;
            return Ok(run.found(path, cost));
        }

        for (nbr, w) in graph.neighbors(node) {
            if ctx.is_closed(nbr) {
                continue;
            }
            if ctx.discover(nbr, Some(node)) {
                ctx.g[nbr.index()] = g_node + w;
            }
            let h = run.h(nbr)?;
            // g stays out of the key so equal estimates pop in arrival order.
            open.push(ctx.entry(h, 0.0, nbr));
            run.enqueue(nbr, ctx.g(nbr), h, Side::Forward);
        }
    }
    Ok(run.not_found())
}

/// A* with `f = g + h`; optimal for admissible, consistent heuristics.
pub fn a_star(
    problem: &SearchProblem<'_>,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    best_first("a_star", Some(1.0), problem, options, observer)
}

/// A* with `f = g + weight * h`, `weight >= 1`. The returned cost is within
/// `weight` times the optimum when `h` is admissible.
pub fn weighted_a_star(
    problem: &SearchProblem<'_>,
    weight: f64,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    check_weight(weight)?;
    best_first("weighted_a_star", Some(weight), problem, options, observer)
}

/// Dijkstra ordering; the heuristic is never consulted.
pub fn uniform_cost(
    problem: &SearchProblem<'_>,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    best_first("uniform_cost", None, problem, options, observer)
}

/// `weight = None` orders by `g` only.
fn best_first(
    name: &'static str,
    weight: Option<f64>,
    problem: &SearchProblem<'_>,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    options.validate()?;
    let mut run = Run::new(name, problem, options, observer);
    let graph = run.graph();
    let (start, goal) = (run.start(), run.goal());
    let mut ctx = SearchContext::new(graph.len());
    let mut open = options.frontier.build();

    let f0 = match weight {
        Some(wt) => wt * run.h(start)?,
        None => 0.0,
    };
    ctx.relax(start, 0.0, None);
    open.push(ctx.entry(f0, 0.0, start));
    run.enqueue(start, 0.0, f0, Side::Forward);

    while let Some(Entry { node, priority, .. }) = open.pop() {
        // Lazy deletion: an improved node leaves its older entries behind.
        if ctx.is_closed(node) {
            continue;
        }
        if let Some(reason) = run.poll() {
            return Ok(run.aborted(reason));
        }
        ctx.close(node);
        let g_node = ctx.g(node);
        run.expand(node, g_node, priority, Side::Forward);

        if node == goal {
            let path = reconstruct(&ctx.parent, goal);
            return Ok(run.found(path, g_node));
        }

        for (nbr, w) in graph.neighbors(node) {
            if ctx.is_closed(nbr) {
                continue;
            }
            let tentative = g_node + w;
            if tentative < ctx.g(nbr) {
                ctx.relax(nbr, tentative, Some(node));
                let f = match weight {
                    Some(wt) => tentative + wt * run.h(nbr)?,
                    None => tentative,
                };
                open.push(ctx.entry(f, tentative, nbr));
                run.enqueue(nbr, tentative, f, Side::Forward);
            }
        }
    }
    Ok(run.not_found())
}
