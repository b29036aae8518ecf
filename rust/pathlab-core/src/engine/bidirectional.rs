use crate::error::Result;
use crate::graph::NodeId;
use crate::observer::{Observer, SearchEvent, Side};
use crate::options::SearchOptions;
use crate::path::stitch;
use crate::result::SearchResult;

use super::{Run, SearchContext, SearchProblem};

/// Meet-in-the-middle A*.
///
/// A forward search from the start over out-arcs and a backward search from
/// the goal over in-arcs alternate, each step taking the side whose queue
/// head has the smaller f (forward on ties). Both sides are keyed with the
/// same heuristic. The best meeting cost is tracked as nodes get closed on
/// both sides; the search stops once neither queue head can beat it, or
/// when both queues run dry, in which case the best meeting found so far
/// is still returned.
pub fn bidirectional_a_star(
    problem: &SearchProblem<'_>,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    options.validate()?;
    let mut run = Run::new("bidirectional", problem, options, observer);
    let graph = run.graph();
    let (start, goal) = (run.start(), run.goal());
    let n = graph.len();

    let mut fwd = SearchContext::new(n);
    let mut bwd = SearchContext::new(n);
    let mut open_f = options.frontier.build();
    let mut open_b = options.frontier.build();

    let hf = run.h(start)?;
    fwd.relax(start, 0.0, None);
    open_f.push(fwd.entry(hf, 0.0, start));
    run.enqueue(start, 0.0, hf, Side::Forward);

    let hb = run.h(goal)?;
    bwd.relax(goal, 0.0, None);
    open_b.push(bwd.entry(hb, 0.0, goal));
    run.enqueue(goal, 0.0, hb, Side::Backward);

    let mut best = f64::INFINITY;
    let mut meeting: Option<NodeId> = None;

    while !(open_f.is_empty() && open_b.is_empty()) {
        let top_f = open_f.peek_priority().unwrap_or(f64::INFINITY);
        let top_b = open_b.peek_priority().unwrap_or(f64::INFINITY);
        let side = if top_f <= top_b { Side::Forward } else { Side::Backward };
        let (this, other, open) = match side {
            Side::Forward => (&mut fwd, &bwd, &mut open_f),
            Side::Backward => (&mut bwd, &fwd, &mut open_b),
        };

        let Some(entry) = open.pop() else { break };
        let node = entry.node;
        if this.is_closed(node) {
            continue;
        }
        if let Some(reason) = run.poll() {
            return Ok(run.aborted(reason));
        }
        this.close(node);
        let g_node = this.g(node);
        run.expand(node, g_node, entry.priority, side);

        if other.is_closed(node) {
            let total = g_node + other.g(node);
            if total < best {
                best = total;
                meeting = Some(node);
                run.emit(SearchEvent::Meet { node, cost: total });
            }
        }

        let (succ, weights) = match side {
            Side::Forward => graph.out_row(node),
            Side::Backward => graph.in_row(node),
        };
        for (&nbr, &w) in succ.iter().zip(weights) {
            if this.is_closed(nbr) {
                continue;
            }
            let tentative = g_node + w;
            if tentative < this.g(nbr) && tentative < best {
                this.relax(nbr, tentative, Some(node));
                let f = tentative + run.h(nbr)?;
                open.push(this.entry(f, tentative, nbr));
                run.enqueue(nbr, tentative, f, side);
            }
        }

        let min_top = open_f
            .peek_priority()
            .unwrap_or(f64::INFINITY)
            .min(open_b.peek_priority().unwrap_or(f64::INFINITY));
        if meeting.is_some() && min_top >= best {
            break;
        }
    }

    match meeting {
        Some(m) => {
            let path = stitch(&fwd.parent, &bwd.parent, m);
            let cost = graph.path_cost(&path)?;
            Ok(run.found(path, cost))
        }
        None => Ok(run.not_found()),
    }
}
