use bitvec::prelude::*;

use crate::error::Result;
use crate::graph::NodeId;
use crate::observer::{Observer, SearchEvent, Side};
use crate::options::SearchOptions;
use crate::result::{AbortReason, SearchResult};

use super::{Run, SearchProblem};

/// One level of the depth-first probe.
#[derive(Clone, Copy, Debug)]
struct Frame {
    node: NodeId,
    g: f64,
    /// Index of the next arc to try in `node`'s row.
    next: usize,
    /// Smallest f seen beyond the bound below this frame.
    min_over: f64,
}

enum Probe {
    Found,
    /// Nothing within the bound; carries the next bound (`+inf` if none).
    Exceeded(f64),
    Aborted(AbortReason),
}

/// Iterative-deepening A*.
///
/// Memory is linear in the path length: the only cycle check is membership
/// in the current root-to-node path. One expansion is counted per child
/// descended into, including children immediately cut off by the bound.
pub fn ida_star(
    problem: &SearchProblem<'_>,
    options: &SearchOptions,
    observer: &mut dyn Observer,
) -> Result<SearchResult> {
    let mut run = Run::new("ida_star", problem, options, observer);
    let graph = run.graph();
    let mut path = Vec::new();
    let mut on_path = bitvec![0; graph.len()];

    let mut bound = run.h(run.start())?;
    loop {
        run.emit(SearchEvent::Iteration { bound });
        match probe(&mut run, bound, &mut path, &mut on_path)? {
            Probe::Found => {
                let cost = graph.path_cost(&path)?;
                return Ok(run.found(path, cost));
            }
            Probe::Exceeded(next) if next.is_infinite() => return Ok(run.not_found()),
            Probe::Exceeded(next) => bound = next,
            Probe::Aborted(reason) => return Ok(run.aborted(reason)),
        }
    }
}

/// Depth-first search below `bound`. On `Found`, `path` holds the solution.
fn probe(run: &mut Run<'_>, bound: f64, path: &mut Vec<NodeId>, on_path: &mut BitVec) -> Result<Probe> {
    let graph = run.graph();
    let (start, goal) = (run.start(), run.goal());
    path.clear();
    on_path.fill(false);

    let f = run.h(start)?;
    if f > bound {
        run.emit(SearchEvent::Cutoff { node: start, f, bound });
        return Ok(Probe::Exceeded(f));
    }
    path.push(start);
    if start == goal {
        return Ok(Probe::Found);
    }
    on_path.set(start.index(), true);
    let mut stack = vec![Frame { node: start, g: 0.0, next: 0, min_over: f64::INFINITY }];

    while let Some(top) = stack.last_mut() {
        let (succ, weights) = graph.out_row(top.node);
        let mut child = None;
        while top.next < succ.len() {
            let i = top.next;
            top.next += 1;
            if !on_path[succ[i].index()] {
                child = Some((succ[i], top.g + weights[i]));
                break;
            }
        }

        let Some((node, g)) = child else {
            let done = *top;
            stack.pop();
            path.pop();
            on_path.set(done.node.index(), false);
            match stack.last_mut() {
                Some(parent) => parent.min_over = parent.min_over.min(done.min_over),
                None => return Ok(Probe::Exceeded(done.min_over)),
            }
            continue;
        };

        if let Some(reason) = run.poll() {
            return Ok(Probe::Aborted(reason));
        }
        let f = g + run.h(node)?;
        run.expand(node, g, f, Side::Forward);
        if f > bound {
            run.emit(SearchEvent::Cutoff { node, f, bound });
            if let Some(top) = stack.last_mut() {
                top.min_over = top.min_over.min(f);
            }
            continue;
        }
        path.push(node);
        if node == goal {
            return Ok(Probe::Found);
        }
        on_path.set(node.index(), true);
        stack.push(Frame { node, g, next: 0, min_over: f64::INFINITY });
    }
    Ok(Probe::Exceeded(f64::INFINITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::heuristic::ZeroHeuristic;
    use crate::observer::{NoopObserver, RecordingObserver};

    #[test]
    fn deepens_until_found() {
        let mut b = GraphBuilder::undirected();
        b.add_edge("s", "a", 1.0).add_edge("a", "g", 1.0).add_edge("s", "g", 5.0);
        let g = b.build().unwrap();
        let p = SearchProblem::new(&g, &ZeroHeuristic, "s", "g").unwrap();
        let mut rec = RecordingObserver::new();
        let r = ida_star(&p, &SearchOptions::default(), &mut rec).unwrap();
        assert_eq!(g.labels_of(r.path().unwrap()), vec!["s", "a", "g"]);
        assert_eq!(r.cost(), 2.0);
        let bounds: Vec<f64> = rec
            .events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::Iteration { bound } => Some(*bound),
                _ => None,
            })
            .collect();
        assert_eq!(bounds, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn unreachable_goal_terminates() {
        let mut b = GraphBuilder::undirected();
        b.add_edge("s", "a", 1.0).add_edge("a", "b", 1.0).add_edge("b", "s", 1.0).add_node("g");
        let g = b.build().unwrap();
        let p = SearchProblem::new(&g, &ZeroHeuristic, "s", "g").unwrap();
        let r = ida_star(&p, &SearchOptions::default(), &mut NoopObserver).unwrap();
        assert!(!r.is_found());
        assert!(r.abort_reason().is_none());
    }

    #[test]
    fn start_is_goal_expands_nothing() {
        let mut b = GraphBuilder::undirected();
        b.add_edge("s", "a", 1.0);
        let g = b.build().unwrap();
        let p = SearchProblem::new(&g, &ZeroHeuristic, "s", "s").unwrap();
        let r = ida_star(&p, &SearchOptions::default(), &mut NoopObserver).unwrap();
        assert_eq!(r.path(), Some(&[g.node("s").unwrap()][..]));
        assert_eq!(r.cost(), 0.0);
        assert_eq!(r.nodes_expanded, 0);
    }
}
