use std::path::Path;

use anyhow::{anyhow, Context};
use pathlab_core::{
    romania, run, Algorithm, Graph, HeuristicTable, MapFile, NoopObserver, Observer, Report, SearchOptions,
    SearchProblem, TracingObserver,
};
use tracing::info;

/// A loaded map together with the query to run on it.
#[derive(Debug)]
pub struct Workload {
    pub graph: Graph,
    pub heuristic: HeuristicTable,
    pub start: String,
    pub goal: String,
}

impl Workload {
    /// Loads `map` (or the built-in Romania map) and settles the endpoints.
    ///
    /// Explicit `start`/`goal` win over the ones stored in the map file.
    pub fn load(map: Option<&Path>, start: Option<&str>, goal: Option<&str>) -> anyhow::Result<Self> {
        let doc = match map {
            Some(path) => MapFile::from_path(path).with_context(|| format!("failed to load map {}", path.display()))?,
            None => romania::map_file(),
        };
        let graph = doc.graph().context("invalid graph")?;
        let heuristic = doc.heuristic(&graph).context("invalid heuristic")?;
        let start = start
            .map(str::to_string)
            .or(doc.start)
            .ok_or_else(|| anyhow!("no start node: pass --start or set \"start\" in the map"))?;
        let goal = goal
            .map(str::to_string)
            .or(doc.goal)
            .ok_or_else(|| anyhow!("no goal node: pass --goal or set \"goal\" in the map"))?;
        Ok(Self { graph, heuristic, start, goal })
    }

    /// Runs each algorithm once and collects the results into a [`Report`].
    ///
    /// With `trace`, every search event is logged at trace level.
    pub fn compare(&self, algorithms: &[Algorithm], options: &SearchOptions, trace: bool) -> anyhow::Result<Report> {
        let problem = SearchProblem::new(&self.graph, &self.heuristic, &self.start, &self.goal)?;
        let mut report = Report::new(&self.start, &self.goal);
        for alg in algorithms {
            let mut tracer = TracingObserver::new(&self.graph);
            let mut noop = NoopObserver;
            let observer: &mut dyn Observer = if trace { &mut tracer } else { &mut noop };
            let result = run(&problem, alg, options, observer).with_context(|| format!("{alg} failed"))?;
            info!(
                algorithm = alg.kind(),
                found = result.is_found(),
                cost = result.cost(),
                expanded = result.nodes_expanded,
                elapsed_ms = result.elapsed.as_secs_f64() * 1000.0,
                "run complete"
            );
            report.push(&self.graph, alg.label(), &result);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_core::{MissingHeuristic, SearchError};

    #[test]
    fn built_in_map_defaults_to_arad_bucharest() {
        let w = Workload::load(None, None, None).unwrap();
        assert_eq!((w.start.as_str(), w.goal.as_str()), ("Arad", "Bucharest"));
        assert_eq!(w.graph.len(), 20);
    }

    #[test]
    fn flags_override_map_endpoints() {
        let w = Workload::load(None, Some("Lugoj"), None).unwrap();
        assert_eq!((w.start.as_str(), w.goal.as_str()), ("Lugoj", "Bucharest"));
    }

    #[test]
    fn default_comparison_has_one_row_per_strategy() {
        let w = Workload::load(None, None, None).unwrap();
        let report = w.compare(&Algorithm::informed(), &SearchOptions::default(), false).unwrap();
        assert_eq!(report.rows.len(), 6);
        assert_eq!(report.row("A*").unwrap().cost, Some(418.0));
        assert_eq!(report.row("Greedy Best-First").unwrap().cost, Some(450.0));
        assert_eq!(report.row("Weighted A* (w=1.5)").unwrap().nodes_expanded, 4);
        assert_eq!(report.row("SMA* (mem=8)").unwrap().cost, Some(418.0));
        assert!(report.rows.iter().all(|r| r.found));
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let w = Workload::load(None, Some("Atlantis"), None).unwrap();
        let err = w.compare(&[Algorithm::AStar], &SearchOptions::default(), false).unwrap_err();
        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::NodeNotFound("Atlantis".into())));
    }

    #[test]
    fn strict_policy_failure_names_the_algorithm() {
        let mut w = Workload::load(None, None, None).unwrap();
        w.heuristic = HeuristicTable::new(&w.graph);
        let opts = SearchOptions { missing_heuristic: MissingHeuristic::Error, ..SearchOptions::default() };
        let err = w.compare(&[Algorithm::Greedy], &opts, true).unwrap_err();
        assert!(format!("{err:#}").contains("Greedy Best-First failed"));
    }
}
