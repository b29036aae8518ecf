use pathlab_core::{
    romania, run, search, AbortReason, Algorithm, CancelToken, HeuristicTable, MissingHeuristic, Observer,
    RecordingObserver, SearchError, SearchEvent, SearchOptions, SearchProblem,
};

fn all_algorithms() -> Vec<Algorithm> {
    let mut algs = Algorithm::informed();
    algs.push(Algorithm::UniformCost);
    algs.push(Algorithm::Beam { width: 2 });
    algs
}

#[test]
fn expansion_limit_reports_partial_work() {
    let g = romania::graph().unwrap();
    let h = romania::heuristic(&g).unwrap();
    let opts = SearchOptions { max_expansions: Some(3), ..SearchOptions::default() };
    let r = search(&g, &h, "Arad", "Bucharest", &Algorithm::AStar, &opts).unwrap();
    assert_eq!(r.abort_reason(), Some(AbortReason::ExpansionLimit));
    assert_eq!(r.nodes_expanded, 3);
    assert!(r.path().is_none());
    assert!(r.cost().is_infinite());

    // A limit equal to the work needed is not a failure.
    let opts = SearchOptions { max_expansions: Some(6), ..SearchOptions::default() };
    let r = search(&g, &h, "Arad", "Bucharest", &Algorithm::AStar, &opts).unwrap();
    assert_eq!(r.cost(), 418.0);
}

#[test]
fn zero_timeout_aborts_before_any_expansion() {
    let g = romania::graph().unwrap();
    let h = romania::heuristic(&g).unwrap();
    let opts = SearchOptions { timeout_ms: Some(0), ..SearchOptions::default() };
    for alg in all_algorithms() {
        let r = search(&g, &h, "Arad", "Bucharest", &alg, &opts).unwrap();
        assert_eq!(r.abort_reason(), Some(AbortReason::Timeout), "{alg}");
        assert_eq!(r.nodes_expanded, 0, "{alg}");
    }
}

#[test]
fn pre_cancelled_token_stops_every_strategy() {
    let g = romania::graph().unwrap();
    let h = romania::heuristic(&g).unwrap();
    let token = CancelToken::new();
    token.cancel();
    let opts = SearchOptions::default().with_cancel(token);
    for alg in all_algorithms() {
        let r = search(&g, &h, "Arad", "Bucharest", &alg, &opts).unwrap();
        assert_eq!(r.abort_reason(), Some(AbortReason::Cancelled), "{alg}");
    }
}

/// Cancels the run from inside after a fixed number of expansions.
struct CancelAfter {
    remaining: usize,
    token: CancelToken,
}

impl Observer for CancelAfter {
    fn on_event(&mut self, event: &SearchEvent) {
        if let SearchEvent::Expand { .. } = event {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.token.cancel();
            }
        }
    }
}

#[test]
fn cancellation_mid_run() {
    let g = romania::graph().unwrap();
    let h = romania::heuristic(&g).unwrap();
    let token = CancelToken::new();
    let opts = SearchOptions::default().with_cancel(token.clone());
    let p = SearchProblem::new(&g, &h, "Arad", "Bucharest").unwrap();
    let mut obs = CancelAfter { remaining: 2, token };
    let r = run(&p, &Algorithm::IdaStar, &opts, &mut obs).unwrap();
    assert_eq!(r.abort_reason(), Some(AbortReason::Cancelled));
    assert_eq!(r.nodes_expanded, 2);
}

#[test]
fn missing_estimate_defaults_to_zero() {
    let g = romania::graph().unwrap();
    let partial = romania::STRAIGHT_LINE.iter().copied().filter(|&(city, _)| city != "Sibiu");
    let h = HeuristicTable::from_labels(&g, partial).unwrap();
    let r = search(&g, &h, "Arad", "Bucharest", &Algorithm::AStar, &SearchOptions::default()).unwrap();
    assert_eq!(r.cost(), 418.0);

    let strict = SearchOptions { missing_heuristic: MissingHeuristic::Error, ..SearchOptions::default() };
    let err = search(&g, &h, "Arad", "Bucharest", &Algorithm::AStar, &strict).unwrap_err();
    assert_eq!(err, SearchError::MissingHeuristic("Sibiu".into()));
}

#[test]
fn unknown_labels_are_rejected_up_front() {
    let g = romania::graph().unwrap();
    let h = romania::heuristic(&g).unwrap();
    let err = search(&g, &h, "Atlantis", "Bucharest", &Algorithm::AStar, &SearchOptions::default()).unwrap_err();
    assert_eq!(err, SearchError::NodeNotFound("Atlantis".into()));
    let err = search(&g, &h, "Arad", "El Dorado", &Algorithm::Greedy, &SearchOptions::default()).unwrap_err();
    assert_eq!(err, SearchError::NodeNotFound("El Dorado".into()));
}

#[test]
fn invalid_config_fails_before_search() {
    let g = romania::graph().unwrap();
    let h = romania::heuristic(&g).unwrap();
    for alg in [
        Algorithm::WeightedAStar { weight: 0.5 },
        Algorithm::SmaStar { memory_limit: 0 },
        Algorithm::Beam { width: 0 },
    ] {
        let err = search(&g, &h, "Atlantis", "Bucharest", &alg, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)), "{alg}: {err}");
    }
}

#[test]
fn unreachable_goal_is_not_an_error() {
    let mut b = pathlab_core::GraphBuilder::undirected();
    b.add_edge("a", "b", 1.0).add_edge("c", "d", 1.0);
    let g = b.build().unwrap();
    for alg in all_algorithms() {
        let r = search(&g, &pathlab_core::ZeroHeuristic, "a", "d", &alg, &SearchOptions::default()).unwrap();
        assert!(!r.is_found(), "{alg}");
        assert!(r.abort_reason().is_none(), "{alg}");
        assert!(r.cost().is_infinite(), "{alg}");
    }
}

#[test]
fn observer_sees_one_expand_per_counted_expansion() {
    let g = romania::graph().unwrap();
    let h = romania::heuristic(&g).unwrap();
    let p = SearchProblem::new(&g, &h, "Arad", "Bucharest").unwrap();
    for alg in all_algorithms() {
        let mut rec = RecordingObserver::new();
        let r = run(&p, &alg, &SearchOptions::default(), &mut rec).unwrap();
        assert_eq!(rec.expansions().count() as u64, r.nodes_expanded, "{alg}");
        assert!(matches!(rec.events.last(), Some(SearchEvent::Goal { .. })), "{alg}");
    }
}
