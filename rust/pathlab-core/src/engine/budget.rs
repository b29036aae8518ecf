use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::options::SearchOptions;
use crate::result::AbortReason;

/// Shareable cooperative-cancellation flag; clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-run limits derived from [`SearchOptions`].
#[derive(Clone, Debug)]
pub(crate) struct Budget {
    max_expansions: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl Budget {
    pub(crate) fn new(options: &SearchOptions, started: Instant) -> Self {
        Self {
            max_expansions: options.max_expansions,
            deadline: options.timeout_ms.map(|ms| started + Duration::from_millis(ms)),
            cancel: options.cancel.clone(),
        }
    }

    /// Checked before each expansion; `expanded` is the count so far.
    pub(crate) fn check(&self, expanded: u64) -> Option<AbortReason> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Some(AbortReason::Cancelled);
        }
        if self.max_expansions.is_some_and(|max| expanded >= max) {
            return Some(AbortReason::ExpansionLimit);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(AbortReason::Timeout);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_limit_allows_exactly_max() {
        let opts = SearchOptions { max_expansions: Some(2), ..SearchOptions::default() };
        let b = Budget::new(&opts, Instant::now());
        assert_eq!(b.check(0), None);
        assert_eq!(b.check(1), None);
        assert_eq!(b.check(2), Some(AbortReason::ExpansionLimit));
    }

    #[test]
    fn zero_timeout_expires_immediately() {
        let opts = SearchOptions { timeout_ms: Some(0), ..SearchOptions::unbounded() };
        let b = Budget::new(&opts, Instant::now());
        assert_eq!(b.check(0), Some(AbortReason::Timeout));
    }

    #[test]
    fn cancellation_is_shared_between_clones() {
        let token = CancelToken::new();
        let opts = SearchOptions::unbounded().with_cancel(token.clone());
        let b = Budget::new(&opts, Instant::now());
        assert_eq!(b.check(10), None);
        token.cancel();
        assert_eq!(b.check(10), Some(AbortReason::Cancelled));
    }
}
