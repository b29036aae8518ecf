use std::env;
use std::str::FromStr;

use anyhow::{bail, Context};
use pathlab_core::{
    Algorithm, MissingHeuristic, SearchOptions, DEFAULT_BEAM_WIDTH, DEFAULT_MAX_EXPANSIONS, DEFAULT_MEMORY_LIMIT,
    DEFAULT_WEIGHT,
};

/// Strategy parameters and run limits.
///
/// Resolution order is command-line flag, then `PATHLAB_*` environment
/// variable, then the library default.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub weight: f64,
    pub memory_limit: usize,
    pub beam_width: usize,
    pub max_expansions: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub strict_heuristic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            memory_limit: DEFAULT_MEMORY_LIMIT,
            beam_width: DEFAULT_BEAM_WIDTH,
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            timeout_ms: None,
            strict_heuristic: false,
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub weight: Option<f64>,
    pub memory_limit: Option<usize>,
    pub beam_width: Option<usize>,
    /// `Some(None)` lifts the expansion limit entirely.
    pub max_expansions: Option<Option<u64>>,
    pub timeout_ms: Option<u64>,
    pub strict_heuristic: bool,
}

/// Parses an expansion limit; `0`, `none` and `unlimited` mean no limit.
pub fn parse_expansion_limit(raw: &str) -> anyhow::Result<Option<u64>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("unlimited") {
        return Ok(None);
    }
    let n: u64 = raw.parse().with_context(|| format!("invalid expansion limit {raw:?}"))?;
    Ok((n > 0).then_some(n))
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => {
            let v = raw.trim().parse::<T>().with_context(|| format!("invalid {name}={raw:?}"))?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads `PATHLAB_*` variables through `lookup`; unset ones keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let d = Self::default();
        let max_expansions = match lookup("PATHLAB_MAX_EXPANSIONS") {
            Some(raw) => parse_expansion_limit(&raw).context("invalid PATHLAB_MAX_EXPANSIONS")?,
            None => d.max_expansions,
        };
        Ok(Self {
            weight: parse_var(&lookup, "PATHLAB_WEIGHT")?.unwrap_or(d.weight),
            memory_limit: parse_var(&lookup, "PATHLAB_MEMORY_LIMIT")?.unwrap_or(d.memory_limit),
            beam_width: parse_var(&lookup, "PATHLAB_BEAM_WIDTH")?.unwrap_or(d.beam_width),
            max_expansions,
            timeout_ms: parse_var(&lookup, "PATHLAB_TIMEOUT_MS")?.or(d.timeout_ms),
            strict_heuristic: parse_var(&lookup, "PATHLAB_STRICT_HEURISTIC")?.unwrap_or(d.strict_heuristic),
        })
    }

    pub fn with_overrides(mut self, o: &Overrides) -> Self {
        if let Some(w) = o.weight {
            self.weight = w;
        }
        if let Some(m) = o.memory_limit {
            self.memory_limit = m;
        }
        if let Some(b) = o.beam_width {
            self.beam_width = b;
        }
        if let Some(limit) = o.max_expansions {
            self.max_expansions = limit;
        }
        if o.timeout_ms.is_some() {
            self.timeout_ms = o.timeout_ms;
        }
        self.strict_heuristic |= o.strict_heuristic;
        self
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_expansions: self.max_expansions,
            timeout_ms: self.timeout_ms,
            missing_heuristic: if self.strict_heuristic { MissingHeuristic::Error } else { MissingHeuristic::Zero },
            ..SearchOptions::default()
        }
    }

    /// Applies the configured parameters to `alg`.
    pub fn parameterize(&self, alg: Algorithm) -> Algorithm {
        match alg {
            Algorithm::WeightedAStar { .. } => Algorithm::WeightedAStar { weight: self.weight },
            Algorithm::SmaStar { .. } => Algorithm::SmaStar { memory_limit: self.memory_limit },
            Algorithm::Beam { .. } => Algorithm::Beam { width: self.beam_width },
            other => other,
        }
    }

    /// Resolves `--algorithm` names; an empty list means the six informed strategies.
    pub fn algorithms(&self, kinds: &[String]) -> anyhow::Result<Vec<Algorithm>> {
        let base = if kinds.is_empty() {
            Algorithm::informed()
        } else {
            let mut out = Vec::with_capacity(kinds.len());
            for kind in kinds {
                match Algorithm::from_kind(kind) {
                    Some(alg) => out.push(alg),
                    None => bail!("unknown algorithm {kind:?}"),
                }
            }
            out
        };
        let algs: Vec<Algorithm> = base.into_iter().map(|a| self.parameterize(a)).collect();
        for alg in &algs {
            alg.validate().with_context(|| format!("invalid parameters for {}", alg.kind()))?;
        }
        Ok(algs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = Config::from_lookup(vars(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.max_expansions, Some(1_000_000));
    }

    #[test]
    fn environment_then_flags() {
        let cfg = Config::from_lookup(vars(&[
            ("PATHLAB_WEIGHT", "2.5"),
            ("PATHLAB_MEMORY_LIMIT", "4"),
            ("PATHLAB_TIMEOUT_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(cfg.weight, 2.5);
        assert_eq!(cfg.memory_limit, 4);
        assert_eq!(cfg.timeout_ms, Some(250));

        let cfg = cfg.with_overrides(&Overrides { weight: Some(3.0), beam_width: Some(5), ..Overrides::default() });
        assert_eq!(cfg.weight, 3.0);
        assert_eq!(cfg.memory_limit, 4);
        assert_eq!(cfg.beam_width, 5);
    }

    #[test]
    fn unparseable_variable_is_reported() {
        let err = Config::from_lookup(vars(&[("PATHLAB_BEAM_WIDTH", "wide")])).unwrap_err();
        assert!(err.to_string().contains("PATHLAB_BEAM_WIDTH"));
    }

    #[test]
    fn algorithms_pick_up_parameters() {
        let cfg = Config { weight: 2.0, memory_limit: 3, beam_width: 4, ..Config::default() };
        let algs = cfg.algorithms(&["weighted".into(), "sma".into(), "beam".into(), "astar".into()]).unwrap();
        assert_eq!(
            algs,
            vec![
                Algorithm::WeightedAStar { weight: 2.0 },
                Algorithm::SmaStar { memory_limit: 3 },
                Algorithm::Beam { width: 4 },
                Algorithm::AStar,
            ]
        );
        assert_eq!(cfg.algorithms(&[]).unwrap().len(), 6);
    }

    #[test]
    fn bad_algorithm_or_parameter_fails() {
        let cfg = Config::default();
        assert!(cfg.algorithms(&["dfs".into()]).is_err());
        let cfg = Config { weight: 0.5, ..Config::default() };
        assert!(cfg.algorithms(&["weighted".into()]).is_err());
    }

    #[test]
    fn zero_or_none_lifts_the_expansion_limit() {
        for raw in ["0", "none", " None ", "unlimited"] {
            let cfg = Config::from_lookup(vars(&[("PATHLAB_MAX_EXPANSIONS", raw)])).unwrap();
            assert_eq!(cfg.search_options().max_expansions, None, "{raw:?}");
        }
        let cfg = Config::from_lookup(vars(&[("PATHLAB_MAX_EXPANSIONS", "50")])).unwrap();
        assert_eq!(cfg.max_expansions, Some(50));
        let err = Config::from_lookup(vars(&[("PATHLAB_MAX_EXPANSIONS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("PATHLAB_MAX_EXPANSIONS"));
    }

    #[test]
    fn flag_can_clear_or_replace_the_expansion_limit() {
        let cfg = Config::from_lookup(vars(&[("PATHLAB_MAX_EXPANSIONS", "50")])).unwrap();
        let unbounded = cfg.clone().with_overrides(&Overrides { max_expansions: Some(None), ..Overrides::default() });
        assert_eq!(unbounded.search_options().max_expansions, None);
        let tighter = cfg.clone().with_overrides(&Overrides { max_expansions: Some(Some(7)), ..Overrides::default() });
        assert_eq!(tighter.max_expansions, Some(7));
        assert_eq!(cfg.with_overrides(&Overrides::default()).max_expansions, Some(50));
    }

    #[test]
    fn strict_flag_selects_error_policy() {
        let cfg = Config::default().with_overrides(&Overrides { strict_heuristic: true, ..Overrides::default() });
        assert_eq!(cfg.search_options().missing_heuristic, MissingHeuristic::Error);
        assert_eq!(Config::default().search_options().missing_heuristic, MissingHeuristic::Zero);
    }
}
