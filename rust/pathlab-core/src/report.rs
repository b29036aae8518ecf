//! Side-by-side comparison of several runs on the same query.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::graph::Graph;
use crate::result::{AbortReason, Outcome, SearchResult};

/// One run, with node ids resolved to labels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// `None` unless a path was found (JSON has no infinity).
    pub cost: Option<f64>,
    pub nodes_expanded: u64,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aborted: Option<AbortReason>,
}

impl ReportRow {
    pub fn new(graph: &Graph, label: impl Into<String>, result: &SearchResult) -> Self {
        let (path, cost, aborted) = match &result.outcome {
            Outcome::Found { path, cost } => {
                let labels = graph.labels_of(path).into_iter().map(str::to_string).collect();
                (Some(labels), Some(*cost), None)
            }
            Outcome::NotFound => (None, None, None),
            Outcome::Aborted { reason } => (None, None, Some(*reason)),
        };
        Self {
            label: label.into(),
            found: result.is_found(),
            path,
            cost,
            nodes_expanded: result.nodes_expanded,
            elapsed_ms: result.elapsed.as_nanos() as f64 / 1e6,
            aborted,
        }
    }

    fn cost_cell(&self) -> String {
        match self.cost {
            Some(c) => format!("{c}"),
            None => "inf".to_string(),
        }
    }

    fn path_cell(&self) -> String {
        match (&self.path, self.aborted) {
            (Some(p), _) => p.iter().join(" -> "),
            (None, Some(reason)) => format!("(aborted: {reason})"),
            (None, None) => "(no path)".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub start: String,
    pub goal: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self { start: start.into(), goal: goal.into(), rows: Vec::new() }
    }

    pub fn push(&mut self, graph: &Graph, label: impl Into<String>, result: &SearchResult) {
        self.rows.push(ReportRow::new(graph, label, result));
    }

    pub fn row(&self, label: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

const HEADERS: [&str; 5] = ["algorithm", "cost", "expanded", "time_ms", "path"];

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} -> {} ===", self.start, self.goal)?;
        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.label.clone(),
                    r.cost_cell(),
                    r.nodes_expanded.to_string(),
                    format!("{:.3}", r.elapsed_ms),
                    r.path_cell(),
                ]
            })
            .collect();
        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }
        let line = |row: [&str; 5]| {
            format!(
                "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}  {}",
                row[0],
                row[1],
                row[2],
                row[3],
                row[4],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
                w3 = widths[3],
            )
        };
        writeln!(f, "{}", line(HEADERS).trim_end())?;
        for row in &cells {
            writeln!(f, "{}", line([&row[0], &row[1], &row[2], &row[3], &row[4]].map(String::as_str)).trim_end())?;
        }
        Ok(())
    }
}
