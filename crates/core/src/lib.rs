pub mod concentration;
pub mod config;
pub mod constants;
pub mod derived;
pub mod diary;
pub mod report;
pub mod score;
pub mod series;
pub mod types;

use std::path::Path;

use anyhow::Context;

use crate::{
    constants::{DAYS_PER_MONTH, DAYS_PER_SIX_MONTHS},
    derived::{project_resources, rate_of_change, resource_percentages, what_if_scenario},
    diary::ParseMode,
    report::{score_gate, Report},
    score::eco_score_with,
    types::{ResourceConsumption, ScoringPolicy},
};

#[derive(Debug, Clone)]
pub struct EvaluateOptions {
    pub policy: ScoringPolicy,
    pub strict: bool,
    /// Per-resource reduction percentages for the what-if scenario.
    pub reductions: Option<ResourceConsumption>,
    /// Minimum acceptable score; sets the report's gate when present.
    pub min_score: Option<i64>,
    pub max_total_bytes_scanned: u64,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::ThresholdPenalty,
            strict: false,
            reductions: None,
            min_score: None,
            max_total_bytes_scanned: 50 * 1024 * 1024,
        }
    }
}

/// Evaluate one consumption record into a full report. Pure: no I/O, no
/// failure modes; degenerate inputs fall back per the documented guards.
pub fn evaluate(
    input: &ResourceConsumption,
    previous: Option<&ResourceConsumption>,
    opts: &EvaluateOptions,
) -> Report {
    let score = eco_score_with(opts.policy, input);

    let what_if = opts.reductions.as_ref().map(|r| what_if_scenario(input, r));
    let delta = previous.map(|p| rate_of_change(p, input));
    let gate = opts.min_score.map(|min| score_gate(&score, min));

    Report::new(
        *input,
        opts.policy,
        score,
        resource_percentages(input),
        project_resources(input, DAYS_PER_MONTH),
        project_resources(input, DAYS_PER_SIX_MONTHS),
        what_if,
        delta,
        gate,
    )
}

/// Parse a usage diary directory and evaluate its most recent entry; the
/// entry before it (when present) feeds the rate-of-change section.
pub fn evaluate_diary_dir(input: &Path, opts: &EvaluateOptions) -> anyhow::Result<Report> {
    let parse_mode = if opts.strict {
        ParseMode::Strict
    } else {
        ParseMode::BestEffort
    };

    let parsed = diary::parse_diary_dir(input, parse_mode, opts.max_total_bytes_scanned)
        .with_context(|| format!("failed to parse usage diary at {}", input.display()))?;

    let current = parsed
        .entries
        .last()
        .with_context(|| format!("no diary entries found under {}", input.display()))?;
    let previous = parsed.entries.len().checked_sub(2).map(|i| &parsed.entries[i]);

    let mut report = evaluate(
        &current.consumption,
        previous.map(|e| &e.consumption),
        opts,
    );
    report.inputs.sources = parsed.sources;

    Ok(report)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
