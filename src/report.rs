// WHY: Presentation helpers for callers: bands, ordering, filtering, summaries and exports
// Kept separate from the pipeline so analysis results stay caller-owned and format-free

use serde::Serialize;
use std::fmt::Write as _;

use crate::analysis::SentenceResult;
use crate::classifier::{RiskBand, RiskLabel};
use crate::rewrite::RewriteEngine;
use crate::triggers::{detect_category_hits, TriggerCategory};

/// Labels at or above this value are called out as high risk
pub const HIGH_RISK_THRESHOLD: RiskLabel = RiskLabel::MODERATE;

/// CSV header matching the exported columns
pub const CSV_HEADER: [&str; 5] = ["Sentence", "Risk label", "Band", "Categories", "Suggested neutral rewrite"];

/// Trigger phrase that put a sentence into a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerHit {
    pub category: TriggerCategory,
    pub phrase: &'static str,
}

/// One display row per analyzed sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Position in the original text
    pub order: usize,
    pub sentence: String,
    pub label: RiskLabel,
    pub band: RiskBand,
    pub categories: Vec<TriggerCategory>,
    /// First matching phrase for each category, in category order
    pub triggers: Vec<TriggerHit>,
    /// Empty when rewrites were not requested
    pub rewrite: String,
}

impl ReportRow {
    /// Categories joined the way they are displayed and exported
    pub fn categories_joined(&self) -> String {
        self.categories
            .iter()
            .map(TriggerCategory::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Row ordering for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Original,
    RiskDesc,
    RiskAsc,
}

/// Build display rows, computing rewrites on demand
pub fn build_report(results: &[SentenceResult], engine: &RewriteEngine, with_rewrites: bool) -> Vec<ReportRow> {
    results
        .iter()
        .enumerate()
        .map(|(order, result)| ReportRow {
            order,
            sentence: result.sentence.clone(),
            label: result.label,
            band: result.label.band(),
            categories: result.categories.clone(),
            triggers: detect_category_hits(&result.sentence)
                .into_iter()
                .map(|(category, phrase)| TriggerHit { category, phrase })
                .collect(),
            rewrite: if with_rewrites { engine.rewrite(&result.sentence) } else { String::new() },
        })
        .collect()
}

/// Sort rows; ties on label keep original order
pub fn sort_rows(rows: &mut [ReportRow], order: SortOrder) {
    match order {
        SortOrder::Original => rows.sort_by_key(|row| row.order),
        SortOrder::RiskDesc => rows.sort_by(|a, b| b.label.cmp(&a.label).then(a.order.cmp(&b.order))),
        SortOrder::RiskAsc => rows.sort_by(|a, b| a.label.cmp(&b.label).then(a.order.cmp(&b.order))),
    }
}

/// Keep rows whose label is at least `min`
pub fn filter_min_risk(rows: Vec<ReportRow>, min: RiskLabel) -> Vec<ReportRow> {
    rows.into_iter().filter(|row| row.label >= min).collect()
}

/// Per-label counts, zero-filled for labels that never occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LabelSummary {
    pub counts: [usize; 4],
}

impl LabelSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut counts = [0usize; 4];
        for row in rows {
            counts[row.label.value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, label: RiskLabel) -> usize {
        self.counts[label.value() as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn high_risk(&self) -> usize {
        RiskLabel::ALL
            .iter()
            .filter(|label| **label >= HIGH_RISK_THRESHOLD)
            .map(|label| self.count(*label))
            .sum()
    }
}

/// High-risk rows, highest label first then original order
pub fn high_risk_callouts(rows: &[ReportRow]) -> Vec<&ReportRow> {
    let mut callouts: Vec<&ReportRow> = rows.iter().filter(|row| row.label >= HIGH_RISK_THRESHOLD).collect();
    callouts.sort_by(|a, b| b.label.cmp(&a.label).then(a.order.cmp(&b.order)));
    callouts
}

/// Plain-text block per row
pub fn render_text(rows: &[ReportRow], with_rewrites: bool) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "Sentence: {}", row.sentence);
        let _ = writeln!(out, "  Risk label: {} ({})", row.label, row.band);
        let _ = writeln!(out, "  Categories: {}", row.categories_joined());
        if with_rewrites {
            let _ = writeln!(out, "  Suggestion: {}", row.rewrite);
        }
        out.push('\n');
    }
    out
}

/// Label counts and high-risk callouts as plain text
pub fn render_summary(rows: &[ReportRow]) -> String {
    let summary = LabelSummary::from_rows(rows);
    let mut out = format!("Summary ({} sentences)\n", summary.total());
    for label in RiskLabel::ALL {
        let _ = writeln!(out, "  {} ({}): {}", label.band(), label, summary.count(label));
    }

    let callouts = high_risk_callouts(rows);
    let _ = writeln!(out, "High-risk callouts (risk >= {HIGH_RISK_THRESHOLD}): {}", summary.high_risk());
    if callouts.is_empty() {
        let _ = writeln!(out, "  No sentences scored {HIGH_RISK_THRESHOLD}-{} in this sample.", RiskLabel::HIGH);
    }
    for row in callouts {
        let _ = writeln!(out, "  [{} {}] {}", row.label, row.band, row.sentence);
    }
    out
}

/// CSV export with a header row; fields are quoted only when needed
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    push_csv_record(&mut out, CSV_HEADER.iter().map(|h| h.to_string()));
    for row in rows {
        push_csv_record(
            &mut out,
            [
                row.sentence.clone(),
                row.label.to_string(),
                row.band.to_string(),
                row.categories_joined(),
                row.rewrite.clone(),
            ]
            .into_iter(),
        );
    }
    out
}

fn push_csv_record(out: &mut String, fields: impl Iterator<Item = String>) {
    let record: Vec<String> = fields.map(|field| csv_field(&field)).collect();
    out.push_str(&record.join(","));
    out.push('\n');
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
