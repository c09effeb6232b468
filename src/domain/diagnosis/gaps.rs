//! Gap Analyzer - Divergence between two respondents' axis scores.

use serde::{Deserialize, Serialize};

use super::AxisScores;
use crate::domain::catalog::DiagnosisCatalog;
use crate::domain::foundation::Axis;

/// Gaps below this are not reported.
pub const GAP_CHECK_THRESHOLD: u8 = 12;

/// Gaps at or above this are risks.
pub const GAP_RISK_THRESHOLD: u8 = 20;

/// How far apart two respondents are on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Ok,
    Check,
    Risk,
}

/// One reported divergence with the questions that help resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRecord {
    pub axis: Axis,
    pub gap: u8,
    pub severity: GapSeverity,
    pub alignment_questions: Vec<String>,
}

/// Compares two respondents axis by axis.
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Grades a gap: < 12 ok, 12..=19 check, ≥ 20 risk.
    pub fn classify(gap: u8) -> GapSeverity {
        if gap >= GAP_RISK_THRESHOLD {
            GapSeverity::Risk
        } else if gap >= GAP_CHECK_THRESHOLD {
            GapSeverity::Check
        } else {
            GapSeverity::Ok
        }
    }

    /// Lists every non-ok axis, largest gap first.
    ///
    /// # Edge Cases
    /// - Equal gaps keep axis enumeration order
    /// - Axes with no alignment questions in the catalog get an empty list
    /// - Symmetric: swapping `a` and `b` yields the same records
    pub fn analyze(a: &AxisScores, b: &AxisScores, catalog: &DiagnosisCatalog) -> Vec<GapRecord> {
        let mut records: Vec<GapRecord> = Axis::all()
            .iter()
            .filter_map(|axis| {
                let gap = a.get(*axis).distance(b.get(*axis));
                match Self::classify(gap) {
                    GapSeverity::Ok => None,
                    severity => Some(GapRecord {
                        axis: *axis,
                        gap,
                        severity,
                        alignment_questions: catalog.alignment_questions(*axis).to_vec(),
                    }),
                }
            })
            .collect();

        records.sort_by(|x, y| y.gap.cmp(&x.gap));
        records
    }
}
