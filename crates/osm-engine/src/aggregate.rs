//! Multi-solute aggregation.
//!
//! Total osmolarity is the plain sum of each solute's contribution. Rows that
//! cannot be calculated are skipped rather than failing the whole sum; the
//! report variant records why.

use crate::field::{Field, FieldIssue, IssueKind};
use crate::solute::{SoluteInput, SoluteRow};
use osm_core::Real;
use serde::{Deserialize, Serialize};

/// Sum of the osmolarities of every valid input. Invalid inputs are skipped;
/// an empty or all-invalid slice sums to 0. A contribution that would push the
/// total past the finite range is skipped too.
pub fn aggregate_multiple_solutes(inputs: &[SoluteInput]) -> Real {
    inputs
        .iter()
        .filter_map(|input| input.osmolarity().ok())
        .fold(0.0, |total, osm| add_finite(total, osm).unwrap_or(total))
}

fn add_finite(total: Real, osm: Real) -> Option<Real> {
    Some(total + osm).filter(|sum| sum.is_finite())
}

/// Per-row outcome of [`aggregate_rows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowReport {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contribution in mOsm/L, `None` when the row was skipped
    #[serde(default)]
    pub osmolarity: Option<Real>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

impl RowReport {
    pub fn is_included(&self) -> bool {
        self.osmolarity.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// mOsm/L
    pub total: Real,
    pub rows: Vec<RowReport>,
}

impl AggregateReport {
    pub fn included_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_included()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &RowReport> {
        self.rows.iter().filter(|r| !r.is_included())
    }

    /// Every issue, tagged with the row it came from.
    pub fn issues(&self) -> Vec<(usize, FieldIssue)> {
        self.rows
            .iter()
            .flat_map(|row| row.issues.iter().cloned().map(move |issue| (row.index, issue)))
            .collect()
    }
}

/// Parse and sum raw form rows, keeping a report of which rows contributed.
///
/// The total equals [`aggregate_multiple_solutes`] over the rows that parse.
pub fn aggregate_rows(rows: &[SoluteRow]) -> AggregateReport {
    let mut total = 0.0;
    let mut reports = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let name = Some(row.name.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let (osmolarity, issues) = match row.parse() {
            Ok(input) => match input.osmolarity() {
                Ok(osm) => match add_finite(total, osm) {
                    Some(sum) => {
                        total = sum;
                        (Some(osm), Vec::new())
                    }
                    None => (None, vec![overflow_issue(total, osm)]),
                },
                Err(err) => (None, vec![err.into_field_issue()]),
            },
            Err(issues) => (None, issues),
        };

        reports.push(RowReport {
            index,
            name,
            osmolarity,
            issues,
        });
    }

    AggregateReport {
        total,
        rows: reports,
    }
}

fn overflow_issue(total: Real, osm: Real) -> FieldIssue {
    FieldIssue::new(
        Field::Concentration,
        IssueKind::OutOfRange {
            reason: format!("adding {osm} mOsm/L to {total} mOsm/L overflows the total"),
        },
    )
}
