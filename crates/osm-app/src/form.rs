//! Calculator form state and its reducer.
//!
//! The form is an immutable [`FormState`] value. Every user interaction is an
//! [`Action`], and [`reduce`] maps the current state plus one action to the
//! next state without side effects. Calculations are delegated to the engine.

use osm_engine::{
    AggregateReport, CalculationResult, Field, FieldIssue, ReferenceTable, SoluteRow,
    TonicityBand, aggregate_rows,
};
use serde::{Deserialize, Serialize};

/// Which calculator tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One solute typed by hand
    #[default]
    Manual,
    /// Several solutes summed
    Multiple,
    /// A reference solution picked from the table
    Preset,
}

/// Editable columns of a solute row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoluteField {
    Name,
    Concentration,
    MolecularWeight,
    DissociationFactor,
}

impl SoluteField {
    fn numeric(self) -> Option<Field> {
        match self {
            Self::Name => None,
            Self::Concentration => Some(Field::Concentration),
            Self::MolecularWeight => Some(Field::MolecularWeight),
            Self::DissociationFactor => Some(Field::DissociationFactor),
        }
    }
}

/// A validation issue from the latest calculation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowIssue {
    /// Solute row index in multiple mode, `None` for the manual fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(flatten)]
    pub issue: FieldIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SelectMode { mode: Mode },
    SetManualField { field: Field, value: String },
    AddSolute,
    RemoveSolute { index: usize },
    UpdateSolute {
        index: usize,
        field: SoluteField,
        value: String,
    },
    SelectPreset { key: String },
    Calculate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub mode: Mode,
    /// Manual fields; the row name is not used in this mode.
    pub manual: SoluteRow,
    pub solutes: Vec<SoluteRow>,
    pub selected_preset: Option<String>,
    /// Most recent result. Replaced by each calculation, never cleared.
    pub result: Option<CalculationResult>,
    /// Issues found by the most recent calculation attempt.
    pub issues: Vec<RowIssue>,
    /// Per-row contributions behind a multiple-mode result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AggregateReport>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            manual: SoluteRow::default(),
            solutes: vec![SoluteRow::default()],
            selected_preset: None,
            result: None,
            issues: Vec::new(),
            breakdown: None,
        }
    }
}

/// Next form state after `action`.
///
/// Editing actions never touch the result. `Calculate` behaves per mode:
/// - manual: a valid entry replaces the result, otherwise only the issues change
/// - multiple: the result is always replaced by the sum of the valid rows
/// - preset: a known key replaces the result, an unknown or missing key
///   leaves the state exactly as it was
pub fn reduce(
    state: &FormState,
    action: Action,
    table: &ReferenceTable,
    band: &TonicityBand,
) -> FormState {
    let mut next = state.clone();

    match action {
        Action::SelectMode { mode } => next.mode = mode,
        Action::SetManualField { field, value } => next.manual.set_text(field, value),
        Action::AddSolute => next.solutes.push(SoluteRow::default()),
        Action::RemoveSolute { index } => {
            // The last row stays so the form always has something to edit
            if next.solutes.len() > 1 && index < next.solutes.len() {
                next.solutes.remove(index);
            }
        }
        Action::UpdateSolute {
            index,
            field,
            value,
        } => {
            if let Some(row) = next.solutes.get_mut(index) {
                match field.numeric() {
                    Some(numeric) => row.set_text(numeric, value),
                    None => row.name = value,
                }
            }
        }
        Action::SelectPreset { key } => next.selected_preset = Some(key),
        Action::Calculate => return calculate(state, table, band),
    }

    next
}

fn calculate(state: &FormState, table: &ReferenceTable, band: &TonicityBand) -> FormState {
    let mut next = state.clone();

    match state.mode {
        Mode::Manual => match state.manual.parse() {
            Ok(input) => match input.osmolarity() {
                Ok(osm) => {
                    next.result = Some(CalculationResult::from_osmolarity(osm, band));
                    next.issues.clear();
                    next.breakdown = None;
                }
                Err(err) => {
                    next.issues = vec![RowIssue {
                        row: None,
                        issue: err.into_field_issue(),
                    }];
                }
            },
            Err(issues) => {
                next.issues = issues
                    .into_iter()
                    .map(|issue| RowIssue { row: None, issue })
                    .collect();
            }
        },
        Mode::Multiple => {
            let report = aggregate_rows(&state.solutes);
            next.result = Some(CalculationResult::from_osmolarity(report.total, band));
            next.issues = report
                .issues()
                .into_iter()
                .map(|(row, issue)| RowIssue {
                    row: Some(row),
                    issue,
                })
                .collect();
            next.breakdown = Some(report);
        }
        Mode::Preset => {
            let Some(solution) = state
                .selected_preset
                .as_deref()
                .and_then(|key| table.lookup(key))
            else {
                return next;
            };
            next.result = Some(CalculationResult::from_reference(solution, band));
            next.issues.clear();
            next.breakdown = None;
        }
    }

    next
}
