//! Plain-text rendering shared by front ends.

use osm_engine::{CalculationResult, ReferenceSolution, TonicityBand};

use crate::form::RowIssue;

pub fn render_result(result: &CalculationResult, precision: usize) -> String {
    format!(
        "Calculation Results\n  Osmolarity: {} mOsm/L\n  Osmolality: {} mOsm/kg\n  Tonicity:   {}\n",
        result.osmolarity_display(precision),
        result.osmolality_display(precision),
        result.tonicity
    )
}

pub fn render_issues(issues: &[RowIssue]) -> String {
    let mut out = String::new();
    for issue in issues {
        match issue.row {
            Some(row) => out.push_str(&format!("  row {}: {}\n", row + 1, issue.issue)),
            None => out.push_str(&format!("  {}\n", issue.issue)),
        }
    }
    out
}

pub fn render_reference_list(entries: &[&ReferenceSolution]) -> String {
    let key_width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "  {:<kw$}  {:<nw$}  {:>6} mOsm/L\n",
            entry.key,
            entry.name,
            entry.osmolarity,
            kw = key_width,
            nw = name_width
        ));
    }
    out
}

pub fn render_formula_info(band: &TonicityBand) -> String {
    format!(
        "Osmolarity = (C × i × 1000) / MW\n  \
         C  = Concentration (g/L)\n  \
         i  = Dissociation factor\n  \
         MW = Molecular weight (g/mol)\n\
         Reference values:\n  \
         Hypotonic:  < {lo} mOsm/L\n  \
         Isotonic:   {lo}-{hi} mOsm/L\n  \
         Hypertonic: > {hi} mOsm/L\n",
        lo = band.lower(),
        hi = band.upper()
    )
}
