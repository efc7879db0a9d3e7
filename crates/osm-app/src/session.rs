//! A live calculator session.
//!
//! Wraps the pure reducer with the pieces a front end needs to hold on to:
//! the current form state, the shared reference table and the tonicity band.

use std::sync::Arc;

use osm_engine::{ReferenceTable, TonicityBand, builtin_reference_table};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::form::{Action, FormState, Mode, reduce};
use crate::reference_service::load_reference_table;

#[derive(Debug, Clone)]
pub struct Session {
    state: FormState,
    table: Arc<ReferenceTable>,
    band: TonicityBand,
}

impl Session {
    pub fn new(table: Arc<ReferenceTable>, band: TonicityBand) -> Self {
        Self {
            state: FormState::default(),
            table,
            band,
        }
    }

    /// Session using the configured band and reference table (built-in when unset).
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let table = match &config.reference_table {
            Some(path) => {
                let table = load_reference_table(path)?;
                info!(path = %path.display(), entries = table.len(), "loaded reference table");
                table
            }
            None => builtin_reference_table(),
        };
        Ok(Self::new(Arc::new(table), config.tonicity_band))
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn band(&self) -> &TonicityBand {
        &self.band
    }

    /// Apply one action and return the new state.
    pub fn dispatch(&mut self, action: Action) -> &FormState {
        debug!(?action, "dispatch");
        let is_calculate = matches!(action, Action::Calculate);

        let next = reduce(&self.state, action, &self.table, &self.band);

        if is_calculate {
            let preset_missing = next.mode == Mode::Preset
                && next
                    .selected_preset
                    .as_deref()
                    .and_then(|key| self.table.lookup(key))
                    .is_none();

            if preset_missing {
                warn!(
                    key = next.selected_preset.as_deref().unwrap_or(""),
                    "no reference solution for selected key"
                );
            } else if next.issues.is_empty() || next.mode == Mode::Multiple {
                if let Some(result) = &next.result {
                    info!(
                        mode = ?next.mode,
                        osmolarity = result.osmolarity,
                        tonicity = %result.tonicity,
                        "calculated"
                    );
                }
            }
            if !next.issues.is_empty() {
                debug!(issues = next.issues.len(), "calculation reported issues");
            }
        }

        self.state = next;
        &self.state
    }

    pub fn replay<I>(&mut self, actions: I) -> &FormState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Arc::new(builtin_reference_table()), TonicityBand::default())
    }
}
