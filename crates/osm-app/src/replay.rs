//! Recorded action scripts.
//!
//! A script is a YAML (or JSON) list of [`Action`]s, for example:
//!
//! ```yaml
//! - action: select_mode
//!   mode: preset
//! - action: select_preset
//!   key: normal-saline
//! - action: calculate
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::form::Action;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionScript {
    pub actions: Vec<Action>,
}

impl ActionScript {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Script(format!("Failed to parse action script: {}", e)))
    }

    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Load a script; `.json` files are read as JSON, anything else as YAML.
pub fn load_script(path: &Path) -> AppResult<ActionScript> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScriptRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => ActionScript::from_json_str(&content),
        _ => ActionScript::from_yaml_str(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Mode;

    #[test]
    fn yaml_script_parses() {
        let script = ActionScript::from_yaml_str(
            "- action: select_mode\n  mode: preset\n- action: select_preset\n  key: d5w\n- action: calculate\n",
        )
        .unwrap();
        assert_eq!(script.actions.len(), 3);
        assert_eq!(script.actions[0], Action::SelectMode { mode: Mode::Preset });
    }

    #[test]
    fn json_script_parses() {
        let script =
            ActionScript::from_json_str(r#"[{"action":"add_solute"},{"action":"calculate"}]"#)
                .unwrap();
        assert_eq!(script.actions, vec![Action::AddSolute, Action::Calculate]);
    }

    #[test]
    fn unknown_action_is_script_error() {
        let err = ActionScript::from_yaml_str("- action: clear_result\n").unwrap_err();
        assert!(matches!(err, AppError::Script(_)));
    }
}
