//! Session-level flows through config, reference tables and scripts.

use osm_app::{Action, AppError, Mode, Session, load_config, load_script};
use osm_engine::Tonicity;

fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create scratch dir")
}

#[test]
fn config_with_custom_table_and_band() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    std::fs::write(
        dir.join("fluids.yaml"),
        "solutions:\n  - key: plasma-lyte\n    name: Plasma-Lyte A\n    osmolarity: 294\n",
    )
    .unwrap();
    let config_path = dir.join("osmoflow.yaml");
    std::fs::write(
        &config_path,
        "reference_table: fluids.yaml\ntonicity_band:\n  lower: 295\n  upper: 310\n",
    )
    .unwrap();

    let config = load_config(&config_path).expect("config should load");
    let mut session = Session::from_config(&config).expect("session should build");
    assert_eq!(session.table().len(), 1);

    session.replay([
        Action::SelectMode { mode: Mode::Preset },
        Action::SelectPreset {
            key: "plasma-lyte".into(),
        },
        Action::Calculate,
    ]);
    let result = session.state().result.expect("plasma-lyte resolves");
    assert_eq!(result.osmolarity, 294.0);
    assert_eq!(result.tonicity, Tonicity::Hypotonic);
}

#[test]
fn missing_reference_file_fails_session() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let config_path = dir.join("osmoflow.yaml");
    std::fs::write(&config_path, "reference_table: nope.yaml\n").unwrap();

    let config = load_config(&config_path).unwrap();
    let err = Session::from_config(&config).unwrap_err();
    assert!(matches!(err, AppError::ReferenceRead { .. }));
}

#[test]
fn replayed_script_matches_manual_dispatch() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let script_path = dir.join("multi.yaml");
    std::fs::write(
        &script_path,
        r#"
- action: select_mode
  mode: multiple
- action: update_solute
  index: 0
  field: concentration
  value: "9.0"
- action: update_solute
  index: 0
  field: molecular_weight
  value: "58.44"
- action: update_solute
  index: 0
  field: dissociation_factor
  value: "2"
- action: add_solute
- action: update_solute
  index: 1
  field: concentration
  value: "5.0"
- action: update_solute
  index: 1
  field: molecular_weight
  value: "180.16"
- action: calculate
"#,
    )
    .unwrap();

    let script = load_script(&script_path).expect("script should parse");
    let mut session = Session::default();
    let state = session.replay(script.actions);

    let result = state.result.expect("multi-solute result");
    assert!((result.osmolarity - 335.761).abs() < 1e-3);
    assert_eq!(result.tonicity, Tonicity::Hypertonic);
    assert!(state.issues.is_empty());
}

#[test]
fn unknown_preset_leaves_previous_result() {
    let mut session = Session::default();
    session.replay([
        Action::SelectMode { mode: Mode::Preset },
        Action::SelectPreset {
            key: "half-saline".into(),
        },
        Action::Calculate,
    ]);
    let before = session.state().clone();

    session.dispatch(Action::SelectPreset {
        key: "unknown-key".into(),
    });
    let after_select = session.state().clone();
    session.dispatch(Action::Calculate);

    assert_eq!(session.state(), &after_select);
    assert_eq!(session.state().result, before.result);
}
