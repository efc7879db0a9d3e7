//! End-to-end checks of the engine's published behaviour.

use osm_engine::{
    CalculationResult, ReferenceSolution, ReferenceTable, SoluteInput, SoluteRow, Tonicity,
    TonicityBand, aggregate_multiple_solutes, aggregate_rows, builtin_reference_table,
    classify_tonicity, compute_osmolarity,
};

#[test]
fn normal_saline_by_formula() {
    let osm = compute_osmolarity(9.0, 58.44, 2).expect("valid saline input");
    let result = CalculationResult::from_osmolarity(osm, &TonicityBand::default());

    assert!((result.osmolarity - 308.0082).abs() < 1e-4);
    assert_eq!(result.osmolality, result.osmolarity);
    assert_eq!(result.tonicity, Tonicity::Isotonic);
    assert_eq!(result.osmolarity_display(1), "308.0");
}

#[test]
fn tonicity_boundaries() {
    assert_eq!(classify_tonicity(279.9), Tonicity::Hypotonic);
    assert_eq!(classify_tonicity(280.0), Tonicity::Isotonic);
    assert_eq!(classify_tonicity(320.0), Tonicity::Isotonic);
    assert_eq!(classify_tonicity(320.1), Tonicity::Hypertonic);
}

#[test]
fn multiple_solutes_sum_to_hypertonic() {
    let inputs = [
        SoluteInput::new(9.0, 58.44, 2),
        SoluteInput::new(5.0, 180.16, 1),
    ];
    let total = aggregate_multiple_solutes(&inputs);
    let expected = compute_osmolarity(9.0, 58.44, 2).unwrap()
        + compute_osmolarity(5.0, 180.16, 1).unwrap();

    assert_eq!(total, expected);
    assert!((total - 335.761).abs() < 1e-3);
    assert_eq!(classify_tonicity(total), Tonicity::Hypertonic);
}

#[test]
fn empty_and_invalid_rows_sum_to_zero() {
    assert_eq!(aggregate_multiple_solutes(&[]), 0.0);

    let report = aggregate_rows(&[
        SoluteRow::default(),
        SoluteRow::new("9.0", "0", "2"),
        SoluteRow::new("x", "58.44", "2"),
    ]);
    assert_eq!(report.total, 0.0);
    // The blank row reports both empty measurements.
    assert_eq!(report.issues().len(), 4);
}

#[test]
fn reference_lookup() {
    let table = builtin_reference_table();
    let saline = table.lookup("normal-saline").expect("normal saline present");
    let result = CalculationResult::from_reference(saline, &TonicityBand::default());

    assert_eq!(result.osmolarity, 308.0);
    assert_eq!(result.osmolality, 308.0);
    assert_eq!(result.tonicity, Tonicity::Isotonic);

    assert!(table.lookup("unknown-key").is_none());
}

#[test]
fn reference_tonicity_spread() {
    let table = builtin_reference_table();
    let band = TonicityBand::default();
    let tonicity = |key: &str| {
        let entry = table.lookup(key).unwrap();
        CalculationResult::from_reference(entry, &band).tonicity
    };

    assert_eq!(tonicity("half-saline"), Tonicity::Hypotonic);
    assert_eq!(tonicity("d5w"), Tonicity::Hypotonic);
    assert_eq!(tonicity("lactated-ringers"), Tonicity::Hypotonic);
    assert_eq!(tonicity("d5-normal-saline"), Tonicity::Hypertonic);
    assert_eq!(tonicity("mannitol-20"), Tonicity::Hypertonic);
    assert_eq!(tonicity("sodium-bicarbonate"), Tonicity::Hypertonic);
}

#[test]
fn injected_table_replaces_builtin() {
    let table = ReferenceTable::from_entries(vec![ReferenceSolution {
        key: "seawater".into(),
        name: "Seawater".into(),
        osmolarity: 1000.0,
        osmolality: 1050.0,
    }])
    .unwrap();

    let entry = table.lookup("seawater").unwrap();
    let result = CalculationResult::from_reference(entry, &TonicityBand::default());
    assert_eq!(result.osmolality, 1050.0);
    assert!(table.lookup("normal-saline").is_none());
}
