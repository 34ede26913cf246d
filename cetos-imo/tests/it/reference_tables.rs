use crate::helper::*;
use cetos_core::VesselType;
use cetos_imo::*;
use std::{io::Write, sync::Arc};
use tempfile::NamedTempFile;

fn write_tables(tables: &ReferenceTables) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    // JSON is a subset of YAML
    file.write_all(serde_json::to_string_pretty(tables).unwrap().as_bytes())
        .unwrap();
    file
}

#[test]
fn test_tables_loaded_from_file_match_built_in_tables() {
    test(|_helper| {
        let built_in = ReferenceTables::imo_2020();
        let file = write_tables(&built_in);

        let loaded = ReferenceTables::from_file(file.path()).unwrap();
        assert_eq!(loaded, *built_in);
    });
}

#[test]
fn test_incomplete_tables_file_is_rejected() {
    test(|_helper| {
        let mut tables = (*ReferenceTables::imo_2020()).clone();
        tables
            .speed_power
            .weather_correction
            .retain(|w| w.vessel_type != VesselType::Cruise);
        let file = write_tables(&tables);

        let err = ReferenceTables::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorDiscriminants::InvalidTables);
    });
}

#[test]
fn test_missing_tables_file_is_a_config_error() {
    test(|_helper| {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceTables::from_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorDiscriminants::Config);
    });
}

#[test]
fn test_estimator_uses_replaced_tables() {
    test(|helper| {
        let shared = SharedReferenceTables::default();
        let before = helper
            .estimator
            .clone()
            .with_tables(shared.snapshot())
            .estimate(&ferry_pax(), &ferry_reference_profile())
            .unwrap();

        let mut tables = (*shared.snapshot()).clone();
        for table in tables
            .auxiliary_power
            .iter_mut()
            .filter(|t| t.vessel_type == VesselType::FerryPax)
        {
            for band in table.bands.iter_mut() {
                band.at_berth.auxiliary_engine_kw *= 2.;
            }
        }
        shared.replace(tables).unwrap();

        let after = helper
            .estimator
            .clone()
            .with_tables(shared.snapshot())
            .estimate(&ferry_pax(), &ferry_reference_profile())
            .unwrap();

        assert_relative_eq(after.at_berth.subtotal_kg, before.at_berth.subtotal_kg * 2.);
        assert_eq!(after.at_sea, before.at_sea);
        assert!(Arc::ptr_eq(helper.estimator.tables(), &ReferenceTables::imo_2020()));
    });
}
