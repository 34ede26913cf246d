use crate::helper::*;
use cetos_core::{EngineAge, EngineType, FuelType, OperationMode, VoyageProfile};
use cetos_imo::*;

#[test]
fn test_ferry_reference_voyage_matches_pinned_breakdown() {
    test(|helper| {
        let fuel = helper
            .estimator
            .estimate(&ferry_pax(), &ferry_reference_profile())
            .unwrap();

        assert_relative_eq(fuel.at_berth.subtotal_kg, 351.5);
        assert_relative_eq(fuel.anchored.subtotal_kg, 351.5);
        assert_relative_eq(fuel.manoeuvring.propulsion_engines_kg, 186.05606647753453);
        assert_relative_eq(fuel.manoeuvring.auxiliary_engines_kg, 35.15);
        assert_relative_eq(fuel.manoeuvring.subtotal_kg, 221.20606647753453);
        assert_relative_eq(fuel.at_sea.propulsion_engines_kg, 1116.3363988652072);
        assert_relative_eq(fuel.at_sea.auxiliary_engines_kg, 210.9);
        assert_relative_eq(fuel.at_sea.subtotal_kg, 1327.2363988652073);
        assert_relative_eq(fuel.total_kg, 2251.442465342742);
        assert_relative_eq(
            fuel.at_sea.average_fuel_consumption_l_per_nm.unwrap(),
            24.715761617601625,
        );

        let leg = fuel.at_sea.legs[0];
        assert_relative_eq(leg.transit_time_h, 3.);
        assert_relative_eq(leg.load_factor, 0.8028247434339959);
        assert_relative_eq(leg.sfc_g_per_kwh, 175.56953328366373);
        assert_eq!(fuel.at_sea.steam_boilers_kg, Some(0.));
    });
}

#[test]
fn test_total_is_sum_of_modes() {
    test(|helper| {
        let fuel = helper
            .estimator
            .estimate(&ferry_pax(), &ferry_reference_profile())
            .unwrap();

        let sum: f64 = fuel.modes().map(|(_, kg)| kg).sum();
        assert_relative_eq(fuel.total_kg, sum);
        for (mode, kg) in fuel.modes() {
            assert!(kg > 0., "{mode}");
        }
        assert_relative_eq(fuel.total_tonnes(), fuel.total_kg / 1000.);
        assert_relative_eq(fuel.total_volume_m3(), fuel.total_kg / 895.);
    });
}

#[test]
fn test_empty_profile_burns_no_fuel() {
    test(|helper| {
        let fuel = helper
            .estimator
            .estimate(&ferry_pax(), &VoyageProfile::default())
            .unwrap();

        assert_eq!(fuel.total_kg, 0.);
        assert!(fuel.at_sea.legs.is_empty());
        assert_eq!(fuel.at_sea.average_fuel_consumption_l_per_nm, None);
    });
}

#[test]
fn test_low_load_legs_burn_no_propulsion_fuel() {
    test(|helper| {
        let fuel = helper
            .estimator
            .estimate(&ferry_pax(), &ferry_daily_profile())
            .unwrap();

        assert_eq!(fuel.manoeuvring.propulsion_engines_kg, 0.);
        assert_relative_eq(fuel.manoeuvring.subtotal_kg, 7.03);
        assert_relative_eq(fuel.at_sea.propulsion_engines_kg, 322.7429103853059);
        assert_relative_eq(fuel.anchored.subtotal_kg, 17.575);
        assert_relative_eq(fuel.at_berth.subtotal_kg, 70.3);
        assert_relative_eq(fuel.total_kg, 476.23124371863923);

        let unlimited = helper
            .with_settings(EstimationSettings::default().limit_low_load(false))
            .estimate(&ferry_pax(), &ferry_daily_profile())
            .unwrap();
        assert_relative_eq(unlimited.manoeuvring.propulsion_engines_kg, 3.4554826667716494);
    });
}

#[test]
fn test_steam_boilers_can_be_excluded() {
    test(|helper| {
        let with_boilers = helper
            .estimator
            .estimate(&oil_tanker(), &oil_tanker_profile())
            .unwrap();
        assert_relative_eq(with_boilers.total_kg, 139639.7264100551);
        assert_relative_eq(with_boilers.at_berth.steam_boilers_kg.unwrap(), 22032.);
        assert_relative_eq(with_boilers.manoeuvring.subtotal_kg, 251.31627748830255);

        let without_boilers = helper
            .with_settings(EstimationSettings::default().include_steam_boilers(false))
            .estimate(&oil_tanker(), &oil_tanker_profile())
            .unwrap();
        assert_relative_eq(without_boilers.total_kg, 110086.68355291223);
        assert_eq!(without_boilers.at_berth.steam_boilers_kg, None);
        assert_eq!(without_boilers.at_sea.steam_boilers_kg, None);
        assert_relative_eq(without_boilers.at_berth.subtotal_kg, 3369.6);
    });
}

#[test]
fn test_double_ended_vessels_use_half_installed_power() {
    test(|helper| {
        let fuel = helper
            .estimator
            .estimate(&double_ended_ropax(), &ropax_profile())
            .unwrap();
        assert_relative_eq(fuel.total_kg, 8177.046707669286);
        assert_relative_eq(fuel.at_sea.propulsion_engines_kg, 4209.121707669286);
        assert_eq!(fuel.anchored.subtotal_kg, 0.);

        let corrected = helper
            .with_settings(EstimationSettings::default().speed_power_correction(0.5))
            .estimate(&double_ended_ropax(), &ropax_profile())
            .unwrap();
        assert_relative_eq(corrected.total_kg, 6161.5697866696055);
    });
}

#[test]
fn test_increasing_speed_increases_at_sea_fuel() {
    test(|helper| {
        let mut previous = 0.;
        for speed in [6., 8., 10., 12., 13.5, 15.] {
            let profile =
                VoyageProfile::new(0., 0., vec![], vec![leg(30., speed, 2.8)]).unwrap();
            let fuel = helper.estimator.estimate(&ferry_pax(), &profile).unwrap();
            assert!(fuel.at_sea.subtotal_kg > previous, "speed: {speed}");
            previous = fuel.at_sea.subtotal_kg;
        }
    });
}

#[test]
fn test_doubling_anchor_time_doubles_anchor_fuel_only() {
    test(|helper| {
        let base = helper
            .estimator
            .estimate(&ferry_pax(), &ferry_reference_profile())
            .unwrap();
        let reference = ferry_reference_profile();
        let doubled = VoyageProfile::new(
            reference.time_anchored_h() * 2.,
            reference.time_at_berth_h(),
            reference.legs_manoeuvring().to_vec(),
            reference.legs_at_sea().to_vec(),
        )
        .unwrap();
        let fuel = helper.estimator.estimate(&ferry_pax(), &doubled).unwrap();

        assert_relative_eq(fuel.anchored.subtotal_kg, base.anchored.subtotal_kg * 2.);
        for mode in [
            OperationMode::AtSea,
            OperationMode::Manoeuvring,
            OperationMode::AtBerth,
        ] {
            assert_eq!(fuel.mode_kg(mode), base.mode_kg(mode));
        }
    });
}

#[test]
fn test_estimation_is_deterministic() {
    test(|helper| {
        let first = helper
            .estimator
            .estimate(&oil_tanker(), &oil_tanker_profile())
            .unwrap();
        let second = helper
            .estimator
            .estimate(&oil_tanker(), &oil_tanker_profile())
            .unwrap();
        assert_eq!(first, second);
    });
}

#[test]
fn test_propulsion_fuel_is_additive_across_legs() {
    test(|helper| {
        let vessel = oil_tanker();
        let reference = oil_tanker_profile();

        let combined = helper.estimator.estimate(&vessel, &reference).unwrap();
        let split: f64 = reference
            .legs_at_sea()
            .iter()
            .map(|l| {
                let profile = VoyageProfile::new(0., 0., vec![], vec![*l]).unwrap();
                helper
                    .estimator
                    .estimate(&vessel, &profile)
                    .unwrap()
                    .at_sea
                    .propulsion_engines_kg
            })
            .sum();

        assert_relative_eq(combined.at_sea.propulsion_engines_kg, split);
    });
}

#[test]
fn test_undefined_engine_combinations_fail_without_legs() {
    test(|helper| {
        for (engine_type, engine_age, fuel_type) in [
            (EngineType::LeanBurnSparkIgnited, EngineAge::After2000, FuelType::Mdo),
            (EngineType::LngOttoMediumSpeed, EngineAge::Before1984, FuelType::Lng),
            (EngineType::HighSpeedDiesel, EngineAge::After2000, FuelType::Methanol),
            (EngineType::GasTurbine, EngineAge::From1984To2000, FuelType::Lng),
        ] {
            let vessel = vessel_with_engine(engine_type, engine_age, fuel_type);
            let err = helper
                .estimator
                .estimate(&vessel, &VoyageProfile::default())
                .unwrap_err();
            assert_eq!(err.kind(), ErrorDiscriminants::SfcLookup, "{engine_type}");
        }
    });
}

#[test]
fn test_methanol_vessels_lack_auxiliary_baselines() {
    test(|helper| {
        let vessel = vessel_with_engine(
            EngineType::SlowSpeedDiesel,
            EngineAge::After2000,
            FuelType::Methanol,
        );
        let err = helper
            .estimator
            .estimate(&vessel, &VoyageProfile::default())
            .unwrap_err();
        assert!(err.is_lookup());
        assert!(err.to_string().contains("auxiliary_engine"));
    });
}

#[test]
fn test_invalid_speed_power_correction_is_rejected() {
    test(|helper| {
        let err = helper
            .with_settings(EstimationSettings::default().speed_power_correction(1.2))
            .estimate(&ferry_pax(), &ferry_reference_profile())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorDiscriminants::InvalidSetting);
    });
}

#[test]
fn test_breakdown_serializes_with_mode_names() {
    test(|helper| {
        let fuel = helper
            .with_settings(EstimationSettings::default().include_steam_boilers(false))
            .estimate(&ferry_pax(), &ferry_daily_profile())
            .unwrap();
        let value = serde_json::to_value(&fuel).unwrap();

        assert!(value.get("berth").is_some());
        assert!(value.get("anchor").is_some());
        assert!(value["at_sea"].get("steam_boilers_kg").is_none());
        assert_eq!(value["fuel_type"], "MDO");
    });
}
