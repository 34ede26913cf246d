use crate::helper::*;
use cetos_core::{OperationMode, VoyageProfile};
use cetos_imo::*;

#[test]
fn test_ferry_daily_voyage_energy() {
    test(|helper| {
        let energy = helper
            .estimator
            .estimate_energy(&ferry_pax(), &ferry_daily_profile())
            .unwrap();

        assert_relative_eq(energy.total_kwh, 2665.8879719801917);
        assert_relative_eq(energy.maximum_required_total_power_kw, 1291.732783188115);
        assert_relative_eq(energy.maximum_required_propulsion_power_kw, 1101.732783188115);

        assert_relative_eq(energy.at_berth.subtotal_kwh, 380.);
        assert_relative_eq(energy.anchored.subtotal_kwh, 95.);
        assert_eq!(energy.anchored.maximum_required_total_power_kw, 190.);

        assert_relative_eq(energy.manoeuvring.subtotal_kwh, 38.);
        assert_eq!(energy.manoeuvring.propulsion_engines_kwh, 0.);
        assert_eq!(energy.manoeuvring.maximum_required_propulsion_power_kw, 0.);
        assert_relative_eq(
            energy.manoeuvring.maximum_engine_load_percent.unwrap(),
            6.037659489798787,
        );

        assert_relative_eq(energy.at_sea.subtotal_kwh, 2152.8879719801917);
        assert_relative_eq(
            energy.at_sea.average_energy_consumption_kwh_per_nm.unwrap(),
            107.64439859900958,
        );
        assert_relative_eq(
            energy.at_sea.maximum_engine_load_percent.unwrap(),
            83.46460478697841,
        );
    });
}

#[test]
fn test_energy_total_is_sum_of_modes() {
    test(|helper| {
        let energy = helper
            .estimator
            .estimate_energy(&oil_tanker(), &oil_tanker_profile())
            .unwrap();

        let sum = [
            OperationMode::AtSea,
            OperationMode::Manoeuvring,
            OperationMode::AtBerth,
            OperationMode::Anchored,
        ]
        .into_iter()
        .map(|m| energy.mode_kwh(m))
        .sum::<f64>();
        assert_relative_eq(energy.total_kwh, sum);
        assert!(energy.at_berth.steam_boilers_kwh.unwrap() > 0.);
    });
}

#[test]
fn test_idle_stationary_modes_require_no_power() {
    test(|helper| {
        let profile = VoyageProfile::new(0., 0., vec![], vec![leg(10., 12., 2.8)]).unwrap();
        let energy = helper
            .with_settings(EstimationSettings::default().include_steam_boilers(false))
            .estimate_energy(&ferry_pax(), &profile)
            .unwrap();

        assert_eq!(energy.at_berth.maximum_required_total_power_kw, 0.);
        assert_eq!(energy.anchored.maximum_required_total_power_kw, 0.);
        assert_eq!(energy.at_sea.steam_boilers_kwh, None);
        assert_eq!(
            energy.maximum_required_total_power_kw,
            energy.at_sea.maximum_required_total_power_kw
        );
    });
}
