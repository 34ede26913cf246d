use crate::helper::*;
use cetos_core::VoyageProfile;

#[test]
fn test_propulsion_fuel_of_ferry_daily_voyage() {
    test(|helper| {
        let fuel = helper
            .estimator
            .estimate_propulsion(&ferry_pax(), &ferry_daily_profile())
            .unwrap();

        assert_relative_eq(fuel.propulsion_engines_kg, 322.7429103853059);
        assert_relative_eq(fuel.total_distance_nm, 21.);
        assert_relative_eq(
            fuel.average_fuel_consumption_l_per_nm.unwrap(),
            17.17174303726022,
        );
    });
}

#[test]
fn test_propulsion_fuel_equals_propulsion_share_of_breakdown() {
    test(|helper| {
        let vessel = oil_tanker();
        let profile = oil_tanker_profile();

        let propulsion = helper
            .estimator
            .estimate_propulsion(&vessel, &profile)
            .unwrap();
        let breakdown = helper.estimator.estimate(&vessel, &profile).unwrap();

        assert_relative_eq(
            propulsion.propulsion_engines_kg,
            breakdown.at_sea.propulsion_engines_kg + breakdown.manoeuvring.propulsion_engines_kg,
        );
    });
}

#[test]
fn test_propulsion_fuel_without_distance_has_no_average() {
    test(|helper| {
        let profile = VoyageProfile::new(3., 3., vec![], vec![]).unwrap();
        let fuel = helper
            .estimator
            .estimate_propulsion(&ferry_pax(), &profile)
            .unwrap();

        assert_eq!(fuel.propulsion_engines_kg, 0.);
        assert_eq!(fuel.average_fuel_consumption_l_per_nm, None);
    });
}

#[test]
fn test_propulsion_fuel_covers_manoeuvring_legs() {
    test(|helper| {
        let vessel = oil_tanker();
        let manoeuvring = vec![leg(2., 8., 12.), leg(3., 9., 10.)];
        let profile = VoyageProfile::new(0., 0., manoeuvring, vec![]).unwrap();

        let propulsion = helper
            .estimator
            .estimate_propulsion(&vessel, &profile)
            .unwrap();
        let breakdown = helper.estimator.estimate(&vessel, &profile).unwrap();

        assert!(propulsion.propulsion_engines_kg > 0.);
        assert_relative_eq(
            propulsion.propulsion_engines_kg,
            breakdown.manoeuvring.propulsion_engines_kg,
        );
        assert_relative_eq(propulsion.total_distance_nm, 5.);
    });
}
