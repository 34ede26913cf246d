use cetos_core::{
    EngineAge, EngineType, FuelType, VesselBuilder, VesselDescriptor, VesselType, VoyageLeg,
    VoyageProfile,
};
use cetos_imo::{EstimationSettings, FuelEstimator};
use std::sync::Once;
use tracing_subscriber::FmtSubscriber;

static TRACING: Once = Once::new();

pub struct TestHelper {
    pub estimator: FuelEstimator,
}

impl TestHelper {
    pub fn with_settings(&self, settings: EstimationSettings) -> FuelEstimator {
        self.estimator.clone().with_settings(settings)
    }
}

pub fn test<T>(test: T)
where
    T: FnOnce(TestHelper),
{
    TRACING.call_once(|| {
        tracing::subscriber::set_global_default(
            FmtSubscriber::builder()
                .with_max_level(tracing::Level::INFO)
                .with_test_writer()
                .finish(),
        )
        .unwrap();
    });

    test(TestHelper {
        estimator: FuelEstimator::default(),
    });
}

pub fn assert_relative_eq(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.);
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual: {actual}, expected: {expected}"
    );
}

pub fn leg(distance_nm: f64, speed_kn: f64, draft_m: f64) -> VoyageLeg {
    VoyageLeg::new(distance_nm, speed_kn, draft_m).unwrap()
}

pub fn ferry_pax() -> VesselDescriptor {
    VesselBuilder::new(
        VesselType::FerryPax,
        EngineType::MediumSpeedDiesel,
        EngineAge::After2000,
        FuelType::Mdo,
    )
    .length_m(39.8)
    .beam_m(10.46)
    .design_speed_kn(13.5)
    .design_draft_m(2.84)
    .number_of_propulsion_engines(4)
    .propulsion_engine_power_kw(330.)
    .size(686.)
    .build()
    .unwrap()
}

pub fn ferry_reference_profile() -> VoyageProfile {
    VoyageProfile::new(
        10.,
        10.,
        vec![leg(10., 10., 6.)],
        vec![leg(30., 10., 6.), leg(30., 10., 6.)],
    )
    .unwrap()
}

pub fn ferry_daily_profile() -> VoyageProfile {
    VoyageProfile::new(
        0.5,
        2.,
        vec![leg(0.5, 5., 2.8), leg(0.5, 5., 2.8)],
        vec![leg(10., 12., 2.8), leg(10., 12., 2.8)],
    )
    .unwrap()
}

pub fn oil_tanker() -> VesselDescriptor {
    VesselBuilder::new(
        VesselType::OilTanker,
        EngineType::SlowSpeedDiesel,
        EngineAge::After2000,
        FuelType::Hfo,
    )
    .length_m(200.)
    .beam_m(30.)
    .design_speed_kn(15.)
    .design_draft_m(12.)
    .propulsion_engine_power_kw(8_000.)
    .size(50_000.)
    .build()
    .unwrap()
}

pub fn oil_tanker_profile() -> VoyageProfile {
    VoyageProfile::new(
        10.,
        24.,
        vec![leg(2., 8., 12.), leg(2., 8., 10.)],
        vec![leg(500., 14., 12.), leg(500., 14., 10.)],
    )
    .unwrap()
}

pub fn double_ended_ropax() -> VesselDescriptor {
    VesselBuilder::new(
        VesselType::FerryRopax,
        EngineType::HighSpeedDiesel,
        EngineAge::After2000,
        FuelType::Mdo,
    )
    .length_m(180.)
    .beam_m(28.)
    .design_speed_kn(22.)
    .design_draft_m(6.5)
    .double_ended(true)
    .number_of_propulsion_engines(4)
    .propulsion_engine_power_kw(2_500.)
    .size(25_000.)
    .build()
    .unwrap()
}

pub fn ropax_profile() -> VoyageProfile {
    VoyageProfile::new(
        0.,
        4.,
        vec![leg(1., 8., 6.5); 4],
        vec![leg(50., 20., 6.5); 2],
    )
    .unwrap()
}

pub fn vessel_with_engine(
    engine_type: EngineType,
    engine_age: EngineAge,
    fuel_type: FuelType,
) -> VesselDescriptor {
    VesselBuilder::new(VesselType::GeneralCargo, engine_type, engine_age, fuel_type)
        .length_m(150.)
        .beam_m(23.)
        .design_speed_kn(18.)
        .design_draft_m(8.5)
        .propulsion_engine_power_kw(5_000.)
        .size(15_000.)
        .build()
        .unwrap()
}
