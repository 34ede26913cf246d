// Source: Fourth IMO GHG Study 2020, full report and annexes.
//  https://wwwcdn.imo.org/localresources/en/OurWork/Environment/Documents/Fourth%20IMO%20GHG%20Study%202020%20-%20Full%20report%20and%20annexes.pdf
use super::{
    AuxiliaryPower, AuxiliaryPowerBand, AuxiliaryPowerTable, LoadCorrection, Machinery,
    ReferenceTables, SfcBaseline, SmallVesselCorrection, SpeedPowerCorrection,
    SpeedPowerReference, WeatherCorrection,
};
use cetos_core::{EngineAge as A, FuelType as F, VesselType as V};
use Machinery as M;

const AGES: [A; 3] = [A::Before1984, A::From1984To2000, A::After2000];

/// Table 19, g/kWh per engine age. `None` marks combinations without a baseline.
#[rustfmt::skip]
static SFC_BASELINES: &[(M, F, [Option<f64>; 3])] = &[
    (M::SlowSpeedDiesel, F::Hfo, [Some(205.), Some(185.), Some(175.)]),
    (M::SlowSpeedDiesel, F::Mdo, [Some(190.), Some(175.), Some(165.)]),
    (M::SlowSpeedDiesel, F::Methanol, [None, None, Some(350.)]),
    (M::MediumSpeedDiesel, F::Hfo, [Some(215.), Some(195.), Some(185.)]),
    (M::MediumSpeedDiesel, F::Mdo, [Some(200.), Some(185.), Some(175.)]),
    (M::MediumSpeedDiesel, F::Methanol, [None, None, Some(370.)]),
    (M::HighSpeedDiesel, F::Hfo, [Some(225.), Some(205.), Some(195.)]),
    (M::HighSpeedDiesel, F::Mdo, [Some(210.), Some(190.), Some(185.)]),
    (M::LngOttoMediumSpeed, F::Lng, [None, Some(173.), Some(156.)]),
    (M::LeanBurnSparkIgnited, F::Lng, [None, Some(156.), Some(156.)]),
    (M::GasTurbine, F::Hfo, [Some(305.), Some(305.), Some(305.)]),
    (M::GasTurbine, F::Mdo, [Some(300.), Some(300.), Some(300.)]),
    (M::GasTurbine, F::Lng, [None, None, Some(203.)]),
    (M::SteamTurbine, F::Hfo, [Some(340.), Some(340.), Some(340.)]),
    (M::SteamTurbine, F::Mdo, [Some(320.), Some(320.), Some(320.)]),
    (M::SteamTurbine, F::Lng, [Some(285.), Some(285.), Some(285.)]),
    (M::SteamBoiler, F::Hfo, [Some(340.), Some(340.), Some(340.)]),
    (M::SteamBoiler, F::Mdo, [Some(320.), Some(320.), Some(320.)]),
    (M::SteamBoiler, F::Lng, [Some(285.), Some(285.), Some(285.)]),
    (M::AuxiliaryEngine, F::Hfo, [Some(225.), Some(205.), Some(195.)]),
    (M::AuxiliaryEngine, F::Mdo, [Some(210.), Some(190.), Some(185.)]),
    (M::AuxiliaryEngine, F::Lng, [None, None, Some(156.)]),
];

/// Table 17, page 68. Each row is the lower size bound of the band followed by the boiler
/// demand at berth, anchored, manoeuvring and at sea, then the auxiliary engine demand
/// in the same mode order, all in kW.
#[rustfmt::skip]
static AUXILIARY_POWER: &[(V, &[(f64, [f64; 8])])] = &[
    (V::BulkCarrier, &[
        (0., [70., 70., 60., 0., 110., 180., 500., 190.]),
        (10_000., [70., 70., 60., 0., 110., 180., 500., 190.]),
        (35_000., [130., 130., 120., 0., 150., 250., 680., 260.]),
        (60_000., [260., 260., 240., 0., 240., 400., 1_100., 410.]),
        (100_000., [260., 260., 240., 0., 240., 400., 1_100., 410.]),
        (200_000., [260., 260., 240., 0., 240., 400., 1_100., 410.]),
    ]),
    (V::ChemicalTanker, &[
        (0., [670., 160., 130., 0., 110., 170., 190., 200.]),
        (5_000., [670., 160., 130., 0., 330., 490., 560., 580.]),
        (10_000., [1_000., 240., 200., 0., 330., 490., 560., 580.]),
        (20_000., [1_350., 320., 270., 0., 790., 550., 900., 660.]),
        (40_000., [1_350., 320., 270., 0., 790., 550., 900., 660.]),
    ]),
    (V::Container, &[
        (0., [250., 250., 240., 0., 370., 450., 790., 410.]),
        (1_000., [340., 340., 310., 0., 820., 910., 1_750., 900.]),
        (2_000., [460., 450., 430., 0., 610., 910., 1_900., 920.]),
        (3_000., [480., 480., 430., 0., 1_100., 1_350., 2_500., 1_400.]),
        (5_000., [590., 580., 550., 0., 1_100., 1_400., 2_800., 1_450.]),
        (8_000., [620., 620., 540., 0., 1_150., 1_600., 2_900., 1_800.]),
        (12_000., [630., 630., 630., 0., 1_300., 1_800., 3_250., 2_050.]),
        (14_500., [630., 630., 630., 0., 1_400., 1_950., 3_600., 2_300.]),
        (20_000., [700., 700., 700., 0., 1_400., 1_950., 3_600., 2_300.]),
    ]),
    (V::GeneralCargo, &[
        (0., [0., 0., 0., 0., 90., 50., 180., 60.]),
        (5_000., [110., 110., 100., 0., 240., 130., 490., 180.]),
        (10_000., [150., 150., 130., 0., 720., 370., 1_450., 520.]),
        (20_000., [150., 150., 130., 0., 720., 370., 1_450., 520.]),
    ]),
    (V::LiquifiedGasTanker, &[
        // The last band starts at 200 000 cbm, as printed in Table 17.
        (0., [1_000., 200., 200., 100., 240., 240., 360., 240.]),
        (50_000., [1_000., 200., 200., 100., 1_700., 1_700., 2_600., 1_700.]),
        (100_000., [1_500., 300., 300., 150., 2_500., 2_000., 2_300., 2_650.]),
        (200_000., [3_000., 600., 600., 300., 6_750., 7_200., 7_200., 6_750.]),
    ]),
    (V::OilTanker, &[
        // Band bounds as printed in Table 17, the fifth band starts at 60 000 dwt.
        (0., [500., 100., 100., 0., 250., 250., 375., 250.]),
        (5_000., [750., 150., 150., 0., 375., 375., 560., 375.]),
        (10_000., [1_250., 250., 250., 0., 690., 500., 580., 490.]),
        (20_000., [2_700., 270., 270., 270., 720., 520., 600., 510.]),
        (60_000., [3_250., 360., 360., 280., 620., 490., 770., 560.]),
        (80_000., [4_000., 400., 400., 280., 800., 640., 910., 690.]),
        (120_000., [6_500., 500., 500., 300., 2_500., 770., 1_300., 860.]),
        (200_000., [7_000., 600., 600., 300., 2_500., 770., 1_300., 860.]),
    ]),
    (V::OtherLiquidsTankers, &[
        (0., [1_000., 200., 200., 100., 500., 500., 750., 500.]),
        (1_000., [1_000., 200., 200., 100., 500., 500., 750., 500.]),
    ]),
    (V::FerryPax, &[
        (0., [0., 0., 0., 0., 190., 190., 190., 190.]),
        (300., [0., 0., 0., 0., 190., 190., 190., 190.]),
        (1_000., [0., 0., 0., 0., 190., 190., 190., 190.]),
        (2_000., [0., 0., 0., 0., 520., 520., 520., 520.]),
    ]),
    (V::Cruise, &[
        (0., [1_100., 950., 980., 0., 450., 450., 580., 450.]),
        (2_000., [1_100., 950., 980., 0., 450., 450., 580., 450.]),
        (10_000., [1_100., 950., 980., 0., 3_500., 3_500., 5_500., 3_500.]),
        (60_000., [1_100., 950., 980., 0., 11_500., 11_500., 14_900., 11_500.]),
        (100_000., [1_100., 950., 980., 0., 11_500., 11_500., 14_900., 11_500.]),
        (150_000., [1_100., 950., 980., 0., 11_500., 11_500., 14_900., 11_500.]),
    ]),
    (V::FerryRopax, &[
        (0., [260., 250., 170., 0., 105., 105., 105., 105.]),
        (2_000., [260., 250., 170., 0., 330., 330., 330., 330.]),
        (5_000., [260., 250., 170., 0., 670., 670., 670., 670.]),
        (10_000., [390., 380., 260., 0., 1_100., 1_100., 1_100., 1_000.]),
        (20_000., [390., 380., 260., 0., 1_950., 1_950., 1_950., 1_950.]),
    ]),
    (V::RefrigeratedBulk, &[
        (0., [270., 270., 270., 0., 520., 570., 560., 570.]),
        (2_000., [270., 270., 270., 0., 1_100., 1_200., 1_150., 1_200.]),
        (6_000., [270., 270., 270., 0., 1_500., 1_650., 1_600., 1_650.]),
        (10_000., [270., 270., 270., 0., 2_850., 3_100., 3_000., 3_100.]),
    ]),
    (V::Roro, &[
        (0., [260., 250., 170., 0., 750., 430., 1_300., 430.]),
        (5_000., [260., 250., 170., 0., 1_100., 680., 2_100., 680.]),
        (10_000., [390., 380., 260., 0., 1_200., 950., 2_700., 950.]),
        (15_000., [390., 380., 260., 0., 1_200., 950., 2_700., 950.]),
    ]),
    (V::Vehicle, &[
        (0., [310., 300., 250., 0., 800., 500., 1_100., 500.]),
        (10_000., [310., 300., 250., 0., 850., 550., 1_400., 510.]),
        (20_000., [310., 300., 250., 0., 850., 550., 1_400., 510.]),
    ]),
    (V::Yacht, &[(0., [0., 0., 0., 0., 130., 130., 130., 130.])]),
    (V::ServiceTug, &[(0., [0., 0., 0., 0., 100., 80., 210., 80.])]),
    (V::MiscellaneousFishing, &[(0., [0., 0., 0., 0., 200., 200., 200., 200.])]),
    (V::Offshore, &[(0., [0., 0., 0., 0., 320., 320., 320., 320.])]),
    (V::ServiceOther, &[(0., [0., 0., 0., 0., 220., 220., 220., 220.])]),
    (V::MiscellaneousOther, &[(0., [110., 110., 90., 0., 150., 150., 430., 410.])]),
];

/// Weather correction (eta_w) with an optional small vessel factor and its size bound.
#[rustfmt::skip]
static WEATHER_CORRECTION: &[(V, f64, Option<(f64, f64)>)] = &[
    (V::BulkCarrier, 0.867, Some((10_000., 0.909))),
    (V::ChemicalTanker, 0.867, Some((10_000., 0.909))),
    (V::GeneralCargo, 0.867, Some((10_000., 0.909))),
    (V::OilTanker, 0.867, Some((10_000., 0.909))),
    (V::Container, 0.867, Some((1_000., 0.9))),
    (V::Cruise, 0.867, Some((2_000., 0.909))),
    (V::Roro, 0.867, Some((5_000., 0.909))),
    (V::LiquifiedGasTanker, 0.867, None),
    (V::Yacht, 0.867, None),
    (V::Vehicle, 0.867, None),
    (V::RefrigeratedBulk, 0.867, None),
    (V::OtherLiquidsTankers, 0.867, None),
    (V::ServiceTug, 0.909, None),
    (V::MiscellaneousFishing, 0.909, None),
    (V::Offshore, 0.909, None),
    (V::ServiceOther, 0.909, None),
    (V::MiscellaneousOther, 0.909, None),
    (V::FerryRopax, 0.909, None),
    (V::FerryPax, 0.909, None),
];

pub(super) fn tables() -> ReferenceTables {
    let specific_fuel_consumption = SFC_BASELINES
        .iter()
        .flat_map(|&(machinery, fuel_type, baselines)| {
            AGES.into_iter()
                .zip(baselines)
                .filter_map(move |(engine_age, g_per_kwh)| {
                    g_per_kwh.map(|g_per_kwh| SfcBaseline {
                        machinery,
                        fuel_type,
                        engine_age,
                        g_per_kwh,
                    })
                })
        })
        .collect();

    let auxiliary_power = AUXILIARY_POWER
        .iter()
        .map(|&(vessel_type, rows)| AuxiliaryPowerTable {
            vessel_type,
            bands: rows
                .iter()
                .map(|&(min_size, [b0, b1, b2, b3, a0, a1, a2, a3])| {
                    let demand = |auxiliary_engine_kw, boiler_kw| AuxiliaryPower {
                        auxiliary_engine_kw,
                        boiler_kw,
                    };
                    AuxiliaryPowerBand {
                        min_size,
                        at_berth: demand(a0, b0),
                        anchored: demand(a1, b1),
                        manoeuvring: demand(a2, b2),
                        at_sea: demand(a3, b3),
                    }
                })
                .collect(),
        })
        .collect();

    let weather_correction = WEATHER_CORRECTION
        .iter()
        .map(|&(vessel_type, factor, small_vessel)| WeatherCorrection {
            vessel_type,
            factor,
            small_vessel: small_vessel.map(|(below_size, factor)| SmallVesselCorrection {
                below_size,
                factor,
            }),
        })
        .collect();

    ReferenceTables {
        specific_fuel_consumption,
        // Load correction of the SFC baseline for diesel and gas engines
        load_correction: LoadCorrection {
            quadratic: 0.455,
            linear: -0.71,
            constant: 1.28,
        },
        auxiliary_power,
        speed_power: SpeedPowerReference {
            speed_exponent: 3.,
            draft_exponent: 2. / 3.,
            fouling_correction: 0.917,
            default_speed_power_correction: 1.,
            weather_correction,
            // Share of MCR at which design speed is reached in calm water
            speed_power_correction: vec![
                SpeedPowerCorrection {
                    vessel_type: V::Container,
                    factor: 0.75,
                    above_size: Some(14_500.),
                },
                SpeedPowerCorrection {
                    vessel_type: V::Cruise,
                    factor: 0.7,
                    above_size: None,
                },
            ],
        },
    }
}
