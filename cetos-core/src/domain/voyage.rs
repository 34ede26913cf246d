use super::validate::{non_negative, positive};
use crate::{OperationMode, Result};
use serde::{Deserialize, Serialize};

/// One homogeneous segment of a voyage, sailed under a single operation mode.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVoyageLeg")]
pub struct VoyageLeg {
    distance_nm: f64,
    speed_kn: f64,
    draft_m: f64,
}

#[derive(Debug, Deserialize)]
struct RawVoyageLeg {
    distance_nm: f64,
    speed_kn: f64,
    draft_m: f64,
}

impl VoyageLeg {
    pub fn new(distance_nm: f64, speed_kn: f64, draft_m: f64) -> Result<VoyageLeg> {
        Ok(VoyageLeg {
            distance_nm: non_negative("distance_nm", distance_nm)?,
            speed_kn: positive("speed_kn", speed_kn)?,
            draft_m: positive("draft_m", draft_m)?,
        })
    }
    pub fn distance_nm(&self) -> f64 {
        self.distance_nm
    }
    pub fn speed_kn(&self) -> f64 {
        self.speed_kn
    }
    pub fn draft_m(&self) -> f64 {
        self.draft_m
    }
}

impl TryFrom<RawVoyageLeg> for VoyageLeg {
    type Error = crate::Error;

    fn try_from(value: RawVoyageLeg) -> Result<Self> {
        VoyageLeg::new(value.distance_nm, value.speed_kn, value.draft_m)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVoyageProfile")]
pub struct VoyageProfile {
    time_anchored_h: f64,
    time_at_berth_h: f64,
    legs_manoeuvring: Vec<VoyageLeg>,
    legs_at_sea: Vec<VoyageLeg>,
}

#[derive(Debug, Deserialize)]
struct RawVoyageProfile {
    #[serde(default)]
    time_anchored_h: f64,
    #[serde(default)]
    time_at_berth_h: f64,
    #[serde(default)]
    legs_manoeuvring: Vec<VoyageLeg>,
    #[serde(default)]
    legs_at_sea: Vec<VoyageLeg>,
}

impl VoyageProfile {
    pub fn new(
        time_anchored_h: f64,
        time_at_berth_h: f64,
        legs_manoeuvring: Vec<VoyageLeg>,
        legs_at_sea: Vec<VoyageLeg>,
    ) -> Result<VoyageProfile> {
        Ok(VoyageProfile {
            time_anchored_h: non_negative("time_anchored_h", time_anchored_h)?,
            time_at_berth_h: non_negative("time_at_berth_h", time_at_berth_h)?,
            legs_manoeuvring,
            legs_at_sea,
        })
    }
    pub fn time_anchored_h(&self) -> f64 {
        self.time_anchored_h
    }
    pub fn time_at_berth_h(&self) -> f64 {
        self.time_at_berth_h
    }
    pub fn legs_manoeuvring(&self) -> &[VoyageLeg] {
        &self.legs_manoeuvring
    }
    pub fn legs_at_sea(&self) -> &[VoyageLeg] {
        &self.legs_at_sea
    }

    /// Legs sailed under `mode`, stationary modes have none.
    pub fn legs(&self, mode: OperationMode) -> &[VoyageLeg] {
        match mode {
            OperationMode::AtSea => &self.legs_at_sea,
            OperationMode::Manoeuvring => &self.legs_manoeuvring,
            OperationMode::AtBerth | OperationMode::Anchored => &[],
        }
    }

    /// Time spent stationary in `mode`, sailing modes report zero.
    pub fn time_h(&self, mode: OperationMode) -> f64 {
        match mode {
            OperationMode::AtBerth => self.time_at_berth_h,
            OperationMode::Anchored => self.time_anchored_h,
            OperationMode::AtSea | OperationMode::Manoeuvring => 0.,
        }
    }

    /// All sailed legs, at-sea legs first.
    pub fn all_legs(&self) -> impl Iterator<Item = &VoyageLeg> {
        self.legs_at_sea.iter().chain(self.legs_manoeuvring.iter())
    }
}

impl TryFrom<RawVoyageProfile> for VoyageProfile {
    type Error = crate::Error;

    fn try_from(value: RawVoyageProfile) -> Result<Self> {
        VoyageProfile::new(
            value.time_anchored_h,
            value.time_at_berth_h,
            value.legs_manoeuvring,
            value.legs_at_sea,
        )
    }
}
