//! Distance band classification.
//!
//! Turns a measured distance (or the coarse IRIS verdict when no distance is
//! available) into one of five bands. Every message table in the crate is
//! keyed by this band, so the result card and the contact form always agree.

use serde::Serialize;

/// Upper bound (inclusive) of the "near" band, in meters.
pub const NEAR_MAX_DISTANCE_M: f64 = 100.0;

/// Upper bound (inclusive) of the "mid" band, in meters.
pub const MID_MAX_DISTANCE_M: f64 = 200.0;

/// Distance band of an address relative to the closest heat network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceBand {
    /// ≤ 100 m
    Near,
    /// 100 m < d ≤ 200 m
    Mid,
    /// > 200 m
    Far,
    /// No measured distance, area-level answer says eligible
    ProvinceEligible,
    /// No measured distance, area-level answer says not eligible
    ProvinceIneligible,
}

impl DistanceBand {
    pub fn all() -> &'static [DistanceBand] {
        &[
            DistanceBand::Near,
            DistanceBand::Mid,
            DistanceBand::Far,
            DistanceBand::ProvinceEligible,
            DistanceBand::ProvinceIneligible,
        ]
    }

    /// Band derived from a measured distance rather than an area verdict
    pub fn is_measured(&self) -> bool {
        matches!(self, DistanceBand::Near | DistanceBand::Mid | DistanceBand::Far)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceBand::Near => "near",
            DistanceBand::Mid => "mid",
            DistanceBand::Far => "far",
            DistanceBand::ProvinceEligible => "provinceEligible",
            DistanceBand::ProvinceIneligible => "provinceIneligible",
        }
    }
}

/// Classify an address into a distance band.
///
/// Checks run in a fixed order:
/// - finite distance: Near if ≤ 100, else Mid if ≤ 200, else Far
/// - otherwise (null, NaN, infinite): ProvinceEligible / ProvinceIneligible
///   depending on `is_eligible`
///
/// `is_eligible` is ignored whenever a finite distance is present.
pub fn classify_distance_band(distance: Option<f64>, is_eligible: bool) -> DistanceBand {
    match distance {
        Some(d) if d.is_finite() => {
            if d <= NEAR_MAX_DISTANCE_M {
                DistanceBand::Near
            } else if d <= MID_MAX_DISTANCE_M {
                DistanceBand::Mid
            } else {
                DistanceBand::Far
            }
        }
        _ if is_eligible => DistanceBand::ProvinceEligible,
        _ => DistanceBand::ProvinceIneligible,
    }
}
