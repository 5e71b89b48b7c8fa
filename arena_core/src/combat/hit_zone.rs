//! Hit zones - Classifying an aim angle into injure/miss/graze/normal/crit
//!
//! The aim circle is divided into consecutive bands, visited in a fixed
//! order: injure, miss, graze, normal, crit. Band widths are content data so
//! each encounter can tune its hit box. Whatever is left of the circle after
//! the first four bands belongs to crit.
//!
//! With the default layout (30/50/70/130/80 over 360°):
//! - [0, 30)    injure
//! - [30, 80)   miss
//! - [80, 150)  graze
//! - [150, 280) normal
//! - [280, 360) crit

use super::constants::FULL_CIRCLE_DEGREES;
use crate::types::HitZone;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Width in degrees of each zone's band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBands {
    pub injure: f64,
    pub miss: f64,
    pub graze: f64,
    pub normal: f64,
    pub crit: f64,
    #[serde(default = "default_total_degrees")]
    pub total_degrees: f64,
}

fn default_total_degrees() -> f64 {
    FULL_CIRCLE_DEGREES
}

impl Default for HitBands {
    fn default() -> Self {
        HitBands {
            injure: 30.0,
            miss: 50.0,
            graze: 70.0,
            normal: 130.0,
            crit: 80.0,
            total_degrees: FULL_CIRCLE_DEGREES,
        }
    }
}

impl HitBands {
    /// Upper bounds of the injure, miss, graze and normal bands
    pub fn thresholds(&self) -> [f64; 4] {
        let t0 = self.injure;
        let t1 = t0 + self.miss;
        let t2 = t1 + self.graze;
        let t3 = t2 + self.normal;
        [t0, t1, t2, t3]
    }

    /// Width of a single zone's band
    pub fn width(&self, zone: HitZone) -> f64 {
        match zone {
            HitZone::Injure => self.injure,
            HitZone::Miss => self.miss,
            HitZone::Graze => self.graze,
            HitZone::Normal => self.normal,
            HitZone::Crit => self.crit,
        }
    }

    /// Sum of all five band widths
    pub fn allotted_degrees(&self) -> f64 {
        HitZone::all().iter().map(|z| self.width(*z)).sum()
    }

    /// Draw an aim angle uniformly from [0, total_degrees)
    pub fn sample_angle(&self, rng: &mut impl Rng) -> f64 {
        if self.total_degrees <= 0.0 {
            return 0.0;
        }
        rng.gen_range(0.0..self.total_degrees)
    }
}

/// Classify an aim angle against the band layout
///
/// Bands are inclusive at the low edge and exclusive at the high edge: an
/// angle exactly on a threshold belongs to the zone that starts there.
pub fn determine_hit_zone(angle_degrees: f64, bands: &HitBands) -> HitZone {
    let [t0, t1, t2, t3] = bands.thresholds();

    if angle_degrees < t0 {
        HitZone::Injure
    } else if angle_degrees < t1 {
        HitZone::Miss
    } else if angle_degrees < t2 {
        HitZone::Graze
    } else if angle_degrees < t3 {
        HitZone::Normal
    } else {
        HitZone::Crit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_boundary_law() {
        let bands = HitBands::default();
        let cases = [
            (29.0, HitZone::Injure),
            (30.0, HitZone::Miss),
            (79.0, HitZone::Miss),
            (80.0, HitZone::Graze),
            (149.0, HitZone::Graze),
            (150.0, HitZone::Normal),
            (279.0, HitZone::Normal),
            (280.0, HitZone::Crit),
            (359.0, HitZone::Crit),
        ];
        for (angle, expected) in cases {
            assert_eq!(determine_hit_zone(angle, &bands), expected, "angle {}", angle);
        }
    }

    #[test]
    fn test_just_below_threshold_stays_in_lower_zone() {
        let bands = HitBands::default();
        assert_eq!(determine_hit_zone(29.999, &bands), HitZone::Injure);
        assert_eq!(determine_hit_zone(279.999, &bands), HitZone::Normal);
        assert_eq!(determine_hit_zone(0.0, &bands), HitZone::Injure);
    }

    #[test]
    fn test_thresholds_are_running_sum() {
        let bands = HitBands::default();
        assert_eq!(bands.thresholds(), [30.0, 80.0, 150.0, 280.0]);
        assert!((bands.allotted_degrees() - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_width_band_is_skipped() {
        let bands = HitBands {
            injure: 0.0,
            miss: 90.0,
            graze: 0.0,
            normal: 180.0,
            crit: 90.0,
            total_degrees: 360.0,
        };
        assert_eq!(determine_hit_zone(0.0, &bands), HitZone::Miss);
        assert_eq!(determine_hit_zone(90.0, &bands), HitZone::Normal);
        assert_eq!(determine_hit_zone(270.0, &bands), HitZone::Crit);
    }

    #[test]
    fn test_custom_encounter_bands() {
        // A tight hit box: most of the circle misses
        let bands = HitBands {
            injure: 10.0,
            miss: 250.0,
            graze: 40.0,
            normal: 50.0,
            crit: 10.0,
            total_degrees: 360.0,
        };
        assert_eq!(determine_hit_zone(200.0, &bands), HitZone::Miss);
        assert_eq!(determine_hit_zone(260.0, &bands), HitZone::Graze);
        assert_eq!(determine_hit_zone(355.0, &bands), HitZone::Crit);
    }

    #[test]
    fn test_sample_angle_in_range() {
        let bands = HitBands::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let angle = bands.sample_angle(&mut rng);
            assert!((0.0..360.0).contains(&angle));
        }
    }

    #[test]
    fn test_total_degrees_defaults_to_full_circle() {
        let bands: HitBands = toml::from_str(
            "injure = 30\nmiss = 50\ngraze = 70\nnormal = 130\ncrit = 80\n",
        )
        .unwrap();
        assert_eq!(bands, HitBands::default());
    }
}
