//! Fixed tables used across the calculation engine.
//!
//! Everything in here is plain data: per-unit CO2 factors, penalty
//! thresholds, grade bands, default inputs, slider ranges, and the
//! normalization factors that make heterogeneous units comparable.

use crate::types::{Resource, ResourceConsumption};

// -- Carbon footprint conversion factors (kg CO2) --

/// Per kWh of electricity.
pub const CO2_ELECTRICITY: f64 = 0.5;
/// Per liter of water.
pub const CO2_WATER: f64 = 0.002;
/// Per sheet of paper.
pub const CO2_PAPER: f64 = 0.005;
/// Per kg of waste.
pub const CO2_WASTE: f64 = 2.5;

// -- Penalty thresholds (usage below these is free) --

/// kWh/day.
pub const ELECTRICITY_THRESHOLD: f64 = 10.0;
/// L/day.
pub const WATER_THRESHOLD: f64 = 150.0;
/// kg/day. Paper has no threshold: every sheet is penalized.
pub const WASTE_THRESHOLD: f64 = 1.0;

// -- Grade bands (minimum score for each grade; F is the floor) --

pub const GRADE_A_MIN: i64 = 90;
pub const GRADE_B_MIN: i64 = 80;
pub const GRADE_C_MIN: i64 = 70;
pub const GRADE_D_MIN: i64 = 60;

// -- Weighted-sum policy (quick calculator page) --

/// Impact weights: electricity has the highest per-unit cost after waste.
pub const WEIGHT_ELECTRICITY: f64 = 5.0;
pub const WEIGHT_WATER: f64 = 2.0;
pub const WEIGHT_WASTE: f64 = 10.0;

/// Maximum weighted score for each grade band (unbounded above D).
pub const WEIGHTED_A_MAX: i64 = 50;
pub const WEIGHTED_B_MAX: i64 = 80;
pub const WEIGHTED_C_MAX: i64 = 100;
pub const WEIGHTED_D_MAX: i64 = 150;

// -- Normalization factors for percentage breakdowns --
// Convert different units to comparable scales: 1 kWh = 10 units,
// 10 L = 1 unit, 20 sheets = 1 unit, 1 kg = 10 units.

pub const NORM_ELECTRICITY: f64 = 10.0;
pub const NORM_WATER: f64 = 0.1;
pub const NORM_PAPER: f64 = 0.05;
pub const NORM_WASTE: f64 = 10.0;

// -- Projection horizons --

pub const DAYS_PER_MONTH: u32 = 30;
pub const DAYS_PER_SIX_MONTHS: u32 = 180;

/// Default horizon for the cumulative limit projection.
pub const PROJECTION_DAYS: u32 = 365;
/// Default ecological capacity for the limit projection.
pub const PROJECTION_LIMIT: f64 = 10_000.0;
/// Per-day acceleration applied to the daily increase.
pub const PROJECTION_ACCELERATION: f64 = 0.01;

/// Default resource record used when the caller provides nothing.
pub const DEFAULT_RESOURCES: ResourceConsumption = ResourceConsumption {
    electricity: 10.0,
    water: 150.0,
    paper: 50.0,
    waste: 1.0,
};

/// Expected input range for a resource (min, max, step).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Typical input range per resource. Values outside these are accepted by
/// every calculation; callers may warn.
pub const fn input_range(resource: Resource) -> InputRange {
    match resource {
        Resource::Electricity => InputRange {
            min: 0.0,
            max: 50.0,
            step: 0.5,
        },
        Resource::Water => InputRange {
            min: 0.0,
            max: 500.0,
            step: 5.0,
        },
        Resource::Paper => InputRange {
            min: 0.0,
            max: 200.0,
            step: 1.0,
        },
        Resource::Waste => InputRange {
            min: 0.0,
            max: 10.0,
            step: 0.1,
        },
    }
}
