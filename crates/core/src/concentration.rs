//! Pollutant concentration calculator for the chemistry page.
//!
//! Severity bands use strict `<` comparisons, so a concentration sitting
//! exactly on a boundary lands in the band above it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{ConcentrationResult, Severity};

#[derive(Debug, Clone, Copy)]
pub struct WaterBody {
    pub name: &'static str,
    /// Liters.
    pub volume: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Pollutant {
    pub name: &'static str,
    pub toxicity_factor: f64,
}

pub static WATER_BODIES: Lazy<HashMap<&'static str, WaterBody>> = Lazy::new(|| {
    HashMap::from([
        (
            "cup",
            WaterBody {
                name: "Cup",
                volume: 0.25,
            },
        ),
        (
            "bucket",
            WaterBody {
                name: "Bucket",
                volume: 10.0,
            },
        ),
        (
            "sink",
            WaterBody {
                name: "Sink",
                volume: 50.0,
            },
        ),
        (
            "canal",
            WaterBody {
                name: "School Canal",
                volume: 1000.0,
            },
        ),
        (
            "river",
            WaterBody {
                name: "River",
                volume: 100_000.0,
            },
        ),
    ])
});

pub static POLLUTANTS: Lazy<HashMap<&'static str, Pollutant>> = Lazy::new(|| {
    HashMap::from([
        (
            "detergent",
            Pollutant {
                name: "Detergent",
                toxicity_factor: 1.0,
            },
        ),
        (
            "oil",
            Pollutant {
                name: "Cooking Oil",
                toxicity_factor: 1.5,
            },
        ),
        (
            "fertilizer",
            Pollutant {
                name: "Fertilizer",
                toxicity_factor: 2.0,
            },
        ),
        (
            "paint",
            Pollutant {
                name: "Paint",
                toxicity_factor: 2.5,
            },
        ),
    ])
});

/// Concentration of `pollutant_grams` of a pollutant dissolved in a named
/// water body. Unknown keys fall back to `bucket` / `detergent` rather
/// than erroring.
pub fn concentration(
    pollutant_grams: f64,
    water_body: &str,
    pollutant: &str,
) -> ConcentrationResult {
    let body = WATER_BODIES
        .get(water_body)
        .unwrap_or(&WATER_BODIES["bucket"]);
    let pollutant = POLLUTANTS
        .get(pollutant)
        .unwrap_or(&POLLUTANTS["detergent"]);

    let concentration = (pollutant_grams / body.volume) * pollutant.toxicity_factor;

    let (severity, color, opacity, warning) = if concentration < 0.01 {
        (
            Severity::Safe,
            "#60a5fa",
            0.3,
            "Safe levels - Minimal environmental impact",
        )
    } else if concentration < 0.1 {
        (
            Severity::Moderate,
            "#2563eb",
            0.5,
            "Moderate concentration - Some impact on aquatic life",
        )
    } else if concentration < 1.0 {
        (
            Severity::Dangerous,
            "#1e40af",
            0.7,
            "Dangerous levels - Significant harm to ecosystem",
        )
    } else {
        (
            Severity::Critical,
            "#1f2937",
            0.9,
            "CRITICAL! Toxic levels - Fish kill imminent!",
        )
    };

    ConcentrationResult {
        concentration,
        severity,
        color: color.to_string(),
        opacity,
        warning: warning.to_string(),
    }
}
