use serde::{Deserialize, Serialize};

use crate::constants;

/// One day's (or one scenario's) resource consumption.
///
/// Fields are non-negative finite numbers; zero values are valid
/// everywhere and must not break any calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceConsumption {
    /// kWh/day.
    pub electricity: f64,
    /// Liters/day.
    pub water: f64,
    /// Sheets/day.
    pub paper: f64,
    /// kg/day.
    pub waste: f64,
}

impl ResourceConsumption {
    pub const ZERO: ResourceConsumption = ResourceConsumption {
        electricity: 0.0,
        water: 0.0,
        paper: 0.0,
        waste: 0.0,
    };

    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Electricity => self.electricity,
            Resource::Water => self.water,
            Resource::Paper => self.paper,
            Resource::Waste => self.waste,
        }
    }

    pub fn set(&mut self, resource: Resource, value: f64) {
        match resource {
            Resource::Electricity => self.electricity = value,
            Resource::Water => self.water = value,
            Resource::Paper => self.paper = value,
            Resource::Waste => self.waste = value,
        }
    }
}

impl Default for ResourceConsumption {
    fn default() -> Self {
        constants::DEFAULT_RESOURCES
    }
}

/// The four tracked resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Electricity,
    Water,
    Paper,
    Waste,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Electricity,
        Resource::Water,
        Resource::Paper,
        Resource::Waste,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Resource::Electricity => "electricity",
            Resource::Water => "water",
            Resource::Paper => "paper",
            Resource::Waste => "waste",
        }
    }
}

/// Letter grade for a score, with its fixed display color and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn color(self) -> &'static str {
        match self {
            Grade::A => "#10b981",
            Grade::B => "#34d399",
            Grade::C => "#f59e0b",
            Grade::D => "#fb923c",
            Grade::F => "#ef4444",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "Excellent",
            Grade::B => "Good",
            Grade::C => "Moderate",
            Grade::D => "Needs Improvement",
            Grade::F => "High Impact",
        }
    }
}

/// Which scoring formula to apply. The two formulas produce materially
/// different scores for the same input and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    /// 100 minus per-resource penalties above fixed thresholds, clamped
    /// to [0, 100]. Higher is better. The canonical simulator formula.
    #[default]
    ThresholdPenalty,
    /// Flat-weighted impact sum over electricity/water/waste, unbounded.
    /// Lower is better; graded on its own bands.
    WeightedSum,
}

impl ScoringPolicy {
    pub fn name(self) -> &'static str {
        match self {
            ScoringPolicy::ThresholdPenalty => "THRESHOLD_PENALTY",
            ScoringPolicy::WeightedSum => "WEIGHTED_SUM",
        }
    }
}

/// Scored summary of one consumption record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoScore {
    pub score: i64,
    pub grade: Grade,
    pub color: String,
    /// kg CO2/day, rounded to 2 decimals.
    pub carbon_footprint: f64,
}

/// Consumption scaled out to a fixed number of days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceProjection {
    pub electricity: f64,
    pub water: f64,
    pub paper: f64,
    pub waste: f64,
    pub total_co2: f64,
}

/// Each resource's share of total normalized impact, in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePercentages {
    pub electricity: f64,
    pub water: f64,
    pub paper: f64,
    pub waste: f64,
}

impl ResourcePercentages {
    pub fn sum(&self) -> f64 {
        self.electricity + self.water + self.paper + self.waste
    }
}

/// Baseline vs. reduced-consumption comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatIfScenario {
    pub current: ResourceConsumption,
    pub improved: ResourceConsumption,
    pub savings: Savings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Savings {
    /// kg CO2/day saved, rounded to 2 decimals.
    pub co2_reduction: f64,
    /// Whole-percent improvement over the baseline footprint; 0 when the
    /// baseline footprint is 0.
    pub percentage_improvement: i64,
    /// kg CO2/month saved, rounded to 2 decimals.
    pub monthly_savings: f64,
}

/// Severity band for a pollutant concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    Moderate,
    Dangerous,
    Critical,
}

/// Result of the chemistry concentration calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcentrationResult {
    /// g/L scaled by the pollutant's toxicity factor.
    pub concentration: f64,
    pub severity: Severity,
    pub color: String,
    pub opacity: f64,
    pub warning: String,
}

/// Cumulative buildup series with limit-crossing detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub labels: Vec<String>,
    /// Cumulative totals, one per day, rounded to 2 decimals.
    pub data: Vec<f64>,
    pub limit: f64,
    /// First day the cumulative total meets the limit; `None` when the
    /// horizon ends without crossing.
    pub days_to_limit: Option<u32>,
}
