//! Metrics derived from a consumption record: fixed-horizon projections,
//! normalized percentage breakdowns, what-if comparisons, and day-to-day
//! rate of change.
//!
//! Rounding precision differs per function on purpose; downstream
//! consumers display these values verbatim.

use crate::constants::{
    DAYS_PER_MONTH, NORM_ELECTRICITY, NORM_PAPER, NORM_WASTE, NORM_WATER,
};
use crate::score::carbon_footprint;
use crate::types::{
    ResourceConsumption, ResourcePercentages, ResourceProjection, Savings, WhatIfScenario,
};
use crate::{round1, round2};

/// Scale a daily record out to `days` (30 for monthly, 180 for six
/// months). Electricity and waste keep 1 decimal, water and paper are
/// whole numbers, total CO2 keeps 2 decimals.
pub fn project_resources(input: &ResourceConsumption, days: u32) -> ResourceProjection {
    let days = days as f64;
    ResourceProjection {
        electricity: round1(input.electricity * days),
        water: (input.water * days).round(),
        paper: (input.paper * days).round(),
        waste: round1(input.waste * days),
        total_co2: round2(carbon_footprint(input) * days),
    }
}

/// Each resource's share of total impact, in percent rounded to 1
/// decimal. Units are first normalized to a comparable scale so 1 kWh
/// and 10 L carry similar weight. An all-zero record splits evenly
/// instead of dividing by zero.
pub fn resource_percentages(input: &ResourceConsumption) -> ResourcePercentages {
    let electricity = input.electricity * NORM_ELECTRICITY;
    let water = input.water * NORM_WATER;
    let paper = input.paper * NORM_PAPER;
    let waste = input.waste * NORM_WASTE;

    let total = electricity + water + paper + waste;

    if total == 0.0 {
        return ResourcePercentages {
            electricity: 25.0,
            water: 25.0,
            paper: 25.0,
            waste: 25.0,
        };
    }

    ResourcePercentages {
        electricity: round1(electricity / total * 100.0),
        water: round1(water / total * 100.0),
        paper: round1(paper / total * 100.0),
        waste: round1(waste / total * 100.0),
    }
}

/// Compare current consumption against a reduced scenario.
///
/// `reductions` reuses the `ResourceConsumption` shape but its fields are
/// percentages in [0, 100], not physical units.
pub fn what_if_scenario(
    current: &ResourceConsumption,
    reductions: &ResourceConsumption,
) -> WhatIfScenario {
    let improved = ResourceConsumption {
        electricity: current.electricity * (1.0 - reductions.electricity / 100.0),
        water: current.water * (1.0 - reductions.water / 100.0),
        paper: current.paper * (1.0 - reductions.paper / 100.0),
        waste: current.waste * (1.0 - reductions.waste / 100.0),
    };

    let current_footprint = carbon_footprint(current);
    let improved_footprint = carbon_footprint(&improved);
    let co2_reduction = current_footprint - improved_footprint;

    // A zero-footprint baseline would divide to NaN; report no improvement.
    let percentage_improvement = if current_footprint == 0.0 {
        0
    } else {
        (co2_reduction / current_footprint * 100.0).round() as i64
    };

    WhatIfScenario {
        current: *current,
        improved,
        savings: Savings {
            co2_reduction: round2(co2_reduction),
            percentage_improvement,
            monthly_savings: round2(co2_reduction * DAYS_PER_MONTH as f64),
        },
    }
}

/// Elementwise difference between two consecutive records, rounded to 2
/// decimals. Negative values mean consumption fell.
pub fn rate_of_change(
    previous: &ResourceConsumption,
    current: &ResourceConsumption,
) -> ResourceConsumption {
    ResourceConsumption {
        electricity: round2(current.electricity - previous.electricity),
        water: round2(current.water - previous.water),
        paper: round2(current.paper - previous.paper),
        waste: round2(current.waste - previous.waste),
    }
}
