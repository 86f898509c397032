//! Eco-score and carbon-footprint calculation.
//!
//! Two scoring formulas exist because two different entry points in the
//! original product used them. `ThresholdPenalty` starts from a perfect
//! 100 and subtracts per-resource penalties above fixed baselines;
//! `WeightedSum` adds up weighted raw usage (lower is better) and ignores
//! paper. Both are kept as named policies.

use crate::constants::{
    CO2_ELECTRICITY, CO2_PAPER, CO2_WASTE, CO2_WATER, ELECTRICITY_THRESHOLD, GRADE_A_MIN,
    GRADE_B_MIN, GRADE_C_MIN, GRADE_D_MIN, WASTE_THRESHOLD, WATER_THRESHOLD, WEIGHTED_A_MAX,
    WEIGHTED_B_MAX, WEIGHTED_C_MAX, WEIGHTED_D_MAX, WEIGHT_ELECTRICITY, WEIGHT_WASTE, WEIGHT_WATER,
};
use crate::round2;
use crate::types::{EcoScore, Grade, ResourceConsumption, ScoringPolicy};

/// Score a consumption record with the canonical threshold-penalty
/// formula. Never fails; the all-zero record scores 100 / A.
pub fn eco_score(input: &ResourceConsumption) -> EcoScore {
    eco_score_with(ScoringPolicy::ThresholdPenalty, input)
}

/// Score a consumption record with an explicit policy.
pub fn eco_score_with(policy: ScoringPolicy, input: &ResourceConsumption) -> EcoScore {
    let (score, grade) = match policy {
        ScoringPolicy::ThresholdPenalty => threshold_penalty_score(input),
        ScoringPolicy::WeightedSum => weighted_sum_score(input),
    };

    EcoScore {
        score,
        grade,
        color: grade.color().to_string(),
        carbon_footprint: carbon_footprint(input),
    }
}

/// Daily carbon footprint in kg CO2, rounded to 2 decimals. Shared by
/// both scoring policies.
pub fn carbon_footprint(input: &ResourceConsumption) -> f64 {
    round2(
        input.electricity * CO2_ELECTRICITY
            + input.water * CO2_WATER
            + input.paper * CO2_PAPER
            + input.waste * CO2_WASTE,
    )
}

fn threshold_penalty_score(input: &ResourceConsumption) -> (i64, Grade) {
    let mut score = 100.0;

    // -2 points per kWh above threshold.
    if input.electricity > ELECTRICITY_THRESHOLD {
        score -= (input.electricity - ELECTRICITY_THRESHOLD) * 2.0;
    }

    // -0.1 points per liter above threshold.
    if input.water > WATER_THRESHOLD {
        score -= (input.water - WATER_THRESHOLD) * 0.1;
    }

    // -0.5 points per sheet, no threshold.
    score -= input.paper * 0.5;

    // -10 points per kg above threshold.
    if input.waste > WASTE_THRESHOLD {
        score -= (input.waste - WASTE_THRESHOLD) * 10.0;
    }

    let score = score.clamp(0.0, 100.0).round() as i64;

    let grade = if score >= GRADE_A_MIN {
        Grade::A
    } else if score >= GRADE_B_MIN {
        Grade::B
    } else if score >= GRADE_C_MIN {
        Grade::C
    } else if score >= GRADE_D_MIN {
        Grade::D
    } else {
        Grade::F
    };

    (score, grade)
}

fn weighted_sum_score(input: &ResourceConsumption) -> (i64, Grade) {
    let score = (input.electricity * WEIGHT_ELECTRICITY
        + input.water * WEIGHT_WATER
        + input.waste * WEIGHT_WASTE)
        .round() as i64;

    let grade = if score <= WEIGHTED_A_MAX {
        Grade::A
    } else if score <= WEIGHTED_B_MAX {
        Grade::B
    } else if score <= WEIGHTED_C_MAX {
        Grade::C
    } else if score <= WEIGHTED_D_MAX {
        Grade::D
    } else {
        Grade::F
    };

    (score, grade)
}
