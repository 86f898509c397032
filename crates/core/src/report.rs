use serde::{Deserialize, Serialize};

use crate::types::{
    EcoScore, ResourceConsumption, ResourcePercentages, ResourceProjection, ScoringPolicy,
    WhatIfScenario,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_version: String,
    pub inputs: Inputs,
    pub score: EcoScore,
    pub percentages: ResourcePercentages,
    pub monthly: ResourceProjection,
    pub six_month: ResourceProjection,
    pub what_if: Option<WhatIfScenario>,
    pub rate_of_change: Option<ResourceConsumption>,
    pub gate: Option<ScoreGate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inputs {
    pub consumption: ResourceConsumption,
    pub policy: String,
    pub sources: Vec<String>,
}

/// Pass/fail check against a minimum acceptable score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreGate {
    pub min_score: i64,
    pub pass: bool,
    pub reason: String,
}

impl Report {
    pub fn new(
        consumption: ResourceConsumption,
        policy: ScoringPolicy,
        score: EcoScore,
        percentages: ResourcePercentages,
        monthly: ResourceProjection,
        six_month: ResourceProjection,
        what_if: Option<WhatIfScenario>,
        rate_of_change: Option<ResourceConsumption>,
        gate: Option<ScoreGate>,
    ) -> Self {
        Self {
            report_version: "1.0.0".to_string(),
            inputs: Inputs {
                consumption,
                policy: policy.name().to_string(),
                sources: vec![],
            },
            score,
            percentages,
            monthly,
            six_month,
            what_if,
            rate_of_change,
            gate,
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut s = String::new();
        s.push_str("# ecosim report\n\n");
        s.push_str(&format!("- report_version: `{}`\n", self.report_version));
        s.push_str(&format!("- policy: `{}`\n", self.inputs.policy));
        if !self.inputs.sources.is_empty() {
            s.push_str("- sources:\n");
            for src in &self.inputs.sources {
                s.push_str(&format!("  - {src}\n"));
            }
        }
        s.push('\n');

        s.push_str("## Consumption\n\n");
        let c = &self.inputs.consumption;
        s.push_str(&format!("- electricity: `{}` kWh/day\n", c.electricity));
        s.push_str(&format!("- water: `{}` L/day\n", c.water));
        s.push_str(&format!("- paper: `{}` sheets/day\n", c.paper));
        s.push_str(&format!("- waste: `{}` kg/day\n", c.waste));
        s.push('\n');

        s.push_str("## Score\n\n");
        s.push_str(&format!("- score: `{}`\n", self.score.score));
        s.push_str(&format!(
            "- grade: `{:?}` ({})\n",
            self.score.grade,
            self.score.grade.label()
        ));
        s.push_str(&format!(
            "- carbon_footprint: `{:.2}` kg CO2/day\n",
            self.score.carbon_footprint
        ));
        s.push('\n');

        s.push_str("## Impact shares\n\n");
        let p = &self.percentages;
        s.push_str(&format!("- electricity: `{:.1}%`\n", p.electricity));
        s.push_str(&format!("- water: `{:.1}%`\n", p.water));
        s.push_str(&format!("- paper: `{:.1}%`\n", p.paper));
        s.push_str(&format!("- waste: `{:.1}%`\n", p.waste));
        s.push('\n');

        s.push_str("## Projections\n\n");
        s.push_str(&format!(
            "- monthly: electricity `{}` kWh, water `{}` L, paper `{}` sheets, waste `{}` kg, CO2 `{:.2}` kg\n",
            self.monthly.electricity,
            self.monthly.water,
            self.monthly.paper,
            self.monthly.waste,
            self.monthly.total_co2
        ));
        s.push_str(&format!(
            "- six_month: electricity `{}` kWh, water `{}` L, paper `{}` sheets, waste `{}` kg, CO2 `{:.2}` kg\n",
            self.six_month.electricity,
            self.six_month.water,
            self.six_month.paper,
            self.six_month.waste,
            self.six_month.total_co2
        ));
        s.push('\n');

        if let Some(w) = &self.what_if {
            s.push_str("## What-if scenario\n\n");
            s.push_str(&format!(
                "- co2_reduction: `{:.2}` kg/day\n",
                w.savings.co2_reduction
            ));
            s.push_str(&format!(
                "- percentage_improvement: `{}%`\n",
                w.savings.percentage_improvement
            ));
            s.push_str(&format!(
                "- monthly_savings: `{:.2}` kg CO2\n",
                w.savings.monthly_savings
            ));
            s.push('\n');
        }

        if let Some(d) = &self.rate_of_change {
            s.push_str("## Rate of change\n\n");
            s.push_str(&format!("- electricity: `{}` kWh/day\n", d.electricity));
            s.push_str(&format!("- water: `{}` L/day\n", d.water));
            s.push_str(&format!("- paper: `{}` sheets/day\n", d.paper));
            s.push_str(&format!("- waste: `{}` kg/day\n", d.waste));
            s.push('\n');
        }

        if let Some(g) = &self.gate {
            s.push_str("## Score gate\n\n");
            s.push_str(&format!("- min_score: `{}`\n", g.min_score));
            s.push_str(&format!("- pass: `{}`\n", g.pass));
            s.push_str(&format!("- reason: `{}`\n", g.reason));
            s.push('\n');
        }

        s
    }
}

pub fn score_gate(score: &EcoScore, min_score: i64) -> ScoreGate {
    let pass = score.score >= min_score;
    ScoreGate {
        min_score,
        pass,
        reason: if pass {
            "score meets minimum".to_string()
        } else {
            format!("score {} below minimum {}", score.score, min_score)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::{project_resources, resource_percentages};
    use crate::score::eco_score;
    use crate::types::Grade;

    fn sample_report() -> Report {
        let input = ResourceConsumption::default();
        let score = eco_score(&input);
        let gate = score_gate(&score, 80);
        Report::new(
            input,
            ScoringPolicy::ThresholdPenalty,
            score,
            resource_percentages(&input),
            project_resources(&input, 30),
            project_resources(&input, 180),
            None,
            None,
            Some(gate),
        )
    }

    #[test]
    fn markdown_includes_sections_and_gate() {
        let md = sample_report().to_markdown();
        assert!(md.contains("## Consumption"));
        assert!(md.contains("## Score"));
        assert!(md.contains("## Impact shares"));
        assert!(md.contains("## Projections"));
        assert!(md.contains("## Score gate"));
        assert!(md.contains("- score: `75`"));
    }

    #[test]
    fn gate_fails_below_minimum() {
        let score = eco_score(&ResourceConsumption::default());
        assert_eq!(score.grade, Grade::C);
        let gate = score_gate(&score, 80);
        assert!(!gate.pass);
        assert!(gate.reason.contains("below minimum"));

        let gate = score_gate(&score, 70);
        assert!(gate.pass);
    }
}
