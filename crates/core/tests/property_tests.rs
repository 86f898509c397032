use std::io::Cursor;

use proptest::prelude::*;

use ecosim_core::derived::{resource_percentages, what_if_scenario};
use ecosim_core::diary::{parse_diary_log, ParseMode};
use ecosim_core::score::eco_score;
use ecosim_core::series::project_cumulative;
use ecosim_core::types::{Resource, ResourceConsumption};

fn consumption() -> impl Strategy<Value = ResourceConsumption> {
    (
        0.0f64..1000.0,
        0.0f64..10_000.0,
        0.0f64..2000.0,
        0.0f64..100.0,
    )
        .prop_map(|(electricity, water, paper, waste)| ResourceConsumption {
            electricity,
            water,
            paper,
            waste,
        })
}

proptest! {
    #[test]
    fn score_is_always_clamped(input in consumption()) {
        let s = eco_score(&input);
        prop_assert!((0..=100).contains(&s.score), "score={} out of range", s.score);
        prop_assert!(s.carbon_footprint >= 0.0);
    }

    #[test]
    fn raising_any_resource_never_raises_the_score(
        input in consumption(),
        resource in prop::sample::select(&Resource::ALL[..]),
        bump in 0.0f64..500.0,
    ) {
        let base = eco_score(&input).score;
        let mut raised = input;
        raised.set(resource, raised.get(resource) + bump);
        prop_assert!(eco_score(&raised).score <= base);
    }

    #[test]
    fn percentages_sum_to_100(input in consumption()) {
        let p = resource_percentages(&input);
        prop_assert!(
            (p.sum() - 100.0).abs() < 0.5,
            "percentages sum to {}, expected ~100",
            p.sum()
        );
    }

    #[test]
    fn what_if_improvement_is_never_nan(
        input in consumption(),
        reduce in 0.0f64..=100.0,
    ) {
        let reductions = ResourceConsumption {
            electricity: reduce,
            water: reduce,
            paper: reduce,
            waste: reduce,
        };
        let scenario = what_if_scenario(&input, &reductions);
        prop_assert!(scenario.savings.co2_reduction.is_finite());
        prop_assert!((0..=100).contains(&scenario.savings.percentage_improvement));
    }

    #[test]
    fn diary_parser_never_panics_on_arbitrary_input(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let mut cursor = Cursor::new(data);
        // Should not panic regardless of input
        let _ = parse_diary_log(&mut cursor, ParseMode::BestEffort);
    }

    #[test]
    fn limit_crossing_matches_direct_simulation(
        rate in 0.1f64..50.0,
        limit in 1.0f64..5000.0,
    ) {
        let series = project_cumulative(rate, 365, limit);

        let mut cumulative = 0.0;
        let mut expected = None;
        for day in 1..=365u32 {
            cumulative += rate * (1.0 + day as f64 * 0.01);
            if expected.is_none() && cumulative >= limit {
                expected = Some(day);
            }
        }
        prop_assert_eq!(series.days_to_limit, expected);
        prop_assert_eq!(series.data.len(), 365);
    }
}
