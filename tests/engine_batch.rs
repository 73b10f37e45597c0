// tests/engine_batch.rs

use cookdag::engine::{PlanJob, plan_concurrently};
use cookdag::errors::CookdagError;
use cookdag::ScheduleError;
use cookdag_test_utils::builders::StepBuilder;
use cookdag_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn test_outcomes_come_back_in_job_order() {
    init_tracing();

    let mut jobs = Vec::new();
    for i in 0..8i64 {
        let steps = vec![
            StepBuilder::partial(1, 10 + i).build(),
            StepBuilder::partial(2, 10).build(),
        ];
        jobs.push(PlanJob::new(format!("recipe-{i}"), steps, 1));
    }

    let outcomes = with_timeout(plan_concurrently(jobs)).await;
    assert_eq!(outcomes.len(), 8);
    for (i, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.label, format!("recipe-{i}"));
        let schedule = outcome.result.as_ref().unwrap();
        assert_eq!(schedule.makespan(), 20 + i as i64);
    }
}

#[tokio::test]
async fn test_failing_job_does_not_affect_others() {
    init_tracing();

    let good = vec![StepBuilder::active(1, 5).build()];
    let cyclic = vec![
        StepBuilder::active(1, 5).after(2).build(),
        StepBuilder::active(2, 5).after(1).build(),
    ];
    let jobs = vec![
        PlanJob::new("good", good.clone(), 2),
        PlanJob::new("cyclic", cyclic, 2),
        PlanJob::new("no-slots", good, 0),
    ];

    let outcomes = with_timeout(plan_concurrently(jobs)).await;
    assert!(outcomes[0].is_ok());
    assert!(matches!(
        outcomes[1].result,
        Err(CookdagError::Schedule(ScheduleError::Cycle { .. }))
    ));
    assert!(matches!(
        outcomes[2].result,
        Err(CookdagError::Schedule(ScheduleError::InvalidParameter(_)))
    ));
}

#[tokio::test]
async fn test_empty_batch() {
    let outcomes = with_timeout(plan_concurrently(Vec::new())).await;
    assert!(outcomes.is_empty());
}
