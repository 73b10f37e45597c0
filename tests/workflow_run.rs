// tests/workflow_run.rs

use cookdag::errors::CookdagError;
use cookdag::workflow::{RecipeRun, StepStatus};
use cookdag::{Schedule, WorkflowError, plan};
use cookdag_test_utils::builders::StepBuilder;

fn three_step_schedule() -> Schedule {
    let steps = vec![
        StepBuilder::active(1, 10).description("Chop").build(),
        StepBuilder::partial(2, 5).description("Saute").after(1).build(),
        StepBuilder::passive(3, 20).description("Simmer").after(2).build(),
    ];
    plan(&steps, 1).unwrap()
}

#[test]
fn test_first_step_ready_others_waiting() {
    let run = RecipeRun::new("recipe-1", three_step_schedule());

    assert_eq!(run.status_of(1), Some(StepStatus::ReadyToStart));
    assert_eq!(run.status_of(2), Some(StepStatus::UnableToStart));
    assert_eq!(run.status_of(3), Some(StepStatus::UnableToStart));
    assert_eq!(run.status_of(0), None);
    assert_eq!(run.status_of(4), None);
    assert_eq!(run.next_pending().map(|s| s.step_number), Some(1));
    assert!(!run.is_complete());
}

#[test]
fn test_walk_through_whole_recipe() {
    let mut run = RecipeRun::new("recipe-1", three_step_schedule());

    assert_eq!(run.mark_started(1).unwrap(), 10);
    assert_eq!(run.status_of(1), Some(StepStatus::InProgress));
    assert!(run.next_pending().is_none());

    run.mark_ready_to_finish(1).unwrap();
    assert_eq!(run.next_pending().map(|s| s.step_number), Some(1));

    assert_eq!(run.mark_completed(1).unwrap(), Some(2));
    assert_eq!(run.status_of(1), Some(StepStatus::Finished));
    assert_eq!(run.status_of(2), Some(StepStatus::ReadyToStart));

    // Completing straight from in_progress is allowed too.
    assert_eq!(run.mark_started(2).unwrap(), 5);
    assert_eq!(run.mark_completed(2).unwrap(), Some(3));

    assert_eq!(run.mark_started(3).unwrap(), 20);
    assert_eq!(run.mark_completed(3).unwrap(), None);
    assert!(run.is_complete());
    assert!(run.next_pending().is_none());
}

#[test]
fn test_cannot_start_a_step_that_is_not_ready() {
    let mut run = RecipeRun::new("recipe-1", three_step_schedule());

    match run.mark_started(2) {
        Err(CookdagError::Workflow(WorkflowError::InvalidTransition { step, from, to })) => {
            assert_eq!(step, 2);
            assert_eq!(from, StepStatus::UnableToStart);
            assert_eq!(to, StepStatus::InProgress);
        }
        other => panic!("Expected InvalidTransition, got: {:?}", other),
    }

    assert!(run.mark_completed(1).is_err());
    assert!(run.mark_ready_to_finish(1).is_err());
    assert_eq!(run.status_of(1), Some(StepStatus::ReadyToStart));
}

#[test]
fn test_unknown_step_number() {
    let mut run = RecipeRun::new("recipe-1", three_step_schedule());
    assert!(matches!(
        run.mark_started(9),
        Err(CookdagError::Workflow(WorkflowError::StepNotFound(9)))
    ));
    assert!(matches!(
        run.mark_completed(0),
        Err(CookdagError::Workflow(WorkflowError::StepNotFound(0)))
    ));
}

#[test]
fn test_records_carry_recipe_id_and_statuses() {
    let mut run = RecipeRun::from_schedule(three_step_schedule()).unwrap();
    let recipe_id = run.recipe_id().to_string();
    assert_eq!(recipe_id.len(), 64);

    let records = run.records();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.recipe_id == recipe_id));
    assert_eq!(records[0].status, StepStatus::ReadyToStart);
    assert_eq!(records[1].status, StepStatus::UnableToStart);
    assert_eq!(records[1].description, "Saute");
    assert_eq!(
        (records[2].predicted_start_time, records[2].predicted_end_time),
        (15, 35)
    );

    run.mark_started(1).unwrap();
    let json = serde_json::to_value(run.records()).unwrap();
    assert_eq!(json[0]["status"], "in_progress");
    assert_eq!(json[1]["status"], "unable_to_start");
}

#[test]
fn test_recipe_id_is_deterministic() {
    let a = RecipeRun::from_schedule(three_step_schedule()).unwrap();
    let b = RecipeRun::from_schedule(three_step_schedule()).unwrap();
    assert_eq!(a.recipe_id(), b.recipe_id());
}

#[test]
fn test_empty_schedule_is_complete() {
    let run = RecipeRun::new("empty", plan(&[], 1).unwrap());
    assert!(run.is_complete());
    assert!(run.next_pending().is_none());
    assert!(run.records().is_empty());
}
