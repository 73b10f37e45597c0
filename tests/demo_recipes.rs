// tests/demo_recipes.rs

use std::path::PathBuf;

use cookdag::config::load_and_validate;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_bourguignon_demo_plans() {
    let recipe = load_and_validate(demo("bourguignon.toml")).unwrap();
    assert_eq!(recipe.name(), Some("Boeuf bourguignon"));

    let schedule = recipe.plan(None).unwrap();
    assert_eq!(schedule.len(), 21);
    assert_eq!(schedule.makespan(), 434);

    let oven = schedule.by_id(21).unwrap();
    assert_eq!((oven.predicted_start_time, oven.step_number), (314, 21));
}

#[test]
fn test_scrambled_eggs_demo_plans() {
    let recipe = load_and_validate(demo("scrambled_eggs.json")).unwrap();
    let schedule = recipe.plan(None).unwrap();

    let order: Vec<i64> = schedule.steps.iter().map(|s| s.id()).collect();
    assert_eq!(order, vec![1, 2, 5, 3, 4]);
    assert_eq!(schedule.makespan(), 8);

    // With a single burner the butter and the eggs still never overlap.
    let one_slot = recipe.plan(Some(1)).unwrap();
    let scramble = one_slot.by_id(4).unwrap();
    assert_eq!(scramble.predicted_start_time, 3);
}
