//! Engine behaviour through the public API

use chrono::NaiveDate;
use questlog::engine::{
    apply_xp_amount, incomplete_count, sort_tasks, xp_fraction, xp_required_for_level,
    GamificationEngine,
};
use questlog::{Priority, Task, UserProfile};

fn profile(level: u32, xp: u32) -> UserProfile {
    UserProfile {
        level,
        xp,
        ..Default::default()
    }
}

#[test]
fn level_arithmetic_always_settles() {
    for level in 1..=12 {
        for xp in [0, 1, 24, 49] {
            for award in (0..=1_000).step_by(37) {
                let gain = apply_xp_amount(&profile(level, xp), award);
                assert!(gain.profile.xp < xp_required_for_level(gain.profile.level));
                assert!(gain.profile.level >= level);
                assert_eq!(gain.level_ups.len() as u32, gain.profile.level - level);
            }
        }
    }
}

#[test]
fn award_of_130_from_scratch_lands_on_level_two() {
    let gain = apply_xp_amount(&profile(1, 0), 130);
    assert_eq!((gain.profile.level, gain.profile.xp), (2, 80));
    assert_eq!(gain.level_ups.len(), 1);
    assert_eq!(gain.level_ups[0].new_level, 2);
}

#[test]
fn achievement_evaluation_is_idempotent() {
    let engine = GamificationEngine::new();
    let tasks: Vec<Task> = (0..10)
        .map(|i| Task::new(i.to_string(), "quest", Priority::Low).completed())
        .collect();

    let first = engine.evaluate_achievements(&UserProfile::default(), &tasks);
    assert!(first.unlocked.contains(&"first_quest"));
    assert!(first.unlocked.contains(&"ten_quests"));

    let second = engine.evaluate_achievements(&first.profile, &tasks);
    assert!(second.unlocked.is_empty());
}

#[test]
fn undated_high_priority_beats_dated_low_priority() {
    let tasks = vec![
        Task::new("A", "a", Priority::High),
        Task::new("B", "b", Priority::Low).with_due_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        Task::new("C", "c", Priority::High),
    ];
    let order: Vec<String> = sort_tasks(&tasks).into_iter().map(|t| t.id).collect();
    assert_eq!(order, vec!["A", "C", "B"]);
}

#[test]
fn completed_quests_never_precede_open_ones() {
    let day = |d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
    let mut tasks = Vec::new();
    for i in 0..20u32 {
        let priority = match i % 3 {
            0 => Priority::Low,
            1 => Priority::Medium,
            _ => Priority::High,
        };
        let mut task = Task::new(i.to_string(), "q", priority);
        if i % 4 != 0 {
            task = task.with_due_date(day(1 + (i * 7) % 28));
        }
        if i % 2 == 0 {
            task = task.completed();
        }
        tasks.push(task);
    }

    let sorted = sort_tasks(&tasks);
    let first_done = sorted.iter().position(|t| t.completed).unwrap();
    assert!(sorted[..first_done].iter().all(|t| !t.completed));
    assert!(sorted[first_done..].iter().all(|t| t.completed));
    assert_eq!(incomplete_count(&sorted), 10);
}

#[test]
fn xp_fraction_stays_in_unit_range() {
    assert_eq!(xp_fraction(&profile(1, 0)), 0.0);
    assert!(xp_fraction(&profile(3, 149)) < 1.0);
    assert_eq!(xp_fraction(&profile(3, 9_999)), 1.0);
}

#[test]
fn long_mixed_quest_list_sorts_with_dates_in_order() {
    let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    let tasks: Vec<Task> = (0..120u32)
        .map(|i| {
            let priority = match (i * 7) % 3 {
                0 => Priority::Low,
                1 => Priority::High,
                _ => Priority::Medium,
            };
            let mut task = Task::new(i.to_string(), "q", priority);
            if (i * 13) % 5 < 3 {
                task = task.with_due_date(day(1 + (i * 11) % 28));
            }
            if i % 6 == 0 {
                task = task.completed();
            }
            task
        })
        .collect();

    let sorted = sort_tasks(&tasks);
    assert_eq!(sorted.len(), 120);
    assert_eq!(incomplete_count(&sorted), 100);
    assert!(sorted[..100].iter().all(|t| !t.completed));

    for group in [&sorted[..100], &sorted[100..]] {
        let dates: Vec<NaiveDate> = group.iter().filter_map(|t| t.due_date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }
}
