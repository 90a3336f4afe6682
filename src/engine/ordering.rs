//! Display ordering for the quest list

use std::cmp::Ordering;

use crate::domain::Task;

/// Compare two tasks for display.
///
/// 1. Incomplete before completed.
/// 2. When both have due dates and they differ, the earlier date first.
/// 3. Otherwise higher priority first.
///
/// A dated task and an undated one are not date-ordered against each other;
/// they fall straight through to priority.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            _ => Ordering::Equal,
        })
        .then_with(|| b.priority.rank().cmp(&a.priority.rank()))
}

/// Return the tasks in display order. Ties keep their input order.
///
/// [`compare_tasks`] is not transitive once dated and undated quests mix
/// (undated high < dated low < later dated high == undated high), so a
/// general-purpose sort may reject it. Dated and undated quests are each
/// sorted on their own, where the comparator is a total order, then merged
/// with it. Dated quests therefore always come out in date order.
pub fn sort_tasks(tasks: &[Task]) -> Vec<Task> {
    let cmp = |&a: &usize, &b: &usize| compare_tasks(&tasks[a], &tasks[b]);

    let (mut dated, mut undated): (Vec<usize>, Vec<usize>) =
        (0..tasks.len()).partition(|&i| tasks[i].due_date.is_some());
    dated.sort_by(cmp);
    undated.sort_by(cmp);

    let mut dated = dated.into_iter().peekable();
    let mut undated = undated.into_iter().peekable();
    let mut sorted = Vec::with_capacity(tasks.len());
    loop {
        let next = match (dated.peek(), undated.peek()) {
            (Some(&d), Some(&u)) => match compare_tasks(&tasks[d], &tasks[u]) {
                Ordering::Less => dated.next(),
                Ordering::Greater => undated.next(),
                // Input order breaks the tie
                Ordering::Equal if d < u => dated.next(),
                Ordering::Equal => undated.next(),
            },
            (Some(_), None) => dated.next(),
            (None, Some(_)) => undated.next(),
            (None, None) => break,
        };
        if let Some(i) = next {
            sorted.push(tasks[i].clone());
        }
    }
    sorted
}

/// In-place variant of [`sort_tasks`]
pub fn sort_tasks_in_place(tasks: &mut [Task]) {
    let sorted = sort_tasks(tasks);
    tasks.clone_from_slice(&sorted);
}
