/*
[INPUT]:  Task list and an anchor date fixed at the start of a run
[OUTPUT]: Three disjoint buckets (completed-today / overdue / due-tomorrow)
[POS]:    Core logic - pure classification
[UPDATE]: When bucket predicates or the anchor convention change
*/

use chrono::{Duration, NaiveDate, Utc};
use taskbrief_adapter::Task;

/// Disjoint task buckets for one digest run, source order preserved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub completed_today: Vec<Task>,
    pub overdue: Vec<Task>,
    pub due_tomorrow: Vec<Task>,
}

impl Buckets {
    pub fn is_empty(&self) -> bool {
        self.completed_today.is_empty() && self.overdue.is_empty() && self.due_tomorrow.is_empty()
    }
}

/// Derive the anchor date for a run, shifting the wall clock by the
/// configured fixed UTC offset. Computed once per run so every bucket
/// compares against the same "today".
pub fn anchor_date(utc_offset_minutes: i32) -> NaiveDate {
    let shifted = Utc::now() + Duration::minutes(i64::from(utc_offset_minutes));
    shifted.date_naive()
}

/// Partition tasks against a fixed anchor. Tasks without a due date carry
/// no urgency signal and land in no bucket.
pub fn classify(tasks: &[Task], anchor: NaiveDate) -> Buckets {
    let tomorrow = anchor + Duration::days(1);
    let mut buckets = Buckets::default();

    for task in tasks {
        let Some(due) = task.due_date() else {
            continue;
        };
        if task.is_completed {
            if due == anchor {
                buckets.completed_today.push(task.clone());
            }
        } else if due < anchor {
            buckets.overdue.push(task.clone());
        } else if due == tomorrow {
            buckets.due_tomorrow.push(task.clone());
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use taskbrief_adapter::Due;

    fn task(id: &str, content: &str, is_completed: bool, due: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            content: content.to_string(),
            is_completed,
            due: due.map(|date| Due {
                date: date.parse().unwrap(),
                is_recurring: false,
                string: None,
            }),
        }
    }

    fn anchor() -> NaiveDate {
        "2024-06-14".parse().unwrap()
    }

    #[rstest]
    #[case(task("1", "Report", true, Some("2024-06-14")), "completed_today")]
    #[case(task("2", "Pay rent", false, Some("2024-01-01")), "overdue")]
    #[case(task("3", "Standup prep", false, Some("2024-06-15")), "due_tomorrow")]
    fn test_single_task_lands_in_expected_bucket(#[case] task: Task, #[case] expected: &str) {
        let buckets = classify(std::slice::from_ref(&task), anchor());
        let (completed, overdue, tomorrow) = (
            buckets.completed_today.len(),
            buckets.overdue.len(),
            buckets.due_tomorrow.len(),
        );
        match expected {
            "completed_today" => assert_eq!((completed, overdue, tomorrow), (1, 0, 0)),
            "overdue" => assert_eq!((completed, overdue, tomorrow), (0, 1, 0)),
            "due_tomorrow" => assert_eq!((completed, overdue, tomorrow), (0, 0, 1)),
            other => panic!("unknown bucket {other}"),
        }
    }

    #[rstest]
    #[case(task("1", "Someday", false, None))]
    #[case(task("2", "Done long ago", true, Some("2024-01-01")))]
    #[case(task("3", "Due next week", false, Some("2024-06-20")))]
    #[case(task("4", "Due today, still open", false, Some("2024-06-14")))]
    fn test_task_excluded_from_all_buckets(#[case] task: Task) {
        let buckets = classify(&[task], anchor());
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_buckets_pairwise_disjoint_and_ordered() {
        let tasks = vec![
            task("1", "Report", true, Some("2024-06-14")),
            task("2", "Pay rent", false, Some("2024-01-01")),
            task("3", "Taxes", false, Some("2024-06-01")),
            task("4", "Standup prep", false, Some("2024-06-15")),
            task("5", "Someday", false, None),
        ];
        let buckets = classify(&tasks, anchor());

        assert_eq!(buckets.completed_today.len(), 1);
        assert_eq!(buckets.overdue.len(), 2);
        assert_eq!(buckets.due_tomorrow.len(), 1);

        // source order preserved within a bucket
        assert_eq!(buckets.overdue[0].content, "Pay rent");
        assert_eq!(buckets.overdue[1].content, "Taxes");

        // pairwise disjoint by id
        let mut seen = std::collections::HashSet::new();
        for t in buckets
            .completed_today
            .iter()
            .chain(&buckets.overdue)
            .chain(&buckets.due_tomorrow)
        {
            assert!(seen.insert(t.id.clone()), "task {} in two buckets", t.id);
        }
    }

    #[test]
    fn test_anchor_offset_shifts_date() {
        // A +24h offset lands one day ahead, modulo a midnight crossing
        // between the two wall-clock reads.
        let base = anchor_date(0);
        let shifted = anchor_date(24 * 60);
        assert!(shifted - base >= Duration::days(0));
        assert!(shifted - base <= Duration::days(2));
    }
}
