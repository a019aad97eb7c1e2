//! Milestone timeline classification.
//!
//! The stored milestone state machine has exactly two states (`pending`,
//! `completed`); everything else shown on the timeline is derived here from
//! the current date and the start-date ordering of the list. Keeping the
//! derivation pure lets the view layer stay a thin pass-through.

use chrono::NaiveDate;

use crate::status::MILESTONE_COMPLETED;

// ---------------------------------------------------------------------------
// Display states
// ---------------------------------------------------------------------------

/// Derived display state for one milestone on the timeline.
///
/// Only `Completed` corresponds to stored state. `Overdue` and `Next` are
/// recomputed on every render and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// Stored status is `completed`.
    Completed,
    /// End date has passed and the milestone was never completed.
    Overdue,
    /// The single upcoming milestone the user should act on.
    Next,
    /// Plain pending.
    Pending,
}

impl TimelineState {
    /// Lowercase wire name for API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineState::Completed => "completed",
            TimelineState::Overdue => "overdue",
            TimelineState::Next => "next",
            TimelineState::Pending => "pending",
        }
    }
}

/// The subset of a milestone row the classification needs.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TimelineEntry {
    fn is_completed(&self) -> bool {
        self.status == MILESTONE_COMPLETED
    }

    fn is_overdue(&self, today: NaiveDate) -> bool {
        self.end_date < today && !self.is_completed()
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify an ordered milestone list against `today`.
///
/// `entries` must already be sorted by start date ascending (the order the
/// repository returns). Rules, applied per entry:
///
/// - `Completed`: stored status is completed.
/// - `Overdue`: end date is strictly before `today` and not completed.
/// - `Next`: the first entry that is neither completed nor overdue and is
///   either at the head of the list or immediately preceded by a completed
///   entry. At most one entry is `Next`.
/// - `Pending`: everything else.
pub fn classify(entries: &[TimelineEntry], today: NaiveDate) -> Vec<TimelineState> {
    let mut next_assigned = false;
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if entry.is_completed() {
                TimelineState::Completed
            } else if entry.is_overdue(today) {
                TimelineState::Overdue
            } else if !next_assigned
                && (i == 0 || entries[i - 1].is_completed())
            {
                next_assigned = true;
                TimelineState::Next
            } else {
                TimelineState::Pending
            }
        })
        .collect()
}

/// Inclusive day count between two dates.
///
/// A milestone running 2025-01-01 through 2025-01-04 spans 4 days. Both
/// dates on the same day count as 1.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{MILESTONE_COMPLETED, MILESTONE_PENDING};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(status: &str, start: &str, end: &str) -> TimelineEntry {
        TimelineEntry {
            status: status.to_string(),
            start_date: date(start),
            end_date: date(end),
        }
    }

    const TODAY: &str = "2025-06-15";

    // -- Basic states --

    #[test]
    fn completed_entry_is_completed() {
        let states = classify(
            &[entry(MILESTONE_COMPLETED, "2025-06-01", "2025-06-05")],
            date(TODAY),
        );
        assert_eq!(states, vec![TimelineState::Completed]);
    }

    #[test]
    fn past_end_date_pending_is_overdue() {
        let states = classify(
            &[entry(MILESTONE_PENDING, "2025-06-01", "2025-06-05")],
            date(TODAY),
        );
        assert_eq!(states, vec![TimelineState::Overdue]);
    }

    #[test]
    fn end_date_today_is_not_overdue() {
        // Overdue requires the end date to be strictly before today.
        let states = classify(
            &[entry(MILESTONE_PENDING, "2025-06-10", TODAY)],
            date(TODAY),
        );
        assert_eq!(states, vec![TimelineState::Next]);
    }

    #[test]
    fn completing_removes_overdue_without_touching_dates() {
        let mut m = entry(MILESTONE_PENDING, "2025-06-01", "2025-06-05");
        assert_eq!(classify(&[m.clone()], date(TODAY)), vec![TimelineState::Overdue]);

        m.status = MILESTONE_COMPLETED.to_string();
        assert_eq!(classify(&[m.clone()], date(TODAY)), vec![TimelineState::Completed]);
        assert_eq!(m.start_date, date("2025-06-01"));
        assert_eq!(m.end_date, date("2025-06-05"));
    }

    // -- Next selection --

    #[test]
    fn first_pending_item_is_next() {
        let states = classify(
            &[
                entry(MILESTONE_PENDING, "2025-06-20", "2025-06-25"),
                entry(MILESTONE_PENDING, "2025-07-01", "2025-07-05"),
            ],
            date(TODAY),
        );
        assert_eq!(states, vec![TimelineState::Next, TimelineState::Pending]);
    }

    #[test]
    fn item_after_completed_run_is_next() {
        let states = classify(
            &[
                entry(MILESTONE_COMPLETED, "2025-05-01", "2025-05-10"),
                entry(MILESTONE_COMPLETED, "2025-05-11", "2025-05-20"),
                entry(MILESTONE_PENDING, "2025-06-20", "2025-06-25"),
                entry(MILESTONE_PENDING, "2025-07-01", "2025-07-05"),
            ],
            date(TODAY),
        );
        assert_eq!(
            states,
            vec![
                TimelineState::Completed,
                TimelineState::Completed,
                TimelineState::Next,
                TimelineState::Pending,
            ]
        );
    }

    #[test]
    fn at_most_one_next_with_interleaved_completed() {
        // Both entries 1 and 3 follow a completed entry; only the first
        // eligible one is marked next.
        let states = classify(
            &[
                entry(MILESTONE_COMPLETED, "2025-05-01", "2025-05-10"),
                entry(MILESTONE_PENDING, "2025-06-20", "2025-06-25"),
                entry(MILESTONE_COMPLETED, "2025-06-26", "2025-06-30"),
                entry(MILESTONE_PENDING, "2025-07-01", "2025-07-05"),
            ],
            date(TODAY),
        );
        let next_count = states
            .iter()
            .filter(|s| **s == TimelineState::Next)
            .count();
        assert_eq!(next_count, 1);
        assert_eq!(states[1], TimelineState::Next);
        assert_eq!(states[3], TimelineState::Pending);
    }

    #[test]
    fn overdue_head_blocks_next_for_rest() {
        // The head is overdue and its successor does not follow a completed
        // entry, so nothing is next.
        let states = classify(
            &[
                entry(MILESTONE_PENDING, "2025-06-01", "2025-06-05"),
                entry(MILESTONE_PENDING, "2025-06-20", "2025-06-25"),
            ],
            date(TODAY),
        );
        assert_eq!(states, vec![TimelineState::Overdue, TimelineState::Pending]);
    }

    #[test]
    fn overdue_after_completed_is_not_next() {
        let states = classify(
            &[
                entry(MILESTONE_COMPLETED, "2025-05-01", "2025-05-10"),
                entry(MILESTONE_PENDING, "2025-05-11", "2025-05-20"),
                entry(MILESTONE_PENDING, "2025-06-20", "2025-06-25"),
            ],
            date(TODAY),
        );
        // The overdue entry is skipped and does not satisfy the
        // completed-predecessor rule for its successor.
        assert_eq!(
            states,
            vec![
                TimelineState::Completed,
                TimelineState::Overdue,
                TimelineState::Pending,
            ]
        );
    }

    #[test]
    fn empty_list_classifies_to_nothing() {
        assert!(classify(&[], date(TODAY)).is_empty());
    }

    // -- Durations --

    #[test]
    fn duration_is_inclusive() {
        assert_eq!(duration_days(date("2025-01-01"), date("2025-01-04")), 4);
    }

    #[test]
    fn duration_same_day_is_one() {
        assert_eq!(duration_days(date("2025-01-01"), date("2025-01-01")), 1);
    }

    #[test]
    fn duration_across_month_boundary() {
        assert_eq!(duration_days(date("2025-01-30"), date("2025-02-02")), 4);
    }
}
