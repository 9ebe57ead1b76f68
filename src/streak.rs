// Streak engine: turns a habit's completion log into the numbers shown on
// the stats screen.

use crate::store::Habit;
use chrono::NaiveDate;

/// Summary line for one habit on the stats screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStats {
    pub name: String,
    pub total_days: usize,
    pub current_streak: u32,
}

pub fn habit_stats(habit: &Habit, today: NaiveDate) -> HabitStats {
    HabitStats {
        name: habit.name.clone(),
        total_days: habit.total_days(),
        current_streak: calculate_streak(habit.log(), today),
    }
}

/// Length of the run of consecutive days ending at the most recent date.
///
/// The run only counts while it is alive: if the most recent date is more
/// than one day before `today` the streak is 0. Input order does not matter.
pub fn calculate_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let Some(&most_recent) = sorted.last() else {
        return 0;
    };
    if (today - most_recent).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in sorted.windows(2).rev() {
        if (pair[1] - pair[0]).num_days() != 1 {
            break;
        }
        streak += 1;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_log_has_no_streak() {
        assert_eq!(calculate_streak(&[], day(2024, 1, 3)), 0);
    }

    #[test]
    fn consecutive_days_ending_today() {
        let dates = [day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)];
        assert_eq!(calculate_streak(&dates, day(2024, 1, 3)), 3);
    }

    #[test]
    fn gap_breaks_the_chain() {
        let dates = [day(2024, 1, 1), day(2024, 1, 3)];
        assert_eq!(calculate_streak(&dates, day(2024, 1, 3)), 1);
    }

    #[test]
    fn streak_ending_yesterday_is_still_alive() {
        let dates = [day(2024, 1, 1), day(2024, 1, 2)];
        assert_eq!(calculate_streak(&dates, day(2024, 1, 3)), 2);
    }

    #[test]
    fn stale_streak_resets_to_zero() {
        let dates = [day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)];
        assert_eq!(calculate_streak(&dates, day(2024, 1, 5)), 0);
        assert_eq!(calculate_streak(&dates, day(2025, 1, 1)), 0);
    }

    #[test]
    fn order_of_input_is_irrelevant() {
        let dates = [day(2024, 2, 29), day(2024, 2, 27), day(2024, 3, 1), day(2024, 2, 28)];
        assert_eq!(calculate_streak(&dates, day(2024, 3, 1)), 4);
    }

    #[test]
    fn run_crosses_year_boundary() {
        let dates = [day(2023, 12, 30), day(2023, 12, 31), day(2024, 1, 1)];
        assert_eq!(calculate_streak(&dates, day(2024, 1, 2)), 3);
    }

    #[test]
    fn only_the_latest_run_counts() {
        let dates = [
            day(2024, 1, 1),
            day(2024, 1, 2),
            day(2024, 1, 3),
            day(2024, 1, 4),
            day(2024, 1, 9),
            day(2024, 1, 10),
        ];
        assert_eq!(calculate_streak(&dates, day(2024, 1, 10)), 2);
    }

    #[test]
    fn stats_report_total_and_streak() {
        let mut store = crate::store::HabitStore::new();
        store.add_habit("read");
        for date in [day(2024, 1, 1), day(2024, 1, 5), day(2024, 1, 6)] {
            store.mark_done("read", date);
        }
        let stats = habit_stats(store.get("read").unwrap(), day(2024, 1, 6));
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.current_streak, 2);
    }
}
