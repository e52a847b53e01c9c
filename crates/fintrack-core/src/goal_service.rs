//! Goal creation and progress derivation.

use chrono::NaiveDate;

use fintrack_domain::{Goal, GoalCategory};

use crate::CoreError;

/// Pending input for a new savings goal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub name: String,
    pub target: Option<f64>,
    pub category: GoalCategory,
    pub deadline: Option<NaiveDate>,
}

impl GoalForm {
    /// Restores the form to its blank state.
    pub fn reset(&mut self) {
        *self = GoalForm::default();
    }
}

/// Derived progress figures for one goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// `current / target` as a percentage, unbounded above 100.
    pub percent: f64,
    pub remaining: f64,
    pub is_completed: bool,
    /// Whole days until the deadline. `Some(0)` means due today, negative
    /// means overdue, `None` means no deadline was set.
    pub days_remaining: Option<i64>,
}

/// Validated goal creation plus the progress math.
pub struct GoalService;

impl GoalService {
    /// Validates the form and builds a goal with zero initial progress.
    /// Rejects an empty name, a missing target, and a non-positive target;
    /// the positive-target invariant is what lets [`Self::progress`] divide
    /// without a guard.
    pub fn create(form: &GoalForm) -> Result<Goal, CoreError> {
        if form.name.trim().is_empty() {
            return Err(CoreError::Validation("goal name is required".into()));
        }
        let target = form
            .target
            .ok_or_else(|| CoreError::Validation("goal target is required".into()))?;
        if !target.is_finite() || target <= 0.0 {
            return Err(CoreError::Validation(
                "goal target must be a positive amount".into(),
            ));
        }
        Ok(Goal::new(
            form.name.trim(),
            target,
            form.category,
            form.deadline,
        ))
    }

    /// Progress toward the target as of `today`. An overdue goal keeps
    /// reporting; nothing is removed or flagged beyond the figures here.
    pub fn progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
        let percent = goal.current / goal.target * 100.0;
        GoalProgress {
            percent,
            remaining: goal.target - goal.current,
            is_completed: percent >= 100.0,
            days_remaining: goal.deadline.map(|deadline| (deadline - today).num_days()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_form() -> GoalForm {
        GoalForm {
            name: "Trip to Europe".into(),
            target: Some(1000.0),
            category: GoalCategory::Travel,
            deadline: None,
        }
    }

    #[test]
    fn fresh_goal_reports_zero_progress() {
        let goal = GoalService::create(&valid_form()).unwrap();
        let progress = GoalService::progress(&goal, date(2024, 1, 1));
        assert_eq!(progress.percent, 0.0);
        assert!(!progress.is_completed);
        assert_eq!(progress.remaining, 1000.0);
        assert_eq!(progress.days_remaining, None);
    }

    #[test]
    fn quarter_funded_goal_with_deadline() {
        let today = date(2024, 3, 1);
        let mut goal = GoalService::create(&GoalForm {
            deadline: Some(today + Duration::days(10)),
            ..valid_form()
        })
        .unwrap();
        goal.current = 250.0;

        let progress = GoalService::progress(&goal, today);
        assert_eq!(progress.percent, 25.0);
        assert!(!progress.is_completed);
        assert_eq!(progress.days_remaining, Some(10));
    }

    #[test]
    fn fully_funded_goal_is_completed() {
        let mut goal = GoalService::create(&GoalForm {
            target: Some(500.0),
            ..valid_form()
        })
        .unwrap();
        goal.current = 500.0;

        let progress = GoalService::progress(&goal, date(2024, 1, 1));
        assert_eq!(progress.percent, 100.0);
        assert!(progress.is_completed);
    }

    #[test]
    fn percent_is_unbounded_above_one_hundred() {
        let mut goal = GoalService::create(&valid_form()).unwrap();
        goal.current = 1500.0;
        let progress = GoalService::progress(&goal, date(2024, 1, 1));
        assert_eq!(progress.percent, 150.0);
        assert!(progress.is_completed);
    }

    #[test]
    fn overdue_goal_reports_negative_days() {
        let today = date(2024, 3, 10);
        let goal = GoalService::create(&GoalForm {
            deadline: Some(date(2024, 3, 5)),
            ..valid_form()
        })
        .unwrap();
        let progress = GoalService::progress(&goal, today);
        assert_eq!(progress.days_remaining, Some(-5));
    }

    #[test]
    fn deadline_today_is_zero_not_absent() {
        let today = date(2024, 3, 10);
        let goal = GoalService::create(&GoalForm {
            deadline: Some(today),
            ..valid_form()
        })
        .unwrap();
        let progress = GoalService::progress(&goal, today);
        assert_eq!(progress.days_remaining, Some(0));
    }

    #[test]
    fn create_rejects_missing_name() {
        let form = GoalForm {
            name: "   ".into(),
            ..valid_form()
        };
        assert!(matches!(
            GoalService::create(&form),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn create_rejects_missing_or_non_positive_target() {
        let form = GoalForm {
            target: None,
            ..valid_form()
        };
        assert!(GoalService::create(&form).is_err());

        let form = GoalForm {
            target: Some(0.0),
            ..valid_form()
        };
        assert!(GoalService::create(&form).is_err());

        let form = GoalForm {
            target: Some(-10.0),
            ..valid_form()
        };
        assert!(GoalService::create(&form).is_err());
    }
}
