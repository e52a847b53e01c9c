//! Pure aggregation over a transaction-log snapshot.
//!
//! Every function recomputes from the snapshot it is handed; there is no
//! cached or ambient state, so results always reflect the caller's current
//! collections. Cost is O(n) per query, which is fine at the record counts
//! this tracker sees.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use fintrack_domain::{EntryKind, ExpenseCategory, Transaction};

use crate::currency::month_label;

/// Number of months covered by the trend series, current month inclusive.
pub const TREND_MONTHS: usize = 6;

/// Income/expense totals over a full snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub income_count: usize,
    pub expense_count: usize,
}

/// One expense category's share of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySlice {
    pub category: ExpenseCategory,
    pub amount: f64,
}

/// Calendar-month bucket key: year plus month, no day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Steps `months` whole months back, borrowing across year boundaries.
    pub fn months_back(self, months: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - months as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// A date belongs to the bucket iff its year and month both match.
    /// Same month in a different year is always a different bucket.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn label(self) -> &'static str {
        month_label(self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.year)
    }
}

/// One month of the trend series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFlow {
    pub month: MonthKey,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Stateless derivations over transaction snapshots.
pub struct SummaryService;

impl SummaryService {
    /// Sums the snapshot into income/expense totals and the running balance.
    pub fn totals(transactions: &[Transaction]) -> Totals {
        let mut totals = Totals::default();
        for txn in transactions {
            match txn.kind {
                EntryKind::Income(_) => {
                    totals.income += txn.amount;
                    totals.income_count += 1;
                }
                EntryKind::Expense(_) => {
                    totals.expenses += txn.amount;
                    totals.expense_count += 1;
                }
            }
        }
        totals.balance = totals.income - totals.expenses;
        totals
    }

    /// Balance as a percentage of income.
    ///
    /// With zero income the denominator is forced to 1, so the figure
    /// degrades to the raw balance scaled to percent and is informational
    /// only.
    pub fn balance_percent(totals: &Totals) -> f64 {
        let income = if totals.income == 0.0 {
            1.0
        } else {
            totals.income
        };
        totals.balance / income * 100.0
    }

    /// Expense totals per category, in vocabulary order. Categories whose
    /// sum is zero are omitted so the caller never renders empty segments.
    pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategorySlice> {
        ExpenseCategory::ALL
            .iter()
            .map(|&category| CategorySlice {
                category,
                amount: transactions
                    .iter()
                    .filter(|txn| txn.kind == EntryKind::Expense(category))
                    .map(|txn| txn.amount)
                    .sum(),
            })
            .filter(|slice| slice.amount > 0.0)
            .collect()
    }

    /// Trailing six calendar months ending at `today`'s month, oldest
    /// first. Months with no activity still emit a zeroed entry.
    pub fn monthly_trend(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthlyFlow> {
        let current = MonthKey::of(today);
        let mut series: Vec<MonthlyFlow> = (0..TREND_MONTHS as u32)
            .map(|offset| {
                let month = current.months_back(offset);
                let mut income = 0.0;
                let mut expenses = 0.0;
                for txn in transactions.iter().filter(|txn| month.contains(txn.date)) {
                    match txn.kind {
                        EntryKind::Income(_) => income += txn.amount,
                        EntryKind::Expense(_) => expenses += txn.amount,
                    }
                }
                MonthlyFlow {
                    month,
                    income,
                    expenses,
                    balance: income - expenses,
                }
            })
            .collect();
        series.reverse();
        series
    }

    /// First `count` entries of the newest-first log.
    pub fn recent(transactions: &[Transaction], count: usize) -> &[Transaction] {
        &transactions[..count.min(transactions.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_domain::IncomeCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_log() -> Vec<Transaction> {
        vec![
            Transaction::new(
                EntryKind::Income(IncomeCategory::Salary),
                1000.0,
                "",
                date(2024, 1, 15),
            ),
            Transaction::new(
                EntryKind::Expense(ExpenseCategory::Food),
                300.0,
                "",
                date(2024, 1, 20),
            ),
            Transaction::new(
                EntryKind::Expense(ExpenseCategory::Transport),
                200.0,
                "",
                date(2024, 2, 1),
            ),
        ]
    }

    #[test]
    fn totals_match_reference_scenario() {
        let totals = SummaryService::totals(&sample_log());
        assert_eq!(totals.income, 1000.0);
        assert_eq!(totals.expenses, 500.0);
        assert_eq!(totals.balance, 500.0);
        assert_eq!(totals.income_count, 1);
        assert_eq!(totals.expense_count, 2);
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let totals = SummaryService::totals(&sample_log());
        assert_eq!(totals.balance, totals.income - totals.expenses);
    }

    #[test]
    fn empty_log_yields_zeroed_totals() {
        let totals = SummaryService::totals(&[]);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn balance_percent_guards_zero_income() {
        let expense_only = vec![Transaction::new(
            EntryKind::Expense(ExpenseCategory::Food),
            50.0,
            "",
            date(2024, 1, 1),
        )];
        let totals = SummaryService::totals(&expense_only);
        assert_eq!(SummaryService::balance_percent(&totals), -5000.0);
    }

    #[test]
    fn balance_percent_with_income() {
        let totals = SummaryService::totals(&sample_log());
        assert_eq!(SummaryService::balance_percent(&totals), 50.0);
    }

    #[test]
    fn breakdown_matches_reference_scenario() {
        let slices = SummaryService::expenses_by_category(&sample_log());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].category, ExpenseCategory::Food);
        assert_eq!(slices[0].amount, 300.0);
        assert_eq!(slices[1].category, ExpenseCategory::Transport);
        assert_eq!(slices[1].amount, 200.0);
    }

    #[test]
    fn breakdown_never_contains_zero_sums() {
        let slices = SummaryService::expenses_by_category(&sample_log());
        assert!(slices.iter().all(|slice| slice.amount > 0.0));
    }

    #[test]
    fn breakdown_sums_to_total_expenses() {
        let log = sample_log();
        let total: f64 = SummaryService::expenses_by_category(&log)
            .iter()
            .map(|slice| slice.amount)
            .sum();
        assert_eq!(total, SummaryService::totals(&log).expenses);
    }

    #[test]
    fn trend_has_six_consecutive_months_oldest_first() {
        let series = SummaryService::monthly_trend(&[], date(2024, 2, 15));
        assert_eq!(series.len(), TREND_MONTHS);
        assert_eq!(series[0].month, MonthKey { year: 2023, month: 9 });
        assert_eq!(series[5].month, MonthKey { year: 2024, month: 2 });
        for window in series.windows(2) {
            assert_eq!(window[0].month, window[1].month.months_back(1));
        }
        assert!(series
            .iter()
            .all(|flow| flow.income == 0.0 && flow.expenses == 0.0 && flow.balance == 0.0));
    }

    #[test]
    fn trend_buckets_match_reference_scenario() {
        let series = SummaryService::monthly_trend(&sample_log(), date(2024, 2, 15));
        let january = &series[4];
        assert_eq!(january.month, MonthKey { year: 2024, month: 1 });
        assert_eq!(january.income, 1000.0);
        assert_eq!(january.expenses, 300.0);
        assert_eq!(january.balance, 700.0);

        let february = &series[5];
        assert_eq!(february.income, 0.0);
        assert_eq!(february.expenses, 200.0);
        assert_eq!(february.balance, -200.0);
    }

    #[test]
    fn same_month_different_year_is_a_different_bucket() {
        let log = vec![Transaction::new(
            EntryKind::Expense(ExpenseCategory::Food),
            100.0,
            "",
            date(2023, 2, 10),
        )];
        let series = SummaryService::monthly_trend(&log, date(2024, 2, 15));
        assert!(series.iter().all(|flow| flow.expenses == 0.0));
    }

    #[test]
    fn months_back_wraps_across_years() {
        let key = MonthKey { year: 2024, month: 2 };
        assert_eq!(key.months_back(1), MonthKey { year: 2024, month: 1 });
        assert_eq!(key.months_back(2), MonthKey { year: 2023, month: 12 });
        assert_eq!(key.months_back(14), MonthKey { year: 2022, month: 12 });
    }

    #[test]
    fn month_key_display_uses_short_label() {
        assert_eq!(MonthKey { year: 2024, month: 1 }.to_string(), "Jan 2024");
    }

    #[test]
    fn recent_clamps_to_log_length() {
        let log = sample_log();
        assert_eq!(SummaryService::recent(&log, 5).len(), 3);
        assert_eq!(SummaryService::recent(&log, 2).len(), 2);
        assert_eq!(SummaryService::recent(&log, 2)[0].id, log[0].id);
    }
}
